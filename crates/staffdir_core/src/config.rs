//! Environment-backed application configuration.
//!
//! # Responsibility
//! - Load `.env` and resolve the settings the core needs to run.
//! - Fail fast, naming the missing key, when a required variable is absent.
//!
//! # Invariants
//! - Required keys have no fallback; defaults exist only for logging knobs.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

const DATABASE_PATH_VAR: &str = "STAFFDIR_DATABASE_PATH";
const MEDIA_DIR_VAR: &str = "STAFFDIR_MEDIA_DIR";
const LOG_DIR_VAR: &str = "STAFFDIR_LOG_DIR";
const LOG_LEVEL_VAR: &str = "STAFFDIR_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingVar(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingVar(key) => write!(f, "unable to get `{key}` from environment"),
        }
    }
}

impl Error for ConfigError {}

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_path: PathBuf,
    pub media_dir: PathBuf,
    /// Absent means "log to stderr only"; set to enable rolling file logs.
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from `.env` and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing .env is fine; the process environment may carry everything.
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an injected lookup.
    ///
    /// Exists so tests can exercise resolution without mutating process-wide
    /// environment state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_path = require(&lookup, DATABASE_PATH_VAR)?;
        let media_dir = require(&lookup, MEDIA_DIR_VAR)?;

        Ok(Self {
            database_path: PathBuf::from(database_path),
            media_dir: PathBuf::from(media_dir),
            log_dir: lookup(LOG_DIR_VAR).map(PathBuf::from),
            log_level: lookup(LOG_LEVEL_VAR).unwrap_or_else(|| default_log_level().to_string()),
        })
    }
}

fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<String, ConfigError> {
    lookup(key).ok_or(ConfigError::MissingVar(key))
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn resolves_required_and_optional_settings() {
        let vars = env(&[
            ("STAFFDIR_DATABASE_PATH", "/data/staffdir.db"),
            ("STAFFDIR_MEDIA_DIR", "/data/media"),
            ("STAFFDIR_LOG_LEVEL", "debug"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();

        assert_eq!(config.database_path, PathBuf::from("/data/staffdir.db"));
        assert_eq!(config.media_dir, PathBuf::from("/data/media"));
        assert_eq!(config.log_dir, None);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn missing_required_key_names_the_key() {
        let vars = env(&[("STAFFDIR_DATABASE_PATH", "/data/staffdir.db")]);
        let err = Config::from_lookup(|key| vars.get(key).cloned()).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar("STAFFDIR_MEDIA_DIR"));
        assert!(err.to_string().contains("STAFFDIR_MEDIA_DIR"));
    }
}

//! Field validation rules for employee write payloads.
//!
//! # Responsibility
//! - Enforce the backend's field formats before a request leaves the core.
//! - Report the first offending field as a typed error.
//!
//! # Invariants
//! - Rules match the external API schema; loosening them client-side only
//!   moves the failure to the server.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MIN_USERNAME_LEN: usize = 4;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const POSTAL_CODE_LEN: usize = 5;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

// Malaysian mobile numbers, with optional +6 country prefix and dashes.
static MSIA_PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+?6?01)[0|1|2|3|4|6|7|8|9]-*[0-9]{7,8}$").expect("valid phone regex")
});

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$").expect("valid date regex")
});

static DATA_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"data:image/[^;]+;base64[^,]*,.+").expect("valid data-url regex"));

/// First validation failure found in a write payload.
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeValidationError {
    MissingField(&'static str),
    InvalidEmail(String),
    InvalidPhoneNumber(String),
    InvalidGender(String),
    InvalidDate { field: &'static str, value: String },
    UsernameTooShort(usize),
    PasswordTooShort(usize),
    InvalidPostalCode(String),
    NegativeSalary(f64),
    InvalidAvatarImage,
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is missing"),
            Self::InvalidEmail(value) => write!(f, "invalid email address: {value}"),
            Self::InvalidPhoneNumber(value) => write!(f, "invalid phone number: {value}"),
            Self::InvalidGender(value) => {
                write!(f, "gender must be `male` or `female`, got `{value}`")
            }
            Self::InvalidDate { field, value } => {
                write!(f, "field `{field}` must be a YYYY-MM-DD date, got `{value}`")
            }
            Self::UsernameTooShort(len) => write!(
                f,
                "username must be at least {MIN_USERNAME_LEN} characters, got {len}"
            ),
            Self::PasswordTooShort(len) => write!(
                f,
                "password must be at least {MIN_PASSWORD_LEN} characters, got {len}"
            ),
            Self::InvalidPostalCode(value) => write!(
                f,
                "postal code must be exactly {POSTAL_CODE_LEN} characters, got `{value}`"
            ),
            Self::NegativeSalary(value) => write!(f, "salary must be >= 0, got {value}"),
            Self::InvalidAvatarImage => {
                write!(f, "avatar image must be a base64 image data URL")
            }
        }
    }
}

impl Error for EmployeeValidationError {}

pub fn check_email(value: &str) -> Result<(), EmployeeValidationError> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(EmployeeValidationError::InvalidEmail(value.to_string()))
    }
}

pub fn check_phone_number(value: &str) -> Result<(), EmployeeValidationError> {
    if MSIA_PHONE_RE.is_match(value) {
        Ok(())
    } else {
        Err(EmployeeValidationError::InvalidPhoneNumber(value.to_string()))
    }
}

pub fn check_gender(value: &str) -> Result<(), EmployeeValidationError> {
    match value {
        "male" | "female" => Ok(()),
        other => Err(EmployeeValidationError::InvalidGender(other.to_string())),
    }
}

pub fn check_date(field: &'static str, value: &str) -> Result<(), EmployeeValidationError> {
    if DATE_RE.is_match(value) {
        Ok(())
    } else {
        Err(EmployeeValidationError::InvalidDate {
            field,
            value: value.to_string(),
        })
    }
}

pub fn check_username(value: &str) -> Result<(), EmployeeValidationError> {
    let len = value.chars().count();
    if len < MIN_USERNAME_LEN {
        return Err(EmployeeValidationError::UsernameTooShort(len));
    }
    Ok(())
}

pub fn check_password(value: &str) -> Result<(), EmployeeValidationError> {
    let len = value.chars().count();
    if len < MIN_PASSWORD_LEN {
        return Err(EmployeeValidationError::PasswordTooShort(len));
    }
    Ok(())
}

pub fn check_postal_code(value: &str) -> Result<(), EmployeeValidationError> {
    if value.chars().count() != POSTAL_CODE_LEN {
        return Err(EmployeeValidationError::InvalidPostalCode(value.to_string()));
    }
    Ok(())
}

pub fn check_salary(value: f64) -> Result<(), EmployeeValidationError> {
    if value < 0.0 {
        return Err(EmployeeValidationError::NegativeSalary(value));
    }
    Ok(())
}

pub fn check_avatar_image(value: &str) -> Result<(), EmployeeValidationError> {
    if DATA_URL_RE.is_match(value) {
        Ok(())
    } else {
        Err(EmployeeValidationError::InvalidAvatarImage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rule_matches_common_shapes() {
        assert!(check_email("jane.doe@example.com").is_ok());
        assert!(check_email("not-an-email").is_err());
    }

    #[test]
    fn phone_rule_accepts_malaysian_mobile_formats() {
        assert!(check_phone_number("0123456789").is_ok());
        assert!(check_phone_number("+6012-3456789").is_ok());
        assert!(check_phone_number("5551234").is_err());
    }

    #[test]
    fn date_rule_rejects_out_of_range_components() {
        assert!(check_date("dob", "1990-02-28").is_ok());
        assert!(check_date("dob", "1990-13-01").is_err());
        assert!(check_date("dob", "1990-1-01").is_err());
    }

    #[test]
    fn gender_rule_is_closed_set() {
        assert!(check_gender("male").is_ok());
        assert!(check_gender("female").is_ok());
        assert!(check_gender("other").is_err());
    }

    #[test]
    fn avatar_rule_requires_image_data_url() {
        assert!(check_avatar_image("data:image/png;base64,iVBORw0KGgo=").is_ok());
        assert!(check_avatar_image("https://cdn.example.com/a.png").is_err());
    }
}

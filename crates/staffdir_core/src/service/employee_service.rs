//! Employee use-case service.
//!
//! # Responsibility
//! - Orchestrate validation, password hashing and avatar storage around
//!   repository CRUD calls.
//! - Keep UI callers decoupled from storage and hashing details.
//!
//! # Invariants
//! - Plaintext passwords never reach the repository; only argon2 hashes do.
//! - Avatar data URLs are stored before the database write, so a persisted
//!   employee always references an existing file.

use crate::media::{MediaError, MediaStore};
use crate::model::employee::EmployeeView;
use crate::model::form::EmployeeFormModel;
use crate::model::payload::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::model::validate::EmployeeValidationError;
use crate::repo::employee_repo::{EmployeeListQuery, EmployeeRepository, RepoError};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
    Validation(EmployeeValidationError),
    Repo(RepoError),
    Media(MediaError),
    PasswordHash(String),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Media(err) => write!(f, "{err}"),
            Self::PasswordHash(message) => write!(f, "failed to hash password: {message}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Media(err) => Some(err),
            Self::PasswordHash(_) => None,
        }
    }
}

impl From<EmployeeValidationError> for ServiceError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<MediaError> for ServiceError {
    fn from(value: MediaError) -> Self {
        Self::Media(value)
    }
}

/// Hashes a plaintext password with argon2 and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| ServiceError::PasswordHash(err.to_string()))
}

/// Use-case service wrapper for employee CRUD operations.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
    media: Option<MediaStore>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service without avatar storage; avatar uploads are skipped.
    pub fn new(repo: R) -> Self {
        Self { repo, media: None }
    }

    /// Creates a service that stores submitted avatars in `media`.
    pub fn with_media(repo: R, media: MediaStore) -> Self {
        Self {
            repo,
            media: Some(media),
        }
    }

    /// Creates an employee from a completed form draft.
    ///
    /// Validates the payload, hashes the password, stores the avatar when
    /// one was submitted and persists everything transactionally.
    pub fn create_employee(
        &self,
        form: &EmployeeFormModel,
        password: &str,
    ) -> ServiceResult<EmployeeView> {
        let request = CreateEmployeeRequest::from_form(form, password)?;
        request.validate()?;

        let password_hash = hash_password(&request.password)?;
        let avatar_url = self.store_avatar(&request.username, request.avatar_image.as_deref())?;

        let view = self
            .repo
            .create_employee(&request, &password_hash, avatar_url.as_deref())?;
        info!(
            "event=employee_created module=service username={}",
            view.user.username
        );
        Ok(view)
    }

    /// Fetches one employee by username.
    pub fn fetch_one(&self, username: &str) -> ServiceResult<EmployeeView> {
        Ok(self.repo.get_employee(username)?)
    }

    /// Lists employees with optional cursor pagination.
    pub fn fetch_many(&self, query: &EmployeeListQuery) -> ServiceResult<Vec<EmployeeView>> {
        Ok(self.repo.list_employees(query)?)
    }

    /// Applies a partial update to one employee.
    pub fn update_employee(
        &self,
        username: &str,
        request: &UpdateEmployeeRequest,
    ) -> ServiceResult<EmployeeView> {
        request.validate()?;

        let password_hash = match &request.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };
        let avatar_url = self.store_avatar(
            request.username.as_deref().unwrap_or(username),
            request.avatar_image.as_deref(),
        )?;

        let view = self.repo.update_employee(
            username,
            request,
            password_hash.as_deref(),
            avatar_url.as_deref(),
        )?;
        info!(
            "event=employee_updated module=service username={}",
            view.user.username
        );
        Ok(view)
    }

    /// Deletes one employee and returns the last-known view.
    pub fn delete_employee(&self, username: &str) -> ServiceResult<EmployeeView> {
        let view = self.repo.delete_employee(username)?;
        info!("event=employee_deleted module=service username={username}");
        Ok(view)
    }

    /// Registers a department employees can be assigned to.
    pub fn create_department(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> ServiceResult<i64> {
        Ok(self.repo.create_department(name, description)?)
    }

    fn store_avatar(
        &self,
        username: &str,
        data_url: Option<&str>,
    ) -> ServiceResult<Option<String>> {
        match (data_url, &self.media) {
            (Some(data_url), Some(media)) => Ok(Some(media.store_avatar(username, data_url)?)),
            _ => Ok(None),
        }
    }
}

//! Write-side request payloads and form-model translation.
//!
//! # Responsibility
//! - Define the create/update request shapes accepted by the employee API.
//! - Translate the in-progress form draft into a request payload.
//!
//! # Invariants
//! - Create requires the backend's mandatory field set; update requires
//!   nothing and sends only the fields the caller filled in.
//! - Epoch-millisecond form fields are rendered as `YYYY-MM-DD` strings.

use crate::model::form::EmployeeFormModel;
use crate::model::validate::{
    check_avatar_image, check_date, check_email, check_gender, check_password, check_phone_number,
    check_postal_code, check_salary, check_username, EmployeeValidationError,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Address object embedded in create/update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInput {
    pub city: String,
    pub line1: String,
    pub line2: Option<String>,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

/// Payload for creating one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    /// `YYYY-MM-DD`.
    pub dob: String,
    pub salary: Option<f64>,
    pub role: String,
    /// `YYYY-MM-DD`.
    pub start_at: String,
    /// `YYYY-MM-DD`.
    pub end_at: Option<String>,
    /// Base64 image data URL, uploaded out-of-band before persistence.
    pub avatar_image: Option<String>,
    pub address: Option<AddressInput>,
    /// Department referenced by name, resolved server-side.
    pub department: Option<String>,
}

/// Payload for a partial employee update. Every field is optional; absent
/// fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<String>,
    pub salary: Option<f64>,
    pub role: Option<String>,
    pub start_at: Option<String>,
    pub end_at: Option<String>,
    pub avatar_image: Option<String>,
    pub address: Option<AddressInput>,
    pub department: Option<String>,
}

impl CreateEmployeeRequest {
    /// Builds a create request from a completed form draft.
    ///
    /// # Errors
    /// - `MissingField` when a mandatory form field was left empty.
    /// - `InvalidDate` when an epoch-millisecond value has no calendar date.
    pub fn from_form(
        form: &EmployeeFormModel,
        password: impl Into<String>,
    ) -> Result<Self, EmployeeValidationError> {
        let dob_ms = form.user.dob.ok_or(EmployeeValidationError::MissingField("dob"))?;
        let start_ms = form
            .start_at
            .ok_or(EmployeeValidationError::MissingField("start_at"))?;

        Ok(Self {
            email: require(&form.user.email, "email")?,
            username: require(&form.user.username, "username")?,
            password: password.into(),
            phone_number: require(&form.user.phone_number, "phone_number")?,
            first_name: require(&form.user.first_name, "first_name")?,
            last_name: require(&form.user.last_name, "last_name")?,
            gender: require(&form.user.gender, "gender")?,
            dob: render_date("dob", dob_ms)?,
            salary: form.salary,
            role: require(&form.role, "role")?,
            start_at: render_date("start_at", start_ms)?,
            end_at: form
                .end_at
                .map(|ms| render_date("end_at", ms))
                .transpose()?,
            avatar_image: form.user.avatar_image.clone(),
            address: address_input(form),
            department: non_empty(&form.department.name),
        })
    }

    /// Checks every field against the backend's create schema.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        check_email(&self.email)?;
        check_username(&self.username)?;
        check_password(&self.password)?;
        check_phone_number(&self.phone_number)?;
        check_gender(&self.gender)?;
        check_date("dob", &self.dob)?;
        check_date("start_at", &self.start_at)?;
        if let Some(end_at) = &self.end_at {
            check_date("end_at", end_at)?;
        }
        if let Some(salary) = self.salary {
            check_salary(salary)?;
        }
        if let Some(image) = &self.avatar_image {
            check_avatar_image(image)?;
        }
        if let Some(address) = &self.address {
            check_postal_code(&address.postal_code)?;
        }
        Ok(())
    }
}

impl UpdateEmployeeRequest {
    /// Checks the fields that are present; absent fields pass trivially.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if let Some(email) = &self.email {
            check_email(email)?;
        }
        if let Some(username) = &self.username {
            check_username(username)?;
        }
        if let Some(password) = &self.password {
            check_password(password)?;
        }
        if let Some(phone_number) = &self.phone_number {
            check_phone_number(phone_number)?;
        }
        if let Some(gender) = &self.gender {
            check_gender(gender)?;
        }
        if let Some(dob) = &self.dob {
            check_date("dob", dob)?;
        }
        if let Some(start_at) = &self.start_at {
            check_date("start_at", start_at)?;
        }
        if let Some(end_at) = &self.end_at {
            check_date("end_at", end_at)?;
        }
        if let Some(salary) = self.salary {
            check_salary(salary)?;
        }
        if let Some(image) = &self.avatar_image {
            check_avatar_image(image)?;
        }
        if let Some(address) = &self.address {
            check_postal_code(&address.postal_code)?;
        }
        Ok(())
    }

    /// Returns whether the request carries no field at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Renders epoch milliseconds as a UTC `YYYY-MM-DD` date string.
pub fn render_date(field: &'static str, epoch_ms: i64) -> Result<String, EmployeeValidationError> {
    let date = DateTime::<Utc>::from_timestamp_millis(epoch_ms).ok_or(
        EmployeeValidationError::InvalidDate {
            field,
            value: epoch_ms.to_string(),
        },
    )?;
    Ok(date.format("%Y-%m-%d").to_string())
}

fn require(value: &str, field: &'static str) -> Result<String, EmployeeValidationError> {
    if value.trim().is_empty() {
        return Err(EmployeeValidationError::MissingField(field));
    }
    Ok(value.to_string())
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Collapses the form's always-present address group to `None` when the
/// user never touched it.
fn address_input(form: &EmployeeFormModel) -> Option<AddressInput> {
    let address = &form.address;
    let untouched = address.city.is_empty()
        && address.country.is_empty()
        && address.line1.is_empty()
        && address.line2.is_none()
        && address.postal_code.is_empty()
        && address.state.is_empty();
    if untouched {
        return None;
    }
    Some(AddressInput {
        city: address.city.clone(),
        line1: address.line1.clone(),
        line2: address.line2.clone(),
        state: address.state.clone(),
        country: address.country.clone(),
        postal_code: address.postal_code.clone(),
    })
}

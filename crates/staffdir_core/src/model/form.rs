//! Write-side employee form model and its blank factory.
//!
//! # Responsibility
//! - Define the draft shape a creation/edit form binds to.
//! - Supply fresh, fully-defaulted instances for new form sessions.
//!
//! # Invariants
//! - `blank()` returns an independent value on every call; mutating one
//!   instance can never affect another or any future blank.
//! - Numeric/date fields use `None` for "not yet entered"; text fields use
//!   the empty string.

use serde::{Deserialize, Serialize};

/// Identity fields captured by the employee form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFormFields {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    /// Date of birth in epoch milliseconds, as emitted by a date picker.
    pub dob: Option<i64>,
    pub gender: String,
    pub phone_number: String,
    /// Base64 `data:image/...` payload selected in the form, if any.
    pub avatar_image: Option<String>,
    /// Already-hosted avatar URL, if any (edit flows).
    pub avatar_url: Option<String>,
}

/// Address fields captured by the employee form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFormFields {
    pub city: String,
    pub country: String,
    pub line1: String,
    pub line2: Option<String>,
    pub postal_code: String,
    pub state: String,
}

/// Department fields captured by the employee form.
///
/// The audit timestamps exist because an edit flow round-trips the selected
/// department record through the form unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentFormFields {
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// In-progress draft of an employee creation/edit form.
///
/// Mirrors `EmployeeView`'s inputs, but with nullable numeric fields where
/// the read side uses date/decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFormModel {
    pub user: UserFormFields,
    pub address: AddressFormFields,
    pub department: DepartmentFormFields,
    /// Salary as entered; the read side renders this back as text.
    pub salary: Option<f64>,
    pub role: String,
    /// Employment start in epoch milliseconds.
    pub start_at: Option<i64>,
    /// Employment end in epoch milliseconds.
    pub end_at: Option<i64>,
}

impl EmployeeFormModel {
    /// Creates a fully-defaulted draft for a new form session.
    ///
    /// Each call constructs a new value; there is no shared template object
    /// that later edits could corrupt.
    pub fn blank() -> Self {
        Self {
            user: UserFormFields {
                first_name: String::new(),
                last_name: String::new(),
                username: String::new(),
                email: String::new(),
                dob: None,
                gender: String::new(),
                phone_number: String::new(),
                avatar_image: None,
                avatar_url: None,
            },
            address: AddressFormFields {
                city: String::new(),
                country: String::new(),
                line1: String::new(),
                line2: None,
                postal_code: String::new(),
                state: String::new(),
            },
            department: DepartmentFormFields {
                name: String::new(),
                description: None,
                created_at: String::new(),
                updated_at: String::new(),
            },
            salary: None,
            role: String::new(),
            start_at: None,
            end_at: None,
        }
    }
}

impl Default for EmployeeFormModel {
    fn default() -> Self {
        Self::blank()
    }
}

//! Read-side employee domain records.
//!
//! # Responsibility
//! - Define the entity shapes returned by the employee read API.
//! - Keep wire field names identical to the external contract.
//!
//! # Invariants
//! - Row identifiers are backend-assigned and never fabricated by the client.
//! - `EmployeeView` is a denormalized projection; it is never written back
//!   field-by-field, only through the write-side request payloads.

use serde::{Deserialize, Serialize};

/// Backend-assigned row identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = i64;
pub type UserId = i64;
pub type AddressId = i64;
pub type DepartmentId = i64;

/// Identity record for a person, owned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Date of birth as `YYYY-MM-DD`.
    pub dob: String,
    pub gender: String,
    pub phone_number: String,
    pub avatar_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Postal address, associated with a user through `EmployeeView`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address_id: AddressId,
    pub city: String,
    pub country: String,
    pub line1: String,
    pub line2: Option<String>,
    pub postal_code: String,
    pub state: String,
}

/// Organizational unit an employee belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub department_id: DepartmentId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Denormalized read projection composing an employee with its related
/// user, address and department records.
///
/// `address` and `department` are optional because the storage schema allows
/// an employee without either; the original front-end typing pretended they
/// were always present, the database says otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeView {
    pub employee_id: EmployeeId,
    pub role: String,
    // TODO: confirm with the API owners why salary is text on the read side
    // while the form captures it as a number.
    pub salary: String,
    pub user: User,
    pub address: Option<Address>,
    pub department: Option<Department>,
    /// Employment start as `YYYY-MM-DD`.
    pub start_at: String,
    /// Employment end as `YYYY-MM-DD`; `None` while still employed.
    pub end_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

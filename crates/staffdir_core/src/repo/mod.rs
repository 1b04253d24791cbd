//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes enforce payload validation before persistence.
//! - Repository APIs return semantic errors (`EmployeeNotFound`,
//!   `DepartmentNotFound`) in addition to DB transport errors.

pub mod employee_repo;

//! Core domain logic for the staffdir employee-records admin app.
//! This crate is the single source of truth for form state, validation
//! rules and persistence; UI layers bind to it without owning any of it.

pub mod config;
pub mod db;
pub mod logging;
pub mod media;
pub mod model;
pub mod nav;
pub mod repo;
pub mod service;
pub mod store;

pub use config::{Config, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use media::{MediaError, MediaStore};
pub use model::employee::{Address, Department, EmployeeId, EmployeeView, User};
pub use model::form::EmployeeFormModel;
pub use model::payload::{AddressInput, CreateEmployeeRequest, UpdateEmployeeRequest};
pub use model::validate::EmployeeValidationError;
pub use nav::{install_progress_logger, NavigationHooks, RuntimeEnv};
pub use repo::employee_repo::{
    EmployeeListQuery, EmployeeRepository, RepoError, RepoResult, SqliteEmployeeRepository,
};
pub use service::employee_service::{hash_password, EmployeeService, ServiceError};
pub use store::{DrawerKind, DrawerState, DrawerStore, FormStore, FormType, StoreContext};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Employee repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the employee/user/address/department
//!   tables, composing the denormalized `EmployeeView` on every read.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate the request payload before any SQL mutation.
//! - Multi-table writes happen inside one transaction; a failure rolls back
//!   every row touched so far.
//! - Read paths reject malformed persisted state instead of masking it.

use crate::db::DbError;
use crate::model::employee::{Address, Department, DepartmentId, EmployeeView, User};
use crate::model::payload::{AddressInput, CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::model::validate::EmployeeValidationError;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EMPLOYEE_VIEW_SQL: &str = "SELECT
    e.employee_id,
    CAST(e.salary AS TEXT) AS salary,
    e.role,
    e.start_at,
    e.end_at,
    e.created_at,
    e.updated_at,
    u.user_id,
    u.username,
    u.email,
    u.first_name,
    u.last_name,
    u.dob,
    u.gender,
    u.phone_number,
    u.avatar_url,
    u.created_at AS user_created_at,
    u.updated_at AS user_updated_at,
    a.address_id,
    a.city,
    a.country,
    a.line1,
    a.line2,
    a.postal_code,
    a.state,
    d.department_id,
    d.name AS department_name,
    d.description AS department_description,
    d.created_at AS department_created_at,
    d.updated_at AS department_updated_at
FROM employee e
JOIN user u ON u.user_id = e.user_id
LEFT JOIN address a ON a.address_id = e.address_id
LEFT JOIN department d ON d.department_id = e.department_id";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for employee persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(EmployeeValidationError),
    Db(DbError),
    EmployeeNotFound(String),
    DepartmentNotFound(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::EmployeeNotFound(username) => {
                write!(f, "unable to find employee with username `{username}`")
            }
            Self::DepartmentNotFound(name) => {
                write!(f, "unable to find department with name `{name}`")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted employee data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::EmployeeNotFound(_) | Self::DepartmentNotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<EmployeeValidationError> for RepoError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Cursor pagination options for listing employees.
///
/// `cursor` is only honored together with `limit`; with no `limit` the whole
/// table is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeListQuery {
    /// Return rows with `employee_id` strictly greater than this.
    pub cursor: Option<i64>,
    pub limit: Option<u32>,
}

/// Repository interface for employee CRUD operations.
pub trait EmployeeRepository {
    fn create_department(&self, name: &str, description: Option<&str>)
        -> RepoResult<DepartmentId>;
    fn create_employee(
        &self,
        request: &CreateEmployeeRequest,
        password_hash: &str,
        avatar_url: Option<&str>,
    ) -> RepoResult<EmployeeView>;
    fn get_employee(&self, username: &str) -> RepoResult<EmployeeView>;
    fn list_employees(&self, query: &EmployeeListQuery) -> RepoResult<Vec<EmployeeView>>;
    fn update_employee(
        &self,
        username: &str,
        request: &UpdateEmployeeRequest,
        password_hash: Option<&str>,
        avatar_url: Option<&str>,
    ) -> RepoResult<EmployeeView>;
    fn delete_employee(&self, username: &str) -> RepoResult<EmployeeView>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn create_department(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> RepoResult<DepartmentId> {
        self.conn.execute(
            "INSERT INTO department (name, description) VALUES (?1, ?2);",
            params![name, description],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn create_employee(
        &self,
        request: &CreateEmployeeRequest,
        password_hash: &str,
        avatar_url: Option<&str>,
    ) -> RepoResult<EmployeeView> {
        request.validate()?;

        let tx = self.conn.unchecked_transaction()?;

        let department_id = match &request.department {
            Some(name) => Some(lookup_department_id(&tx, name)?),
            None => None,
        };

        let address_id = match &request.address {
            Some(address) => Some(insert_address(&tx, address)?),
            None => None,
        };

        tx.execute(
            "INSERT INTO user (
                email,
                username,
                password_hash,
                phone_number,
                first_name,
                last_name,
                dob,
                gender,
                avatar_url
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                request.email,
                request.username,
                password_hash,
                request.phone_number,
                request.first_name,
                request.last_name,
                request.dob,
                request.gender,
                avatar_url,
            ],
        )?;
        let user_id = tx.last_insert_rowid();

        tx.execute(
            "INSERT INTO employee (
                salary,
                role,
                start_at,
                end_at,
                user_id,
                address_id,
                department_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                request.salary.unwrap_or(0.0),
                request.role,
                request.start_at,
                request.end_at,
                user_id,
                address_id,
                department_id,
            ],
        )?;

        tx.commit()?;
        self.get_employee(&request.username)
    }

    fn get_employee(&self, username: &str) -> RepoResult<EmployeeView> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_VIEW_SQL} WHERE u.username = ?1;"))?;
        let view = stmt
            .query_row(params![username], |row| Ok(parse_employee_row(row)))
            .optional()?;

        match view {
            Some(view) => view,
            None => Err(RepoError::EmployeeNotFound(username.to_string())),
        }
    }

    fn list_employees(&self, query: &EmployeeListQuery) -> RepoResult<Vec<EmployeeView>> {
        let mut sql = EMPLOYEE_VIEW_SQL.to_string();
        let mut bind_values: Vec<Value> = Vec::new();

        // Cursor without limit means "no pagination", matching the read API.
        if let Some(limit) = query.limit {
            if let Some(cursor) = query.cursor {
                sql.push_str(" WHERE e.employee_id > ?");
                bind_values.push(Value::Integer(cursor));
            }
            sql.push_str(" ORDER BY e.employee_id ASC LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
        } else {
            sql.push_str(" ORDER BY e.employee_id ASC");
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut views = Vec::new();

        while let Some(row) = rows.next()? {
            views.push(parse_employee_row(row)?);
        }

        Ok(views)
    }

    fn update_employee(
        &self,
        username: &str,
        request: &UpdateEmployeeRequest,
        password_hash: Option<&str>,
        avatar_url: Option<&str>,
    ) -> RepoResult<EmployeeView> {
        request.validate()?;

        let current = self.get_employee(username)?;
        let tx = self.conn.unchecked_transaction()?;

        let mut employee_sets: Vec<(&str, Value)> = Vec::new();
        if let Some(salary) = request.salary {
            employee_sets.push(("salary", Value::Real(salary)));
        }
        if let Some(role) = &request.role {
            employee_sets.push(("role", Value::Text(role.clone())));
        }
        if let Some(start_at) = &request.start_at {
            employee_sets.push(("start_at", Value::Text(start_at.clone())));
        }
        if let Some(end_at) = &request.end_at {
            employee_sets.push(("end_at", Value::Text(end_at.clone())));
        }

        let mut user_sets: Vec<(&str, Value)> = Vec::new();
        for (column, field) in [
            ("email", &request.email),
            ("username", &request.username),
            ("phone_number", &request.phone_number),
            ("first_name", &request.first_name),
            ("last_name", &request.last_name),
            ("dob", &request.dob),
            ("gender", &request.gender),
        ] {
            if let Some(value) = field {
                user_sets.push((column, Value::Text(value.clone())));
            }
        }
        if let Some(hash) = password_hash {
            user_sets.push(("password_hash", Value::Text(hash.to_string())));
        }
        if let Some(url) = avatar_url {
            user_sets.push(("avatar_url", Value::Text(url.to_string())));
        }

        // The original API routes `department` to the department row's name.
        let mut department_sets: Vec<(&str, Value)> = Vec::new();
        if let Some(name) = &request.department {
            department_sets.push(("name", Value::Text(name.clone())));
        }

        let mut address_sets: Vec<(&str, Value)> = Vec::new();
        if let Some(address) = &request.address {
            address_sets.push(("city", Value::Text(address.city.clone())));
            address_sets.push(("line1", Value::Text(address.line1.clone())));
            address_sets.push((
                "line2",
                address
                    .line2
                    .clone()
                    .map_or(Value::Null, Value::Text),
            ));
            address_sets.push(("state", Value::Text(address.state.clone())));
            address_sets.push(("country", Value::Text(address.country.clone())));
            address_sets.push(("postal_code", Value::Text(address.postal_code.clone())));
        }

        if !employee_sets.is_empty() {
            run_update(
                &tx,
                "employee",
                "employee_id",
                current.employee_id,
                employee_sets,
                true,
            )?;
        }
        if !user_sets.is_empty() {
            run_update(&tx, "user", "user_id", current.user.user_id, user_sets, true)?;
        }
        if !department_sets.is_empty() {
            if let Some(department) = &current.department {
                run_update(
                    &tx,
                    "department",
                    "department_id",
                    department.department_id,
                    department_sets,
                    true,
                )?;
            }
        }
        if !address_sets.is_empty() {
            if let Some(address) = &current.address {
                run_update(
                    &tx,
                    "address",
                    "address_id",
                    address.address_id,
                    address_sets,
                    false,
                )?;
            }
        }

        tx.commit()?;

        let lookup = request.username.as_deref().unwrap_or(username);
        self.get_employee(lookup)
    }

    fn delete_employee(&self, username: &str) -> RepoResult<EmployeeView> {
        let view = self.get_employee(username)?;

        let tx = self.conn.unchecked_transaction()?;
        if let Some(address) = &view.address {
            tx.execute(
                "DELETE FROM address WHERE address_id = ?1;",
                params![address.address_id],
            )?;
        }
        // Deleting the user cascades to the employee row.
        tx.execute(
            "DELETE FROM user WHERE user_id = ?1;",
            params![view.user.user_id],
        )?;
        tx.commit()?;

        Ok(view)
    }
}

fn lookup_department_id(conn: &Connection, name: &str) -> RepoResult<DepartmentId> {
    let id = conn
        .query_row(
            "SELECT department_id FROM department WHERE name = ?1;",
            params![name],
            |row| row.get::<_, i64>(0),
        )
        .optional()?;
    id.ok_or_else(|| RepoError::DepartmentNotFound(name.to_string()))
}

fn insert_address(conn: &Connection, address: &AddressInput) -> RepoResult<i64> {
    conn.execute(
        "INSERT INTO address (
            city,
            line1,
            line2,
            state,
            country,
            postal_code
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
        params![
            address.city,
            address.line1,
            address.line2,
            address.state,
            address.country,
            address.postal_code,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn run_update(
    conn: &Connection,
    table: &str,
    key_column: &str,
    key: i64,
    sets: Vec<(&str, Value)>,
    touch_updated_at: bool,
) -> RepoResult<()> {
    let mut assignments = sets
        .iter()
        .enumerate()
        .map(|(index, (column, _))| format!("{column} = ?{}", index + 1))
        .collect::<Vec<_>>();
    if touch_updated_at {
        assignments.push("updated_at = datetime('now')".to_string());
    }

    let sql = format!(
        "UPDATE {table} SET {} WHERE {key_column} = ?{};",
        assignments.join(", "),
        sets.len() + 1
    );

    let mut bind_values: Vec<Value> = sets.into_iter().map(|(_, value)| value).collect();
    bind_values.push(Value::Integer(key));

    conn.execute(&sql, params_from_iter(bind_values))?;
    Ok(())
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<EmployeeView> {
    let user = User {
        user_id: row.get("user_id")?,
        username: row.get("username")?,
        email: row.get("email")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        dob: row.get("dob")?,
        gender: row.get("gender")?,
        phone_number: row.get("phone_number")?,
        avatar_url: row.get("avatar_url")?,
        created_at: row.get("user_created_at")?,
        updated_at: row.get("user_updated_at")?,
    };

    let address = match row.get::<_, Option<i64>>("address_id")? {
        Some(address_id) => Some(Address {
            address_id,
            city: row.get("city")?,
            country: row.get("country")?,
            line1: row.get("line1")?,
            line2: row.get("line2")?,
            postal_code: row.get("postal_code")?,
            state: row.get("state")?,
        }),
        None => None,
    };

    let department = match row.get::<_, Option<i64>>("department_id")? {
        Some(department_id) => Some(Department {
            department_id,
            name: row.get("department_name")?,
            description: row.get("department_description")?,
            created_at: row.get("department_created_at")?,
            updated_at: row.get("department_updated_at")?,
        }),
        None => None,
    };

    Ok(EmployeeView {
        employee_id: row.get("employee_id")?,
        role: row.get("role")?,
        salary: row.get("salary")?,
        user,
        address,
        department,
        start_at: row.get("start_at")?,
        end_at: row.get("end_at")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

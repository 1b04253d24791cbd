use staffdir_core::db::open_db_in_memory;
use staffdir_core::repo::employee_repo::{
    EmployeeListQuery, EmployeeRepository, SqliteEmployeeRepository,
};
use staffdir_core::{AddressInput, CreateEmployeeRequest, RepoError, UpdateEmployeeRequest};

fn sample_request(index: usize) -> CreateEmployeeRequest {
    CreateEmployeeRequest {
        email: format!("emp{index}@example.com"),
        username: format!("employee{index}"),
        password: "s3cret-pw".to_string(),
        phone_number: "0123456789".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        gender: "female".to_string(),
        dob: "1990-04-11".to_string(),
        salary: Some(4200.0),
        role: "Accountant".to_string(),
        start_at: "2024-02-01".to_string(),
        end_at: None,
        avatar_image: None,
        address: Some(AddressInput {
            city: "Penang".to_string(),
            line1: "12 Jalan Burma".to_string(),
            line2: None,
            state: "Penang".to_string(),
            country: "Malaysia".to_string(),
            postal_code: "10050".to_string(),
        }),
        department: Some("Finance".to_string()),
    }
}

#[test]
fn create_composes_the_full_view() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);
    repo.create_department("Finance", Some("Keeps the books"))
        .unwrap();

    let view = repo
        .create_employee(&sample_request(1), "argon2-hash", None)
        .unwrap();

    assert_eq!(view.user.username, "employee1");
    assert_eq!(view.role, "Accountant");
    assert_eq!(view.salary, "4200");
    assert_eq!(view.start_at, "2024-02-01");
    assert_eq!(view.address.as_ref().unwrap().city, "Penang");
    assert_eq!(view.department.as_ref().unwrap().name, "Finance");
    assert_eq!(view.user.avatar_url, None);
}

#[test]
fn create_without_address_or_department_leaves_them_absent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let mut request = sample_request(1);
    request.address = None;
    request.department = None;
    let view = repo.create_employee(&request, "argon2-hash", None).unwrap();

    assert_eq!(view.address, None);
    assert_eq!(view.department, None);
}

#[test]
fn create_with_unknown_department_rolls_back_everything() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let err = repo
        .create_employee(&sample_request(1), "argon2-hash", None)
        .unwrap_err();
    assert!(matches!(err, RepoError::DepartmentNotFound(name) if name == "Finance"));

    // No partial rows may survive the failed create.
    let users: i64 = conn
        .query_row("SELECT COUNT(*) FROM user;", [], |row| row.get(0))
        .unwrap();
    let addresses: i64 = conn
        .query_row("SELECT COUNT(*) FROM address;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(users, 0);
    assert_eq!(addresses, 0);
}

#[test]
fn get_unknown_username_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let err = repo.get_employee("ghost").unwrap_err();
    assert!(matches!(err, RepoError::EmployeeNotFound(name) if name == "ghost"));
}

#[test]
fn list_honors_cursor_pagination() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);
    repo.create_department("Finance", None).unwrap();

    for index in 1..=5 {
        repo.create_employee(&sample_request(index), "argon2-hash", None)
            .unwrap();
    }

    let all = repo.list_employees(&EmployeeListQuery::default()).unwrap();
    assert_eq!(all.len(), 5);

    let first_page = repo
        .list_employees(&EmployeeListQuery {
            cursor: None,
            limit: Some(2),
        })
        .unwrap();
    assert_eq!(first_page.len(), 2);

    let cursor = first_page.last().unwrap().employee_id;
    let second_page = repo
        .list_employees(&EmployeeListQuery {
            cursor: Some(cursor),
            limit: Some(2),
        })
        .unwrap();
    assert_eq!(second_page.len(), 2);
    assert!(second_page.iter().all(|view| view.employee_id > cursor));

    // A cursor without a limit means no pagination at all.
    let unpaginated = repo
        .list_employees(&EmployeeListQuery {
            cursor: Some(cursor),
            limit: None,
        })
        .unwrap();
    assert_eq!(unpaginated.len(), 5);
}

#[test]
fn update_routes_fields_to_their_owning_tables() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);
    repo.create_department("Finance", None).unwrap();
    repo.create_employee(&sample_request(1), "argon2-hash", None)
        .unwrap();

    let update = UpdateEmployeeRequest {
        role: Some("Senior Accountant".to_string()),
        salary: Some(5100.0),
        phone_number: Some("0198765432".to_string()),
        department: Some("Finance & Admin".to_string()),
        ..UpdateEmployeeRequest::default()
    };
    let view = repo
        .update_employee("employee1", &update, None, None)
        .unwrap();

    assert_eq!(view.role, "Senior Accountant");
    assert_eq!(view.salary, "5100");
    assert_eq!(view.user.phone_number, "0198765432");
    // `department` renames the department row itself.
    assert_eq!(view.department.as_ref().unwrap().name, "Finance & Admin");
}

#[test]
fn update_can_rename_the_user_and_refetches_by_new_username() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);
    repo.create_department("Finance", None).unwrap();
    repo.create_employee(&sample_request(1), "argon2-hash", None)
        .unwrap();

    let update = UpdateEmployeeRequest {
        username: Some("renamed".to_string()),
        ..UpdateEmployeeRequest::default()
    };
    let view = repo
        .update_employee("employee1", &update, None, None)
        .unwrap();
    assert_eq!(view.user.username, "renamed");

    let err = repo.get_employee("employee1").unwrap_err();
    assert!(matches!(err, RepoError::EmployeeNotFound(_)));
}

#[test]
fn update_of_unknown_employee_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let update = UpdateEmployeeRequest {
        role: Some("Anything".to_string()),
        ..UpdateEmployeeRequest::default()
    };
    let err = repo.update_employee("ghost", &update, None, None).unwrap_err();
    assert!(matches!(err, RepoError::EmployeeNotFound(_)));
}

#[test]
fn delete_removes_user_address_and_employee_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);
    repo.create_department("Finance", None).unwrap();
    repo.create_employee(&sample_request(1), "argon2-hash", None)
        .unwrap();

    let deleted = repo.delete_employee("employee1").unwrap();
    assert_eq!(deleted.user.username, "employee1");

    let err = repo.get_employee("employee1").unwrap_err();
    assert!(matches!(err, RepoError::EmployeeNotFound(_)));

    for table in ["employee", "user", "address"] {
        let count: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(count, 0, "table {table} should be empty");
    }

    // The department survives; it belongs to the org, not the employee.
    let departments: i64 = conn
        .query_row("SELECT COUNT(*) FROM department;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(departments, 1);
}

#[test]
fn create_rejects_invalid_payloads_before_touching_the_db() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let mut request = sample_request(1);
    request.email = "not-an-email".to_string();
    let err = repo.create_employee(&request, "argon2-hash", None).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let users: i64 = conn
        .query_row("SELECT COUNT(*) FROM user;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(users, 0);
}

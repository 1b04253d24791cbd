use staffdir_core::{CreateEmployeeRequest, EmployeeFormModel, EmployeeValidationError};

fn completed_form() -> EmployeeFormModel {
    let mut form = EmployeeFormModel::blank();
    form.user.first_name = "Jane".to_string();
    form.user.last_name = "Doe".to_string();
    form.user.username = "jdoe".to_string();
    form.user.email = "jdoe@example.com".to_string();
    form.user.dob = Some(639_792_000_000); // 1990-04-11T00:00:00Z
    form.user.gender = "female".to_string();
    form.user.phone_number = "0123456789".to_string();
    form.role = "Accountant".to_string();
    form.salary = Some(4200.0);
    form.start_at = Some(1_706_745_600_000); // 2024-02-01T00:00:00Z
    form
}

#[test]
fn from_form_renders_epoch_fields_as_dates() {
    let request = CreateEmployeeRequest::from_form(&completed_form(), "s3cret-pw").unwrap();

    assert_eq!(request.dob, "1990-04-11");
    assert_eq!(request.start_at, "2024-02-01");
    assert_eq!(request.end_at, None);
    assert_eq!(request.salary, Some(4200.0));
    assert!(request.validate().is_ok());
}

#[test]
fn untouched_address_group_collapses_to_none() {
    let request = CreateEmployeeRequest::from_form(&completed_form(), "s3cret-pw").unwrap();
    assert_eq!(request.address, None);
    assert_eq!(request.department, None);
}

#[test]
fn filled_address_group_is_carried_over() {
    let mut form = completed_form();
    form.address.city = "Penang".to_string();
    form.address.line1 = "12 Jalan Burma".to_string();
    form.address.state = "Penang".to_string();
    form.address.country = "Malaysia".to_string();
    form.address.postal_code = "10050".to_string();

    let request = CreateEmployeeRequest::from_form(&form, "s3cret-pw").unwrap();
    let address = request.address.expect("address should be present");
    assert_eq!(address.city, "Penang");
    assert_eq!(address.postal_code, "10050");
}

#[test]
fn missing_mandatory_fields_are_reported_by_name() {
    let mut form = completed_form();
    form.start_at = None;
    let err = CreateEmployeeRequest::from_form(&form, "s3cret-pw").unwrap_err();
    assert_eq!(err, EmployeeValidationError::MissingField("start_at"));

    let mut form = completed_form();
    form.user.email.clear();
    let err = CreateEmployeeRequest::from_form(&form, "s3cret-pw").unwrap_err();
    assert_eq!(err, EmployeeValidationError::MissingField("email"));
}

#[test]
fn validate_rejects_bad_field_formats() {
    let mut request = CreateEmployeeRequest::from_form(&completed_form(), "s3cret-pw").unwrap();
    request.phone_number = "5551234".to_string();
    assert!(matches!(
        request.validate().unwrap_err(),
        EmployeeValidationError::InvalidPhoneNumber(_)
    ));

    let mut request = CreateEmployeeRequest::from_form(&completed_form(), "s3cret-pw").unwrap();
    request.gender = "unknown".to_string();
    assert!(matches!(
        request.validate().unwrap_err(),
        EmployeeValidationError::InvalidGender(_)
    ));

    let request = CreateEmployeeRequest::from_form(&completed_form(), "short").unwrap();
    assert_eq!(
        request.validate().unwrap_err(),
        EmployeeValidationError::PasswordTooShort(5)
    );

    let mut request = CreateEmployeeRequest::from_form(&completed_form(), "s3cret-pw").unwrap();
    request.salary = Some(-1.0);
    assert_eq!(
        request.validate().unwrap_err(),
        EmployeeValidationError::NegativeSalary(-1.0)
    );
}

use staffdir_core::store::{FormStore, FormType};
use staffdir_core::EmployeeFormModel;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn set_then_read_returns_exactly_what_was_set() {
    let mut store = FormStore::new();

    let mut model = EmployeeFormModel::blank();
    model.user.username = "jdoe".to_string();
    model.salary = Some(4200.0);

    store.set_form_model(FormType::Employee, model.clone());
    assert_eq!(store.form_model(FormType::Employee), &model);
}

#[test]
fn reset_restores_the_blank_shape() {
    let mut store = FormStore::new();

    let mut model = EmployeeFormModel::blank();
    model.role = "Accountant".to_string();
    store.set_form_model(FormType::Employee, model);

    store.reset_form_model(FormType::Employee);
    assert_eq!(
        store.form_model(FormType::Employee),
        &EmployeeFormModel::blank()
    );
}

// Editing a stored model in place must never corrupt what later resets
// produce; there is no shared template to alias.
#[test]
fn reset_is_pristine_even_after_nested_in_place_mutation() {
    let mut store = FormStore::new();

    let mut model = EmployeeFormModel::blank();
    model.user.first_name = "Aisha".to_string();
    model.address.city = "Penang".to_string();
    model.department.name = "Finance".to_string();
    store.set_form_model(FormType::Employee, model);

    store.reset_form_model(FormType::Employee);
    let first_reset = store.form_model(FormType::Employee).clone();
    assert_eq!(first_reset, EmployeeFormModel::blank());

    // Mutate again and reset again; the second reset must be just as blank.
    let mut again = first_reset;
    again.user.email = "aisha@example.com".to_string();
    store.set_form_model(FormType::Employee, again);
    store.reset_form_model(FormType::Employee);
    assert_eq!(
        store.form_model(FormType::Employee),
        &EmployeeFormModel::blank()
    );
}

#[test]
fn subscribers_observe_every_mutation_synchronously() {
    let mut store = FormStore::new();
    let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    store.subscribe(move |form, model| {
        sink.borrow_mut()
            .push(format!("{}:{}", form.as_str(), model.user.username));
    });

    let mut model = EmployeeFormModel::blank();
    model.user.username = "jdoe".to_string();
    store.set_form_model(FormType::Employee, model);
    store.reset_form_model(FormType::Employee);

    assert_eq!(
        seen.borrow().as_slice(),
        ["employee:jdoe".to_string(), "employee:".to_string()]
    );
}

#[test]
fn unsubscribed_observers_stop_receiving_notifications() {
    let mut store = FormStore::new();
    let count = Rc::new(RefCell::new(0));

    let sink = Rc::clone(&count);
    let id = store.subscribe(move |_, _| *sink.borrow_mut() += 1);

    store.reset_form_model(FormType::Employee);
    assert!(store.unsubscribe(id));
    store.reset_form_model(FormType::Employee);

    assert_eq!(*count.borrow(), 1);
}

//! Form state store.
//!
//! # Responsibility
//! - Hold the in-progress form model per form type.
//! - Notify subscribers synchronously after every replacement or reset.
//!
//! # Invariants
//! - `reset_form_model` always installs a freshly-constructed blank value;
//!   no shared template object exists that a prior edit could corrupt.
//! - The store performs no validation; it trusts the caller's shape.

use crate::model::form::EmployeeFormModel;
use crate::store::SubscriberId;
use log::debug;

/// Form discriminator. The admin UI currently only has the employee form,
/// but callers dispatch on this the same way they would with more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormType {
    Employee,
}

impl FormType {
    /// Wire/name form of the discriminator, as the UI layer spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "employee",
        }
    }

    /// Parses a UI-provided name; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "employee" => Some(Self::Employee),
            _ => None,
        }
    }
}

type FormSubscriber = Box<dyn FnMut(FormType, &EmployeeFormModel)>;

/// Application-scoped container for in-progress form drafts.
///
/// Constructed once at the application root and handed to whichever UI layer
/// binds forms, rather than living as an ambient global.
pub struct FormStore {
    employee: EmployeeFormModel,
    subscribers: Vec<(SubscriberId, FormSubscriber)>,
    next_subscriber: SubscriberId,
}

impl FormStore {
    /// Creates a store with every form type holding its blank model.
    pub fn new() -> Self {
        Self {
            employee: EmployeeFormModel::blank(),
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// Returns the current model for one form type.
    pub fn form_model(&self, form: FormType) -> &EmployeeFormModel {
        match form {
            FormType::Employee => &self.employee,
        }
    }

    /// Replaces the stored model for one form type wholesale.
    ///
    /// No validation is performed; subscribers observe the new value before
    /// this returns.
    pub fn set_form_model(&mut self, form: FormType, model: EmployeeFormModel) {
        match form {
            FormType::Employee => self.employee = model,
        }
        debug!("event=form_set module=store form={}", form.as_str());
        self.notify(form);
    }

    /// Restores the model for one form type to its blank state.
    ///
    /// Each reset constructs an independent blank value, so edits applied to
    /// a previously stored model can never leak into later resets.
    pub fn reset_form_model(&mut self, form: FormType) {
        match form {
            FormType::Employee => self.employee = EmployeeFormModel::blank(),
        }
        debug!("event=form_reset module=store form={}", form.as_str());
        self.notify(form);
    }

    /// Registers a subscriber invoked synchronously after every mutation.
    ///
    /// Returns a handle usable with [`FormStore::unsubscribe`].
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(FormType, &EmployeeFormModel) + 'static,
    ) -> SubscriberId {
        let id = self.next_subscriber;
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes one subscriber. Returns whether the handle was known.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(known, _)| *known != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self, form: FormType) {
        let model = match form {
            FormType::Employee => &self.employee,
        };
        for (_, subscriber) in &mut self.subscribers {
            subscriber(form, model);
        }
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

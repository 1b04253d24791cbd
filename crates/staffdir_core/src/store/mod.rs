//! Reactive state stores consumed by the UI layer.
//!
//! # Responsibility
//! - Hold application-lifetime UI state as explicitly constructed context
//!   objects, one instance per running app.
//! - Deliver change notifications synchronously on the mutating call.
//!
//! # Invariants
//! - All mutation is single-threaded and caller-driven; there is no interior
//!   mutability and no background work.

pub mod drawer;
pub mod form;

pub use drawer::{DrawerKind, DrawerState, DrawerStore};
pub use form::{FormStore, FormType};

/// Handle returned by store subscriptions, used to unsubscribe.
pub type SubscriberId = u64;

/// The full store set for one running application.
///
/// Constructed at the application root and passed down to the UI layer;
/// lifecycle is tied to the root scope that owns it.
#[derive(Default)]
pub struct StoreContext {
    pub form: FormStore,
    pub drawer: DrawerStore,
}

impl StoreContext {
    pub fn new() -> Self {
        Self::default()
    }
}

//! Drawer state store.
//!
//! # Responsibility
//! - Track which of the two exclusive drawers ("edit", "create") is open.
//! - Notify subscribers synchronously after every state change.
//!
//! # Invariants
//! - Every transition clears BOTH flags before applying the requested one:
//!   opening one drawer closes the other, and closing drawer A while B is
//!   open also closes B.
//! - At most one flag is ever set.

use crate::store::SubscriberId;
use log::debug;

/// Drawer discriminator for the two admin panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawerKind {
    Edit,
    Create,
}

impl DrawerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Create => "create",
        }
    }

    /// Parses a UI-provided name; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "edit" => Some(Self::Edit),
            "create" => Some(Self::Create),
            _ => None,
        }
    }
}

/// Open/closed flags for both drawers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawerState {
    pub edit: bool,
    pub create: bool,
}

type DrawerSubscriber = Box<dyn FnMut(DrawerState)>;

/// Application-scoped container for drawer visibility.
pub struct DrawerStore {
    open: DrawerState,
    subscribers: Vec<(SubscriberId, DrawerSubscriber)>,
    next_subscriber: SubscriberId,
}

impl DrawerStore {
    /// Creates a store with both drawers closed.
    pub fn new() -> Self {
        Self {
            open: DrawerState::default(),
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// Returns the current open state of both drawers.
    pub fn drawer_open(&self) -> DrawerState {
        self.open
    }

    /// Opens or closes one drawer, closing everything else first.
    pub fn set_drawer_open(&mut self, kind: DrawerKind, open: bool) {
        self.apply(Some(kind), open);
    }

    /// Name-keyed variant for callers dispatching on UI-provided strings.
    ///
    /// An unrecognized name still clears both drawers and then does nothing
    /// more; it never panics.
    pub fn set_drawer_open_named(&mut self, name: &str, open: bool) {
        self.apply(DrawerKind::parse(name), open);
    }

    /// Registers a subscriber invoked synchronously after every change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(DrawerState) + 'static) -> SubscriberId {
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

    fn apply(&mut self, kind: Option<DrawerKind>, open: bool) {
        self.open = DrawerState::default();
        match kind {
            Some(DrawerKind::Edit) => self.open.edit = open,
            Some(DrawerKind::Create) => self.open.create = open,
            None => {}
        }
        debug!(
            "event=drawer_set module=store edit={} create={}",
            self.open.edit, self.open.create
        );
        let state = self.open;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(state);
        }
    }
}

impl Default for DrawerStore {
    fn default() -> Self {
        Self::new()
    }
}

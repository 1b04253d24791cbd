//! Employee domain model: read views, form drafts and write payloads.
//!
//! # Responsibility
//! - Define the canonical data shapes exchanged with the employee API.
//! - Keep read-side and write-side shapes explicitly separate.
//!
//! # Invariants
//! - Read views mirror the backend contract byte-for-byte on the wire.
//! - Write payloads are validated before they reach persistence.

pub mod employee;
pub mod form;
pub mod payload;
pub mod validate;

//! Drag-and-drop reconciliation.
//!
//! # Responsibility
//! - Model drag-end gestures between the three topic collections.
//! - Translate one gesture into one state transition on the store.
//!
//! # Invariants
//! - A gesture that cannot be applied leaves every collection unchanged.

pub mod event;
pub mod reconcile;

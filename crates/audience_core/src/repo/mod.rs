//! Persistence for saved audiences.
//!
//! # Responsibility
//! - Define the key-value style contract the service layer depends on.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Audiences are keyed by their stable `AudienceId`.
//! - A stored snapshot that no longer decodes is surfaced as empty buckets.

pub mod audience_repo;

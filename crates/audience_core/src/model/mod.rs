//! Domain model for the audience builder.
//!
//! # Responsibility
//! - Define the topic/sub-item shape shared by catalog, search and buckets.
//! - Define the persisted audience record and its bucket snapshot.
//!
//! # Invariants
//! - A topic id is globally unique inside one catalog.
//! - A sub-item id is unique inside its parent topic.
//! - Placed topics are owned copies; nothing in the model is shared by
//!   reference between buckets.

pub mod audience;
pub mod bucket;
pub mod topic;

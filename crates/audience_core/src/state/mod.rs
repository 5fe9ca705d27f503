//! Selection state for the audience builder.
//!
//! # Responsibility
//! - Own the search-result, core and supportive collections.
//! - Keep the derived search view consistent after every mutation.

pub mod store;

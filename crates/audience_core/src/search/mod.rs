//! Topic search entry points.
//!
//! # Responsibility
//! - Rank catalog topics against free-text queries.
//! - Keep relevance shaping inside core.

pub mod scorer;

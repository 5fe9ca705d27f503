//! Derived audience views.
//!
//! # Responsibility
//! - Compute per-topic market share for the core bucket.
//! - Shape the analytics payload generated from a bucket snapshot.

pub mod market_share;
pub mod output;

//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into save/load use-cases.
//! - Keep UI layers decoupled from storage details.

pub mod audience_service;

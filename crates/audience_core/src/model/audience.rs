//! Persisted audience record and its bucket snapshot.
//!
//! # Responsibility
//! - Define the unit written by the audience repository.
//! - Define the `{core, supportive}` snapshot exchanged with the store.
//!
//! # Invariants
//! - `tags` are unique and keep insertion order.
//! - `updated_at >= created_at`.
//! - A snapshot missing either bucket decodes as an empty bucket.

use crate::model::topic::Topic;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a saved audience.
pub type AudienceId = Uuid;

/// Owned copy of both placement buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudienceSnapshot {
    #[serde(rename = "coreTopics", default)]
    pub core: Vec<Topic>,
    #[serde(rename = "supportiveTopics", default)]
    pub supportive: Vec<Topic>,
}

impl AudienceSnapshot {
    /// Snapshot with both buckets empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether neither bucket holds a topic.
    pub fn is_empty(&self) -> bool {
        self.core.is_empty() && self.supportive.is_empty()
    }

    /// Total number of placed topics.
    pub fn topic_count(&self) -> usize {
        self.core.len() + self.supportive.len()
    }
}

/// Saved audience as stored by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audience {
    pub id: AudienceId,
    pub name: String,
    pub tags: Vec<String>,
    pub home_page_url: Option<String>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds.
    pub updated_at: i64,
    pub snapshot: AudienceSnapshot,
}

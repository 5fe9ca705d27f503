//! Topic and sub-item domain model.
//!
//! # Responsibility
//! - Define the hierarchical topic record shown in search and buckets.
//! - Provide selection helpers used by the selection-state store.
//!
//! # Invariants
//! - `similarity`, when present, lies in `[0.0, 1.0]`.
//! - Sub-item ids never repeat inside one topic.
//! - Wire names match the saved-audience JSON shape (`children`).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier of a catalog topic (for example `t12`).
pub type TopicId = String;

/// Identifier of a sub-item, unique inside its parent topic.
pub type SubItemId = String;

/// Similarity below which a search hit is rendered as low relevance.
pub const LOW_RELEVANCE_THRESHOLD: f64 = 0.4;

/// One selectable child entry of a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItem {
    pub id: SubItemId,
    pub name: String,
    /// Missing in older saved audiences; treated as unselected.
    #[serde(default)]
    pub selected: bool,
}

impl SubItem {
    /// Creates a sub-item with an explicit default selection flag.
    pub fn new(id: impl Into<SubItemId>, name: impl Into<String>, selected: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            selected,
        }
    }
}

/// Hierarchical topic with ordered sub-items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
    /// Serialized as `children` to match saved-audience payloads.
    #[serde(rename = "children", default)]
    pub sub_items: Vec<SubItem>,
    /// Populated only while the topic is part of a ranked search result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

/// Structural validation errors for [`Topic`].
#[derive(Debug, Clone, PartialEq)]
pub enum TopicValidationError {
    BlankId,
    BlankName(TopicId),
    BlankSubItemId(TopicId),
    DuplicateSubItemId {
        topic_id: TopicId,
        sub_item_id: SubItemId,
    },
    SimilarityOutOfRange {
        topic_id: TopicId,
        value: f64,
    },
}

impl Display for TopicValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "topic id must not be blank"),
            Self::BlankName(id) => write!(f, "topic `{id}` has a blank name"),
            Self::BlankSubItemId(id) => write!(f, "topic `{id}` has a sub-item with blank id"),
            Self::DuplicateSubItemId {
                topic_id,
                sub_item_id,
            } => write!(
                f,
                "topic `{topic_id}` repeats sub-item id `{sub_item_id}`"
            ),
            Self::SimilarityOutOfRange { topic_id, value } => write!(
                f,
                "topic `{topic_id}` similarity {value} is outside [0, 1]"
            ),
        }
    }
}

impl Error for TopicValidationError {}

impl Topic {
    /// Creates a topic at rest (no similarity).
    pub fn new(id: impl Into<TopicId>, name: impl Into<String>, sub_items: Vec<SubItem>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sub_items,
            similarity: None,
        }
    }

    /// Checks id/name presence, sub-item id uniqueness and similarity range.
    pub fn validate(&self) -> Result<(), TopicValidationError> {
        if self.id.trim().is_empty() {
            return Err(TopicValidationError::BlankId);
        }
        if self.name.trim().is_empty() {
            return Err(TopicValidationError::BlankName(self.id.clone()));
        }

        let mut seen = HashSet::with_capacity(self.sub_items.len());
        for sub_item in &self.sub_items {
            if sub_item.id.trim().is_empty() {
                return Err(TopicValidationError::BlankSubItemId(self.id.clone()));
            }
            if !seen.insert(sub_item.id.as_str()) {
                return Err(TopicValidationError::DuplicateSubItemId {
                    topic_id: self.id.clone(),
                    sub_item_id: sub_item.id.clone(),
                });
            }
        }

        if let Some(value) = self.similarity {
            if !(0.0..=1.0).contains(&value) {
                return Err(TopicValidationError::SimilarityOutOfRange {
                    topic_id: self.id.clone(),
                    value,
                });
            }
        }

        Ok(())
    }

    /// Looks up one sub-item by id.
    pub fn sub_item(&self, sub_item_id: &str) -> Option<&SubItem> {
        self.sub_items.iter().find(|item| item.id == sub_item_id)
    }

    /// Sets the selection flag of one sub-item.
    ///
    /// Returns `false` when the sub-item does not exist; the topic is then
    /// left untouched.
    pub fn set_sub_item_selected(&mut self, sub_item_id: &str, selected: bool) -> bool {
        match self.sub_items.iter_mut().find(|item| item.id == sub_item_id) {
            Some(item) => {
                item.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Iterates sub-items currently selected.
    pub fn selected_sub_items(&self) -> impl Iterator<Item = &SubItem> {
        self.sub_items.iter().filter(|item| item.selected)
    }

    /// Whether the ranked similarity marks this topic as a weak match.
    ///
    /// Topics without a score are never flagged.
    pub fn is_low_relevance(&self) -> bool {
        self.similarity
            .is_some_and(|value| value < LOW_RELEVANCE_THRESHOLD)
    }
}

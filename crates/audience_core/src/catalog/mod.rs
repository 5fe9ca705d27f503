//! Read-only topic catalog.
//!
//! # Responsibility
//! - Hold the reference topic list supplied once at startup.
//! - Reject catalogs that would break id-based reconciliation.
//!
//! # Invariants
//! - Topic ids are unique across the catalog.
//! - Catalog order is stable and is the tiebreak for equal search scores.
//! - Catalog entries carry no similarity at rest.

mod builtin;

use crate::model::topic::{Topic, TopicId, TopicValidationError};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised while building a [`Catalog`].
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// One topic failed structural validation.
    InvalidTopic(TopicValidationError),
    /// Two topics share the same id.
    DuplicateTopicId(TopicId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTopic(err) => write!(f, "{err}"),
            Self::DuplicateTopicId(id) => write!(f, "duplicate topic id in catalog: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTopic(err) => Some(err),
            Self::DuplicateTopicId(_) => None,
        }
    }
}

impl From<TopicValidationError> for CatalogError {
    fn from(value: TopicValidationError) -> Self {
        Self::InvalidTopic(value)
    }
}

/// Ordered, validated reference dataset of topics.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    topics: Vec<Topic>,
}

impl Catalog {
    /// Builds a catalog from caller-supplied topics.
    ///
    /// Any `similarity` on the input is discarded.
    ///
    /// # Errors
    /// - `InvalidTopic` when a topic fails [`Topic::validate`].
    /// - `DuplicateTopicId` when an id repeats.
    pub fn new(topics: Vec<Topic>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(topics.len());
        let mut normalized = Vec::with_capacity(topics.len());
        for mut topic in topics {
            topic.similarity = None;
            topic.validate()?;
            if !seen.insert(topic.id.clone()) {
                return Err(CatalogError::DuplicateTopicId(topic.id));
            }
            normalized.push(topic);
        }
        Ok(Self { topics: normalized })
    }

    /// The bundled fintech catalog used by the demo surfaces.
    pub fn builtin() -> Self {
        Self {
            topics: builtin::topics(),
        }
    }

    /// All topics in catalog order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Looks up one topic by id.
    pub fn get(&self, topic_id: &str) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.id == topic_id)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, CatalogError};
    use crate::model::topic::{SubItem, Topic};

    #[test]
    fn builtin_catalog_passes_validation() {
        let builtin = Catalog::builtin();
        assert_eq!(builtin.len(), 36);
        let rebuilt = Catalog::new(builtin.topics().to_vec()).unwrap();
        assert_eq!(rebuilt, builtin);
    }

    #[test]
    fn builtin_sub_items_default_to_selected() {
        let builtin = Catalog::builtin();
        assert!(builtin
            .topics()
            .iter()
            .flat_map(|topic| topic.sub_items.iter())
            .all(|item| item.selected));
    }

    #[test]
    fn new_rejects_duplicate_ids_and_strips_similarity() {
        let mut scored = Topic::new("a", "Alpha", vec![SubItem::new("a1", "One", true)]);
        scored.similarity = Some(0.5);
        let catalog = Catalog::new(vec![scored.clone()]).unwrap();
        assert_eq!(catalog.get("a").unwrap().similarity, None);

        let err = Catalog::new(vec![scored.clone(), scored]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateTopicId("a".to_string()));
    }
}

//! Selection-state store.
//!
//! # Responsibility
//! - Own `search_results`, `core` and `supportive` plus the active query.
//! - Expose query, selection, snapshot and restore operations.
//! - Recompute the derived search view at the end of every bucket mutation.
//!
//! # Invariants
//! - A topic id appears in at most one of `core` / `supportive`.
//! - `search_results` never contains an id placed in either bucket.
//! - `search_results` equals the ranked catalog minus placed ids for the
//!   active query whenever a public method returns.

use crate::catalog::Catalog;
use crate::dnd::event::{DragEvent, RawDragEvent};
use crate::dnd::reconcile::{reconcile, DragOutcome, RejectReason};
use crate::model::audience::AudienceSnapshot;
use crate::model::bucket::Bucket;
use crate::model::topic::{Topic, TopicId};
use crate::search::scorer::{Scorer, ScoringConfig, ScoringConfigError};
use log::{debug, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lookup failures for selection and removal calls.
///
/// The store is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Operation requires `core` or `supportive`.
    NotAPlacementBucket(Bucket),
    TopicNotFound {
        bucket: Bucket,
        topic_id: TopicId,
    },
    SubItemNotFound {
        bucket: Bucket,
        topic_id: TopicId,
        sub_item_id: String,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAPlacementBucket(bucket) => {
                write!(f, "bucket `{bucket}` does not hold placed topics")
            }
            Self::TopicNotFound { bucket, topic_id } => {
                write!(f, "topic `{topic_id}` not found in `{bucket}`")
            }
            Self::SubItemNotFound {
                bucket,
                topic_id,
                sub_item_id,
            } => write!(
                f,
                "sub-item `{sub_item_id}` not found in topic `{topic_id}` of `{bucket}`"
            ),
        }
    }
}

impl Error for StoreError {}

/// Single-owner state container driven by the UI event loop.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    catalog: Catalog,
    scorer: Scorer,
    query: String,
    search_results: Vec<Topic>,
    core: Vec<Topic>,
    supportive: Vec<Topic>,
}

impl SelectionStore {
    /// Creates a store with empty buckets, a blank query and default scoring.
    pub fn new(catalog: Catalog) -> Self {
        let mut store = Self {
            catalog,
            scorer: Scorer::default(),
            query: String::new(),
            search_results: Vec::new(),
            core: Vec::new(),
            supportive: Vec::new(),
        };
        store.refresh_search_results();
        store
    }

    /// Creates a store with custom score bands.
    pub fn with_config(catalog: Catalog, config: ScoringConfig) -> Result<Self, ScoringConfigError> {
        config.validate()?;
        let mut store = Self::new(catalog);
        store.scorer = Scorer::new(config);
        store.refresh_search_results();
        Ok(store)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn search_results(&self) -> &[Topic] {
        &self.search_results
    }

    pub fn core(&self) -> &[Topic] {
        &self.core
    }

    pub fn supportive(&self) -> &[Topic] {
        &self.supportive
    }

    /// Read view of any of the three collections.
    pub fn bucket(&self, bucket: Bucket) -> &[Topic] {
        match bucket {
            Bucket::SearchResults => &self.search_results,
            Bucket::Core => &self.core,
            Bucket::Supportive => &self.supportive,
        }
    }

    /// Whether `topic_id` sits in `core` or `supportive`.
    pub fn is_placed(&self, topic_id: &str) -> bool {
        self.core
            .iter()
            .chain(self.supportive.iter())
            .any(|topic| topic.id == topic_id)
    }

    /// Records the active query and re-ranks the search view.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh_search_results();
    }

    /// Sets one sub-item's `selected` flag on the copy held by `bucket`.
    ///
    /// The same topic id in the other bucket is a separate copy and is not
    /// touched. Membership does not change, so the search view is kept.
    pub fn toggle_sub_item_selected(
        &mut self,
        bucket: Bucket,
        topic_id: &str,
        sub_item_id: &str,
        selected: bool,
    ) -> Result<(), StoreError> {
        let list = self
            .placement_mut(bucket)
            .ok_or(StoreError::NotAPlacementBucket(bucket))?;
        let topic = list
            .iter_mut()
            .find(|topic| topic.id == topic_id)
            .ok_or_else(|| StoreError::TopicNotFound {
                bucket,
                topic_id: topic_id.to_string(),
            })?;

        if !topic.set_sub_item_selected(sub_item_id, selected) {
            return Err(StoreError::SubItemNotFound {
                bucket,
                topic_id: topic_id.to_string(),
                sub_item_id: sub_item_id.to_string(),
            });
        }
        Ok(())
    }

    /// Removes a placed topic by id and returns it.
    pub fn remove_topic(&mut self, bucket: Bucket, topic_id: &str) -> Result<Topic, StoreError> {
        let list = self
            .placement_mut(bucket)
            .ok_or(StoreError::NotAPlacementBucket(bucket))?;
        let index = list
            .iter()
            .position(|topic| topic.id == topic_id)
            .ok_or_else(|| StoreError::TopicNotFound {
                bucket,
                topic_id: topic_id.to_string(),
            })?;
        let removed = list.remove(index);
        self.refresh_search_results();
        Ok(removed)
    }

    /// Empties both buckets.
    pub fn clear(&mut self) {
        self.core.clear();
        self.supportive.clear();
        self.refresh_search_results();
    }

    /// Owned copy of both buckets, independent of later mutation.
    pub fn snapshot(&self) -> AudienceSnapshot {
        AudienceSnapshot {
            core: self.core.clone(),
            supportive: self.supportive.clone(),
        }
    }

    /// Replaces both buckets wholesale.
    ///
    /// `None` resets to empty buckets. Invalid topics and repeated ids are
    /// dropped (first occurrence wins, `core` before `supportive`).
    pub fn restore(&mut self, snapshot: Option<AudienceSnapshot>) {
        let snapshot = snapshot.unwrap_or_default();
        let mut seen = HashSet::new();
        self.core = retain_restorable(snapshot.core, Bucket::Core, &mut seen);
        self.supportive = retain_restorable(snapshot.supportive, Bucket::Supportive, &mut seen);
        self.refresh_search_results();
    }

    /// Applies one drag-end gesture and settles the search view.
    pub fn handle_drag_end(&mut self, event: &DragEvent) -> DragOutcome {
        let outcome = reconcile(self, event);
        if outcome.changed_state() {
            self.refresh_search_results();
        }
        outcome
    }

    /// Validates a UI payload, then applies it like [`Self::handle_drag_end`].
    ///
    /// Malformed payloads are rejected without touching state.
    pub fn handle_raw_drag_end(&mut self, raw: &RawDragEvent) -> DragOutcome {
        match DragEvent::try_from(raw) {
            Ok(event) => self.handle_drag_end(&event),
            Err(err) => {
                warn!(
                    "event=drag_end module=state status=rejected reason=malformed error={}",
                    err
                );
                DragOutcome::Rejected(RejectReason::Malformed(err))
            }
        }
    }

    pub(crate) fn placement_mut(&mut self, bucket: Bucket) -> Option<&mut Vec<Topic>> {
        match bucket {
            Bucket::Core => Some(&mut self.core),
            Bucket::Supportive => Some(&mut self.supportive),
            Bucket::SearchResults => None,
        }
    }

    /// Both placement buckets as `(from, to)`; `None` unless they differ.
    pub(crate) fn placement_pair_mut(
        &mut self,
        from: Bucket,
        to: Bucket,
    ) -> Option<(&mut Vec<Topic>, &mut Vec<Topic>)> {
        match (from, to) {
            (Bucket::Core, Bucket::Supportive) => Some((&mut self.core, &mut self.supportive)),
            (Bucket::Supportive, Bucket::Core) => Some((&mut self.supportive, &mut self.core)),
            _ => None,
        }
    }

    fn refresh_search_results(&mut self) {
        let placed: HashSet<&str> = self
            .core
            .iter()
            .chain(self.supportive.iter())
            .map(|topic| topic.id.as_str())
            .collect();
        let ranked = self.scorer.rank(
            &self.query,
            self.catalog
                .topics()
                .iter()
                .filter(|topic| !placed.contains(topic.id.as_str())),
        );
        debug!(
            "event=search_refresh module=state status=ok query_chars={} placed={} results={}",
            self.query.trim().chars().count(),
            placed.len(),
            ranked.len()
        );
        self.search_results = ranked;
    }
}

fn retain_restorable(
    topics: Vec<Topic>,
    bucket: Bucket,
    seen: &mut HashSet<TopicId>,
) -> Vec<Topic> {
    let mut kept = Vec::with_capacity(topics.len());
    for topic in topics {
        if let Err(err) = topic.validate() {
            warn!(
                "event=snapshot_restore module=state status=skipped bucket={} reason=invalid_topic error={}",
                bucket, err
            );
            continue;
        }
        if !seen.insert(topic.id.clone()) {
            warn!(
                "event=snapshot_restore module=state status=skipped bucket={} reason=duplicate_id",
                bucket
            );
            continue;
        }
        kept.push(topic);
    }
    kept
}

//! Drag-end state machine.
//!
//! Cases are evaluated in a fixed priority order:
//! 1. no destination: cancelled, nothing changes;
//! 2. same bucket and index: nothing changes;
//! 3. same bucket, other index: reorder inside `core` / `supportive`;
//! 4. search results to a bucket: place a copy of the ranked topic;
//! 5. bucket to the other bucket: move the same topic, selection intact;
//! 6. bucket to search results: remove, the store re-ranks it back in.
//!
//! # Invariants
//! - Rejected gestures leave the store untouched.
//! - No gesture creates a second copy of an id inside the buckets.
//! - Destination indices past the end append.

use crate::dnd::event::{DragEvent, MalformedDragEvent};
use crate::model::bucket::Bucket;
use crate::model::topic::TopicId;
use crate::state::store::SelectionStore;
use log::{debug, warn};

/// Why a gesture was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Payload could not be validated.
    Malformed(MalformedDragEvent),
    /// Source index no longer exists in its bucket.
    SourceOutOfBounds { bucket: Bucket, index: usize },
    /// Search results are derived and have no user order.
    SearchResultsNotReorderable,
    /// Destination already holds this topic id.
    AlreadyPlaced { topic_id: TopicId, bucket: Bucket },
}

/// Result of applying one gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    Cancelled,
    Unchanged,
    Reordered {
        bucket: Bucket,
        from: usize,
        to: usize,
    },
    Placed {
        topic_id: TopicId,
        bucket: Bucket,
        index: usize,
    },
    Moved {
        topic_id: TopicId,
        from: Bucket,
        to: Bucket,
        index: usize,
    },
    Removed {
        topic_id: TopicId,
        bucket: Bucket,
    },
    Rejected(RejectReason),
}

impl DragOutcome {
    /// Whether any collection was mutated.
    pub fn changed_state(&self) -> bool {
        matches!(
            self,
            Self::Reordered { .. } | Self::Placed { .. } | Self::Moved { .. } | Self::Removed { .. }
        )
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Cancelled => "cancelled",
            Self::Unchanged => "unchanged",
            Self::Reordered { .. } => "reordered",
            Self::Placed { .. } => "placed",
            Self::Moved { .. } => "moved",
            Self::Removed { .. } => "removed",
            Self::Rejected(_) => "rejected",
        }
    }
}

/// Applies `event` to the buckets of `store`.
///
/// Only bucket contents are touched here; the caller re-ranks search
/// results when [`DragOutcome::changed_state`] is true.
pub(crate) fn reconcile(store: &mut SelectionStore, event: &DragEvent) -> DragOutcome {
    let outcome = transition(store, event);
    match &outcome {
        DragOutcome::Rejected(reason) => warn!(
            "event=drag_end module=dnd status=rejected source={} dest={} reason={:?}",
            event.source.bucket,
            destination_label(event),
            reason
        ),
        other => debug!(
            "event=drag_end module=dnd status=ok source={} dest={} outcome={}",
            event.source.bucket,
            destination_label(event),
            other.label()
        ),
    }
    outcome
}

fn transition(store: &mut SelectionStore, event: &DragEvent) -> DragOutcome {
    let Some(destination) = event.destination else {
        return DragOutcome::Cancelled;
    };
    let source = event.source;

    if source.bucket == destination.bucket {
        if source.index == destination.index {
            return DragOutcome::Unchanged;
        }
        return reorder(store, source.bucket, source.index, destination.index);
    }

    match (source.bucket, destination.bucket) {
        (Bucket::SearchResults, to) => place(store, source.index, to, destination.index),
        (from, Bucket::SearchResults) => remove(store, from, source.index),
        (from, to) => move_between(store, from, source.index, to, destination.index),
    }
}

fn reorder(store: &mut SelectionStore, bucket: Bucket, from: usize, to: usize) -> DragOutcome {
    let Some(list) = store.placement_mut(bucket) else {
        return DragOutcome::Rejected(RejectReason::SearchResultsNotReorderable);
    };
    if from >= list.len() {
        return DragOutcome::Rejected(RejectReason::SourceOutOfBounds {
            bucket,
            index: from,
        });
    }

    let topic = list.remove(from);
    let to = to.min(list.len());
    list.insert(to, topic);
    DragOutcome::Reordered { bucket, from, to }
}

fn place(store: &mut SelectionStore, index: usize, bucket: Bucket, at: usize) -> DragOutcome {
    let Some(ranked) = store.search_results().get(index) else {
        return DragOutcome::Rejected(RejectReason::SourceOutOfBounds {
            bucket: Bucket::SearchResults,
            index,
        });
    };
    if store.is_placed(&ranked.id) {
        return DragOutcome::Rejected(RejectReason::AlreadyPlaced {
            topic_id: ranked.id.clone(),
            bucket,
        });
    }

    // Owned copy: later selection toggles never reach the catalog entry.
    let copy = ranked.clone();
    let topic_id = copy.id.clone();
    let Some(list) = store.placement_mut(bucket) else {
        return DragOutcome::Rejected(RejectReason::SearchResultsNotReorderable);
    };
    let at = at.min(list.len());
    list.insert(at, copy);
    DragOutcome::Placed {
        topic_id,
        bucket,
        index: at,
    }
}

fn move_between(
    store: &mut SelectionStore,
    from: Bucket,
    index: usize,
    to: Bucket,
    at: usize,
) -> DragOutcome {
    let Some(topic_id) = store.bucket(from).get(index).map(|topic| topic.id.clone()) else {
        return DragOutcome::Rejected(RejectReason::SourceOutOfBounds {
            bucket: from,
            index,
        });
    };
    if store.bucket(to).iter().any(|topic| topic.id == topic_id) {
        return DragOutcome::Rejected(RejectReason::AlreadyPlaced {
            topic_id,
            bucket: to,
        });
    }

    let Some((source, target)) = store.placement_pair_mut(from, to) else {
        return DragOutcome::Rejected(RejectReason::SearchResultsNotReorderable);
    };
    // Same value moves across: sub-item selection travels with it.
    let topic = source.remove(index);
    let at = at.min(target.len());
    target.insert(at, topic);
    DragOutcome::Moved {
        topic_id,
        from,
        to,
        index: at,
    }
}

fn remove(store: &mut SelectionStore, bucket: Bucket, index: usize) -> DragOutcome {
    let Some(list) = store.placement_mut(bucket) else {
        return DragOutcome::Rejected(RejectReason::SearchResultsNotReorderable);
    };
    if index >= list.len() {
        return DragOutcome::Rejected(RejectReason::SourceOutOfBounds { bucket, index });
    }

    let topic = list.remove(index);
    DragOutcome::Removed {
        topic_id: topic.id,
        bucket,
    }
}

fn destination_label(event: &DragEvent) -> &'static str {
    event
        .destination
        .map_or("none", |location| location.bucket.droppable_id())
}

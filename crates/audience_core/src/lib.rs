//! Core logic for the audience builder.
//! This crate is the single source of truth for ranking and bucket invariants.

pub mod catalog;
pub mod db;
pub mod dnd;
pub mod insight;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod state;

pub use catalog::{Catalog, CatalogError};
pub use dnd::event::{DragEvent, DragLocation, MalformedDragEvent, RawDragEvent, RawDragLocation};
pub use dnd::reconcile::{DragOutcome, RejectReason};
pub use insight::market_share::market_shares;
pub use insight::output::AudienceOutput;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::audience::{Audience, AudienceId, AudienceSnapshot};
pub use model::bucket::Bucket;
pub use model::topic::{SubItem, Topic, TopicId, TopicValidationError, LOW_RELEVANCE_THRESHOLD};
pub use repo::audience_repo::{
    AudienceDraft, AudienceListQuery, AudienceRepository, RepoError, RepoResult,
    SqliteAudienceRepository,
};
pub use search::scorer::{MatchKind, RawScore, Scorer, ScoringConfig, ScoringConfigError};
pub use service::audience_service::{AudienceService, AudienceServiceError, SaveAudienceRequest};
pub use state::store::{SelectionStore, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

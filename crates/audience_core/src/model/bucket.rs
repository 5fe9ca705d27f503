//! Drop-target identities.
//!
//! # Invariants
//! - Droppable ids are stable strings shared with the drag-and-drop UI.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One of the three ordered topic collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Bucket {
    /// Derived, ranked view of unplaced catalog topics.
    SearchResults,
    /// Primary audience topics.
    Core,
    /// Secondary audience topics.
    Supportive,
}

impl Bucket {
    /// Droppable id used by the drag-and-drop UI.
    pub fn droppable_id(self) -> &'static str {
        match self {
            Self::SearchResults => "searchResults",
            Self::Core => "coreTopics",
            Self::Supportive => "supportiveTopics",
        }
    }

    /// Whether this bucket holds user-placed topics.
    pub fn is_placement(self) -> bool {
        matches!(self, Self::Core | Self::Supportive)
    }

    /// The other placement bucket; `None` for search results.
    pub fn counterpart(self) -> Option<Self> {
        match self {
            Self::Core => Some(Self::Supportive),
            Self::Supportive => Some(Self::Core),
            Self::SearchResults => None,
        }
    }
}

impl Display for Bucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.droppable_id())
    }
}

/// Unknown droppable id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBucket(pub String);

impl Display for UnknownBucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown bucket `{}`", self.0)
    }
}

impl std::error::Error for UnknownBucket {}

impl FromStr for Bucket {
    type Err = UnknownBucket;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "searchResults" => Ok(Self::SearchResults),
            "coreTopics" | "core" => Ok(Self::Core),
            "supportiveTopics" | "supportive" => Ok(Self::Supportive),
            other => Err(UnknownBucket(other.to_string())),
        }
    }
}

//! Drag-end gesture types.
//!
//! [`RawDragEvent`] mirrors the `{ source, destination }` payload emitted by
//! the drag-and-drop UI; [`DragEvent`] is its validated form.

use crate::model::bucket::{Bucket, UnknownBucket};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validated position inside one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragLocation {
    pub bucket: Bucket,
    pub index: usize,
}

impl DragLocation {
    pub fn new(bucket: Bucket, index: usize) -> Self {
        Self { bucket, index }
    }
}

/// Validated drag-end gesture. `destination = None` means the drop landed
/// outside every bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEvent {
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

impl DragEvent {
    /// Gesture dropped onto `destination`.
    pub fn between(source: DragLocation, destination: DragLocation) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    /// Gesture released outside any bucket.
    pub fn cancelled(source: DragLocation) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

/// Unvalidated location as sent by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDragLocation {
    pub droppable_id: String,
    pub index: i64,
}

/// Unvalidated drag-end payload as sent by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDragEvent {
    pub source: RawDragLocation,
    #[serde(default)]
    pub destination: Option<RawDragLocation>,
}

/// Reasons a [`RawDragEvent`] cannot be validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedDragEvent {
    UnknownBucket(UnknownBucket),
    NegativeIndex(i64),
}

impl Display for MalformedDragEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownBucket(err) => write!(f, "{err}"),
            Self::NegativeIndex(index) => write!(f, "drag index {index} is negative"),
        }
    }
}

impl Error for MalformedDragEvent {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownBucket(err) => Some(err),
            Self::NegativeIndex(_) => None,
        }
    }
}

impl From<UnknownBucket> for MalformedDragEvent {
    fn from(value: UnknownBucket) -> Self {
        Self::UnknownBucket(value)
    }
}

impl TryFrom<&RawDragLocation> for DragLocation {
    type Error = MalformedDragEvent;

    fn try_from(value: &RawDragLocation) -> Result<Self, Self::Error> {
        let bucket = value.droppable_id.parse::<Bucket>()?;
        let index =
            usize::try_from(value.index).map_err(|_| MalformedDragEvent::NegativeIndex(value.index))?;
        Ok(Self { bucket, index })
    }
}

impl TryFrom<&RawDragEvent> for DragEvent {
    type Error = MalformedDragEvent;

    fn try_from(value: &RawDragEvent) -> Result<Self, Self::Error> {
        let source = DragLocation::try_from(&value.source)?;
        let destination = value
            .destination
            .as_ref()
            .map(DragLocation::try_from)
            .transpose()?;
        Ok(Self {
            source,
            destination,
        })
    }
}

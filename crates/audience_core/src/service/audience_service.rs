//! Audience save/load use-case service.
//!
//! # Responsibility
//! - Normalize and validate audience metadata before persistence.
//! - Create on first save, update in place when the id already exists.
//! - Hand stored snapshots back to the selection-state store.
//!
//! # Invariants
//! - Names are trimmed and never blank.
//! - Tags are trimmed, non-empty and unique, in first-seen order.
//! - `home_page_url` is either absent or an `http(s)` URL.

use crate::model::audience::{Audience, AudienceId, AudienceSnapshot};
use crate::repo::audience_repo::{
    AudienceDraft, AudienceListQuery, AudienceRepository, RepoError,
};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static HOME_PAGE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+$").expect("valid home page url regex"));

/// Service error for audience use-cases.
#[derive(Debug)]
pub enum AudienceServiceError {
    /// Name is blank after trim.
    InvalidName,
    /// Home page URL is not an `http(s)` URL.
    InvalidHomePageUrl(String),
    AudienceNotFound(AudienceId),
    Repo(RepoError),
    /// Write succeeded but read-back did not find the row.
    InconsistentState(&'static str),
}

impl Display for AudienceServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName => write!(f, "audience name must not be blank"),
            Self::InvalidHomePageUrl(value) => write!(f, "invalid home page url: `{value}`"),
            Self::AudienceNotFound(id) => write!(f, "audience not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent audience state: {details}"),
        }
    }
}

impl Error for AudienceServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for AudienceServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::AudienceNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Input for [`AudienceService::save_audience`].
#[derive(Debug, Clone, PartialEq)]
pub struct SaveAudienceRequest {
    /// Existing id when re-saving; `None` creates a new audience.
    pub id: Option<AudienceId>,
    pub name: String,
    pub tags: Vec<String>,
    pub home_page_url: Option<String>,
    pub snapshot: AudienceSnapshot,
}

impl SaveAudienceRequest {
    /// New-audience request with no tags or home page.
    pub fn new(name: impl Into<String>, snapshot: AudienceSnapshot) -> Self {
        Self {
            id: None,
            name: name.into(),
            tags: Vec::new(),
            home_page_url: None,
            snapshot,
        }
    }
}

/// Audience service facade over repository implementations.
pub struct AudienceService<R: AudienceRepository> {
    repo: R,
}

impl<R: AudienceRepository> AudienceService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and persists an audience, returning the stored record.
    ///
    /// A request id that is not stored yet is created under that id.
    pub fn save_audience(
        &self,
        request: SaveAudienceRequest,
    ) -> Result<Audience, AudienceServiceError> {
        let draft = AudienceDraft {
            id: request.id.unwrap_or_else(Uuid::new_v4),
            name: normalize_name(&request.name)?,
            tags: normalize_tags(&request.tags),
            home_page_url: normalize_home_page_url(request.home_page_url.as_deref())?,
            snapshot: request.snapshot,
        };

        let mode = if self.repo.get_audience(draft.id)?.is_some() {
            self.repo.update_audience(&draft)?;
            "update"
        } else {
            self.repo.insert_audience(&draft)?;
            "create"
        };

        info!(
            "event=audience_save module=service status=ok mode={} core={} supportive={} tags={}",
            mode,
            draft.snapshot.core.len(),
            draft.snapshot.supportive.len(),
            draft.tags.len()
        );

        self.repo
            .get_audience(draft.id)?
            .ok_or(AudienceServiceError::InconsistentState(
                "saved audience not found in read-back",
            ))
    }

    pub fn get_audience(&self, id: AudienceId) -> Result<Option<Audience>, AudienceServiceError> {
        Ok(self.repo.get_audience(id)?)
    }

    /// Lists audiences, most recently updated first.
    pub fn list_audiences(
        &self,
        query: &AudienceListQuery,
    ) -> Result<Vec<Audience>, AudienceServiceError> {
        let mut query = query.clone();
        query.tag = query
            .tag
            .as_deref()
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string);
        Ok(self.repo.list_audiences(&query)?)
    }

    pub fn delete_audience(&self, id: AudienceId) -> Result<(), AudienceServiceError> {
        self.repo.delete_audience(id)?;
        info!("event=audience_delete module=service status=ok");
        Ok(())
    }

    /// Snapshot to restore into the selection store.
    ///
    /// `None` when the audience is unknown; a stored snapshot that no longer
    /// decodes comes back as empty buckets.
    pub fn load_snapshot(
        &self,
        id: AudienceId,
    ) -> Result<Option<AudienceSnapshot>, AudienceServiceError> {
        Ok(self.repo.get_audience(id)?.map(|audience| audience.snapshot))
    }
}

fn normalize_name(raw: &str) -> Result<String, AudienceServiceError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AudienceServiceError::InvalidName);
    }
    Ok(trimmed.to_string())
}

/// Trims tags, drops blanks and repeats; keeps first-seen order.
pub fn normalize_tags(raw: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(tag.to_string()))
        .map(str::to_string)
        .collect()
}

fn normalize_home_page_url(raw: Option<&str>) -> Result<Option<String>, AudienceServiceError> {
    let Some(trimmed) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };
    if !HOME_PAGE_URL_RE.is_match(trimmed) {
        return Err(AudienceServiceError::InvalidHomePageUrl(trimmed.to_string()));
    }
    Ok(Some(trimmed.to_string()))
}

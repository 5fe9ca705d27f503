//! Deterministic similarity scoring for topic search.
//!
//! # Responsibility
//! - Compute a raw relevance score for one topic against one query.
//! - Rank candidates and re-normalize the ranked set by position.
//!
//! # Invariants
//! - Raw bands never overlap: exact name > name substring > sub-item match.
//! - Ranked output is sorted by descending `similarity`, top result is `1.0`.
//! - Equal raw scores keep candidate (catalog) order.
//! - Non-matching topics are absent from the ranked output.

use crate::model::topic::Topic;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Tunable score bands and the normalization floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    /// Lower edge of the name-substring band.
    pub name_band_base: f64,
    /// Width of the name-substring band, scaled by `len(query) / len(name)`.
    pub name_band_span: f64,
    /// Lower edge of the sub-item band.
    pub sub_item_band_base: f64,
    /// Width of the sub-item band, scaled by `len(query) / len(sub_item)`.
    pub sub_item_band_span: f64,
    /// Similarity assigned to the last ranked result.
    pub floor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            name_band_base: 0.7,
            name_band_span: 0.3,
            sub_item_band_base: 0.5,
            sub_item_band_span: 0.2,
            floor: 0.2,
        }
    }
}

/// Rejected scoring configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringConfigError {
    /// A band leaves `[0, 1]` or has negative width.
    BandOutOfRange(&'static str),
    /// The sub-item band reaches into the name band.
    OverlappingBands,
    /// Floor must be in `[0, 1)` so ranks strictly decrease.
    FloorOutOfRange(f64),
}

impl Display for ScoringConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BandOutOfRange(band) => write!(f, "{band} band must lie within [0, 1]"),
            Self::OverlappingBands => write!(f, "sub-item band must end at or below name band"),
            Self::FloorOutOfRange(value) => write!(f, "floor {value} must lie within [0, 1)"),
        }
    }
}

impl Error for ScoringConfigError {}

impl ScoringConfig {
    /// Checks band ordering and ranges.
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        if !band_in_range(self.name_band_base, self.name_band_span) {
            return Err(ScoringConfigError::BandOutOfRange("name"));
        }
        if !band_in_range(self.sub_item_band_base, self.sub_item_band_span) {
            return Err(ScoringConfigError::BandOutOfRange("sub-item"));
        }
        if self.sub_item_band_base + self.sub_item_band_span > self.name_band_base {
            return Err(ScoringConfigError::OverlappingBands);
        }
        if !(0.0..1.0).contains(&self.floor) {
            return Err(ScoringConfigError::FloorOutOfRange(self.floor));
        }
        Ok(())
    }
}

fn band_in_range(base: f64, span: f64) -> bool {
    base >= 0.0 && span >= 0.0 && base + span <= 1.0
}

/// Which part of a topic matched the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Blank query; every topic matches equally.
    Browse,
    ExactName,
    NameSubstring,
    SubItem,
}

/// Raw per-topic score before rank normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawScore {
    pub kind: MatchKind,
    pub value: f64,
}

/// Query-to-topic similarity scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores one topic against `query`.
    ///
    /// Returns `None` when nothing in the topic matches. A blank query
    /// matches everything with a neutral score of `0.0`.
    pub fn score(&self, query: &str, topic: &Topic) -> Option<RawScore> {
        let needle = normalize_query(query);
        if needle.is_empty() {
            return Some(RawScore {
                kind: MatchKind::Browse,
                value: 0.0,
            });
        }
        self.score_normalized(&needle, topic)
    }

    /// Filters, orders and re-normalizes `candidates` against `query`.
    ///
    /// Returned topics are owned copies with `similarity` populated.
    pub fn rank<'a, I>(&self, query: &str, candidates: I) -> Vec<Topic>
    where
        I: IntoIterator<Item = &'a Topic>,
    {
        let needle = normalize_query(query);
        let mut scored: Vec<(f64, &Topic)> = candidates
            .into_iter()
            .filter_map(|topic| {
                if needle.is_empty() {
                    return Some((0.0, topic));
                }
                self.score_normalized(&needle, topic)
                    .map(|raw| (raw.value, topic))
            })
            .collect();

        // `sort_by` is stable, so equal scores keep candidate order.
        scored.sort_by(|left, right| right.0.total_cmp(&left.0));

        let total = scored.len();
        scored
            .into_iter()
            .enumerate()
            .map(|(rank, (_, topic))| {
                let mut ranked = topic.clone();
                ranked.similarity = Some(rank_similarity(rank, total, self.config.floor));
                ranked
            })
            .collect()
    }

    fn score_normalized(&self, needle: &str, topic: &Topic) -> Option<RawScore> {
        let name = topic.name.to_lowercase();
        if name == needle {
            return Some(RawScore {
                kind: MatchKind::ExactName,
                value: 1.0,
            });
        }

        let needle_len = needle.chars().count() as f64;
        if name.contains(needle) {
            let ratio = needle_len / name.chars().count() as f64;
            return Some(RawScore {
                kind: MatchKind::NameSubstring,
                value: self.config.name_band_base + ratio * self.config.name_band_span,
            });
        }

        topic.sub_items.iter().find_map(|item| {
            let item_name = item.name.to_lowercase();
            if !item_name.contains(needle) {
                return None;
            }
            let ratio = needle_len / item_name.chars().count() as f64;
            Some(RawScore {
                kind: MatchKind::SubItem,
                value: self.config.sub_item_band_base + ratio * self.config.sub_item_band_span,
            })
        })
    }
}

/// Linear rank-to-similarity mapping: first is `1.0`, last is `floor`.
pub fn rank_similarity(rank: usize, total: usize, floor: f64) -> f64 {
    if total <= 1 || rank == 0 {
        return 1.0;
    }
    let position = rank.min(total - 1) as f64 / (total - 1) as f64;
    1.0 - (1.0 - floor) * position
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{rank_similarity, MatchKind, Scorer, ScoringConfig, ScoringConfigError};
    use crate::model::topic::{SubItem, Topic};

    fn topic(id: &str, name: &str, sub_items: &[&str]) -> Topic {
        Topic::new(
            id,
            name,
            sub_items
                .iter()
                .enumerate()
                .map(|(index, item)| SubItem::new(format!("{id}c{index}"), *item, true))
                .collect(),
        )
    }

    #[test]
    fn exact_match_outranks_substring_which_outranks_sub_item() {
        let scorer = Scorer::default();
        let exact = scorer.score("Cloud", &topic("a", "cloud", &[])).unwrap();
        let name = scorer
            .score("cloud", &topic("b", "Cloud computing", &[]))
            .unwrap();
        let child = scorer
            .score("cloud", &topic("c", "Hosting", &["Cloud"]))
            .unwrap();

        assert_eq!(exact.kind, MatchKind::ExactName);
        assert_eq!(exact.value, 1.0);
        assert_eq!(name.kind, MatchKind::NameSubstring);
        assert_eq!(child.kind, MatchKind::SubItem);
        assert!(exact.value > name.value);
        assert!(name.value > child.value);
        assert!(name.value > 0.7 && name.value < 1.0);
        assert!((child.value - 0.7).abs() < 1e-9);
    }

    #[test]
    fn first_matching_sub_item_drives_the_score() {
        let scorer = Scorer::default();
        let raw = scorer
            .score("pay", &topic("a", "Ledgers", &["Payroll systems", "Pay"]))
            .unwrap();
        let expected = 0.5 + (3.0 / 15.0) * 0.2;
        assert!((raw.value - expected).abs() < 1e-9);
    }

    #[test]
    fn non_matching_topic_is_absent() {
        let scorer = Scorer::default();
        assert!(scorer.score("zzz", &topic("a", "Alpha", &["Beta"])).is_none());
        assert!(scorer
            .rank("zzz", [&topic("a", "Alpha", &["Beta"])])
            .is_empty());
    }

    #[test]
    fn rank_similarity_is_linear_between_one_and_floor() {
        assert_eq!(rank_similarity(0, 1, 0.2), 1.0);
        assert_eq!(rank_similarity(0, 5, 0.2), 1.0);
        assert!((rank_similarity(4, 5, 0.2) - 0.2).abs() < 1e-9);
        assert!((rank_similarity(2, 5, 0.2) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn validate_rejects_overlapping_bands() {
        let config = ScoringConfig {
            sub_item_band_base: 0.6,
            ..ScoringConfig::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            ScoringConfigError::OverlappingBands
        );
        assert!(ScoringConfig::default().validate().is_ok());
    }
}

//! Market-share split across core topics.
//!
//! # Invariants
//! - Output is parallel to the input and sums to exactly 100 when non-empty.
//! - Weights depend only on topic ids, so repeated calls agree.
//! - No process-wide state is read or written.

use crate::model::topic::Topic;

const MIN_WEIGHT: u64 = 5;
const MAX_WEIGHT: u64 = 95;
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Stable pseudo-random weight in `[5, 95]` seeded by `topic_id`.
pub fn topic_weight(topic_id: &str) -> u64 {
    let hash = topic_id.bytes().fold(FNV_OFFSET_BASIS, |acc, byte| {
        (acc ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    });
    MIN_WEIGHT + hash % (MAX_WEIGHT - MIN_WEIGHT + 1)
}

/// Splits 100 percent across `topics` proportionally to [`topic_weight`].
///
/// Uses largest-remainder rounding; ties go to the earlier topic.
pub fn market_shares(topics: &[Topic]) -> Vec<u32> {
    if topics.is_empty() {
        return Vec::new();
    }

    let weights: Vec<u64> = topics.iter().map(|topic| topic_weight(&topic.id)).collect();
    let total: u64 = weights.iter().sum();

    let mut shares: Vec<u64> = weights.iter().map(|weight| weight * 100 / total).collect();
    let mut remainders: Vec<(usize, u64)> = weights
        .iter()
        .enumerate()
        .map(|(index, weight)| (index, weight * 100 % total))
        .collect();
    remainders.sort_by(|left, right| right.1.cmp(&left.1).then(left.0.cmp(&right.0)));

    let assigned: u64 = shares.iter().sum();
    let leftover = (100 - assigned) as usize;
    for (index, _) in remainders.into_iter().take(leftover) {
        shares[index] += 1;
    }

    shares.into_iter().map(|share| share as u32).collect()
}

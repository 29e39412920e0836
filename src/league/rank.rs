//! Rank and percent-of-best lookups against a descending stat product table.

use serde::Serialize;

use crate::stats::formulas::round_two_decimals;

/// `1 + count(entries > target)`. Equal entries share a rank (competition
/// ranking); a target above the best entry ranks 1.
pub fn rank(sorted_desc: &[f64], target: f64) -> usize {
    sorted_desc.partition_point(|&value| value > target) + 1
}

/// `target / best` as a percentage with two decimals. An empty table counts
/// its best as 1.
pub fn percent_of_best(sorted_desc: &[f64], target: f64) -> f64 {
    let best = sorted_desc.first().copied().unwrap_or(1.0);
    round_two_decimals(target / best * 100.0)
}

/// Where one IV triple lands in one bracket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankRecord {
    pub rank: usize,
    /// CP at the capped level.
    pub cp: u32,
    /// Highest level at or under the bracket cap.
    pub level: f64,
    pub stat_product: f64,
    pub scp: u32,
    pub percent_of_best: f64,
}

/// Bracket name plus the rank record, absent when the triple has no legal
/// level in that bracket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BracketRank {
    pub bracket: String,
    pub record: Option<RankRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [f64; 6] = [900.0, 800.0, 800.0, 800.0, 500.0, 100.0];

    #[test]
    fn best_entry_ranks_first() {
        assert_eq!(rank(&TABLE, 900.0), 1);
    }

    #[test]
    fn value_above_best_clamps_to_first() {
        assert_eq!(rank(&TABLE, 10_000.0), 1);
    }

    #[test]
    fn ties_share_competition_rank() {
        assert_eq!(rank(&TABLE, 800.0), 2);
        assert_eq!(rank(&TABLE, 500.0), 5);
        assert_eq!(rank(&TABLE, 100.0), 6);
    }

    #[test]
    fn value_between_entries_ranks_after_larger() {
        assert_eq!(rank(&TABLE, 600.0), 5);
    }

    #[test]
    fn percent_of_best_rounds_to_two_decimals() {
        assert_eq!(percent_of_best(&TABLE, 900.0), 100.0);
        assert_eq!(percent_of_best(&TABLE, 800.0), 88.89);
        assert_eq!(percent_of_best(&[], 0.5), 50.0);
    }
}

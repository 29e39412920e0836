//! Highest legal level for an IV triple under a CP cap.
//!
//! CP is non-decreasing in the level index for fixed IVs (the multiplier table
//! strictly increases and every other factor is constant), so "CP <= cap" is a
//! prefix of the index range and a binary search finds its last element.
//! `tests/formula_tests.rs` asserts that monotonicity over the full table, and
//! `data::validate` re-checks it for every species loaded from disk.

use crate::stats::formulas::{power_score_at, stat_product, BaseStats, IvTriple};
use crate::stats::multiplier::{multiplier_at, MAX_INDEX};

/// CP limit of a bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerCap {
    Capped(u32),
    Uncapped,
}

impl PowerCap {
    pub fn from_option(cap: Option<u32>) -> Self {
        cap.map_or(Self::Uncapped, Self::Capped)
    }

    pub fn as_option(self) -> Option<u32> {
        match self {
            Self::Capped(cap) => Some(cap),
            Self::Uncapped => None,
        }
    }
}

/// Best level found for an IV triple within a bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelSolution {
    pub index: usize,
    pub cp: u32,
    pub stat_product: f64,
}

impl LevelSolution {
    fn at(base: BaseStats, ivs: IvTriple, index: usize, cp: u32) -> Self {
        Self {
            index,
            cp,
            stat_product: stat_product(base, ivs, multiplier_at(index)),
        }
    }
}

/// Returns the highest index `<= ceiling_index` whose CP fits under `cap`, or
/// `None` when even level 1 exceeds the cap. `None` means the triple cannot
/// enter the bracket; it is not an error.
pub fn solve_level(
    base: BaseStats,
    ivs: IvTriple,
    cap: PowerCap,
    ceiling_index: usize,
) -> Option<LevelSolution> {
    let ceiling = ceiling_index.min(MAX_INDEX);
    let ceiling_cp = power_score_at(base, ivs, ceiling);

    let PowerCap::Capped(limit) = cap else {
        return Some(LevelSolution::at(base, ivs, ceiling, ceiling_cp));
    };
    if ceiling_cp <= limit {
        return Some(LevelSolution::at(base, ivs, ceiling, ceiling_cp));
    }
    let floor_cp = power_score_at(base, ivs, 0);
    if floor_cp > limit {
        return None;
    }

    // Invariant: cp(low) <= limit < cp(high).
    let mut low = 0;
    let mut high = ceiling;
    while high - low > 1 {
        let mid = low + (high - low) / 2;
        if power_score_at(base, ivs, mid) <= limit {
            low = mid;
        } else {
            high = mid;
        }
    }
    let low_cp = power_score_at(base, ivs, low);
    Some(LevelSolution::at(base, ivs, low, low_cp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::multiplier::level_to_index;

    const AZUMARILL: BaseStats = BaseStats {
        attack: 112,
        defense: 152,
        stamina: 225,
    };

    fn linear_scan(base: BaseStats, ivs: IvTriple, cap: u32, ceiling: usize) -> Option<usize> {
        (0..=ceiling)
            .rev()
            .find(|&index| power_score_at(base, ivs, index) <= cap)
    }

    #[test]
    fn binary_search_agrees_with_linear_scan() {
        let ceiling = level_to_index(50.0);
        for ivs in IvTriple::all().step_by(37) {
            for cap in [500, 1500, 2500] {
                let expected = linear_scan(AZUMARILL, ivs, cap, ceiling);
                let solved = solve_level(AZUMARILL, ivs, PowerCap::Capped(cap), ceiling)
                    .map(|solution| solution.index);
                assert_eq!(solved, expected, "ivs={ivs:?} cap={cap}");
            }
        }
    }

    #[test]
    fn uncapped_returns_ceiling() {
        let ceiling = level_to_index(50.0);
        let solution = solve_level(AZUMARILL, IvTriple::perfect(), PowerCap::Uncapped, ceiling)
            .expect("uncapped always has a level");
        assert_eq!(solution.index, ceiling);
    }

    #[test]
    fn ceiling_is_clamped_to_table() {
        let solution = solve_level(AZUMARILL, IvTriple::perfect(), PowerCap::Uncapped, 10_000)
            .expect("uncapped always has a level");
        assert_eq!(solution.index, MAX_INDEX);
    }

    #[test]
    fn solution_cp_respects_cap() {
        let solution = solve_level(
            AZUMARILL,
            IvTriple::perfect(),
            PowerCap::Capped(1500),
            level_to_index(50.0),
        )
        .expect("azumarill fits under 1500");
        assert!(solution.cp <= 1500);
        assert!(power_score_at(AZUMARILL, IvTriple::perfect(), solution.index + 1) > 1500);
    }
}

//! Level multiplier table: one entry per half-level step from level 1.0 to 55.0.
//!
//! Every formula in [crate::stats::formulas] scales base stats by the value at a
//! level index, so the table is the single source of truth for level progression.
//! Values increase strictly with the index; the level solver relies on that.

/// Lowest reachable level.
pub const MIN_LEVEL: f64 = 1.0;
/// Highest level the table covers.
pub const MAX_LEVEL: f64 = 55.0;

const LEVEL_MULTIPLIERS: [f64; 109] = [
    0.094,
    0.1351374318,
    0.16639787,
    0.192650919,
    0.21573247,
    0.2365726613,
    0.25572005,
    0.2735303812,
    0.29024988,
    0.3060573775,
    0.3210876,
    0.3354450362,
    0.34921268,
    0.3624577511,
    0.3752356,
    0.387592416,
    0.39956728,
    0.4111935514,
    0.42250001,
    0.4329264091,
    0.44310755,
    0.4530599591,
    0.46279839,
    0.4723360832,
    0.48168495,
    0.4908558003,
    0.49985844,
    0.508701765,
    0.51739395,
    0.5259425113,
    0.53435433,
    0.5426357375,
    0.55079269,
    0.5588305862,
    0.56675452,
    0.5745691333,
    0.58227891,
    0.5898879072,
    0.59740001,
    0.6048236651,
    0.61215729,
    0.6194041216,
    0.62656713,
    0.6336491432,
    0.64065295,
    0.6475809666,
    0.65443563,
    0.6612192524,
    0.667934,
    0.6745818959,
    0.68116492,
    0.6876849038,
    0.69414365,
    0.70054287,
    0.70688421,
    0.7131691091,
    0.71939909,
    0.7255756136,
    0.7317,
    0.7347410093,
    0.73776948,
    0.7407855938,
    0.74378943,
    0.7467812109,
    0.74976104,
    0.7527290867,
    0.75568551,
    0.7586303683,
    0.76156384,
    0.7644860647,
    0.76739717,
    0.7702972656,
    0.7731865,
    0.7760649616,
    0.77893275,
    0.7817900548,
    0.78463697,
    0.7874736075,
    0.79030001,
    0.792803968,
    0.79530001,
    0.797800015,
    0.8003,
    0.802799995,
    0.8053,
    0.8078,
    0.81029999,
    0.812799985,
    0.81529999,
    0.81779999,
    0.82029999,
    0.82279999,
    0.82529999,
    0.82779999,
    0.83029999,
    0.83279999,
    0.83529999,
    0.83779999,
    0.84029999,
    0.84279999,
    0.84529999,
    0.84779999,
    0.85029999,
    0.85279999,
    0.85529999,
    0.85779999,
    0.86029999,
    0.86279999,
    0.86529999,
];

/// Number of entries in the table.
pub const MULTIPLIER_COUNT: usize = LEVEL_MULTIPLIERS.len();

/// Highest valid index.
pub const MAX_INDEX: usize = MULTIPLIER_COUNT - 1;

/// Multiplier at `index`. Callers clamp against [MAX_INDEX]; out-of-range panics.
#[inline]
pub fn multiplier_at(index: usize) -> f64 {
    LEVEL_MULTIPLIERS[index]
}

/// Converts a level into its table index, rounding `(level - 1) * 2` to the nearest step.
#[inline]
pub fn level_to_index(level: f64) -> usize {
    ((level - MIN_LEVEL) * 2.0).round().max(0.0) as usize
}

#[inline]
pub fn index_to_level(index: usize) -> f64 {
    MIN_LEVEL + index as f64 / 2.0
}

/// Clamps an arbitrary level to the closest index the table covers.
pub fn clamped_index(level: f64) -> usize {
    level_to_index(level).min(MAX_INDEX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_spans_level_one_to_fifty_five() {
        assert_eq!(MULTIPLIER_COUNT, 109);
        assert_eq!(index_to_level(0), MIN_LEVEL);
        assert_eq!(index_to_level(MAX_INDEX), MAX_LEVEL);
    }

    #[test]
    fn multipliers_strictly_increase() {
        for index in 1..MULTIPLIER_COUNT {
            assert!(
                multiplier_at(index) > multiplier_at(index - 1),
                "multiplier at index {index} does not increase"
            );
        }
    }

    #[test]
    fn level_to_index_rounds_to_nearest_step() {
        assert_eq!(level_to_index(1.0), 0);
        assert_eq!(level_to_index(11.0), 20);
        assert_eq!(level_to_index(11.26), 21);
        assert_eq!(level_to_index(11.24), 20);
    }

    #[test]
    fn clamped_index_never_exceeds_table() {
        assert_eq!(clamped_index(80.0), MAX_INDEX);
        assert_eq!(clamped_index(0.0), 0);
    }
}

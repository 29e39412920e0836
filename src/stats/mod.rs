pub mod formulas;
pub mod multiplier;
pub mod solver;

pub use formulas::{
    health, power_score, power_score_at, scp, stat_product, BaseStats, IvTriple, IV_SPACE, MAX_IV,
    MIN_STAT_VALUE,
};
pub use multiplier::{
    clamped_index, index_to_level, level_to_index, multiplier_at, MAX_INDEX, MAX_LEVEL, MIN_LEVEL,
    MULTIPLIER_COUNT,
};
pub use solver::{solve_level, LevelSolution, PowerCap};

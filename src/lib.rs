//! IV inference and PvP bracket ranking.
//!
//! Observed CP/HP/stardust hints are expanded into every consistent
//! (IV triple, level) hypothesis, and each hypothesis is ranked by stat
//! product against per-species league tables built over all 4096 IV triples.

pub mod cli;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod inference;
pub mod league;
pub mod parallel;
pub mod stats;

pub use engine::Engine;
pub use error::{ConfigError, DataError, EngineError, InputError};

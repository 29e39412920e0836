//! Error types. The engine itself fails only on unknown species; everything
//! else here belongs to input parsing, data loading and configuration.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("species {0} not found")]
    SpeciesNotFound(u32),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{component} IV {value} is outside 0..=15")]
    IvOutOfRange { component: &'static str, value: u8 },
    #[error("no power-up tier costs {0} stardust")]
    UnknownInvestmentTier(u32),
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("bracket '{name}': {reason}")]
    InvalidBracket { name: String, reason: String },
    #[error("no brackets configured")]
    NoBrackets,
}

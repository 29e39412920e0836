//! Engine configuration, read from YAML. Every field has a default, so a
//! missing file or an empty document yields the built-in setup.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::DEFAULT_SPECIES_PATH;
use crate::error::ConfigError;
use crate::league::{default_brackets, Bracket};
use crate::parallel::WorkerPool;

pub const CONFIG_ENV: &str = "IVRANK_CONFIG";
pub const DATA_ENV: &str = "IVRANK_DATA";
pub const DEFAULT_CONFIG_PATH: &str = "ivrank.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub data_path: PathBuf,
    /// Table build threads; 0 uses every core.
    pub workers: usize,
    pub brackets: Vec<Bracket>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_SPECIES_PATH),
            workers: 0,
            brackets: default_brackets(),
        }
    }
}

impl EngineConfig {
    pub fn from_yaml(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: EngineConfig = if raw.trim().is_empty() {
            EngineConfig::default()
        } else {
            serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&raw, path)
    }

    /// Resolves the config the way the CLI does: an explicit path must exist;
    /// otherwise `IVRANK_CONFIG`, then `ivrank.yaml` if present, then defaults.
    /// `IVRANK_DATA` overrides `data_path` in every case.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None => match env::var_os(CONFIG_ENV) {
                Some(path) => Self::load(PathBuf::from(path))?,
                None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH)?,
                None => Self::default(),
            },
        };
        if let Some(data_path) = env::var_os(DATA_ENV) {
            config.data_path = PathBuf::from(data_path);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.brackets.is_empty() {
            return Err(ConfigError::NoBrackets);
        }
        for (index, bracket) in self.brackets.iter().enumerate() {
            if let Err(reason) = bracket.validate() {
                return Err(ConfigError::InvalidBracket {
                    name: bracket.name.clone(),
                    reason,
                });
            }
            if self.brackets[..index].iter().any(|b| b.name == bracket.name) {
                return Err(ConfigError::InvalidBracket {
                    name: bracket.name.clone(),
                    reason: "duplicate name".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn pool(&self) -> WorkerPool {
        WorkerPool::with_workers(self.workers)
    }
}

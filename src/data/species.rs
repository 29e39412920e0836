//! Species data: base stats and evolution families, loaded from data/species.json.
//! The engine only reads these records; it never mutates them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::stats::BaseStats;

pub const DEFAULT_SPECIES_PATH: &str = "data/species.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub id: u32,
    pub name: String,
    pub attack: u32,
    pub defense: u32,
    pub stamina: u32,
}

impl Species {
    pub fn new(id: u32, name: impl Into<String>, base: BaseStats) -> Self {
        Self {
            id,
            name: name.into(),
            attack: base.attack,
            defense: base.defense,
            stamina: base.stamina,
        }
    }

    pub fn base_stats(&self) -> BaseStats {
        BaseStats {
            attack: self.attack,
            defense: self.defense,
            stamina: self.stamina,
        }
    }
}

/// On-disk layout: species records plus families as ordered id lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeciesFile {
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub source_note: Option<String>,
    pub species: Vec<Species>,
    #[serde(default)]
    pub families: Vec<Vec<u32>>,
}

pub fn load_species_file(path: impl AsRef<Path>) -> Result<SpeciesFile, DataError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_species_file(&raw).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_species_file(raw: &str) -> Result<SpeciesFile, serde_json::Error> {
    serde_json::from_str(raw)
}

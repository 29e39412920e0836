//! Startup-loaded species registry.
//! Load once, share via Arc with the engine so lookups never touch disk.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use crate::data::provider::{EvolutionProvider, SpeciesProvider};
use crate::data::species::{load_species_file, Species, SpeciesFile};
use crate::error::DataError;

/// Normalize a name for lookup: alphanumeric lowercase only.
fn normalize_lookup_key(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Read-only species and family indexes.
#[derive(Debug, Default)]
pub struct SpeciesRegistry {
    pub data_version: Option<String>,
    /// Species in file order.
    species: Vec<Species>,
    by_id: HashMap<u32, usize>,
    by_name: HashMap<String, usize>,
    families: Vec<Vec<u32>>,
    family_by_member: HashMap<u32, usize>,
}

impl SpeciesRegistry {
    pub fn load(path: impl AsRef<Path>) -> Result<Arc<SpeciesRegistry>, DataError> {
        let file = load_species_file(path)?;
        Ok(Arc::new(Self::from_file(file)))
    }

    /// Builds indexes. Later duplicates of an id are ignored; family members
    /// missing from the species list are dropped with a warning.
    pub fn from_file(file: SpeciesFile) -> Self {
        let mut registry = SpeciesRegistry {
            data_version: file.data_version,
            ..SpeciesRegistry::default()
        };
        for species in file.species {
            if registry.by_id.contains_key(&species.id) {
                warn!(id = species.id, "duplicate species id ignored");
                continue;
            }
            let position = registry.species.len();
            registry.by_id.insert(species.id, position);
            registry
                .by_name
                .entry(normalize_lookup_key(&species.name))
                .or_insert(position);
            registry.species.push(species);
        }
        for family in file.families {
            let members: Vec<u32> = family
                .into_iter()
                .filter(|id| {
                    let known = registry.by_id.contains_key(id);
                    if !known {
                        warn!(id, "family member without species record dropped");
                    }
                    known
                })
                .collect();
            if members.is_empty() {
                continue;
            }
            let family_index = registry.families.len();
            for &id in &members {
                registry.family_by_member.entry(id).or_insert(family_index);
            }
            registry.families.push(members);
        }
        registry
    }

    pub fn species(&self) -> &[Species] {
        &self.species
    }

    pub fn families(&self) -> &[Vec<u32>] {
        &self.families
    }

    pub fn get(&self, id: u32) -> Option<&Species> {
        let position = *self.by_id.get(&id)?;
        self.species.get(position)
    }

    /// Resolve by numeric id or by name (case, spaces and punctuation ignored).
    pub fn resolve(&self, name_or_id: &str) -> Option<&Species> {
        if let Ok(id) = name_or_id.trim().parse::<u32>() {
            return self.get(id);
        }
        self.by_name
            .get(&normalize_lookup_key(name_or_id))
            .map(|&position| &self.species[position])
    }
}

impl SpeciesProvider for SpeciesRegistry {
    fn get_by_id(&self, id: u32) -> Option<Species> {
        self.get(id).cloned()
    }

    fn all(&self) -> Vec<Species> {
        self.species.clone()
    }
}

impl EvolutionProvider for SpeciesRegistry {
    fn family_of(&self, species_id: u32) -> Option<Vec<Species>> {
        let family = &self.families[*self.family_by_member.get(&species_id)?];
        let members = family.iter().filter_map(|id| self.get(*id).cloned());
        Some(members.collect())
    }
}

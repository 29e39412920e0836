//! Seams through which the engine reads static species data.

use crate::data::species::Species;

pub trait SpeciesProvider: Send + Sync {
    fn get_by_id(&self, id: u32) -> Option<Species>;
    fn all(&self) -> Vec<Species>;
}

pub trait EvolutionProvider: Send + Sync {
    /// Ordered family members, including the species itself and boosted forms.
    fn family_of(&self, species_id: u32) -> Option<Vec<Species>>;
}

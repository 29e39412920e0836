pub mod provider;
pub mod registry;
pub mod species;
pub mod validate;

pub use provider::{EvolutionProvider, SpeciesProvider};
pub use registry::SpeciesRegistry;
pub use species::{load_species_file, Species, SpeciesFile, DEFAULT_SPECIES_PATH};
pub use validate::{validate_species_dataset, validate_species_file, ValidationReport};

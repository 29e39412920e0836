use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use crate::data::species::{load_species_file, Species, SpeciesFile};
use crate::error::DataError;
use crate::stats::{power_score_at, IvTriple, MULTIPLIER_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == ValidationSeverity::Error)
    }
}

pub fn validate_species_dataset(path: impl AsRef<Path>) -> Result<ValidationReport, DataError> {
    let file = load_species_file(path)?;
    Ok(validate_species_file(&file))
}

pub fn validate_species_file(file: &SpeciesFile) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen_ids = HashSet::new();

    for (index, species) in file.species.iter().enumerate() {
        let context = format!("species[{index}] id={}", species.id);
        if !seen_ids.insert(species.id) {
            report.push(
                ValidationSeverity::Error,
                context.clone(),
                format!("duplicate id {}", species.id),
            );
        }
        if species.name.trim().is_empty() {
            report.push(
                ValidationSeverity::Error,
                context.clone(),
                "missing non-empty 'name'",
            );
        }
        for (stat, value) in [
            ("attack", species.attack),
            ("defense", species.defense),
            ("stamina", species.stamina),
        ] {
            if value == 0 {
                report.push(
                    ValidationSeverity::Error,
                    format!("{context}.{stat}"),
                    "base stat must be positive",
                );
            }
        }
        if let Some(index) = first_cp_decrease(species) {
            report.push(
                ValidationSeverity::Error,
                context,
                format!("CP decreases at level index {index}; level solver would be unreliable"),
            );
        }
    }

    let mut family_of: HashMap<u32, usize> = HashMap::new();
    for (family_index, family) in file.families.iter().enumerate() {
        let context = format!("families[{family_index}]");
        if family.is_empty() {
            report.push(ValidationSeverity::Warning, context.clone(), "empty family");
        }
        for id in family {
            if !seen_ids.contains(id) {
                report.push(
                    ValidationSeverity::Error,
                    context.clone(),
                    format!("member {id} has no species record"),
                );
            }
            if let Some(previous) = family_of.insert(*id, family_index) {
                if previous != family_index {
                    report.push(
                        ValidationSeverity::Warning,
                        context.clone(),
                        format!("member {id} also listed in families[{previous}]; first wins"),
                    );
                }
            }
        }
    }

    let orphans = file
        .species
        .iter()
        .filter(|species| !family_of.contains_key(&species.id))
        .count();
    if orphans > 0 {
        report.push(
            ValidationSeverity::Info,
            "families",
            format!("{orphans} species without a family rank as singletons"),
        );
    }

    report
}

/// First level index where CP drops below the previous one for the weakest or
/// strongest IVs. Zero base stats are reported separately and skipped here.
fn first_cp_decrease(species: &Species) -> Option<usize> {
    if species.attack == 0 || species.defense == 0 || species.stamina == 0 {
        return None;
    }
    let base = species.base_stats();
    [IvTriple::default(), IvTriple::perfect()]
        .into_iter()
        .find_map(|ivs| {
            (1..MULTIPLIER_COUNT).find(|&index| {
                power_score_at(base, ivs, index) < power_score_at(base, ivs, index - 1)
            })
        })
}

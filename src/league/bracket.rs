//! Competitive brackets: a CP cap plus the highest level a build may reach.

use serde::{Deserialize, Serialize};

use crate::stats::{level_to_index, PowerCap, MAX_LEVEL, MIN_LEVEL};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub name: String,
    /// `None` means uncapped.
    #[serde(default)]
    pub cap: Option<u32>,
    pub max_level: f64,
}

impl Bracket {
    pub fn new(name: impl Into<String>, cap: PowerCap, max_level: f64) -> Self {
        Self {
            name: name.into(),
            cap: cap.as_option(),
            max_level,
        }
    }

    pub fn power_cap(&self) -> PowerCap {
        PowerCap::from_option(self.cap)
    }

    pub fn ceiling_index(&self) -> usize {
        level_to_index(self.max_level)
    }

    pub fn is_uncapped(&self) -> bool {
        self.cap.is_none()
    }

    /// Checks that the ceiling is a half-level step inside the multiplier table.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&self.max_level) {
            return Err(format!(
                "max_level {} outside {MIN_LEVEL}..={MAX_LEVEL}",
                self.max_level
            ));
        }
        if (self.max_level * 2.0).fract() != 0.0 {
            return Err(format!("max_level {} is not a half-level step", self.max_level));
        }
        if self.cap == Some(0) {
            return Err("cap must be positive".to_string());
        }
        Ok(())
    }
}

/// Little, Great, Ultra and Master, plus Master with the one-half-level
/// premium ceiling.
pub fn default_brackets() -> Vec<Bracket> {
    vec![
        Bracket::new("little", PowerCap::Capped(500), 50.0),
        Bracket::new("great", PowerCap::Capped(1500), 50.0),
        Bracket::new("ultra", PowerCap::Capped(2500), 50.0),
        Bracket::new("master", PowerCap::Uncapped, 50.0),
        Bracket::new("master-premium", PowerCap::Uncapped, 50.5),
    ]
}

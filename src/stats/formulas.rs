//! Power score (CP), health (HP), stat product and SCP formulas.
//!
//! All functions are pure. Flooring happens exactly where the game floors:
//! CP floors once after the square roots, HP floors before it enters the stat
//! product. Changing either point shifts ranks, so tests pin golden values.

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::stats::multiplier::multiplier_at;

/// Floor applied to both CP and HP.
pub const MIN_STAT_VALUE: u32 = 10;

/// Highest value any single IV component can take.
pub const MAX_IV: u8 = 15;

/// Number of distinct IV triples per species.
pub const IV_SPACE: usize = 16 * 16 * 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseStats {
    pub attack: u32,
    pub defense: u32,
    pub stamina: u32,
}

/// Hidden per-creature individual values, each in `0..=15`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IvTriple {
    pub attack: u8,
    pub defense: u8,
    pub stamina: u8,
}

impl IvTriple {
    pub fn new(attack: u8, defense: u8, stamina: u8) -> Result<Self, InputError> {
        for (component, value) in [
            ("attack", attack),
            ("defense", defense),
            ("stamina", stamina),
        ] {
            if value > MAX_IV {
                return Err(InputError::IvOutOfRange { component, value });
            }
        }
        Ok(Self {
            attack,
            defense,
            stamina,
        })
    }

    pub const fn perfect() -> Self {
        Self {
            attack: MAX_IV,
            defense: MAX_IV,
            stamina: MAX_IV,
        }
    }

    /// Every triple in attack-major order.
    pub fn all() -> impl Iterator<Item = IvTriple> {
        (0..=MAX_IV).flat_map(|attack| {
            (0..=MAX_IV).flat_map(move |defense| {
                (0..=MAX_IV).map(move |stamina| IvTriple {
                    attack,
                    defense,
                    stamina,
                })
            })
        })
    }

    pub fn sum(self) -> u32 {
        u32::from(self.attack) + u32::from(self.defense) + u32::from(self.stamina)
    }

    /// Sum over 45, as a percentage with two decimals.
    pub fn percent(self) -> f64 {
        round_two_decimals(f64::from(self.sum()) / 45.0 * 100.0)
    }
}

/// Base stats plus IVs, scaled by a level multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScaledStats {
    attack: f64,
    defense: f64,
    stamina: f64,
}

fn scaled(base: BaseStats, ivs: IvTriple, multiplier: f64) -> ScaledStats {
    ScaledStats {
        attack: f64::from(base.attack + u32::from(ivs.attack)) * multiplier,
        defense: f64::from(base.defense + u32::from(ivs.defense)) * multiplier,
        stamina: f64::from(base.stamina + u32::from(ivs.stamina)) * multiplier,
    }
}

/// CP = floor(atk * sqrt(def) * sqrt(sta) / 10), never below 10.
pub fn power_score(base: BaseStats, ivs: IvTriple, multiplier: f64) -> u32 {
    let s = scaled(base, ivs, multiplier);
    let raw = (s.attack * s.defense.sqrt() * s.stamina.sqrt() / 10.0).floor();
    (raw as u32).max(MIN_STAT_VALUE)
}

/// HP = floor(sta), never below 10.
pub fn health(base: BaseStats, ivs: IvTriple, multiplier: f64) -> u32 {
    let s = scaled(base, ivs, multiplier);
    (s.stamina.floor() as u32).max(MIN_STAT_VALUE)
}

/// atk * def * HP, with HP already floored.
pub fn stat_product(base: BaseStats, ivs: IvTriple, multiplier: f64) -> f64 {
    let s = scaled(base, ivs, multiplier);
    let hp = (s.stamina.floor() as u32).max(MIN_STAT_VALUE);
    s.attack * s.defense * f64::from(hp)
}

/// SCP = floor(stat_product^(2/3) / 10).
pub fn scp(stat_product: f64) -> u32 {
    (stat_product.powf(2.0 / 3.0) / 10.0).floor() as u32
}

/// CP at a level-table index.
#[inline]
pub fn power_score_at(base: BaseStats, ivs: IvTriple, index: usize) -> u32 {
    power_score(base, ivs, multiplier_at(index))
}

pub(crate) fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

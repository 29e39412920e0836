//! Observed signals for one query. Every optional field is an explicit
//! option or sum type so the enumerator matches on them exhaustively.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::stats::{clamped_index, MAX_INDEX, MAX_IV};

/// IV floor when the creature is guaranteed high IVs (raids, research rewards).
pub const HIGH_IV_FLOOR: u8 = 12;
/// IV floor after a reset (purified or traded-in creatures never roll 0).
pub const RESET_IV_FLOOR: u8 = 1;

/// Stardust cost of one power-up paired with the first level charged that cost.
const POWER_UP_COSTS: [(u32, f64); 25] = [
    (200, 1.0),
    (400, 3.0),
    (600, 5.0),
    (800, 7.0),
    (1000, 9.0),
    (1300, 11.0),
    (1600, 13.0),
    (1900, 15.0),
    (2200, 17.0),
    (2500, 19.0),
    (3000, 21.0),
    (3500, 23.0),
    (4000, 25.0),
    (4500, 27.0),
    (5000, 29.0),
    (6000, 31.0),
    (7000, 33.0),
    (8000, 35.0),
    (9000, 37.0),
    (10000, 39.0),
    (11000, 41.0),
    (12000, 43.0),
    (13000, 45.0),
    (14000, 47.0),
    (15000, 49.0),
];

/// Width of the level window an investment hint opens, in half-level steps.
const INVESTMENT_WINDOW_STEPS: usize = 2;

/// Investment-tier (stardust) hint narrowing the level to a one-level window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvestmentTier {
    pub cost: u32,
    pub first_level: f64,
}

impl InvestmentTier {
    pub fn from_cost(cost: u32) -> Result<Self, InputError> {
        POWER_UP_COSTS
            .iter()
            .find(|(tier_cost, _)| *tier_cost == cost)
            .map(|&(cost, first_level)| Self { cost, first_level })
            .ok_or(InputError::UnknownInvestmentTier(cost))
    }

    /// Level indices covered by this tier, clamped to the multiplier table.
    pub fn level_window(&self) -> RangeInclusive<usize> {
        let start = clamped_index(self.first_level);
        start..=(start + INVESTMENT_WINDOW_STEPS).min(MAX_INDEX)
    }

    pub fn costs() -> impl Iterator<Item = u32> {
        POWER_UP_COSTS.iter().map(|(cost, _)| *cost)
    }
}

/// One IV component: observed directly, or open to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IvComponent {
    Known(u8),
    #[default]
    Open,
}

impl IvComponent {
    pub fn known(component: &'static str, value: u8) -> Result<Self, InputError> {
        if value > MAX_IV {
            return Err(InputError::IvOutOfRange { component, value });
        }
        Ok(Self::Known(value))
    }

    /// Values to explore. A known value above 15 matches nothing.
    pub fn range(self, floor: u8) -> RangeInclusive<u8> {
        match self {
            Self::Known(value) if value <= MAX_IV => value..=value,
            #[allow(clippy::reversed_empty_ranges)]
            Self::Known(_) => 1..=0,
            Self::Open => floor.min(MAX_IV)..=MAX_IV,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ObservedInput {
    pub cp: Option<u32>,
    pub hp: Option<u32>,
    pub investment: Option<InvestmentTier>,
    pub attack: IvComponent,
    pub defense: IvComponent,
    pub stamina: IvComponent,
    pub high_iv_guarantee: bool,
    pub reset: bool,
}

impl ObservedInput {
    pub fn with_cp(mut self, cp: u32) -> Self {
        self.cp = Some(cp);
        self
    }

    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = Some(hp);
        self
    }

    pub fn with_investment(mut self, tier: InvestmentTier) -> Self {
        self.investment = Some(tier);
        self
    }

    /// Lowest value an open IV component may take. Both flags set: the higher floor wins.
    pub fn iv_floor(&self) -> u8 {
        match (self.high_iv_guarantee, self.reset) {
            (true, _) => HIGH_IV_FLOOR,
            (false, true) => RESET_IV_FLOOR,
            (false, false) => 0,
        }
    }

    /// Level indices to explore: the investment window, or the whole table.
    pub fn level_window(&self) -> RangeInclusive<usize> {
        match self.investment {
            Some(tier) => tier.level_window(),
            None => 0..=MAX_INDEX,
        }
    }

    /// Whether a computed CP/HP pair agrees with every observed value.
    pub fn matches(&self, cp: u32, hp: u32) -> bool {
        let cp_matches = self.cp.map_or(true, |observed| observed == cp);
        let hp_matches = self.hp.map_or(true, |observed| observed == hp);
        cp_matches && hp_matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{index_to_level, level_to_index};

    #[test]
    fn investment_tier_opens_two_step_window() {
        let tier = InvestmentTier::from_cost(2500).expect("known cost");
        let window = tier.level_window();
        assert_eq!(index_to_level(*window.start()), 19.0);
        assert_eq!(index_to_level(*window.end()), 20.0);
    }

    #[test]
    fn last_half_level_of_a_band_is_outside_its_window() {
        let tier = InvestmentTier::from_cost(1300).expect("known cost");
        let window = tier.level_window();
        assert!(!window.contains(&level_to_index(12.5)));
        let next = InvestmentTier::from_cost(1600).expect("known cost");
        assert_eq!(index_to_level(*next.level_window().start()), 13.0);
        for cost in InvestmentTier::costs() {
            let tier = InvestmentTier::from_cost(cost).expect("listed cost");
            let last_half_level = level_to_index(tier.first_level + 1.5);
            assert!(!tier.level_window().contains(&last_half_level));
        }
    }

    #[test]
    fn unknown_investment_cost_is_rejected() {
        assert_eq!(
            InvestmentTier::from_cost(123),
            Err(InputError::UnknownInvestmentTier(123))
        );
    }

    #[test]
    fn floors_follow_flags_and_higher_wins() {
        let mut input = ObservedInput::default();
        assert_eq!(input.iv_floor(), 0);
        input.reset = true;
        assert_eq!(input.iv_floor(), RESET_IV_FLOOR);
        input.high_iv_guarantee = true;
        assert_eq!(input.iv_floor(), HIGH_IV_FLOOR);
    }

    #[test]
    fn component_ranges() {
        assert_eq!(IvComponent::Known(7).range(12), 7..=7);
        assert_eq!(IvComponent::Open.range(12), 12..=15);
        assert_eq!(IvComponent::Known(40).range(0).count(), 0);
        assert!(IvComponent::known("attack", 16).is_err());
    }

    #[test]
    fn default_window_covers_whole_table() {
        assert_eq!(ObservedInput::default().level_window(), 0..=MAX_INDEX);
    }

    #[test]
    fn matches_requires_exact_values() {
        let input = ObservedInput::default().with_cp(1000).with_hp(120);
        assert!(input.matches(1000, 120));
        assert!(!input.matches(1001, 120));
        assert!(!input.matches(1000, 119));
        assert!(ObservedInput::default().matches(1, 1));
    }
}

//! Ranks one fixed IV triple at every stage of an evolutionary family.

use serde::Serialize;

use crate::data::Species;
use crate::league::{LeagueTables, RankRecord};
use crate::stats::{power_score_at, solve_level, IvTriple};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvolutionBracketRank {
    pub bracket: String,
    pub record: Option<RankRecord>,
    /// CP of the selected (un-evolved) species at this member's qualifying level.
    pub pre_evolution_cp: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvolutionRankEntry {
    pub species_id: u32,
    pub name: String,
    pub ranks: Vec<EvolutionBracketRank>,
}

/// Ranks `ivs` on `member` using that member's tables. The pre-evolution CP
/// substitutes `selected`'s base stats into the CP formula at the level the
/// member qualifies at.
pub fn rank_family_member(
    member: &Species,
    member_tables: &LeagueTables,
    selected: &Species,
    ivs: IvTriple,
) -> EvolutionRankEntry {
    let member_base = member.base_stats();
    let selected_base = selected.base_stats();
    let ranks = member_tables
        .tables()
        .iter()
        .map(|table| {
            let solution = solve_level(
                member_base,
                ivs,
                table.bracket.power_cap(),
                table.bracket.ceiling_index(),
            );
            let (record, pre_evolution_cp) = match solution {
                Some(solution) => (
                    Some(table.record(solution)),
                    Some(power_score_at(selected_base, ivs, solution.index)),
                ),
                None => (None, None),
            };
            EvolutionBracketRank {
                bracket: table.bracket.name.clone(),
                record,
                pre_evolution_cp,
            }
        })
        .collect();
    EvolutionRankEntry {
        species_id: member.id,
        name: member.name.clone(),
        ranks,
    }
}

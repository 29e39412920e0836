//! League tables: every IV triple's best stat product under a bracket, sorted
//! from best to worst.

use rayon::prelude::*;
use serde::Serialize;

use crate::league::bracket::Bracket;
use crate::league::rank::{percent_of_best, rank, BracketRank, RankRecord};
use crate::stats::{
    index_to_level, scp, solve_level, BaseStats, IvTriple, LevelSolution, IV_SPACE,
};

/// One feasible build in a bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeagueEntry {
    pub ivs: IvTriple,
    pub level: f64,
    pub cp: u32,
    pub stat_product: f64,
}

/// Table for one species in one bracket. `stat_products[i]` belongs to `entries[i]`.
#[derive(Debug, Clone)]
pub struct LeagueTable {
    pub bracket: Bracket,
    entries: Vec<LeagueEntry>,
    stat_products: Vec<f64>,
}

impl LeagueTable {
    fn from_entries(bracket: Bracket, mut entries: Vec<LeagueEntry>) -> Self {
        // Stable sort: equal stat products keep IV enumeration order.
        entries.sort_by(|left, right| right.stat_product.total_cmp(&left.stat_product));
        let stat_products = entries.iter().map(|entry| entry.stat_product).collect();
        Self {
            bracket,
            entries,
            stat_products,
        }
    }

    pub fn stat_products(&self) -> &[f64] {
        &self.stat_products
    }

    pub fn entries(&self) -> &[LeagueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rank record for an already-solved level.
    pub fn record(&self, solution: LevelSolution) -> RankRecord {
        RankRecord {
            rank: rank(&self.stat_products, solution.stat_product),
            cp: solution.cp,
            level: index_to_level(solution.index),
            stat_product: solution.stat_product,
            scp: scp(solution.stat_product),
            percent_of_best: percent_of_best(&self.stat_products, solution.stat_product),
        }
    }

    /// Solves the level for `ivs` and ranks it, `None` when infeasible.
    pub fn record_for(&self, base: BaseStats, ivs: IvTriple) -> Option<RankRecord> {
        solve_level(
            base,
            ivs,
            self.bracket.power_cap(),
            self.bracket.ceiling_index(),
        )
        .map(|solution| self.record(solution))
    }

    /// The best `n` builds, each with its rank and percent of best.
    pub fn top(&self, n: usize) -> Vec<TopBuild> {
        self.entries
            .iter()
            .take(n)
            .map(|entry| TopBuild {
                rank: rank(&self.stat_products, entry.stat_product),
                ivs: entry.ivs,
                level: entry.level,
                cp: entry.cp,
                stat_product: entry.stat_product,
                percent_of_best: percent_of_best(&self.stat_products, entry.stat_product),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopBuild {
    pub rank: usize,
    pub ivs: IvTriple,
    pub level: f64,
    pub cp: u32,
    pub stat_product: f64,
    pub percent_of_best: f64,
}

/// All bracket tables for one species, in bracket configuration order.
#[derive(Debug, Clone)]
pub struct LeagueTables {
    pub species_id: u32,
    tables: Vec<LeagueTable>,
}

impl LeagueTables {
    pub fn tables(&self) -> &[LeagueTable] {
        &self.tables
    }

    pub fn get(&self, bracket: &str) -> Option<&LeagueTable> {
        self.tables.iter().find(|table| table.bracket.name == bracket)
    }

    /// One [BracketRank] per bracket for `ivs` on the species these tables were built for.
    pub fn ranks_for(&self, base: BaseStats, ivs: IvTriple) -> Vec<BracketRank> {
        self.tables
            .iter()
            .map(|table| BracketRank {
                bracket: table.bracket.name.clone(),
                record: table.record_for(base, ivs),
            })
            .collect()
    }
}

/// Solves every IV triple for one bracket. Triples with no legal level are omitted.
pub fn build_league_table(base: BaseStats, bracket: &Bracket) -> LeagueTable {
    let cap = bracket.power_cap();
    let ceiling = bracket.ceiling_index();
    let ivs: Vec<IvTriple> = IvTriple::all().collect();
    let entries: Vec<LeagueEntry> = ivs
        .par_iter()
        .filter_map(|&ivs| {
            solve_level(base, ivs, cap, ceiling).map(|solution| LeagueEntry {
                ivs,
                level: index_to_level(solution.index),
                cp: solution.cp,
                stat_product: solution.stat_product,
            })
        })
        .collect();
    debug_assert!(entries.len() <= IV_SPACE);
    LeagueTable::from_entries(bracket.clone(), entries)
}

pub fn build_league_tables(species_id: u32, base: BaseStats, brackets: &[Bracket]) -> LeagueTables {
    LeagueTables {
        species_id,
        tables: brackets
            .iter()
            .map(|bracket| build_league_table(base, bracket))
            .collect(),
    }
}

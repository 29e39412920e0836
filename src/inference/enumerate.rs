//! Explains observed CP/HP as (IV, level) hypotheses and ranks each one.

use std::collections::HashMap;

use rayon::prelude::*;
use serde::Serialize;

use crate::inference::input::ObservedInput;
use crate::league::BracketRank;
use crate::stats::{
    health, index_to_level, multiplier_at, power_score, stat_product, BaseStats, IvTriple,
};

/// One (IV, level) pair consistent with the observations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateResult {
    pub ivs: IvTriple,
    pub level: f64,
    pub cp: u32,
    pub hp: u32,
    pub iv_percent: f64,
    pub stat_product: f64,
    /// One entry per configured bracket; empty until ranked.
    pub ranks: Vec<BracketRank>,
}

/// IV triples allowed by the observed components and floor flags, attack-major.
pub fn candidate_ivs(input: &ObservedInput) -> Vec<IvTriple> {
    let floor = input.iv_floor();
    let mut triples = Vec::new();
    for attack in input.attack.range(floor) {
        for defense in input.defense.range(floor) {
            for stamina in input.stamina.range(floor) {
                triples.push(IvTriple {
                    attack,
                    defense,
                    stamina,
                });
            }
        }
    }
    triples
}

/// Every (IV, level) pair whose CP and HP agree with the observations, ordered
/// by IV percent descending, then level descending. Ranks are left empty.
pub fn enumerate_candidates(base: BaseStats, input: &ObservedInput) -> Vec<CandidateResult> {
    let window = input.level_window();
    let mut candidates: Vec<CandidateResult> = candidate_ivs(input)
        .par_iter()
        .flat_map_iter(|&ivs| {
            window.clone().filter_map(move |index| {
                let multiplier = multiplier_at(index);
                let cp = power_score(base, ivs, multiplier);
                let hp = health(base, ivs, multiplier);
                if !input.matches(cp, hp) {
                    return None;
                }
                Some(CandidateResult {
                    ivs,
                    level: index_to_level(index),
                    cp,
                    hp,
                    iv_percent: ivs.percent(),
                    stat_product: stat_product(base, ivs, multiplier),
                    ranks: Vec::new(),
                })
            })
        })
        .collect();

    candidates.sort_by(|left, right| {
        right
            .ivs
            .sum()
            .cmp(&left.ivs.sum())
            .then_with(|| right.level.total_cmp(&left.level))
    });
    candidates
}

/// Fills in bracket ranks using `rank_triple`. Each distinct IV triple is
/// ranked once, however many levels it appears at.
pub fn attach_ranks<F>(candidates: &mut [CandidateResult], mut rank_triple: F)
where
    F: FnMut(IvTriple) -> Vec<BracketRank>,
{
    let mut memo: HashMap<IvTriple, Vec<BracketRank>> = HashMap::new();
    for candidate in candidates.iter_mut() {
        candidate.ranks = memo
            .entry(candidate.ivs)
            .or_insert_with(|| rank_triple(candidate.ivs))
            .clone();
    }
}

use std::sync::Arc;

use ivrank::data::{SpeciesRegistry, DEFAULT_SPECIES_PATH};
use ivrank::inference::{InvestmentTier, IvComponent, ObservedInput};
use ivrank::league::default_brackets;
use ivrank::parallel::WorkerPool;
use ivrank::stats::{level_to_index, power_score_at, BaseStats, IvTriple};
use ivrank::{Engine, EngineError};

const PIKACHU: BaseStats = BaseStats {
    attack: 112,
    defense: 96,
    stamina: 111,
};

fn engine() -> Engine {
    let registry = SpeciesRegistry::load(DEFAULT_SPECIES_PATH).expect("bundled species data loads");
    Engine::with_registry(registry, default_brackets(), WorkerPool::default())
}

#[test]
fn unknown_species_is_an_error_distinct_from_no_matches() {
    let engine = engine();
    assert_eq!(
        engine
            .rank_all_combinations(424242, &ObservedInput::default())
            .unwrap_err(),
        EngineError::SpeciesNotFound(424242)
    );
    assert_eq!(
        engine
            .rank_evolution_family(IvTriple::perfect(), 424242)
            .unwrap_err(),
        EngineError::SpeciesNotFound(424242)
    );

    let impossible = ObservedInput::default().with_cp(1);
    let results = engine
        .rank_all_combinations(25, &impossible)
        .expect("species exists");
    assert!(results.is_empty());
}

#[test]
fn cp_only_observation_yields_exact_matches() {
    let engine = engine();
    let input = ObservedInput::default().with_cp(1000);
    let results = engine.rank_all_combinations(25, &input).unwrap();
    assert!(!results.is_empty());
    assert!(results.iter().all(|candidate| candidate.cp == 1000));
}

#[test]
fn ranks_are_attached_per_bracket_and_shared_per_triple() {
    let engine = engine();
    let input = ObservedInput {
        high_iv_guarantee: true,
        ..ObservedInput::default()
    }
    .with_investment(InvestmentTier::from_cost(2500).unwrap());
    let results = engine.rank_all_combinations(308, &input).unwrap();
    assert_eq!(results.len(), 64 * 3);

    for candidate in &results {
        assert_eq!(candidate.ranks.len(), 5);
        let same_ivs: Vec<_> = results.iter().filter(|c| c.ivs == candidate.ivs).collect();
        assert!(same_ivs.iter().all(|c| c.ranks == candidate.ranks));
    }
    assert_eq!(engine.cache().build_count(), 1);
}

#[test]
fn known_components_pin_the_search() {
    let engine = engine();
    let input = ObservedInput {
        attack: IvComponent::Known(0),
        defense: IvComponent::Known(15),
        stamina: IvComponent::Known(15),
        ..ObservedInput::default()
    }
    .with_cp(260)
    .with_hp(55);
    let results = engine.rank_all_combinations(25, &input).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].level, 11.0);
    assert_eq!(results[0].iv_percent, 66.67);
}

#[test]
fn results_are_ordered_by_percent_then_level() {
    let engine = engine();
    let input = ObservedInput::default().with_cp(1000);
    let results = engine.rank_all_combinations(184, &input).unwrap();
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.iv_percent >= b.iv_percent);
        if a.iv_percent == b.iv_percent {
            assert!(a.level >= b.level);
        }
    }
}

fn ranked_json(engine: &Engine, input: &ObservedInput) -> String {
    let results = engine.rank_all_combinations(25, input).unwrap();
    serde_json::to_string(&results).expect("results serialize")
}

#[test]
fn rank_all_combinations_is_idempotent() {
    let engine = engine();
    let input = ObservedInput::default().with_cp(1000);
    let first = ranked_json(&engine, &input);
    let second = ranked_json(&engine, &input);
    assert_eq!(first, second);

    let fresh = ranked_json(&self::engine(), &input);
    assert_eq!(first, fresh);
}

#[test]
fn evolution_family_ranks_every_member_in_order() {
    let engine = engine();
    let ivs = IvTriple::new(4, 14, 15).unwrap();
    let family = engine.rank_evolution_family(ivs, 25).unwrap();
    let ids: Vec<_> = family.iter().map(|entry| entry.species_id).collect();
    assert_eq!(ids, vec![172, 25, 26]);

    let raichu = &family[2];
    let great = raichu.ranks.iter().find(|r| r.bracket == "great").unwrap();
    let record = great.record.as_ref().unwrap();
    assert_eq!(record.level, 25.0);
    assert_eq!(record.cp, 1471);
    assert_eq!(great.pre_evolution_cp, Some(609));

    for entry in &family {
        for bracket in &entry.ranks {
            match (&bracket.record, bracket.pre_evolution_cp) {
                (Some(record), Some(cp)) => {
                    let expected = power_score_at(PIKACHU, ivs, level_to_index(record.level));
                    assert_eq!(cp, expected);
                }
                (None, None) => {}
                other => panic!("record and pre-evolution CP disagree: {other:?}"),
            }
        }
    }
}

#[test]
fn evolution_family_includes_mega_forms() {
    let engine = engine();
    let family = engine.rank_evolution_family(IvTriple::perfect(), 94).unwrap();
    let names: Vec<_> = family.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, vec!["Gastly", "Haunter", "Gengar", "Mega Gengar"]);
}

#[test]
fn species_without_family_ranks_alone() {
    let engine = engine();
    let family = engine.rank_evolution_family(IvTriple::perfect(), 150).unwrap();
    assert_eq!(family.len(), 1);
    assert_eq!(family[0].species_id, 150);
    let master = family[0].ranks.iter().find(|r| r.bracket == "master").unwrap();
    assert_eq!(master.record.as_ref().map(|r| r.rank), Some(1));
    assert_eq!(master.pre_evolution_cp, master.record.as_ref().map(|r| r.cp));
}

#[test]
fn concurrent_queries_build_each_species_once() {
    let engine = Arc::new(engine());
    let handles: Vec<_> = (0..6)
        .map(|i| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                let species = if i % 2 == 0 { 25 } else { 26 };
                engine
                    .rank_all_combinations(species, &ObservedInput::default().with_cp(900))
                    .map(|results| results.len())
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("query thread panicked").expect("species exists");
    }
    assert_eq!(engine.cache().build_count(), 2);
}

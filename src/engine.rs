//! Entry points: explain observations as ranked IV hypotheses, and rank a
//! fixed IV triple across an evolutionary family.

use std::sync::Arc;

use tracing::debug;

use crate::config::EngineConfig;
use crate::data::{EvolutionProvider, Species, SpeciesProvider};
use crate::error::EngineError;
use crate::inference::{
    attach_ranks, enumerate_candidates, rank_family_member, CandidateResult, EvolutionRankEntry,
    ObservedInput,
};
use crate::league::{Bracket, LeagueTableCache, LeagueTables};
use crate::parallel::WorkerPool;
use crate::stats::IvTriple;

pub struct Engine {
    species: Arc<dyn SpeciesProvider>,
    families: Arc<dyn EvolutionProvider>,
    cache: Arc<LeagueTableCache>,
}

impl Engine {
    pub fn new(
        species: Arc<dyn SpeciesProvider>,
        families: Arc<dyn EvolutionProvider>,
        cache: Arc<LeagueTableCache>,
    ) -> Self {
        Self {
            species,
            families,
            cache,
        }
    }

    /// Engine over one registry serving both species and families, with a fresh cache.
    pub fn with_registry<R>(registry: Arc<R>, brackets: Vec<Bracket>, pool: WorkerPool) -> Self
    where
        R: SpeciesProvider + EvolutionProvider + 'static,
    {
        let cache = Arc::new(LeagueTableCache::new(brackets, pool));
        Self::new(registry.clone(), registry, cache)
    }

    pub fn from_config<R>(registry: Arc<R>, config: &EngineConfig) -> Self
    where
        R: SpeciesProvider + EvolutionProvider + 'static,
    {
        Self::with_registry(registry, config.brackets.clone(), config.pool())
    }

    pub fn cache(&self) -> &LeagueTableCache {
        &self.cache
    }

    pub fn brackets(&self) -> &[Bracket] {
        self.cache.brackets()
    }

    pub fn species(&self, species_id: u32) -> Result<Species, EngineError> {
        self.species
            .get_by_id(species_id)
            .ok_or(EngineError::SpeciesNotFound(species_id))
    }

    /// League tables for a species, built on first use.
    pub fn tables(&self, species_id: u32) -> Result<Arc<LeagueTables>, EngineError> {
        let species = self.species(species_id)?;
        Ok(self.cache.get_or_build(species.id, species.base_stats()))
    }

    /// Every (IV, level) hypothesis consistent with `input`, ranked in every
    /// bracket. An empty list means nothing matched; an unknown species is an error.
    pub fn rank_all_combinations(
        &self,
        species_id: u32,
        input: &ObservedInput,
    ) -> Result<Vec<CandidateResult>, EngineError> {
        let species = self.species(species_id)?;
        let base = species.base_stats();
        let mut candidates = enumerate_candidates(base, input);
        debug!(
            species_id,
            candidates = candidates.len(),
            "enumerated IV hypotheses"
        );
        if candidates.is_empty() {
            return Ok(candidates);
        }
        let tables = self.cache.get_or_build(species.id, base);
        attach_ranks(&mut candidates, |ivs| tables.ranks_for(base, ivs));
        Ok(candidates)
    }

    /// Ranks `ivs` at every member of the species' family. A species without a
    /// family is ranked as a family of one.
    pub fn rank_evolution_family(
        &self,
        ivs: IvTriple,
        species_id: u32,
    ) -> Result<Vec<EvolutionRankEntry>, EngineError> {
        let selected = self.species(species_id)?;
        let family = self
            .families
            .family_of(species_id)
            .filter(|members| !members.is_empty())
            .unwrap_or_else(|| vec![selected.clone()]);
        debug!(species_id, members = family.len(), "ranking evolution family");
        Ok(family
            .iter()
            .map(|member| {
                let tables = self.cache.get_or_build(member.id, member.base_stats());
                rank_family_member(member, &tables, &selected, ivs)
            })
            .collect())
    }
}

//! Read-through cache of league tables keyed by species id.
//!
//! Contract:
//! - lookups of built species take a shared read lock only;
//! - at most one build per species id runs at a time: concurrent callers for the
//!   same id block on that build and share its result, callers for other ids
//!   proceed independently;
//! - entries are never evicted or rebuilt for the lifetime of the cache.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::league::bracket::Bracket;
use crate::league::table::{build_league_tables, LeagueTables};
use crate::parallel::{WorkerPool, WorkerThreads};
use crate::stats::BaseStats;

type Slot = Arc<OnceLock<Arc<LeagueTables>>>;

#[derive(Debug)]
pub struct LeagueTableCache {
    brackets: Vec<Bracket>,
    threads: WorkerThreads,
    slots: RwLock<HashMap<u32, Slot>>,
    builds: AtomicUsize,
}

impl LeagueTableCache {
    /// The worker threads are built here once and reused by every table build.
    pub fn new(brackets: Vec<Bracket>, pool: WorkerPool) -> Self {
        Self {
            brackets,
            threads: pool.build(),
            slots: RwLock::new(HashMap::new()),
            builds: AtomicUsize::new(0),
        }
    }

    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }

    pub fn threads(&self) -> &WorkerThreads {
        &self.threads
    }

    /// Returns the tables for `species_id`, building them with `base` on first use.
    pub fn get_or_build(&self, species_id: u32, base: BaseStats) -> Arc<LeagueTables> {
        let slot = self.slot(species_id);
        if let Some(tables) = slot.get() {
            debug!(species_id, "league table cache hit");
            return Arc::clone(tables);
        }
        let tables = slot.get_or_init(|| {
            debug!(
                species_id,
                brackets = self.brackets.len(),
                "building league tables"
            );
            self.builds.fetch_add(1, Ordering::Relaxed);
            let tables = self
                .threads
                .install(|| build_league_tables(species_id, base, &self.brackets));
            Arc::new(tables)
        });
        Arc::clone(tables)
    }

    /// Tables already built for `species_id`, without building.
    pub fn get(&self, species_id: u32) -> Option<Arc<LeagueTables>> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.get(&species_id)?.get().cloned()
    }

    /// Number of species with built tables.
    pub fn len(&self) -> usize {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.values().filter(|slot| slot.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total builds performed so far.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }

    fn slot(&self, species_id: u32) -> Slot {
        {
            let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(slot) = slots.get(&species_id) {
                return Arc::clone(slot);
            }
        }
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(species_id).or_default())
    }
}

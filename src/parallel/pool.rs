//! Rayon thread pool configuration for league table builds.
//!
//! [WorkerPool] is the configured worker count. [WorkerPool::build] turns it
//! into [WorkerThreads], which owns the pool and is reused for every build.

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::warn;

/// Configures how many worker threads fan out over the IV space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerPool {
    /// Number of worker threads. If 0, use the global Rayon pool.
    pub workers: usize,
}

impl WorkerPool {
    /// Use exactly `n` worker threads.
    pub fn with_workers(n: usize) -> Self {
        Self { workers: n }
    }

    /// Builds the threads for this worker count. A failed build logs a warning
    /// and falls back to the global Rayon pool.
    pub fn build(&self) -> WorkerThreads {
        if self.workers == 0 {
            return WorkerThreads { pool: None };
        }
        match ThreadPoolBuilder::new().num_threads(self.workers).build() {
            Ok(pool) => WorkerThreads { pool: Some(pool) },
            Err(err) => {
                warn!(workers = self.workers, %err, "thread pool build failed; using global pool");
                WorkerThreads { pool: None }
            }
        }
    }

    /// Run a closure once on a pool with this worker count.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        self.build().install(f)
    }
}

/// Threads built from a [WorkerPool]: a dedicated pool, or the global one.
#[derive(Debug)]
pub struct WorkerThreads {
    pool: Option<ThreadPool>,
}

impl WorkerThreads {
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }

    pub fn current_num_threads(&self) -> usize {
        self.install(rayon::current_num_threads)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn fixed_pool_runs_closure_on_requested_thread_count() {
        let threads = WorkerPool::with_workers(2).install(rayon::current_num_threads);
        assert_eq!(threads, 2);
    }

    #[test]
    fn default_pool_uses_global_threads() {
        let threads = WorkerPool::default().install(rayon::current_num_threads);
        assert_eq!(threads, rayon::current_num_threads());
    }

    #[test]
    fn built_threads_are_reused_across_installs() {
        let threads = WorkerPool::with_workers(2).build();
        let seen: HashSet<_> = (0..32)
            .map(|_| threads.install(|| std::thread::current().id()))
            .collect();
        assert!(seen.len() <= 2);
        assert_eq!(threads.current_num_threads(), 2);
    }
}

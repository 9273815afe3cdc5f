//! Worker pool.
//!
//! A fixed-size pool of threads that applies an [Extract]or to every sample of a corpus.
//! Workers share nothing but the read-only sample slice, and each partial result is owned by
//! the worker that produced it until it is handed back to the caller.
//!
//! Samples are dispatched in chunks of [PoolConfig::chunk_size] to amortize scheduling
//! costs. Chunk size has no effect on results.
//!
//! There is no failure isolation: if an extractor panics, the whole batch is aborted and the
//! panic is propagated to the caller of [WorkerPool::run_parallel].
use std::num::NonZeroUsize;

use log::{debug, warn};
use rayon::prelude::*;

use crate::error::Error;
use crate::extractors::Extract;

/// Default number of samples per dispatched chunk.
pub const CHUNK_SIZE: usize = 1000;

/// Worker pool configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// number of worker threads
    pub workers: usize,
    /// number of samples per dispatched chunk
    pub chunk_size: usize,
}

impl PoolConfig {
    pub fn new(workers: usize, chunk_size: usize) -> Self {
        Self {
            workers,
            chunk_size,
        }
    }

    /// Number of available processing units, 1 if it can't be known.
    pub fn available_workers() -> usize {
        std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
    }
}

impl Default for PoolConfig {
    /// One worker per available processing unit, chunks of [CHUNK_SIZE].
    fn default() -> Self {
        Self::new(Self::available_workers(), CHUNK_SIZE)
    }
}

pub struct WorkerPool {
    pool: rayon::ThreadPool,
    chunk_size: usize,
}

impl WorkerPool {
    /// Build a pool with exactly `config.workers` threads.
    ///
    /// Zero values are bumped to 1.
    pub fn new(config: PoolConfig) -> Result<Self, Error> {
        let workers = if config.workers == 0 {
            warn!("worker count is 0, using 1 worker");
            1
        } else {
            config.workers
        };
        let chunk_size = if config.chunk_size == 0 {
            warn!("chunk size is 0, using 1");
            1
        } else {
            config.chunk_size
        };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|idx| format!("textscope-worker-{}", idx))
            .build()?;

        debug!("worker pool: {} workers, chunks of {}", workers, chunk_size);
        Ok(Self { pool, chunk_size })
    }

    /// Get the number of worker threads.
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Get the chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Apply `extractor` to every sample in parallel.
    ///
    /// Returns one partial result per sample, in sample order.
    pub fn run_parallel<E, S>(&self, extractor: &E, samples: &[S]) -> Vec<E::Partial>
    where
        E: Extract,
        S: AsRef<str> + Sync,
    {
        let chunks: Vec<Vec<E::Partial>> = self.pool.install(|| {
            samples
                .par_chunks(self.chunk_size)
                .map(|chunk| {
                    chunk
                        .iter()
                        .map(|sample| extractor.extract(sample.as_ref()))
                        .collect::<Vec<_>>()
                })
                .collect()
        });

        chunks.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::{CharExtractor, WordExtractor};

    /// returns the sample length, to check ordering.
    struct Len;
    impl Extract for Len {
        type Partial = usize;
        fn extract(&self, sample: &str) -> usize {
            sample.len()
        }
    }

    #[test]
    fn preserves_order() {
        let samples: Vec<String> = (0..2500).map(|i| "x".repeat(i % 37)).collect();
        let pool = WorkerPool::new(PoolConfig::new(4, 7)).unwrap();
        let lengths = pool.run_parallel(&Len, &samples);
        let expected: Vec<usize> = samples.iter().map(String::len).collect();
        assert_eq!(lengths, expected);
    }

    #[test]
    fn one_result_per_sample() {
        let samples = ["a b", "", "c"];
        for chunk_size in [1, 2, 1000] {
            let pool = WorkerPool::new(PoolConfig::new(2, chunk_size)).unwrap();
            let results = pool.run_parallel(&WordExtractor, &samples);
            assert_eq!(results.len(), 3);
            assert!(results[1].is_empty());
        }
    }

    #[test]
    fn empty_corpus() {
        let samples: Vec<&str> = Vec::new();
        let pool = WorkerPool::new(PoolConfig::new(3, 10)).unwrap();
        assert!(pool.run_parallel(&CharExtractor, &samples).is_empty());
    }

    #[test]
    fn explicit_worker_count() {
        let pool = WorkerPool::new(PoolConfig::new(3, 10)).unwrap();
        assert_eq!(pool.workers(), 3);

        let pool = WorkerPool::new(PoolConfig::new(0, 0)).unwrap();
        assert_eq!(pool.workers(), 1);
        assert_eq!(pool.chunk_size(), 1);
    }

    #[test]
    #[should_panic]
    fn extractor_panic_aborts_batch() {
        struct Boom;
        impl Extract for Boom {
            type Partial = ();
            fn extract(&self, sample: &str) -> Self::Partial {
                if sample == "boom" {
                    panic!("extractor failure");
                }
            }
        }
        let pool = WorkerPool::new(PoolConfig::new(2, 1)).unwrap();
        pool.run_parallel(&Boom, &["ok", "boom", "ok"]);
    }
}

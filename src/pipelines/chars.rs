//! Character frequency analysis.
use log::info;
use serde::Serialize;

use super::{Pipeline, WorkerPool};
use crate::error::Error;
use crate::extractors::CharExtractor;
use crate::processing::{merge_all, Counts};

/// Corpus-wide character frequencies.
#[derive(Debug, Clone, Serialize)]
pub struct CharReport {
    pub total_chars: u64,
    pub unique_chars: usize,
    pub counts: Counts<char>,
}

impl From<Counts<char>> for CharReport {
    fn from(counts: Counts<char>) -> Self {
        Self {
            total_chars: counts.total(),
            unique_chars: counts.len(),
            counts,
        }
    }
}

pub struct CharFrequency<'a, S> {
    samples: &'a [S],
    pool: &'a WorkerPool,
}

impl<'a, S> CharFrequency<'a, S> {
    pub fn new(samples: &'a [S], pool: &'a WorkerPool) -> Self {
        Self { samples, pool }
    }
}

impl<'a, S: AsRef<str> + Sync> Pipeline<CharReport> for CharFrequency<'a, S> {
    fn name(&self) -> &'static str {
        "characters"
    }

    fn run(&self) -> Result<CharReport, Error> {
        info!("Counting characters of {} samples", self.samples.len());
        let partials = self.pool.run_parallel(&CharExtractor, self.samples);
        let counts: Counts<char> = merge_all(partials);
        Ok(CharReport::from(counts))
    }
}

//! Quality analysis: punctuation anomalies, all-caps words, numbers and duplicate sentences.
//!
//! Duplicate detection runs after every other statistic is merged, over the collected
//! per-sample sentence sets (see [crate::processing::dedup]).
use log::{debug, info};
use serde::Serialize;

use super::{Pipeline, WorkerPool};
use crate::error::Error;
use crate::extractors::QualityExtractor;
use crate::processing::{merge_all, ratio, Correlator, Counts, DuplicateIndex, Histogram};
use crate::processing::QualityAccumulator;

/// Number of ranked all-caps words kept in the serialized report.
pub const TOP_CAPS_WORDS: usize = 30;
/// Number of ranked duplicate sentences kept in the serialized report.
pub const TOP_DUPLICATES: usize = 20;

#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    pub punctuation: Counts<&'static str>,
    /// full mapping, serialized through `top_caps_words` only
    #[serde(skip)]
    pub caps_words: Counts<String>,
    /// the [TOP_CAPS_WORDS] most frequent all-caps words
    pub top_caps_words: Vec<(String, u64)>,
    pub caps_total: u64,
    pub caps_unique: usize,
    pub numbers: usize,
    pub tokens: usize,
    /// numbers / tokens
    pub number_density: f64,
    /// full index, serialized through `top_duplicates` only
    #[serde(skip)]
    pub duplicates: DuplicateIndex,
    /// the [TOP_DUPLICATES] sentences shared by the most samples
    pub top_duplicates: Vec<(String, u64)>,
    pub duplicate_count: usize,
    pub duplicate_distribution: Histogram,
}

impl QualityReport {
    pub fn new(acc: QualityAccumulator, duplicates: DuplicateIndex) -> Self {
        Self {
            caps_total: acc.caps_words.total(),
            caps_unique: acc.caps_words.len(),
            top_caps_words: acc.caps_words.ranked(TOP_CAPS_WORDS),
            punctuation: acc.punctuation,
            caps_words: acc.caps_words,
            numbers: acc.numbers,
            tokens: acc.tokens,
            number_density: ratio(acc.numbers as u64, acc.tokens as u64),
            top_duplicates: duplicates.top(TOP_DUPLICATES),
            duplicate_count: duplicates.len(),
            duplicate_distribution: duplicates.distribution(),
            duplicates,
        }
    }
}

pub struct Quality<'a, S> {
    samples: &'a [S],
    pool: &'a WorkerPool,
    correlator: Correlator,
}

impl<'a, S> Quality<'a, S> {
    pub fn new(samples: &'a [S], pool: &'a WorkerPool) -> Self {
        Self {
            samples,
            pool,
            correlator: Correlator::default(),
        }
    }

    /// Use a custom duplicate correlator.
    pub fn with_correlator(mut self, correlator: Correlator) -> Self {
        self.correlator = correlator;
        self
    }
}

impl<'a, S: AsRef<str> + Sync> Pipeline<QualityReport> for Quality<'a, S> {
    fn name(&self) -> &'static str {
        "quality"
    }

    fn run(&self) -> Result<QualityReport, Error> {
        info!("Analyzing {} samples", self.samples.len());
        let partials = self.pool.run_parallel(&QualityExtractor, self.samples);
        let acc: QualityAccumulator = merge_all(partials);

        info!("Finding duplicate sentences");
        debug!(
            "duplicates: sentences of {}+ chars shared by {}+ samples",
            self.correlator.min_length(),
            self.correlator.min_samples()
        );
        let duplicates = self.correlator.correlate(&acc.sentence_sets);

        Ok(QualityReport::new(acc, duplicates))
    }
}

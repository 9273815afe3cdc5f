//! N-gram analysis: frequent bigrams/trigrams, dialogue tags and repeated phrases.
//!
//! N-gram counts come from top-k truncated partial results, so they are lower bounds
//! (see [crate::extractors::NgramExtractor]).
use log::{debug, info};
use serde::Serialize;

use super::{Pipeline, WorkerPool};
use crate::error::Error;
use crate::extractors::{Bigram, NgramCounts, NgramExtractor, Trigram};
use crate::processing::{merge_all, ratio, Counts};

/// Minimum merged count for a trigram to be reported as a repeated phrase.
pub const REPEATED_PHRASE_MIN: u64 = 100;
/// Maximum number of repeated phrases kept.
pub const REPEATED_PHRASE_CAP: usize = 100;
/// Default number of ranked bigrams and trigrams kept in the serialized report.
pub const TOP_NGRAMS: usize = 50;

#[derive(Debug, Clone, Serialize)]
pub struct NgramReport {
    /// per-sample truncation used to build the counts
    pub top_k: usize,
    /// full mapping, serialized through `top_bigrams` only
    #[serde(skip)]
    pub bigrams: Counts<Bigram>,
    /// full mapping, serialized through `top_trigrams` only
    #[serde(skip)]
    pub trigrams: Counts<Trigram>,
    pub top_bigrams: Vec<(Bigram, u64)>,
    pub top_trigrams: Vec<(Trigram, u64)>,
    pub dialogue_tags: Counts<&'static str>,
    pub total_tags: u64,
    /// trigrams seen at least [REPEATED_PHRASE_MIN] times, most frequent first
    pub repeated_phrases: Vec<(Trigram, u64)>,
}

impl NgramReport {
    /// `top` is the number of ranked bigrams and trigrams kept.
    pub fn new(counts: NgramCounts, top_k: usize, top: usize) -> Self {
        let repeated_phrases = counts
            .trigrams
            .most_common()
            .into_iter()
            .take_while(|(_, n)| *n >= REPEATED_PHRASE_MIN)
            .take(REPEATED_PHRASE_CAP)
            .map(|(trigram, n)| (trigram.clone(), n))
            .collect();

        Self {
            top_k,
            total_tags: counts.tags.total(),
            top_bigrams: counts.bigrams.ranked(top),
            top_trigrams: counts.trigrams.ranked(top),
            bigrams: counts.bigrams,
            trigrams: counts.trigrams,
            dialogue_tags: counts.tags,
            repeated_phrases,
        }
    }

    /// share of `tag` among every dialogue tag occurrence.
    pub fn tag_share(&self, tag: &str) -> f64 {
        ratio(self.dialogue_tags.get(tag), self.total_tags)
    }
}

pub struct Ngrams<'a, S> {
    samples: &'a [S],
    pool: &'a WorkerPool,
    extractor: NgramExtractor,
    top: usize,
}

impl<'a, S> Ngrams<'a, S> {
    pub fn new(samples: &'a [S], pool: &'a WorkerPool) -> Self {
        Self {
            samples,
            pool,
            extractor: NgramExtractor::default(),
            top: TOP_NGRAMS,
        }
    }

    /// Use a custom per-sample truncation size.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.extractor = NgramExtractor::with_top_k(top_k);
        self
    }

    /// Number of ranked bigrams and trigrams kept in the report.
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }
}

impl<'a, S: AsRef<str> + Sync> Pipeline<NgramReport> for Ngrams<'a, S> {
    fn name(&self) -> &'static str {
        "ngrams"
    }

    fn run(&self) -> Result<NgramReport, Error> {
        info!("Analyzing {} samples", self.samples.len());
        debug!("keeping top {} n-grams per sample", self.extractor.top_k());
        let partials = self.pool.run_parallel(&self.extractor, self.samples);
        let counts: NgramCounts = merge_all(partials);
        Ok(NgramReport::new(counts, self.extractor.top_k(), self.top))
    }
}

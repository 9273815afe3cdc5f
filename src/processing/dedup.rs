/*! Cross-sample duplicate sentences

A sentence is a duplicate when it appears in at least two *distinct* samples.
This cannot be computed with a running merge of per-key totals: a sentence repeated ten times
in one sample must only count once for it. Detection is done in two phases instead:

1. each sample yields its own set of sentences (see [crate::extractors::QualityExtractor]),
2. once every set is collected, the [Correlator] normalizes sentences and counts,
   for each of them, the number of sets it belongs to.
!*/
use std::collections::HashSet;

use log::debug;
use serde::Serialize;

use super::summary::{Histogram, DUPLICATE_BINS};
use super::Counts;

/// Normalized sentences shorter than this (in characters) are ignored.
pub const MIN_SENTENCE_LENGTH: usize = 20;

/// Minimum number of samples a sentence has to appear in.
pub const MIN_SAMPLES: u64 = 2;

/// normalized sentence → number of distinct samples containing it.
///
/// Only holds sentences that appear in at least [Correlator::min_samples] samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DuplicateIndex(Counts<String>);

impl DuplicateIndex {
    /// number of samples containing `sentence` (already normalized), 0 if not a duplicate.
    pub fn count(&self, sentence: &str) -> u64 {
        self.0.get(sentence)
    }

    /// number of distinct duplicate sentences.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// duplicates ranked by descending sample count.
    pub fn most_common(&self) -> Vec<(&String, u64)> {
        self.0.most_common()
    }

    /// `n` most shared duplicates, owned.
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        self.0.ranked(n)
    }

    /// How many duplicate sentences fall in each sample-count bucket.
    pub fn distribution(&self) -> Histogram {
        Histogram::new(self.0.iter().map(|(_, n)| *n as usize), &DUPLICATE_BINS)
    }
}

/// Joins per-sample sentence sets into a [DuplicateIndex].
#[derive(Debug, Clone, Copy)]
pub struct Correlator {
    min_length: usize,
    min_samples: u64,
}

impl Correlator {
    pub fn new(min_length: usize, min_samples: u64) -> Self {
        Self {
            min_length,
            min_samples,
        }
    }

    /// Get the minimum sentence length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Get the minimum sample count.
    pub fn min_samples(&self) -> u64 {
        self.min_samples
    }

    /// lower-cased, trimmed sentence, or `None` if it is too short to be meaningful.
    fn normalize(&self, sentence: &str) -> Option<String> {
        let normalized = sentence.to_lowercase().trim().to_string();
        if normalized.chars().count() >= self.min_length {
            Some(normalized)
        } else {
            None
        }
    }

    /// Counts, for each normalized sentence, the number of sets that contain it,
    /// and keeps those reaching [Correlator::min_samples].
    ///
    /// Two sentences of a same set that only differ by case count once.
    pub fn correlate<'a, I>(&self, sets: I) -> DuplicateIndex
    where
        I: IntoIterator<Item = &'a HashSet<String>>,
    {
        let mut per_sample: Counts<String> = Counts::new();
        let mut nb_sets = 0;
        for set in sets {
            nb_sets += 1;
            let normalized: HashSet<String> =
                set.iter().filter_map(|s| self.normalize(s)).collect();
            for sentence in normalized {
                per_sample.incr(sentence);
            }
        }

        let duplicates = Counts::from_pairs(
            per_sample
                .into_iter()
                .filter(|(_, n)| *n >= self.min_samples),
        );
        debug!(
            "{} duplicate sentences found over {} samples",
            duplicates.len(),
            nb_sets
        );

        DuplicateIndex(duplicates)
    }
}

impl Default for Correlator {
    fn default() -> Self {
        Self::new(MIN_SENTENCE_LENGTH, MIN_SAMPLES)
    }
}

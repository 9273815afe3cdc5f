//! Bigrams, trigrams and dialogue tags.
//!
//! The number of distinct n-grams in a corpus grows much faster than its vocabulary, so each
//! sample only keeps its `top_k` most frequent bigrams and trigrams. Merged n-gram counts are
//! therefore a lower bound of the true corpus frequencies:
//!
//! - a key that is cut from a sample loses that sample's occurrences,
//! - a key that is frequent overall but never in any sample's top `k` is missing entirely.
//!
//! Dialogue tags are a closed set and are counted exactly.
use itertools::Itertools;
use log::warn;

use super::Extract;
use crate::processing::Counts;
use crate::tokenize;
use crate::vocab::DIALOGUE_TAGS;

/// Default number of bigrams (and trigrams) kept per sample.
pub const DEFAULT_TOP_K: usize = 100;

pub type Bigram = (String, String);
pub type Trigram = (String, String, String);

/// N-gram partial result. Also used as the accumulator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NgramCounts {
    pub bigrams: Counts<Bigram>,
    pub trigrams: Counts<Trigram>,
    pub tags: Counts<&'static str>,
}

/// Extracts consecutive-word bigrams and trigrams (lower-cased), truncated to the `top_k`
/// most frequent, and exact dialogue tag counts.
#[derive(Debug, Clone, Copy)]
pub struct NgramExtractor {
    top_k: usize,
}

impl NgramExtractor {
    /// Use a custom per-sample truncation size.
    pub fn with_top_k(top_k: usize) -> Self {
        if top_k == 0 {
            warn!("n-gram top-k is 0: no n-gram will be kept");
        }
        Self { top_k }
    }

    /// Get the per-sample truncation size.
    pub fn top_k(&self) -> usize {
        self.top_k
    }
}

impl Default for NgramExtractor {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl Extract for NgramExtractor {
    type Partial = NgramCounts;

    fn extract(&self, sample: &str) -> NgramCounts {
        let lowered = sample.to_lowercase();
        let words: Vec<&str> = tokenize::words(&lowered).collect();

        let bigrams: Counts<Bigram> = words
            .iter()
            .tuple_windows()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();

        let trigrams: Counts<Trigram> = words
            .iter()
            .tuple_windows()
            .map(|(a, b, c)| (a.to_string(), b.to_string(), c.to_string()))
            .collect();

        let tags: Counts<&'static str> = words
            .iter()
            .filter_map(|word| DIALOGUE_TAGS.get(*word).copied())
            .collect();

        NgramCounts {
            bigrams: bigrams.truncate_top(self.top_k),
            trigrams: trigrams.truncate_top(self.top_k),
            tags,
        }
    }
}

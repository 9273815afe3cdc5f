//! Lexical analysis: vocabulary, diversity and out-of-vocabulary rate.
use log::info;
use serde::Serialize;

use super::{Pipeline, WorkerPool};
use crate::error::Error;
use crate::extractors::WordExtractor;
use crate::processing::{merge_all, ratio, Counts};
use crate::vocab::COMMON_ENGLISH;

/// Number of ranked words kept in the report, enough for a Zipf check.
pub const TOP_WORDS: usize = 100;

#[derive(Debug, Clone, Serialize)]
pub struct LexicalReport {
    pub total_words: u64,
    pub vocab_size: usize,
    /// vocabulary size / total words
    pub type_token_ratio: f64,
    /// number of words that appear exactly once
    pub hapax_count: usize,
    /// hapax count / vocabulary size
    pub hapax_share: f64,
    /// share of word occurrences outside of [COMMON_ENGLISH]
    pub oov_rate: f64,
    /// the [TOP_WORDS] most frequent words
    pub top_words: Vec<(String, u64)>,
    /// full mapping, serialized through `top_words` only
    #[serde(skip)]
    pub word_counts: Counts<String>,
}

impl From<Counts<String>> for LexicalReport {
    fn from(word_counts: Counts<String>) -> Self {
        let total_words = word_counts.total();
        let vocab_size = word_counts.len();
        let hapax_count = word_counts.iter().filter(|(_, n)| **n == 1).count();
        let oov_count: u64 = word_counts
            .iter()
            .filter(|(word, _)| !COMMON_ENGLISH.contains(word.as_str()))
            .map(|(_, n)| n)
            .sum();
        let top_words = word_counts.ranked(TOP_WORDS);

        Self {
            total_words,
            vocab_size,
            type_token_ratio: ratio(vocab_size as u64, total_words),
            hapax_count,
            hapax_share: ratio(hapax_count as u64, vocab_size as u64),
            oov_rate: ratio(oov_count, total_words),
            top_words,
            word_counts,
        }
    }
}

pub struct Lexical<'a, S> {
    samples: &'a [S],
    pool: &'a WorkerPool,
}

impl<'a, S> Lexical<'a, S> {
    pub fn new(samples: &'a [S], pool: &'a WorkerPool) -> Self {
        Self { samples, pool }
    }
}

impl<'a, S: AsRef<str> + Sync> Pipeline<LexicalReport> for Lexical<'a, S> {
    fn name(&self) -> &'static str {
        "lexical"
    }

    fn run(&self) -> Result<LexicalReport, Error> {
        info!("Analyzing {} samples", self.samples.len());
        let partials = self.pool.run_parallel(&WordExtractor, self.samples);
        let counts: Counts<String> = merge_all(partials);
        Ok(LexicalReport::from(counts))
    }
}

//! Merge rules.
//!
//! Every analysis kind merges with a single operator that is associative and commutative,
//! so that the final accumulator does not depend on how samples were partitioned across
//! workers, nor on the order partial results are delivered in:
//!
//! - frequency mappings add counts per key ([Counts]),
//! - length lists are concatenated, their order being irrelevant to the summaries built on them,
//! - scalars are summed.
//!
//! Sentence sets are the exception: they are only *collected* here, and joined later by
//! [super::Correlator].
use std::collections::HashSet;

use crate::extractors::{NgramCounts, QualitySignals, StructureMeasures};

use super::Counts;

/// Merges `other` into `self`.
pub trait Merge<Rhs = Self> {
    fn merge(&mut self, other: Rhs);
}

/// Folds partial results into a fresh accumulator.
pub fn merge_all<A, P, I>(partials: I) -> A
where
    A: Default + Merge<P>,
    I: IntoIterator<Item = P>,
{
    let mut acc = A::default();
    for partial in partials {
        acc.merge(partial);
    }
    acc
}

impl Merge for NgramCounts {
    fn merge(&mut self, other: Self) {
        self.bigrams.merge(other.bigrams);
        self.trigrams.merge(other.trigrams);
        self.tags.merge(other.tags);
    }
}

impl Merge for StructureMeasures {
    fn merge(&mut self, other: Self) {
        self.sentence_lengths.extend(other.sentence_lengths);
        self.paragraph_lengths.extend(other.paragraph_lengths);
        self.quoted_chars += other.quoted_chars;
        self.total_chars += other.total_chars;
        self.double_quotes += other.double_quotes;
        self.single_quotes += other.single_quotes;
    }
}

/// Corpus-wide quality accumulator.
///
/// Sentence sets are kept one per sample: duplicate detection needs to know which sample a
/// sentence comes from, which a running counter would lose.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QualityAccumulator {
    pub sentence_sets: Vec<HashSet<String>>,
    pub punctuation: Counts<&'static str>,
    pub caps_words: Counts<String>,
    pub numbers: usize,
    pub tokens: usize,
}

impl Merge<QualitySignals> for QualityAccumulator {
    fn merge(&mut self, other: QualitySignals) {
        self.sentence_sets.push(other.sentences);
        self.punctuation.merge(other.punctuation);
        self.caps_words.merge(other.caps_words);
        self.numbers += other.numbers;
        self.tokens += other.tokens;
    }
}

impl Merge for QualityAccumulator {
    fn merge(&mut self, other: Self) {
        self.sentence_sets.extend(other.sentence_sets);
        self.punctuation.merge(other.punctuation);
        self.caps_words.merge(other.caps_words);
        self.numbers += other.numbers;
        self.tokens += other.tokens;
    }
}

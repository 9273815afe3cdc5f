//! Quality signals: sentence sets, punctuation runs, all-caps words and numbers.
use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use super::Extract;
use crate::processing::Counts;
use crate::tokenize;

/// Labels of the unusual punctuation runs, in detection order.
pub const PUNCTUATION_LABELS: [&str; 8] = [
    "???+", "!!!+", "....+", "---+", "***+", "~~~+", "___+", "===+",
];

lazy_static! {
    // "..." is a regular ellipsis, so dots need 4+
    static ref PUNCTUATION_RUNS: Vec<(Regex, &'static str)> = [
        r"\?\?\?+", r"!!!+", r"\.\.\.\.+", r"---+", r"\*\*\*+", r"~~~+", r"___+", r"===+",
    ]
    .iter()
    .zip(PUNCTUATION_LABELS.iter())
    .map(|(pattern, label)| (Regex::new(pattern).unwrap(), *label))
    .collect();
}

/// Minimum length of an all-caps token, so that `I` or `A` are not counted.
const MIN_CAPS_LEN: usize = 3;

/// Quality partial result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QualitySignals {
    /// distinct sentences of the sample, for cross-sample duplicate detection
    pub sentences: HashSet<String>,
    /// only patterns that matched at least once are present
    pub punctuation: Counts<&'static str>,
    /// case-sensitive
    pub caps_words: Counts<String>,
    pub numbers: usize,
    /// words + numbers
    pub tokens: usize,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct QualityExtractor;

impl Extract for QualityExtractor {
    type Partial = QualitySignals;

    fn extract(&self, sample: &str) -> QualitySignals {
        let sentences = tokenize::sentences(sample)
            .into_iter()
            .map(String::from)
            .collect();

        let punctuation = PUNCTUATION_RUNS
            .iter()
            .map(|(re, label)| (*label, re.find_iter(sample).count() as u64))
            .filter(|(_, n)| *n > 0);
        let punctuation = Counts::from_pairs(punctuation);

        let mut word_count = 0;
        let caps_words = tokenize::words(sample)
            .inspect(|_| word_count += 1)
            .filter(|word| word.chars().count() >= MIN_CAPS_LEN && tokenize::is_upper(word))
            .map(String::from)
            .collect();

        let numbers = tokenize::count_numbers(sample);

        QualitySignals {
            sentences,
            punctuation,
            caps_words,
            numbers,
            tokens: word_count + numbers,
        }
    }
}

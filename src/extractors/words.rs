//! Word frequencies.
use super::Extract;
use crate::processing::Counts;
use crate::tokenize;

/// Counts lower-cased word tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordExtractor;

impl Extract for WordExtractor {
    type Partial = Counts<String>;

    fn extract(&self, sample: &str) -> Counts<String> {
        let lowered = sample.to_lowercase();
        tokenize::words(&lowered).map(String::from).collect()
    }
}

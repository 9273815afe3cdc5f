//! Structural analysis: sentence/paragraph lengths and dialogue.
use log::info;
use serde::Serialize;

use super::{Pipeline, WorkerPool};
use crate::error::Error;
use crate::extractors::{StructureExtractor, StructureMeasures};
use crate::processing::summary::SENTENCE_BINS;
use crate::processing::{merge_all, ratio, Histogram, Summary};

#[derive(Debug, Clone, Serialize)]
pub struct StructuralReport {
    /// sentence lengths, in words
    pub sentences: Summary,
    /// paragraph lengths, in sentences
    pub paragraphs: Summary,
    pub sentence_histogram: Histogram,
    /// quoted characters / total characters
    pub dialogue_ratio: f64,
    pub quoted_chars: usize,
    pub total_chars: usize,
    pub double_quotes: usize,
    pub single_quotes: usize,
    pub double_quote_share: f64,
    pub single_quote_share: f64,
}

impl From<StructureMeasures> for StructuralReport {
    fn from(m: StructureMeasures) -> Self {
        let total_quotes = (m.double_quotes + m.single_quotes) as u64;
        Self {
            sentences: Summary::new(&m.sentence_lengths),
            paragraphs: Summary::new(&m.paragraph_lengths),
            sentence_histogram: Histogram::new(
                m.sentence_lengths.iter().copied(),
                &SENTENCE_BINS,
            ),
            dialogue_ratio: ratio(m.quoted_chars as u64, m.total_chars as u64),
            quoted_chars: m.quoted_chars,
            total_chars: m.total_chars,
            double_quotes: m.double_quotes,
            single_quotes: m.single_quotes,
            double_quote_share: ratio(m.double_quotes as u64, total_quotes),
            single_quote_share: ratio(m.single_quotes as u64, total_quotes),
        }
    }
}

pub struct Structural<'a, S> {
    samples: &'a [S],
    pool: &'a WorkerPool,
}

impl<'a, S> Structural<'a, S> {
    pub fn new(samples: &'a [S], pool: &'a WorkerPool) -> Self {
        Self { samples, pool }
    }
}

impl<'a, S: AsRef<str> + Sync> Pipeline<StructuralReport> for Structural<'a, S> {
    fn name(&self) -> &'static str {
        "structural"
    }

    fn run(&self) -> Result<StructuralReport, Error> {
        info!("Analyzing {} samples", self.samples.len());
        let partials = self.pool.run_parallel(&StructureExtractor, self.samples);
        let measures: StructureMeasures = merge_all(partials);
        Ok(StructuralReport::from(measures))
    }
}

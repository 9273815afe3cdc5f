/*! Per-sample extractors.

An extractor turns one sample into one partial result, without looking at any other sample
or at any shared state. This is what makes them safe to run concurrently in a [crate::pipelines::WorkerPool].

Each extractor has its own, strongly typed partial result:

| extractor | partial result |
|-----------|----------------|
| [CharExtractor] | [Counts]`<char>` |
| [WordExtractor] | [Counts]`<String>` |
| [NgramExtractor] | [NgramCounts] (top-k truncated) |
| [StructureExtractor] | [StructureMeasures] |
| [QualityExtractor] | [QualitySignals] |

[Counts]: crate::processing::Counts
!*/
mod chars;
mod extract;
mod ngrams;
mod quality;
mod structure;
mod words;

pub use chars::CharExtractor;
pub use extract::Extract;
pub use ngrams::{Bigram, NgramCounts, NgramExtractor, Trigram, DEFAULT_TOP_K};
pub use quality::{QualityExtractor, QualitySignals, PUNCTUATION_LABELS};
pub use structure::{StructureExtractor, StructureMeasures};
pub use words::WordExtractor;

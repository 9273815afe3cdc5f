//! Pipelines.
//!
//! One pipeline per analysis kind. Each of them borrows the corpus and a [WorkerPool],
//! runs its extractor over every sample, merges the partial results and freezes them into a
//! serializable report.
//!
//! The [Pipeline] trait is deliberately light so that runners can be swapped and chained easily.
mod chars;
mod lexical;
mod ngrams;
#[allow(clippy::module_inception)]
mod pipeline;
mod quality;
mod structural;
mod workers;

pub use chars::{CharFrequency, CharReport};
pub use lexical::{Lexical, LexicalReport, TOP_WORDS};
pub use ngrams::{NgramReport, Ngrams, REPEATED_PHRASE_CAP, REPEATED_PHRASE_MIN, TOP_NGRAMS};
pub use pipeline::Pipeline;
pub use quality::{Quality, QualityReport, TOP_CAPS_WORDS, TOP_DUPLICATES};
pub use structural::{Structural, StructuralReport};
pub use workers::{PoolConfig, WorkerPool, CHUNK_SIZE};

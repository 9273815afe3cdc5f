/*!
# IO utilities

Corpus loading.

A corpus is a single text file (optionally gzipped) holding samples separated by [reader::BREAK_DELIMITER].
!*/
pub mod reader;

pub use reader::{load_samples, split_samples, BREAK_DELIMITER};

/*! Content processing

Contains structures and functions to aggregate partial results into corpus-wide statistics:

- [Counts] and the [Merge] rules that combine partial results,
- [Summary] and [Histogram] for length distributions,
- [Correlator] for cross-sample duplicate sentences.
!*/
mod accumulate;
mod counts;
pub mod dedup;
pub mod summary;

pub use accumulate::{merge_all, Merge, QualityAccumulator};
pub use counts::{Counts, FastHasher};
pub use dedup::{Correlator, DuplicateIndex};
pub use summary::{ratio, Histogram, Summary};

//! Distributional summaries over merged length lists.
//!
//! Both are computed once, over the full multiset, after merging is done.
//! Order of values never matters.
use serde::Serialize;

/// `numerator / denominator`, or 0 when the denominator is 0.
pub fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// count/min/max/mean/median/population standard deviation of a list of lengths.
///
/// An empty list yields a summary full of zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
}

impl Summary {
    pub fn new(values: &[usize]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_unstable();

        let count = sorted.len();
        let n = count as f64;
        let mean = sorted.iter().map(|v| *v as f64).sum::<f64>() / n;
        let variance = sorted
            .iter()
            .map(|v| (*v as f64 - mean).powi(2))
            .sum::<f64>()
            / n;

        let median = if count % 2 == 1 {
            sorted[count / 2] as f64
        } else {
            (sorted[count / 2 - 1] + sorted[count / 2]) as f64 / 2.0
        };

        Self {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            mean,
            median,
            std: variance.sqrt(),
        }
    }
}

/// A histogram bin, bounds are inclusive. `high: None` means unbounded.
#[derive(Debug, Clone, Copy)]
pub struct Bin {
    pub label: &'static str,
    pub low: usize,
    pub high: Option<usize>,
}

impl Bin {
    const fn new(label: &'static str, low: usize, high: Option<usize>) -> Self {
        Self { label, low, high }
    }

    fn contains(&self, value: usize) -> bool {
        value >= self.low && self.high.map_or(true, |high| value <= high)
    }
}

/// Sentence length bins, in words.
pub const SENTENCE_BINS: [Bin; 8] = [
    Bin::new("1-5", 1, Some(5)),
    Bin::new("6-10", 6, Some(10)),
    Bin::new("11-15", 11, Some(15)),
    Bin::new("16-20", 16, Some(20)),
    Bin::new("21-30", 21, Some(30)),
    Bin::new("31-50", 31, Some(50)),
    Bin::new("51-100", 51, Some(100)),
    Bin::new("100+", 101, None),
];

/// Bins for the number of samples a duplicate sentence appears in.
pub const DUPLICATE_BINS: [Bin; 6] = [
    Bin::new("2x", 2, Some(2)),
    Bin::new("3-5x", 3, Some(5)),
    Bin::new("6-10x", 6, Some(10)),
    Bin::new("11-50x", 11, Some(50)),
    Bin::new("51-100x", 51, Some(100)),
    Bin::new("100+x", 101, None),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub label: &'static str,
    pub count: usize,
    /// share of *all* values, including those outside every bin.
    pub share: f64,
}

/// Fixed-edge histogram.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Histogram {
    pub buckets: Vec<Bucket>,
    pub total: usize,
}

impl Histogram {
    pub fn new<I>(values: I, bins: &[Bin]) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut counts = vec![0usize; bins.len()];
        let mut total = 0;
        for value in values {
            total += 1;
            if let Some(idx) = bins.iter().position(|bin| bin.contains(value)) {
                counts[idx] += 1;
            }
        }

        let buckets = bins
            .iter()
            .zip(counts)
            .map(|(bin, count)| Bucket {
                label: bin.label,
                count,
                share: ratio(count as u64, total as u64),
            })
            .collect();

        Self { buckets, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_zero_denominator() {
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(5, 0), 0.0);
        assert_eq!(ratio(1, 4), 0.25);
    }

    #[test]
    fn summary_empty() {
        assert_eq!(Summary::new(&[]), Summary::default());
        assert_eq!(Summary::new(&[]).mean, 0.0);
    }

    #[test]
    fn summary_odd() {
        let s = Summary::new(&[3, 1, 2]);
        assert_eq!(s.count, 3);
        assert_eq!(s.min, 1);
        assert_eq!(s.max, 3);
        assert_eq!(s.mean, 2.0);
        assert_eq!(s.median, 2.0);
        assert!((s.std - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn summary_even() {
        let s = Summary::new(&[4, 1, 3, 2]);
        assert_eq!(s.median, 2.5);
        assert_eq!(s.mean, 2.5);
        // population std
        assert!((s.std - 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn summary_order_independent() {
        assert_eq!(Summary::new(&[5, 9, 1, 1]), Summary::new(&[1, 1, 9, 5]));
    }

    #[test]
    fn histogram_sentence_bins() {
        let h = Histogram::new(vec![0, 1, 5, 6, 20, 100, 101, 5000], &SENTENCE_BINS);
        let counts: Vec<usize> = h.buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![2, 1, 0, 1, 0, 0, 1, 2]);
        assert_eq!(h.total, 8);
        // the zero-length sentence is in no bin but still in the denominator
        assert_eq!(h.buckets[0].share, 0.25);
    }

    #[test]
    fn histogram_empty() {
        let h = Histogram::new(Vec::new(), &DUPLICATE_BINS);
        assert_eq!(h.total, 0);
        assert!(h.buckets.iter().all(|b| b.count == 0 && b.share == 0.0));
    }
}

//! Character frequencies.
use super::Extract;
use crate::processing::Counts;

/// Counts every unicode scalar value of a sample, whitespace included.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharExtractor;

impl Extract for CharExtractor {
    type Partial = Counts<char>;

    fn extract(&self, sample: &str) -> Counts<char> {
        sample.chars().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_all_chars() {
        let c = CharExtractor.extract("aé a\n");
        assert_eq!(c.get(&'a'), 2);
        assert_eq!(c.get(&'é'), 1);
        assert_eq!(c.get(&' '), 1);
        assert_eq!(c.get(&'\n'), 1);
        assert_eq!(c.total(), 5);
    }

    #[test]
    fn empty_sample() {
        assert!(CharExtractor.extract("").is_empty());
    }
}

//! Sentence/paragraph lengths and dialogue measurements.
use lazy_static::lazy_static;
use regex::Regex;

use super::Extract;
use crate::tokenize;

lazy_static! {
    static ref DOUBLE_QUOTED: Regex = Regex::new(r#""[^"]*""#).unwrap();
    // at least 2 chars between quotes, so that most contractions are skipped.
    // Apostrophe pairs such as "the dogs' and cats' bowls" still match.
    static ref SINGLE_QUOTED: Regex = Regex::new(r"'[^']{2,}'").unwrap();
}

/// Structural partial result. Also used as the accumulator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureMeasures {
    /// word count of each sentence
    pub sentence_lengths: Vec<usize>,
    /// sentence count of each paragraph
    pub paragraph_lengths: Vec<usize>,
    /// characters between matched quotes, quotes excluded
    pub quoted_chars: usize,
    pub total_chars: usize,
    /// every `"` character
    pub double_quotes: usize,
    /// two per single-quoted span
    pub single_quotes: usize,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StructureExtractor;

impl StructureExtractor {
    /// returns (span count, enclosed character count)
    fn quoted(re: &Regex, sample: &str) -> (usize, usize) {
        re.find_iter(sample).fold((0, 0), |(spans, chars), m| {
            (spans + 1, chars + m.as_str().chars().count() - 2)
        })
    }
}

impl Extract for StructureExtractor {
    type Partial = StructureMeasures;

    fn extract(&self, sample: &str) -> StructureMeasures {
        let sentence_lengths = tokenize::sentences(sample)
            .into_iter()
            .map(|sentence| tokenize::words(sentence).count())
            .collect();

        let paragraph_lengths = tokenize::paragraphs(sample)
            .map(|paragraph| tokenize::sentences(paragraph).len())
            .collect();

        let (_, double_chars) = Self::quoted(&DOUBLE_QUOTED, sample);
        let (single_spans, single_chars) = Self::quoted(&SINGLE_QUOTED, sample);

        StructureMeasures {
            sentence_lengths,
            paragraph_lengths,
            quoted_chars: double_chars + single_chars,
            total_chars: sample.chars().count(),
            double_quotes: sample.matches('"').count(),
            single_quotes: single_spans * 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_quotes() {
        let m = StructureExtractor.extract(r#"He said "hello there" to her."#);
        assert_eq!(m.quoted_chars, 11);
        assert_eq!(m.double_quotes, 2);
        assert_eq!(m.single_quotes, 0);
        assert_eq!(m.total_chars, 29);
    }

    #[test]
    fn unmatched_double_quote() {
        let m = StructureExtractor.extract(r#"a "b" c "d"#);
        assert_eq!(m.quoted_chars, 1);
        assert_eq!(m.double_quotes, 3);
    }

    #[test]
    fn single_quotes_skip_contractions() {
        let m = StructureExtractor.extract("She said 'go away' but didn't.");
        assert_eq!(m.quoted_chars, 7);
        assert_eq!(m.single_quotes, 2);

        let m = StructureExtractor.extract("I don't know.");
        assert_eq!(m.quoted_chars, 0);
        assert_eq!(m.single_quotes, 0);
    }

    #[test]
    fn apostrophe_pairs_match() {
        // reproduced as-is: two apostrophes bound a "quote"
        let m = StructureExtractor.extract("the dogs' and cats' bowls");
        assert_eq!(m.single_quotes, 2);
        assert_eq!(m.quoted_chars, " and cats".len());
    }

    #[test]
    fn lengths() {
        let m = StructureExtractor.extract("One two three. Four five!\n\nSix? Seven eight.\nNine");
        assert_eq!(m.sentence_lengths, vec![3, 2, 1, 2, 1]);
        assert_eq!(m.paragraph_lengths, vec![2, 3]);
    }

    #[test]
    fn empty() {
        assert_eq!(StructureExtractor.extract(""), StructureMeasures::default());
    }
}

//! Tokenization primitives shared by every extractor.
//!
//! All functions here are total over arbitrary text and only borrow from their input.
//!
//! - a word is a run of ascii letters, optionally followed by an apostrophe and more letters
//!   (so that `don't` is one token),
//! - a sentence ends at a `.`, `!` or `?` that is immediately followed by whitespace,
//! - paragraphs are separated by blank lines.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"[a-zA-Z]+(?:'[a-zA-Z]+)?").unwrap();
    static ref SENTENCE_END: Regex = Regex::new(r"[.!?]\s+").unwrap();
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n").unwrap();
    static ref NUMBER: Regex = Regex::new(r"\b\d+\b").unwrap();
}

/// Iterate over word tokens, in order of appearance. Case is preserved.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(text).map(|m| m.as_str())
}

/// Split text into trimmed, non-empty sentences.
///
/// The terminating punctuation stays with its sentence, the whitespace that follows it is dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_END.find_iter(text) {
        // punctuation is a single ascii byte
        let end = boundary.start() + 1;
        push_trimmed(&mut sentences, &text[start..end]);
        start = boundary.end();
    }
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, sentence: &'a str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
}

/// Iterate over trimmed, non-empty paragraphs.
pub fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
}

/// Count standalone digit runs (`42` counts, `a42` does not).
pub fn count_numbers(text: &str) -> usize {
    NUMBER.find_iter(text).count()
}

/// `true` if the token has at least one letter and every letter is upper case.
pub fn is_upper(token: &str) -> bool {
    let mut letters = token.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_contractions() {
        let w: Vec<&str> = words("I don't know, it's 42 o'clock-ish.").collect();
        assert_eq!(w, vec!["I", "don't", "know", "it's", "o'clock", "ish"]);
    }

    #[test]
    fn words_trailing_apostrophe() {
        let w: Vec<&str> = words("the dogs' bone 'quoted'").collect();
        assert_eq!(w, vec!["the", "dogs", "bone", "quoted"]);
    }

    #[test]
    fn words_idempotent() {
        let text = "Some text, with don't and DON'T and émigré.";
        let first: Vec<&str> = words(text).collect();
        let second: Vec<&str> = words(text).collect();
        assert_eq!(first, second);
        assert_eq!(sentences(text), sentences(text));
    }

    #[test]
    fn sentences_simple() {
        let s = sentences("Hello there. How are you?  Fine!\nGood.");
        assert_eq!(s, vec!["Hello there.", "How are you?", "Fine!", "Good."]);
    }

    #[test]
    fn sentences_no_whitespace_after() {
        // no split on "3.5" or on a final period
        let s = sentences("It costs 3.5 dollars.");
        assert_eq!(s, vec!["It costs 3.5 dollars."]);
    }

    #[test]
    fn sentences_repeated_punctuation() {
        let s = sentences("Wow!!! Really???");
        assert_eq!(s, vec!["Wow!!!", "Really???"]);
    }

    #[test]
    fn sentences_empty() {
        assert!(sentences("").is_empty());
        assert!(sentences("   \n ").is_empty());
    }

    #[test]
    fn paragraphs_blank_lines() {
        let p: Vec<&str> = paragraphs("first para.\n\nsecond para.\n   \n\nthird.\n").collect();
        assert_eq!(p, vec!["first para.", "second para.", "third."]);
    }

    #[test]
    fn numbers() {
        assert_eq!(count_numbers("1 and 22 but not a3 or 4b, 5.6"), 4);
        assert_eq!(count_numbers("none here"), 0);
    }

    #[test]
    fn upper() {
        assert!(is_upper("NASA"));
        assert!(is_upper("DON'T"));
        assert!(!is_upper("Nasa"));
        assert!(!is_upper("'"));
    }
}

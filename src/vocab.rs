//! Closed word sets.
//!
//! This module holds the fixed reference vocabularies used by the analyses:
//! the common english words used to compute the out-of-vocabulary rate,
//! and the dialogue verbs counted by the n-gram extractor.
use std::collections::HashSet;

use lazy_static::lazy_static;

/// Common english words, lower-cased.
///
/// This is a small stand-in for a top-10k list, so out-of-vocabulary rates are high.
const COMMON_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i",
    "it", "for", "not", "on", "with", "he", "as", "you", "do", "at",
    "this", "but", "his", "by", "from", "they", "we", "say", "her", "she",
    "or", "an", "will", "my", "one", "all", "would", "there", "their", "what",
    "so", "up", "out", "if", "about", "who", "get", "which", "go", "me",
    "when", "make", "can", "like", "time", "no", "just", "him", "know", "take",
    "people", "into", "year", "your", "good", "some", "could", "them", "see", "other",
    "than", "then", "now", "look", "only", "come", "its", "over", "think", "also",
    "back", "after", "use", "two", "how", "our", "work", "first", "well", "way",
    "even", "new", "want", "because", "any", "these", "give", "day", "most", "us",
    "is", "was", "are", "been", "has", "had", "were", "said", "did",
    "may", "being", "does", "done", "got", "goes", "going", "made", "making",
    "man", "woman", "hand", "eye", "head", "face", "thing", "place", "life", "world",
    "house", "room", "door", "night", "water", "long", "little", "own", "old",
    "right", "big", "high", "small", "large", "next", "young", "last", "great", "same",
    "few", "many", "much", "more", "such", "very", "still", "again", "never",
    "always", "often", "here", "where", "why", "down", "off", "away", "before", "through",
    "around", "while", "once", "during", "without", "between", "under", "against", "another", "each",
    "every", "both", "either", "neither", "should", "might", "must", "shall", "need", "seem",
    "let", "keep", "put", "set", "run", "move", "live", "believe", "hold", "bring",
    "happen", "write", "provide", "sit", "stand", "lose", "pay", "meet", "include", "continue",
    "learn", "change", "lead", "understand", "watch", "follow", "stop", "create", "speak", "read",
    "allow", "add", "spend", "grow", "open", "walk", "win", "offer", "remember", "love",
    "consider", "appear", "buy", "wait", "serve", "die", "send", "expect", "build", "stay",
    "fall", "cut", "reach", "kill", "remain", "suggest", "raise", "pass", "sell", "require",
    "report", "decide", "pull", "turn", "ask", "tell", "show", "try", "leave", "call",
    "feel", "begin", "start", "help", "become", "end", "point", "part", "kind",
    "hear", "mean", "find", "play", "something",
    "anything", "nothing", "everything", "someone", "anyone", "everyone", "nobody", "somebody", "everybody",
    "herself", "himself", "itself", "myself", "yourself", "themselves", "ourselves", "though", "although", "however",
    "whether", "rather", "quite", "already", "enough", "too", "perhaps", "maybe", "certainly", "probably",
    "actually", "really", "simply", "almost", "soon", "ago", "yet", "ever",
];

/// Verbs that usually introduce or close a line of dialogue.
const DIALOGUE_VERBS: &[&str] = &[
    "said", "asked", "replied", "answered", "whispered", "shouted",
    "yelled", "screamed", "murmured", "muttered", "exclaimed", "demanded",
    "insisted", "suggested", "added", "continued", "agreed", "admitted",
    "announced", "argued", "began", "begged", "called", "complained",
    "confessed", "cried", "declared", "denied", "explained", "groaned",
    "growled", "hissed", "laughed", "lied", "moaned", "nodded",
    "observed", "offered", "ordered", "pleaded", "promised", "protested",
    "questioned", "repeated", "responded", "sighed", "snapped", "sobbed",
    "stammered", "stated", "urged", "warned", "wondered",
];

lazy_static! {
    /// Reference vocabulary for out-of-vocabulary rates.
    pub static ref COMMON_ENGLISH: HashSet<&'static str> = COMMON_WORDS.iter().copied().collect();

    /// Dialogue tags tracked by [crate::extractors::NgramExtractor].
    pub static ref DIALOGUE_TAGS: HashSet<&'static str> = DIALOGUE_VERBS.iter().copied().collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialogue_tags_size() {
        assert_eq!(DIALOGUE_TAGS.len(), 53);
        assert!(DIALOGUE_TAGS.contains("whispered"));
    }

    #[test]
    fn common_words_lowercase() {
        assert!(COMMON_ENGLISH
            .iter()
            .all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
        assert!(COMMON_ENGLISH.contains("the"));
        assert!(!COMMON_ENGLISH.contains("dragon"));
    }
}

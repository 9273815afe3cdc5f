//! Results must not depend on how samples are split between workers, nor on their order.
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use textscope::extractors::{Extract, NgramExtractor};
use textscope::pipelines::{
    CharFrequency, Lexical, Ngrams, Pipeline, PoolConfig, Quality, Structural, WorkerPool,
};
use textscope::processing::{merge_all, Counts};
use textscope::tokenize;

const WORDS: [&str; 16] = [
    "the", "cat", "said", "DOG", "ran", "asked", "NASA", "away", "don't", "42", "hello", "she",
    "and", "then", "7", "replied",
];
const ENDINGS: [&str; 6] = [". ", "! ", "? ", "!!! ", "\n\n", " "];

fn corpus(rng: &mut StdRng, nb_samples: usize) -> Vec<String> {
    (0..nb_samples)
        .map(|_| {
            let mut sample = String::new();
            for _ in 0..rng.gen_range(1..60) {
                sample.push_str(WORDS.choose(rng).unwrap());
                sample.push_str(ENDINGS.choose(rng).unwrap());
            }
            let mut sample = sample.trim().to_string();
            if rng.gen_bool(0.3) {
                sample.push_str(". \"This quoted line is shared by many samples.\"");
            }
            sample
        })
        .collect()
}

fn configs() -> Vec<PoolConfig> {
    vec![
        PoolConfig::new(1, 1000),
        PoolConfig::new(2, 1),
        PoolConfig::new(3, 7),
        PoolConfig::new(8, 64),
    ]
}

#[test]
fn exact_kinds_are_partition_invariant() {
    let mut rng = StdRng::seed_from_u64(42);
    let samples = corpus(&mut rng, 500);
    let reference_pool = WorkerPool::new(PoolConfig::new(1, 1000)).unwrap();

    let chars = CharFrequency::new(&samples, &reference_pool).run().unwrap();
    let lexical = Lexical::new(&samples, &reference_pool).run().unwrap();
    let ngrams = Ngrams::new(&samples, &reference_pool).run().unwrap();
    let structural = Structural::new(&samples, &reference_pool).run().unwrap();
    let quality = Quality::new(&samples, &reference_pool).run().unwrap();

    for config in configs() {
        let pool = WorkerPool::new(config).unwrap();
        let mut shuffled = samples.clone();
        shuffled.shuffle(&mut rng);

        let other = CharFrequency::new(&shuffled, &pool).run().unwrap();
        assert_eq!(other.counts, chars.counts);

        let other = Lexical::new(&shuffled, &pool).run().unwrap();
        assert_eq!(other.word_counts, lexical.word_counts);
        assert_eq!(other.type_token_ratio, lexical.type_token_ratio);
        assert_eq!(other.top_words, lexical.top_words);

        let other = Ngrams::new(&shuffled, &pool).run().unwrap();
        assert_eq!(other.dialogue_tags, ngrams.dialogue_tags);

        let other = Structural::new(&shuffled, &pool).run().unwrap();
        assert_eq!(other.sentences.count, structural.sentences.count);
        assert_eq!(other.sentences.min, structural.sentences.min);
        assert_eq!(other.sentences.max, structural.sentences.max);
        assert_eq!(other.sentences.median, structural.sentences.median);
        assert_eq!(other.paragraphs.median, structural.paragraphs.median);
        assert_eq!(other.sentence_histogram, structural.sentence_histogram);
        assert_eq!(other.quoted_chars, structural.quoted_chars);
        assert_eq!(other.total_chars, structural.total_chars);
        assert_eq!(other.double_quotes, structural.double_quotes);

        let other = Quality::new(&shuffled, &pool).run().unwrap();
        assert_eq!(other.caps_words, quality.caps_words);
        assert_eq!(other.punctuation, quality.punctuation);
        assert_eq!(other.numbers, quality.numbers);
        assert_eq!(other.tokens, quality.tokens);
        assert_eq!(other.duplicates, quality.duplicates);
    }
}

#[test]
fn shared_quote_is_a_duplicate() {
    let mut rng = StdRng::seed_from_u64(7);
    let samples = corpus(&mut rng, 200);
    let with_quote = samples
        .iter()
        .filter(|s| s.ends_with("\"This quoted line is shared by many samples.\""))
        .count() as u64;
    assert!(with_quote >= 2);

    let pool = WorkerPool::new(PoolConfig::new(4, 16)).unwrap();
    let report = Quality::new(&samples, &pool).run().unwrap();
    assert_eq!(
        report
            .duplicates
            .count("\"this quoted line is shared by many samples.\""),
        with_quote
    );
}

#[test]
fn truncated_ngrams_undercount() {
    let mut rng = StdRng::seed_from_u64(1234);
    let samples = corpus(&mut rng, 300);

    let exact = NgramExtractor::with_top_k(usize::MAX);
    let per_sample: Vec<Counts<(String, String)>> =
        samples.iter().map(|s| exact.extract(s).bigrams).collect();
    let truth: Counts<(String, String)> = merge_all(per_sample.clone());

    for top_k in [1, 3, 10] {
        // what survives each sample's own truncation, summed over samples
        let kept: Vec<Counts<(String, String)>> = per_sample
            .iter()
            .map(|counts| counts.clone().truncate_top(top_k))
            .collect();
        let lower: Counts<(String, String)> = merge_all(kept.clone());

        let pool = WorkerPool::new(PoolConfig::new(3, 5)).unwrap();
        let report = Ngrams::new(&samples, &pool).with_top_k(top_k).run().unwrap();
        assert_eq!(report.bigrams, lower);

        for (bigram, count) in report.bigrams.iter() {
            let held_in = kept.iter().filter(|c| c.get(bigram) > 0).count() as u64;
            let exact_where_held: u64 = per_sample
                .iter()
                .zip(&kept)
                .filter(|(_, k)| k.get(bigram) > 0)
                .map(|(c, _)| c.get(bigram))
                .sum();

            assert!(*count >= held_in);
            assert_eq!(*count, exact_where_held);
            assert!(*count <= truth.get(bigram));
        }
    }

    // nothing is cut when top-k exceeds every sample's n-gram count
    let pool = WorkerPool::new(PoolConfig::new(2, 10)).unwrap();
    let report = Ngrams::new(&samples, &pool).with_top_k(10_000).run().unwrap();
    assert_eq!(report.bigrams, truth);
}

#[test]
fn frequent_key_is_not_lost() {
    // "said the" tops every sample, so truncation never cuts it
    let samples: Vec<String> = (0..40)
        .map(|i| format!("said the said the said the word{} x{}", "a".repeat(i % 7), i))
        .collect();
    let key = ("said".to_string(), "the".to_string());

    for top_k in [1, 2, 5] {
        let pool = WorkerPool::new(PoolConfig::new(4, 3)).unwrap();
        let report = Ngrams::new(&samples, &pool).with_top_k(top_k).run().unwrap();
        assert_eq!(report.bigrams.get(&key), 3 * 40);
    }
}

#[test]
fn tokenization_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(99);
    for sample in corpus(&mut rng, 50) {
        let first: Vec<&str> = tokenize::words(&sample).collect();
        let second: Vec<&str> = tokenize::words(&sample).collect();
        assert_eq!(first, second);
        assert_eq!(tokenize::sentences(&sample), tokenize::sentences(&sample));
    }
}

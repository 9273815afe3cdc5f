/*! Report rendering

Plain text tables for every report, written to any [Write]r.
Rankings always come from [crate::processing::Counts::most_common], so ties are broken by key.
!*/
use std::io::{self, Write};

use serde::Serialize;

use crate::error::Error;
use crate::pipelines::{CharReport, LexicalReport, NgramReport, QualityReport, StructuralReport};
use crate::processing::{ratio, Histogram, Summary};

/// Ranks used for the Zipf check.
pub const ZIPF_RANKS: [usize; 7] = [1, 2, 5, 10, 20, 50, 100];
/// Number of words in the top words table.
pub const TOP_WORDS_SHOWN: usize = 50;
/// Number of repeated phrases shown.
pub const REPEATED_PHRASES_SHOWN: usize = 30;
/// Duplicate sentences longer than this are truncated.
pub const SENTENCE_DISPLAY_LEN: usize = 60;

const RULE_WIDTH: usize = 80;

pub fn write_header<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    writeln!(w, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(w, "{}", title.to_uppercase())?;
    writeln!(w, "{}", "=".repeat(RULE_WIDTH))
}

fn write_subheader<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    writeln!(w, "\n--- {} ---", title)
}

fn write_rule<W: Write>(w: &mut W, width: usize) -> io::Result<()> {
    writeln!(w, "{}", "-".repeat(width))
}

/// `1234567` → `1,234,567`
pub fn grouped(n: u64) -> String {
    let digits = n.to_string();
    let first = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx != 0 && (idx + 3 - first) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn percent(numerator: u64, denominator: u64) -> f64 {
    100.0 * ratio(numerator, denominator)
}

/// Readable name for whitespace and control characters.
pub fn char_name(c: char) -> String {
    match c {
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        ' ' => "SPACE".to_string(),
        '\r' => "\\r".to_string(),
        c if c.is_control() => c.escape_debug().to_string(),
        c => c.to_string(),
    }
}

/// Truncates `sentence` to [SENTENCE_DISPLAY_LEN] characters, marking the cut with `...`.
pub fn truncate_sentence(sentence: &str) -> String {
    if sentence.chars().count() > SENTENCE_DISPLAY_LEN {
        let mut short: String = sentence.chars().take(SENTENCE_DISPLAY_LEN).collect();
        short.push_str("...");
        short
    } else {
        sentence.to_string()
    }
}

pub fn write_chars<W: Write>(w: &mut W, report: &CharReport) -> io::Result<()> {
    write_header(w, "Character Frequency")?;
    writeln!(w, "\nTotal unique chars: {}", grouped(report.unique_chars as u64))?;
    writeln!(w, "Total chars: {}\n", grouped(report.total_chars))?;
    writeln!(w, "{:<8} | {:>12} | {:>6}", "Char", "Count", "%")?;
    write_rule(w, 32)?;
    for (c, count) in report.counts.most_common() {
        writeln!(
            w,
            "{:<8} | {:>12} | {:>5.2}%",
            char_name(*c),
            grouped(count),
            percent(count, report.total_chars)
        )?;
    }
    Ok(())
}

pub fn write_lexical<W: Write>(w: &mut W, report: &LexicalReport) -> io::Result<()> {
    write_header(w, "Lexical Analysis")?;
    writeln!(w, "\nTotal words:      {}", grouped(report.total_words))?;
    writeln!(
        w,
        "Vocabulary size:  {} unique words",
        grouped(report.vocab_size as u64)
    )?;
    writeln!(w, "Type-token ratio: {:.6}", report.type_token_ratio)?;
    writeln!(
        w,
        "Hapax legomena:   {} ({:.1}% of vocabulary)",
        grouped(report.hapax_count as u64),
        report.hapax_share * 100.0
    )?;
    writeln!(
        w,
        "OOV rate:         {:.2}% (vs top common words)",
        report.oov_rate * 100.0
    )?;

    write_subheader(w, &format!("Top {} Words", TOP_WORDS_SHOWN))?;
    writeln!(w, "{:<6} {:<20} {:>12} {:>8}", "Rank", "Word", "Count", "%")?;
    write_rule(w, 50)?;
    for (rank, (word, count)) in report.top_words.iter().take(TOP_WORDS_SHOWN).enumerate() {
        writeln!(
            w,
            "{:<6} {:<20} {:>12} {:>7.2}%",
            rank + 1,
            word,
            grouped(*count),
            percent(*count, report.total_words)
        )?;
    }

    write_subheader(w, "Zipf's Law Check (rank × frequency should be ~constant)")?;
    writeln!(w, "{:<6} {:<15} {:>12} {:>15}", "Rank", "Word", "Freq", "Rank×Freq")?;
    write_rule(w, 50)?;
    for rank in ZIPF_RANKS {
        if let Some((word, freq)) = report.top_words.get(rank - 1) {
            writeln!(
                w,
                "{:<6} {:<15} {:>12} {:>15}",
                rank,
                word,
                grouped(*freq),
                grouped(rank as u64 * freq)
            )?;
        }
    }
    Ok(())
}

pub fn write_ngrams<W: Write>(w: &mut W, report: &NgramReport) -> io::Result<()> {
    write_header(w, "N-gram Analysis")?;

    write_subheader(w, &format!("Top {} Word Bigrams", report.top_bigrams.len()))?;
    writeln!(w, "{:<6} {:<30} {:>12}", "Rank", "Bigram", "Count")?;
    write_rule(w, 50)?;
    for (rank, ((a, b), count)) in report.top_bigrams.iter().enumerate() {
        let bigram = format!("{} {}", a, b);
        writeln!(w, "{:<6} {:<30} {:>12}", rank + 1, bigram, grouped(*count))?;
    }

    write_subheader(w, &format!("Top {} Word Trigrams", report.top_trigrams.len()))?;
    writeln!(w, "{:<6} {:<40} {:>12}", "Rank", "Trigram", "Count")?;
    write_rule(w, 55)?;
    for (rank, ((a, b, c), count)) in report.top_trigrams.iter().enumerate() {
        let trigram = format!("{} {} {}", a, b, c);
        writeln!(w, "{:<6} {:<40} {:>12}", rank + 1, trigram, grouped(*count))?;
    }

    write_subheader(w, "Dialogue Tags Frequency")?;
    writeln!(w, "{:<15} {:>12} {:>8}", "Tag", "Count", "%")?;
    write_rule(w, 40)?;
    for (tag, count) in report.dialogue_tags.most_common() {
        writeln!(
            w,
            "{:<15} {:>12} {:>7.1}%",
            tag,
            grouped(count),
            report.tag_share(tag) * 100.0
        )?;
    }
    writeln!(w, "\nTotal dialogue tags: {}", grouped(report.total_tags))?;

    write_subheader(w, "Repeated Phrases (trigrams appearing 100+ times)")?;
    let nb_phrases = report.repeated_phrases.len();
    writeln!(w, "Found {} repeated phrases", grouped(nb_phrases as u64))?;
    writeln!(w, "\n{:<6} {:<45} {:>10}", "Rank", "Phrase", "Count")?;
    write_rule(w, 65)?;
    for (rank, ((a, b, c), count)) in report
        .repeated_phrases
        .iter()
        .take(REPEATED_PHRASES_SHOWN)
        .enumerate()
    {
        let phrase = format!("{} {} {}", a, b, c);
        writeln!(w, "{:<6} {:<45} {:>10}", rank + 1, phrase, grouped(*count))?;
    }
    if nb_phrases > REPEATED_PHRASES_SHOWN {
        writeln!(w, "... and {} more", nb_phrases - REPEATED_PHRASES_SHOWN)?;
    }
    Ok(())
}

fn write_summary<W: Write>(w: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(w, "Min:    {}", grouped(summary.min as u64))?;
    writeln!(w, "Max:    {}", grouped(summary.max as u64))?;
    writeln!(w, "Mean:   {:.1}", summary.mean)?;
    writeln!(w, "Median: {:.1}", summary.median)?;
    writeln!(w, "Std:    {:.1}", summary.std)
}

pub fn write_structural<W: Write>(w: &mut W, report: &StructuralReport) -> io::Result<()> {
    write_header(w, "Structural Analysis")?;

    write_subheader(w, "Sentence Length (in words)")?;
    writeln!(w, "Total sentences: {}", grouped(report.sentences.count as u64))?;
    write_summary(w, &report.sentences)?;

    write_subheader(w, "Paragraph Length (in sentences)")?;
    writeln!(w, "Total paragraphs: {}", grouped(report.paragraphs.count as u64))?;
    write_summary(w, &report.paragraphs)?;

    write_subheader(w, "Dialogue Analysis")?;
    writeln!(
        w,
        "Dialogue ratio:     {:.1}% of text in quotes",
        report.dialogue_ratio * 100.0
    )?;
    writeln!(w, "Quoted characters:  {}", grouped(report.quoted_chars as u64))?;
    writeln!(w, "Total characters:   {}", grouped(report.total_chars as u64))?;

    write_subheader(w, "Quote Style")?;
    writeln!(
        w,
        "Double quotes (\"):  {} ({:.1}%)",
        grouped(report.double_quotes as u64),
        report.double_quote_share * 100.0
    )?;
    writeln!(
        w,
        "Single quotes ('):  {} ({:.1}%)",
        grouped(report.single_quotes as u64),
        report.single_quote_share * 100.0
    )?;

    write_subheader(w, "Sentence Length Distribution")?;
    writeln!(w, "{:<12} {:>12} {:>8}", "Range", "Count", "%")?;
    write_rule(w, 35)?;
    write_histogram(w, &report.sentence_histogram, true)
}

/// Writes one line per bucket. Empty buckets are skipped unless `show_empty` is set.
fn write_histogram<W: Write>(w: &mut W, histogram: &Histogram, show_empty: bool) -> io::Result<()> {
    for bucket in histogram
        .buckets
        .iter()
        .filter(|bucket| show_empty || bucket.count > 0)
    {
        writeln!(
            w,
            "{:<12} {:>12} {:>7.1}%",
            bucket.label,
            grouped(bucket.count as u64),
            bucket.share * 100.0
        )?;
    }
    Ok(())
}

pub fn write_quality<W: Write>(w: &mut W, report: &QualityReport) -> io::Result<()> {
    write_header(w, "Quality / Anomaly Detection")?;

    write_subheader(w, "Unusual Punctuation Patterns")?;
    if report.punctuation.is_empty() {
        writeln!(w, "No unusual punctuation patterns found.")?;
    } else {
        writeln!(w, "{:<15} {:>12}", "Pattern", "Count")?;
        write_rule(w, 30)?;
        for (pattern, count) in report.punctuation.most_common() {
            writeln!(w, "{:<15} {:>12}", pattern, grouped(count))?;
        }
    }

    write_subheader(w, "All-Caps Words (3+ chars)")?;
    writeln!(w, "Total all-caps occurrences: {}", grouped(report.caps_total))?;
    writeln!(w, "Unique all-caps words: {}", grouped(report.caps_unique as u64))?;
    if !report.top_caps_words.is_empty() {
        writeln!(w, "\nTop {} all-caps words:", report.top_caps_words.len())?;
        writeln!(w, "{:<20} {:>12}", "Word", "Count")?;
        write_rule(w, 35)?;
        for (word, count) in &report.top_caps_words {
            writeln!(w, "{:<20} {:>12}", word, grouped(*count))?;
        }
    }

    write_subheader(w, "Number Density")?;
    writeln!(w, "Numeric tokens:  {}", grouped(report.numbers as u64))?;
    writeln!(w, "Total tokens:    {}", grouped(report.tokens as u64))?;
    writeln!(w, "Number density:  {:.3}%", report.number_density * 100.0)?;

    write_subheader(w, "Duplicate Sentences (appearing in 2+ samples)")?;
    writeln!(
        w,
        "Total duplicate sentences: {}",
        grouped(report.duplicate_count as u64)
    )?;
    if !report.top_duplicates.is_empty() {
        writeln!(w, "\nTop {} most repeated sentences:", report.top_duplicates.len())?;
        writeln!(w, "{:>8}  Sentence", "Count")?;
        write_rule(w, 70)?;
        for (sentence, count) in &report.top_duplicates {
            writeln!(w, "{:>8}  {}", count, truncate_sentence(sentence))?;
        }

        writeln!(w, "\nDuplicate frequency distribution:")?;
        writeln!(w, "{:<12} {:>12}", "Frequency", "Sentences")?;
        write_rule(w, 25)?;
        for bucket in report
            .duplicate_distribution
            .buckets
            .iter()
            .filter(|bucket| bucket.count > 0)
        {
            writeln!(w, "{:<12} {:>12}", bucket.label, grouped(bucket.count as u64))?;
        }
    }
    Ok(())
}

/// Pretty JSON rendering of any report.
pub fn write_json<W: Write, T: Serialize>(w: &mut W, report: &T) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut *w, report)?;
    writeln!(w)?;
    Ok(())
}

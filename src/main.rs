//! # Textscope
//!
//! Parallel statistics over a text corpus.
//!
//! The corpus is a single file of samples separated by `<BREAK>`. Every analysis fans the samples
//! out to a pool of workers, merges their partial results and prints a report.
//!
//! ## Getting started
//!
//! ```sh
//! textscope 0.1.0
//! parallel corpus statistics.
//!
//! USAGE:
//!     textscope <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     all           Run lexical, n-gram, structural and quality analyses
//!     chars         Character frequencies
//!     help          Prints this message or the help of the given subcommand(s)
//!     lexical       Vocabulary, diversity and out-of-vocabulary rate
//!     ngrams        Bigrams, trigrams, dialogue tags and repeated phrases
//!     quality       Punctuation anomalies, all-caps words, numbers and duplicate sentences
//!     structural    Sentence/paragraph lengths and dialogue
//! ```
//!
//! Set `RUST_LOG=info` to get progress and timings.
use std::io::{self, Write};
use std::time::Instant;

use serde::Serialize;
use structopt::StructOpt;

use textscope::display;
use textscope::error::Error;
use textscope::io::load_samples;
use textscope::pipelines::{
    CharFrequency, Lexical, LexicalReport, NgramReport, Ngrams, Pipeline, Quality, QualityReport,
    Structural, StructuralReport, WorkerPool,
};

#[macro_use]
extern crate log;

mod cli;

/// Reports of the `all` command, keyed by analysis.
#[derive(Debug, Default, Serialize)]
struct Reports {
    #[serde(skip_serializing_if = "Option::is_none")]
    lexical: Option<LexicalReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ngrams: Option<NgramReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    structural: Option<StructuralReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quality: Option<QualityReport>,
}

/// Runs `pipeline`, logging how long it took.
fn timed<T, P: Pipeline<T>>(pipeline: &P) -> Result<T, Error> {
    info!("Running {} analysis", pipeline.name());
    let start = Instant::now();
    let report = pipeline.run()?;
    info!(
        "[{}] completed in {:.1}s",
        pipeline.name(),
        start.elapsed().as_secs_f64()
    );
    Ok(report)
}

/// Loads the corpus and builds the worker pool.
fn setup(common: &cli::Common) -> Result<(Vec<String>, WorkerPool), Error> {
    let start = Instant::now();
    let samples = load_samples(&common.input)?;
    info!(
        "Loaded {} samples in {:.1}s",
        samples.len(),
        start.elapsed().as_secs_f64()
    );
    let pool = WorkerPool::new(common.pool_config())?;
    info!("Using {} workers", pool.workers());
    Ok((samples, pool))
}

/// Writes `report` as JSON or as text tables.
fn emit<T, F>(json: bool, report: &T, write_text: F) -> Result<(), Error>
where
    T: Serialize,
    F: FnOnce(&mut io::StdoutLock<'_>, &T) -> io::Result<()>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        display::write_json(&mut out, report)?;
    } else {
        write_text(&mut out, report)?;
    }
    out.flush()?;
    Ok(())
}

fn run_all(opt: &cli::All) -> Result<(), Error> {
    let analyses = opt.analyses()?;
    let (samples, pool) = setup(&opt.common)?;
    let total = Instant::now();
    let mut reports = Reports::default();

    for analysis in analyses {
        match analysis {
            cli::Analysis::Lexical => {
                reports.lexical = Some(timed(&Lexical::new(&samples, &pool))?);
            }
            cli::Analysis::Ngrams => {
                let ngrams = Ngrams::new(&samples, &pool)
                    .with_top_k(opt.ngrams.top_k)
                    .with_top(opt.ngrams.top);
                reports.ngrams = Some(timed(&ngrams)?);
            }
            cli::Analysis::Structural => {
                reports.structural = Some(timed(&Structural::new(&samples, &pool))?);
            }
            cli::Analysis::Quality => {
                reports.quality = Some(timed(&Quality::new(&samples, &pool))?);
            }
        }
    }
    info!(
        "All analyses completed in {:.1}s",
        total.elapsed().as_secs_f64()
    );

    emit(opt.common.json, &reports, |w, reports| {
        if let Some(report) = &reports.lexical {
            display::write_lexical(w, report)?;
            writeln!(w)?;
        }
        if let Some(report) = &reports.ngrams {
            display::write_ngrams(w, report)?;
            writeln!(w)?;
        }
        if let Some(report) = &reports.structural {
            display::write_structural(w, report)?;
            writeln!(w)?;
        }
        if let Some(report) = &reports.quality {
            display::write_quality(w, report)?;
        }
        Ok(())
    })
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Textscope::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Textscope::Chars(c) => {
            let (samples, pool) = setup(&c)?;
            let report = timed(&CharFrequency::new(&samples, &pool))?;
            emit(c.json, &report, |w, r| display::write_chars(w, r))?;
        }
        cli::Textscope::Lexical(c) => {
            let (samples, pool) = setup(&c)?;
            let report = timed(&Lexical::new(&samples, &pool))?;
            emit(c.json, &report, |w, r| display::write_lexical(w, r))?;
        }
        cli::Textscope::Ngrams(n) => {
            let (samples, pool) = setup(&n.common)?;
            let ngrams = Ngrams::new(&samples, &pool)
                .with_top_k(n.ngrams.top_k)
                .with_top(n.ngrams.top);
            let report = timed(&ngrams)?;
            emit(n.common.json, &report, |w, r| display::write_ngrams(w, r))?;
        }
        cli::Textscope::Structural(c) => {
            let (samples, pool) = setup(&c)?;
            let report = timed(&Structural::new(&samples, &pool))?;
            emit(c.json, &report, |w, r| display::write_structural(w, r))?;
        }
        cli::Textscope::Quality(c) => {
            let (samples, pool) = setup(&c)?;
            let report = timed(&Quality::new(&samples, &pool))?;
            emit(c.json, &report, |w, r| display::write_quality(w, r))?;
        }
        cli::Textscope::All(a) => run_all(&a)?,
    };
    Ok(())
}

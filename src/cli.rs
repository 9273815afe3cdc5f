//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;
use std::str::FromStr;

use structopt::StructOpt;
use textscope::error::Error;
use textscope::extractors::DEFAULT_TOP_K;
use textscope::pipelines::{PoolConfig, TOP_NGRAMS};

#[derive(Debug, StructOpt)]
#[structopt(name = "textscope", about = "parallel corpus statistics.")]
/// Holds every command that is callable by the `textscope` command.
pub enum Textscope {
    #[structopt(about = "Character frequencies")]
    Chars(Common),
    #[structopt(about = "Vocabulary, diversity and out-of-vocabulary rate")]
    Lexical(Common),
    #[structopt(about = "Bigrams, trigrams, dialogue tags and repeated phrases")]
    Ngrams(Ngrams),
    #[structopt(about = "Sentence/paragraph lengths and dialogue")]
    Structural(Common),
    #[structopt(about = "Punctuation anomalies, all-caps words, numbers and duplicate sentences")]
    Quality(Common),
    #[structopt(about = "Run lexical, n-gram, structural and quality analyses")]
    All(All),
}

#[derive(Debug, StructOpt)]
/// Options shared by every command.
pub struct Common {
    #[structopt(
        short = "i",
        long = "input",
        parse(from_os_str),
        default_value = "data.txt",
        help = "corpus file, samples separated by <BREAK>. Can be gzipped (.gz)."
    )]
    pub input: PathBuf,
    #[structopt(
        short = "w",
        long = "workers",
        help = "number of workers. Default is the number of available CPUs."
    )]
    pub workers: Option<usize>,
    #[structopt(
        long = "chunk-size",
        default_value = "1000",
        help = "number of samples dispatched at once to a worker."
    )]
    pub chunk_size: usize,
    #[structopt(long = "json", help = "print reports as JSON")]
    pub json: bool,
}

impl Common {
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(
            self.workers.unwrap_or_else(PoolConfig::available_workers),
            self.chunk_size,
        )
    }
}

#[derive(Debug, StructOpt)]
/// N-gram specific options.
pub struct NgramOptions {
    #[structopt(
        short = "k",
        long = "top-k",
        default_value = "100",
        help = "number of n-grams kept per sample. Higher is more accurate but uses more memory."
    )]
    pub top_k: usize,
    #[structopt(
        short = "n",
        long = "top",
        default_value = "50",
        help = "number of bigrams/trigrams to report"
    )]
    pub top: usize,
}

impl Default for NgramOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            top: TOP_NGRAMS,
        }
    }
}

#[derive(Debug, StructOpt)]
pub struct Ngrams {
    #[structopt(flatten)]
    pub common: Common,
    #[structopt(flatten)]
    pub ngrams: NgramOptions,
}

#[derive(Debug, StructOpt)]
/// All command and parameters.
///
/// ```sh
/// textscope all -i corpus.txt.gz -s ngrams quality
/// ```
pub struct All {
    #[structopt(flatten)]
    pub common: Common,
    #[structopt(flatten)]
    pub ngrams: NgramOptions,
    #[structopt(
        short = "s",
        long = "skip",
        help = "analyses to skip (lexical, ngrams, structural, quality)"
    )]
    pub skip: Vec<Analysis>,
}

impl All {
    /// Analyses to run, in order. Errors if every analysis is skipped.
    pub fn analyses(&self) -> Result<Vec<Analysis>, Error> {
        let analyses: Vec<Analysis> = Analysis::ALL
            .iter()
            .filter(|analysis| !self.skip.contains(analysis))
            .copied()
            .collect();
        if analyses.is_empty() {
            return Err(format!("nothing to run: all of {:?} are skipped", self.skip).into());
        }
        Ok(analyses)
    }
}

/// Analyses run by the `all` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Analysis {
    Lexical,
    Ngrams,
    Structural,
    Quality,
}

impl Analysis {
    pub const ALL: [Analysis; 4] = [
        Analysis::Lexical,
        Analysis::Ngrams,
        Analysis::Structural,
        Analysis::Quality,
    ];
}

impl FromStr for Analysis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lexical" => Ok(Analysis::Lexical),
            "ngrams" => Ok(Analysis::Ngrams),
            "structural" => Ok(Analysis::Structural),
            "quality" => Ok(Analysis::Quality),
            other => Err(format!(
                "unknown analysis {:?}, expected one of lexical, ngrams, structural, quality",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_analysis() {
        assert_eq!("ngrams".parse::<Analysis>(), Ok(Analysis::Ngrams));
        assert!("chars".parse::<Analysis>().is_err());
    }

    #[test]
    fn defaults() {
        let opt = Textscope::from_iter(&["textscope", "chars"]);
        match opt {
            Textscope::Chars(common) => {
                assert_eq!(common.input, PathBuf::from("data.txt"));
                assert_eq!(common.chunk_size, 1000);
                assert!(common.workers.is_none());
                assert!(!common.json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn ngram_defaults_match_library() {
        let opt = Textscope::from_iter(&["textscope", "ngrams"]);
        match opt {
            Textscope::Ngrams(ngrams) => {
                assert_eq!(ngrams.ngrams.top_k, NgramOptions::default().top_k);
                assert_eq!(ngrams.ngrams.top, NgramOptions::default().top);
                assert_eq!(ngrams.ngrams.top, 50);
            }
            other => panic!("unexpected command {:?}", other),
        }

        let opt = Textscope::from_iter(&["textscope", "ngrams", "-n", "5"]);
        match opt {
            Textscope::Ngrams(ngrams) => assert_eq!(ngrams.ngrams.top, 5),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn skip() {
        let opt = Textscope::from_iter(&[
            "textscope", "all", "-w", "3", "-s", "ngrams", "quality",
        ]);
        match opt {
            Textscope::All(all) => {
                assert_eq!(
                    all.analyses().unwrap(),
                    vec![Analysis::Lexical, Analysis::Structural]
                );
                assert_eq!(all.common.pool_config().workers, 3);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn skipping_everything_is_an_error() {
        let opt = Textscope::from_iter(&[
            "textscope",
            "all",
            "-s",
            "lexical",
            "ngrams",
            "structural",
            "quality",
        ]);
        match opt {
            Textscope::All(all) => {
                assert!(matches!(all.analyses(), Err(Error::Custom(_))));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}

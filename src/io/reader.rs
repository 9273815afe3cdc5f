/*! Corpus reader

Reads a whole corpus into memory as a list of samples.

```text
first sample
<BREAK>
second sample,
on two lines
<BREAK>
```

Samples are trimmed, and empty ones (e.g. after a trailing delimiter) are dropped.
Files with a `.gz` extension are decompressed on the fly.
!*/
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use flate2::read::MultiGzDecoder;
use log::{debug, info, warn};

use crate::error::Error;

/// Sample separator.
pub const BREAK_DELIMITER: &str = "<BREAK>";

/// Split raw corpus text into trimmed, non-empty samples.
pub fn split_samples(text: &str) -> Vec<String> {
    text.split(BREAK_DELIMITER)
        .map(str::trim)
        .filter(|sample| !sample.is_empty())
        .map(String::from)
        .collect()
}

/// Load samples from `path`.
///
/// Errors if the file can't be opened or isn't valid UTF-8.
pub fn load_samples(path: &Path) -> Result<Vec<String>, Error> {
    info!("Loading corpus from {:?}", path);
    let file = File::open(path)?;

    let mut text = String::new();
    if path.extension().map_or(false, |ext| ext == "gz") {
        debug!("{:?} is gzipped", path);
        MultiGzDecoder::new(BufReader::new(file)).read_to_string(&mut text)?;
    } else {
        BufReader::new(file).read_to_string(&mut text)?;
    }

    let samples = split_samples(&text);
    if samples.is_empty() {
        warn!("no samples found in {:?}", path);
    } else {
        info!("Loaded {} samples", samples.len());
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::{write::GzEncoder, Compression};

    use super::*;

    #[test]
    fn split() {
        let text = "  first one \n<BREAK>\nsecond\non two lines\n<BREAK>\n\n<BREAK>   ";
        assert_eq!(
            split_samples(text),
            vec!["first one".to_string(), "second\non two lines".to_string()]
        );
    }

    #[test]
    fn split_no_delimiter() {
        assert_eq!(split_samples("only one"), vec!["only one".to_string()]);
        assert!(split_samples("").is_empty());
        assert!(split_samples("<BREAK><BREAK>").is_empty());
    }

    #[test]
    fn load_plain() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "a b c\n<BREAK>\nd e").unwrap();
        let samples = load_samples(file.path()).unwrap();
        assert_eq!(samples, vec!["a b c".to_string(), "d e".to_string()]);
    }

    #[test]
    fn load_gzipped() {
        let file = tempfile::Builder::new().suffix(".txt.gz").tempfile().unwrap();
        let mut enc = GzEncoder::new(file.reopen().unwrap(), Compression::default());
        enc.write_all(b"one<BREAK>two").unwrap();
        enc.finish().unwrap();

        let samples = load_samples(file.path()).unwrap();
        assert_eq!(samples, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn load_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_samples(&dir.path().join("nope.txt"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}

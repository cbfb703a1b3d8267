//! Report writing.
//!
//! Writes the four artifacts of a run into an output directory. Every
//! artifact is rendered from data that is already complete in memory, so
//! nothing is written until every computation has finished.
//!
//! | File                | Contents                                               |
//! |---------------------|--------------------------------------------------------|
//! | `cleaned.txt`       | the cleaned document, no trailing newline              |
//! | `words.txt`         | one cleaned token per line                             |
//! | `top10words.txt`    | `token count` per line, most frequent first            |
//! | `time_compares.txt` | header, then `Name sentence_secs word_secs` per backend |

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use log::info;
use tokbench_types::Result;

use crate::analyzer::{CleanedText, FrequencyEntry};
use crate::bench::BenchmarkReport;
use crate::config::artifacts;

/// Header line of the timing report.
pub const TIMING_HEADER: &str = "Framework Sentence_Time Word_Time";

/// Everything a run produces.
#[derive(Debug, Clone, Copy)]
pub struct Artifacts<'a> {
    /// Cleaned document.
    pub cleaned: &'a CleanedText,
    /// Cleaned tokens in document order.
    pub words: &'a [&'a str],
    /// Most frequent tokens.
    pub top: &'a [FrequencyEntry<'a>],
    /// Backend timings.
    pub timings: &'a BenchmarkReport,
}

/// Writes the cleaned document.
pub fn render_cleaned<W: Write>(out: &mut W, cleaned: &CleanedText) -> std::io::Result<()> {
    out.write_all(cleaned.as_str().as_bytes())
}

/// Writes one token per line.
pub fn render_words<W: Write>(out: &mut W, words: &[&str]) -> std::io::Result<()> {
    for word in words {
        writeln!(out, "{word}")?;
    }
    Ok(())
}

/// Writes `token count` per line.
pub fn render_top<W: Write>(out: &mut W, top: &[FrequencyEntry<'_>]) -> std::io::Result<()> {
    for entry in top {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}

/// Writes the timing table.
pub fn render_timings<W: Write>(out: &mut W, report: &BenchmarkReport) -> std::io::Result<()> {
    writeln!(out, "{TIMING_HEADER}")?;
    for row in report.rows() {
        writeln!(out, "{row}")?;
    }
    Ok(())
}

/// Writes artifacts into a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    /// Creates a writer targeting `dir`. The directory is created on write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Writes all four artifacts.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Io` if the directory or any file cannot be written.
    pub fn write(&self, artifacts: &Artifacts<'_>) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        self.emit(artifacts::CLEANED, |w| render_cleaned(w, artifacts.cleaned))?;
        self.emit(artifacts::WORDS, |w| render_words(w, artifacts.words))?;
        self.emit(artifacts::TOP_WORDS, |w| render_top(w, artifacts.top))?;
        self.emit(artifacts::TIMINGS, |w| render_timings(w, artifacts.timings))?;
        Ok(())
    }

    fn emit<F>(&self, name: &str, render: F) -> Result<()>
    where
        F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    {
        let path = self.dir.join(name);
        let mut out = BufWriter::new(File::create(&path)?);
        render(&mut out)?;
        out.flush()?;
        info!("wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{StopwordSet, TextCleaner};
    use crate::backend::{BackendSet, Uax29Backend};
    use crate::bench::BenchmarkRunner;
    use core::num::NonZeroUsize;
    use tokbench_types::BackendError;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn report_with_lexicon_down() -> BenchmarkReport {
        let set = BackendSet::from_results(
            Err(BackendError::Disabled),
            Ok(Box::new(Uax29Backend)),
            Err(BackendError::ModelMissing("en.model".into())),
        );
        BenchmarkRunner::new(&set).run("Hello there. Bye.")
    }

    #[test]
    fn words_one_per_line() {
        let out = render(|w| render_words(w, &["hello", "world"]));
        assert_eq!(out, "hello\nworld\n");
        assert_eq!(render(|w| render_words(w, &[])), "");
    }

    #[test]
    fn top_token_and_count() {
        let top = [
            FrequencyEntry { token: "alice", count: 3 },
            FrequencyEntry { token: "queen", count: 1 },
        ];
        assert_eq!(render(|w| render_top(w, &top)), "alice 3\nqueen 1\n");
    }

    #[test]
    fn timings_table() {
        let out = render(|w| render_timings(w, &report_with_lexicon_down()));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], TIMING_HEADER);
        assert_eq!(lines[1], "Rules N/A N/A");
        assert!(lines[2].starts_with("UAX29 "));
        assert!(!lines[2].contains("N/A"));
        assert_eq!(lines[3], "Lexicon N/A N/A");

        let secs: Vec<f64> = lines[2]
            .split(' ')
            .skip(1)
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(secs.len(), 2);
        assert!(secs.iter().all(|&s| s >= 0.0));
    }

    #[test]
    fn writes_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("out");

        let cleaner = TextCleaner::new(StopwordSet::from_list(&["the"]));
        let cleaned = cleaner.clean("Hello, hello world! The quick fox.");
        let words = cleaned.words();
        let top = crate::analyzer::top_k(&words, NonZeroUsize::new(10).unwrap());
        let timings = report_with_lexicon_down();

        ReportWriter::new(&out_dir)
            .write(&Artifacts {
                cleaned: &cleaned,
                words: &words,
                top: &top,
                timings: &timings,
            })
            .unwrap();

        let read = |name: &str| fs::read_to_string(out_dir.join(name)).unwrap();
        assert_eq!(read(artifacts::CLEANED), "hello hello world quick fox");
        assert_eq!(read(artifacts::WORDS), "hello\nhello\nworld\nquick\nfox\n");
        assert_eq!(
            read(artifacts::TOP_WORDS),
            "hello 2\nworld 1\nquick 1\nfox 1\n"
        );
        assert!(read(artifacts::TIMINGS).starts_with(TIMING_HEADER));
    }
}

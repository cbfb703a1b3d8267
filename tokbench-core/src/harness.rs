//! End-to-end run.
//!
//! Load the document, clean it, rank token frequencies, benchmark every
//! backend on the raw text, then write the report. A missing document aborts
//! the run before anything else happens; a missing backend prerequisite only
//! marks that backend unavailable.

use log::info;
use tokbench_types::Result;

use crate::analyzer::{FrequencyTable, StopwordSet, TextCleaner};
use crate::backend::BackendSet;
use crate::bench::{BenchmarkReport, BenchmarkRunner};
use crate::config::HarnessConfig;
use crate::report::{Artifacts, ReportWriter};
use crate::source::{DocumentSource, FileSource};

/// What a run produced, detached from the document it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of cleaned tokens.
    pub cleaned_words: usize,
    /// Number of distinct cleaned tokens.
    pub distinct_words: usize,
    /// Most frequent tokens with their counts.
    pub top: Vec<(String, usize)>,
    /// Backend timings.
    pub timings: BenchmarkReport,
}

/// Runs the full pipeline described by a [`HarnessConfig`].
#[derive(Debug, Clone)]
pub struct Harness {
    config: HarnessConfig,
}

impl Harness {
    /// Creates a harness.
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Loads the configured document and backends, runs, and writes the report.
    ///
    /// # Errors
    ///
    /// - `HarnessError::ResourceNotFound` if the input document is missing
    /// - `HarnessError::Config` for an unknown stopword language
    /// - `HarnessError::Io` if the report cannot be written
    pub fn run(&self) -> Result<RunSummary> {
        let text = FileSource::new(&self.config.input).load_document()?;
        info!(
            "loaded {} ({} bytes)",
            self.config.input.display(),
            text.len()
        );

        let cleaner = TextCleaner::new(StopwordSet::for_language(
            &self.config.stopword_language,
        )?);
        let backends = BackendSet::load(&self.config.backends);

        self.run_with(&text, &cleaner, &backends)
    }

    /// Runs on an already-loaded document with caller-supplied components.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Io` if the report cannot be written.
    pub fn run_with(
        &self,
        text: &str,
        cleaner: &TextCleaner,
        backends: &BackendSet,
    ) -> Result<RunSummary> {
        let cleaned = cleaner.clean(text);
        let words = cleaned.words();
        let table = FrequencyTable::from_words(words.iter().copied());
        let top = table.top_k(self.config.top_k);
        info!(
            "cleaned: {} tokens, {} distinct",
            table.total(),
            table.distinct()
        );

        info!(
            "benchmarking {} of {} backends",
            backends.available_count(),
            backends.slots().len()
        );
        let timings = BenchmarkRunner::new(backends).run(text);

        ReportWriter::new(&self.config.output_dir).write(&Artifacts {
            cleaned: &cleaned,
            words: &words,
            top: &top,
            timings: &timings,
        })?;

        Ok(RunSummary {
            cleaned_words: table.total(),
            distinct_words: table.distinct(),
            top: top.iter().map(|e| (e.token.to_owned(), e.count)).collect(),
            timings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{artifacts, BackendConfig};
    use std::fs;
    use std::path::PathBuf;
    use tokbench_types::{BackendId, HarnessError, Operation, Timing};

    fn config_in(dir: &std::path::Path) -> HarnessConfig {
        HarnessConfig {
            input: dir.join("doc.txt"),
            output_dir: dir.join("out"),
            backends: BackendConfig {
                lexicon_model: dir.join("missing.model"),
                disabled: Vec::new(),
            },
            ..HarnessConfig::default()
        }
    }

    #[test]
    fn missing_document_is_fatal_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let out_dir = config.output_dir.clone();

        let err = Harness::new(config).run().unwrap_err();
        assert!(matches!(err, HarnessError::ResourceNotFound(ref p) if p.ends_with("doc.txt")));
        assert!(!out_dir.exists());
    }

    #[test]
    fn scenario_run_with_injected_stopwords() {
        let dir = tempfile::tempdir().unwrap();
        let harness = Harness::new(config_in(dir.path()));
        let cleaner = TextCleaner::new(StopwordSet::from_list(&["the"]));
        let backends = BackendSet::load(&harness.config().backends);

        let summary = harness
            .run_with("Hello, hello world! The quick fox.", &cleaner, &backends)
            .unwrap();

        assert_eq!(summary.cleaned_words, 5);
        assert_eq!(summary.distinct_words, 4);
        assert_eq!(
            summary.top,
            vec![
                ("hello".to_owned(), 2),
                ("world".to_owned(), 1),
                ("quick".to_owned(), 1),
                ("fox".to_owned(), 1),
            ]
        );

        for op in Operation::ALL {
            assert_eq!(summary.timings.timing(BackendId::Lexicon, op), Timing::Unavailable);
            assert!(summary.timings.timing(BackendId::Rules, op).is_measured());
            assert!(summary.timings.timing(BackendId::Uax29, op).is_measured());
        }
    }

    #[test]
    fn full_run_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.input, "The Rabbit ran. The Rabbit hid! Alice followed.").unwrap();
        let model = dir.path().join("en.model");
        fs::write(&model, "mr\nmrs\n").unwrap();
        let config = HarnessConfig {
            backends: BackendConfig {
                lexicon_model: model,
                disabled: Vec::new(),
            },
            ..config
        };
        let out_dir: PathBuf = config.output_dir.clone();

        let summary = Harness::new(config).run().unwrap();

        assert_eq!(summary.top[0], ("rabbit".to_owned(), 2));
        assert!(summary.timings.rows().iter().all(|r| r.sentence.is_measured()));

        let timings = fs::read_to_string(out_dir.join(artifacts::TIMINGS)).unwrap();
        assert_eq!(timings.lines().count(), 4);
        assert!(!timings.contains("N/A"));
        let cleaned = fs::read_to_string(out_dir.join(artifacts::CLEANED)).unwrap();
        assert!(cleaned.starts_with("rabbit "));
        assert!(cleaned.contains("alice"));
        assert!(!cleaned.contains("the"));
    }

    #[test]
    fn empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let harness = Harness::new(config_in(dir.path()));
        let backends = BackendSet::load(&harness.config().backends);

        let summary = harness
            .run_with("", &TextCleaner::new(StopwordSet::english()), &backends)
            .unwrap();

        assert_eq!(summary.cleaned_words, 0);
        assert!(summary.top.is_empty());
        for row in summary.timings.rows() {
            for op in Operation::ALL {
                match row.get(op) {
                    Timing::Measured(d) => assert!(d.as_secs_f64() >= 0.0),
                    Timing::Unavailable => assert_eq!(row.backend, BackendId::Lexicon),
                }
            }
        }
        let out = harness.config().output_dir.join(artifacts::CLEANED);
        assert_eq!(fs::read_to_string(out).unwrap(), "");
    }
}

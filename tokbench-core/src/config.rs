//! Run configuration.

use core::num::NonZeroUsize;
use std::path::PathBuf;

use tokbench_types::BackendId;

/// Default number of entries in the frequency report.
pub const DEFAULT_TOP_K: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(k) => k,
    None => unreachable!(),
};

/// File names of the produced artifacts.
pub mod artifacts {
    /// Cleaned document.
    pub const CLEANED: &str = "cleaned.txt";
    /// One cleaned token per line.
    pub const WORDS: &str = "words.txt";
    /// Top-K frequency table.
    pub const TOP_WORDS: &str = "top10words.txt";
    /// Backend timing comparison.
    pub const TIMINGS: &str = "time_compares.txt";
}

/// Which backends to probe and where their prerequisites live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Path of the lexicon backend's model file.
    pub lexicon_model: PathBuf,
    /// Backends forced to unavailable for this run.
    pub disabled: Vec<BackendId>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            lexicon_model: PathBuf::from("models/en_lexicon.txt"),
            disabled: Vec::new(),
        }
    }
}

impl BackendConfig {
    /// Returns `true` if `id` was switched off.
    #[inline]
    pub fn is_disabled(&self, id: BackendId) -> bool {
        self.disabled.contains(&id)
    }
}

/// Configuration for one harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Source document.
    pub input: PathBuf,
    /// Directory the artifacts are written to.
    pub output_dir: PathBuf,
    /// Number of entries in the frequency report.
    pub top_k: NonZeroUsize,
    /// Language of the stock stopword list.
    pub stopword_language: String,
    /// Backend settings.
    pub backends: BackendConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("alice29.txt"),
            output_dir: PathBuf::from("."),
            top_k: DEFAULT_TOP_K,
            stopword_language: String::from("en"),
            backends: BackendConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = HarnessConfig::default();
        assert_eq!(config.input, PathBuf::from("alice29.txt"));
        assert_eq!(config.top_k.get(), 10);
        assert_eq!(config.stopword_language, "en");
        assert!(config.backends.disabled.is_empty());
    }

    #[test]
    fn disabled_lookup() {
        let config = BackendConfig {
            disabled: vec![BackendId::Lexicon],
            ..BackendConfig::default()
        };
        assert!(config.is_disabled(BackendId::Lexicon));
        assert!(!config.is_disabled(BackendId::Rules));
    }
}

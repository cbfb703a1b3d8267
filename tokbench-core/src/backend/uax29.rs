//! Unicode text segmentation backend (UAX #29).
//!
//! Sentence and word boundaries follow the Unicode default rules. Word output
//! contains only segments with at least one alphanumeric character, so
//! punctuation never shows up as a word.

use tokbench_types::{BackendError, BackendId};
use unicode_segmentation::UnicodeSegmentation;

use super::TokenizerAdapter;

/// UAX #29 segmenter. Has no external prerequisite.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uax29Backend;

impl Uax29Backend {
    /// Always succeeds; the boundary tables are compiled into the binary.
    pub fn load() -> Result<Self, BackendError> {
        Ok(Self)
    }
}

impl TokenizerAdapter for Uax29Backend {
    fn id(&self) -> BackendId {
        BackendId::Uax29
    }

    fn sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn words<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.unicode_words().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_trimmed() {
        let s = Uax29Backend.sentences("Down the rabbit hole.  She fell!\nAnd fell.");
        assert_eq!(s, vec!["Down the rabbit hole.", "She fell!", "And fell."]);
    }

    #[test]
    fn words_drop_punctuation() {
        let w = Uax29Backend.words("Hello, world! -- \"Twice.\"");
        assert_eq!(w, vec!["Hello", "world", "Twice"]);
    }

    #[test]
    fn contractions_and_numbers_stay_whole() {
        let w = Uax29Backend.words("Don't pay 3.50 now");
        assert_eq!(w, vec!["Don't", "pay", "3.50", "now"]);
    }

    #[test]
    fn empty_input() {
        assert!(Uax29Backend.sentences("").is_empty());
        assert!(Uax29Backend.words("").is_empty());
    }

    #[test]
    fn always_loads() {
        assert!(Uax29Backend::load().is_ok());
    }
}

//! Stopword sets.
//!
//! Stock lists are the NLTK lists shipped by the `stop-words` crate; custom
//! lists can be injected for tests or domain-specific runs. Entries are stored lowercase and lookups
//! expect an already-lowercased token, which is what the cleaner produces.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};
use tokbench_types::{HarnessError, Result};

/// A set of words excluded from the cleaned token stream.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// NLTK's English list.
    pub fn english() -> Self {
        Self::from_language(LANGUAGE::English)
    }

    /// Looks up a stock list by language code or English name.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Config` for languages without a stock list.
    pub fn for_language(language: &str) -> Result<Self> {
        let lang = match language.to_ascii_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            other => {
                return Err(HarnessError::Config(format!(
                    "no stopword list for language: {other}"
                )))
            }
        };
        Ok(Self::from_language(lang))
    }

    fn from_language(lang: LANGUAGE) -> Self {
        Self {
            words: get(lang)
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase)
                .collect(),
        }
    }

    /// Builds a set from a custom list. Entries are lowercased.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// A set that filters nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds one word.
    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    /// Returns `true` if the lowercased token is a stopword.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_has_common_words() {
        let set = StopwordSet::english();
        assert!(set.contains("the"));
        assert!(set.contains("a"));
        assert!(set.contains("is"));
        assert!(!set.contains("alice"));
        assert!(!set.contains("rabbit"));
    }

    #[test]
    fn english_keeps_content_words() {
        let set = StopwordSet::english();
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        for word in ["said", "little", "one", "like", "went", "know", "thought"] {
            assert!(!set.contains(word), "{word} should survive cleaning");
        }
        assert!(!set.contains(""));
        assert!(set.len() < 200);
    }

    #[test]
    fn language_lookup() {
        assert!(StopwordSet::for_language("EN").unwrap().contains("the"));
        assert!(StopwordSet::for_language("german").unwrap().contains("und"));
        assert!(matches!(
            StopwordSet::for_language("klingon"),
            Err(HarnessError::Config(_))
        ));
    }

    #[test]
    fn custom_list_is_lowercased() {
        let set = StopwordSet::from_list(&["The", "AND"]);
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert!(!set.contains("The"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn empty_filters_nothing() {
        let set = StopwordSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains("the"));
    }

    #[test]
    fn insert_extends_set() {
        let mut set = StopwordSet::empty();
        set.insert("Said");
        assert!(set.contains("said"));
    }
}

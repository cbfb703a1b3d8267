//! Text cleaning.
//!
//! Turns a raw document into the canonical token stream used for frequency
//! analysis. Two passes:
//!
//! 1. **Normalize**: lowercase, drop every character that is neither a word
//!    character nor whitespace, collapse whitespace runs into one space and
//!    trim both ends. Dropping a character never inserts a space, so
//!    `"don't"` becomes `"dont"`. Non-ASCII input is lowercased as a whole
//!    string, so context-dependent mappings hold (`"ΟΔΟΣ"` becomes `"οδος"`).
//!    A word character is one with `char::is_alphanumeric`, which also keeps
//!    `Other_Alphabetic` combining marks such as Devanagari vowel signs.
//! 2. **Filter**: split on single spaces and drop stopwords.
//!
//! The result upholds the same contract the tokenizer in this crate relies
//! on: no leading/trailing space, no consecutive spaces.

use std::borrow::Cow;

use memchr::memchr_iter;

use super::stopwords::StopwordSet;

const DROP: u8 = 0;
const SPACE: u8 = b' ';

/// Maps an ASCII byte to what the normalizer emits for it:
/// its lowercase form, `SPACE`, or `DROP`.
const ASCII_MAP: [u8; 128] = build_ascii_map();

const fn build_ascii_map() -> [u8; 128] {
    let mut map = [DROP; 128];
    let mut b = 0u8;
    while b < 128 {
        map[b as usize] = match b {
            b'A'..=b'Z' => b + 32,
            b'a'..=b'z' | b'0'..=b'9' => b,
            b'\t' | b'\n' | 0x0b | 0x0c | b'\r' | 0x1c..=0x1f | b' ' => SPACE,
            _ => DROP,
        };
        b += 1;
    }
    map
}

/// Output of [`TextCleaner::clean`].
///
/// Holds the cleaned document; the word sequence is derived from it on demand,
/// so the two can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedText {
    text: String,
}

impl CleanedText {
    /// The cleaned document: surviving tokens joined by single spaces.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Cleaned tokens in document order.
    pub fn words(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for_each_token(&self.text, |w| out.push(w));
        out
    }

    /// Returns `true` if nothing survived cleaning.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Normalizes raw text and strips stopwords.
///
/// # Examples
///
/// ```
/// use tokbench_core::analyzer::{StopwordSet, TextCleaner};
///
/// let cleaner = TextCleaner::new(StopwordSet::from_list(&["the"]));
/// let cleaned = cleaner.clean("Hello, hello world! The quick fox.");
/// assert_eq!(cleaned.as_str(), "hello hello world quick fox");
/// assert_eq!(cleaned.words(), ["hello", "hello", "world", "quick", "fox"]);
/// ```
#[derive(Debug, Clone)]
pub struct TextCleaner {
    stopwords: StopwordSet,
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new(StopwordSet::english())
    }
}

impl TextCleaner {
    /// Creates a cleaner that filters the given stopwords.
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }

    /// Normalizes `input` into `out`, without stopword filtering.
    ///
    /// Clears `out` first and reuses its capacity.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let lowered = if input.is_ascii() {
            Cow::Borrowed(input)
        } else {
            Cow::Owned(input.to_lowercase())
        };
        let mut pending_space = false;

        for ch in lowered.chars() {
            if ch.is_ascii() {
                match ASCII_MAP[ch as usize] {
                    DROP => {}
                    SPACE => pending_space = true,
                    b => push_word_char(out, &mut pending_space, b as char),
                }
            } else if ch.is_whitespace() {
                pending_space = true;
            } else if ch.is_alphanumeric() {
                push_word_char(out, &mut pending_space, ch);
            }
        }
    }

    /// Normalizes text and returns a new String.
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }

    /// Cleans a raw document.
    pub fn clean(&self, input: &str) -> CleanedText {
        let normalized = self.normalize(input);
        let mut text = String::with_capacity(normalized.len());

        for_each_token(&normalized, |token| {
            if self.stopwords.contains(token) {
                return;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(token);
        });

        CleanedText { text }
    }
}

#[inline(always)]
fn push_word_char(out: &mut String, pending_space: &mut bool, c: char) {
    if *pending_space && !out.is_empty() {
        out.push(' ');
    }
    *pending_space = false;
    out.push(c);
}

/// Calls `emit` for every space-separated token of normalized text.
fn for_each_token<'n, F>(normalized: &'n str, mut emit: F)
where
    F: FnMut(&'n str),
{
    let mut start = 0usize;
    for i in memchr_iter(b' ', normalized.as_bytes()) {
        if start < i {
            // Splitting on ASCII space always lands on a char boundary.
            emit(&normalized[start..i]);
        }
        start = i + 1;
    }
    if start < normalized.len() {
        emit(&normalized[start..]);
    }
}

//! Rule-based tokenizer.
//!
//! Sentences end at `.`, `!` or `?`, together with any closing quotes and
//! brackets that follow, provided whitespace or the end of input comes next.
//! A period after a known abbreviation (`Mr.`, `etc.`) or a single-letter
//! initial does not end a sentence.
//!
//! Words are runs of word characters, plus runs of punctuation. Punctuation
//! is emitted as its own tokens, so `"Hello, world!"` yields
//! `["Hello", ",", "world", "!"]`.
//!
//! Nothing outside the crate is needed. The only load step is compiling a
//! constant pattern, so this backend is unavailable only when disabled by
//! configuration.

use memchr::memchr3_iter;
use regex::Regex;
use rustc_hash::FxHashSet;
use tokbench_types::{BackendError, BackendId};

use super::TokenizerAdapter;

const WORD_PATTERN: &str = r"\w+|[^\w\s]+";

/// Abbreviations whose trailing period never ends a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "cf", "al", "fig",
    "no", "vol", "ch", "pp", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept",
    "oct", "nov", "dec", "co", "corp", "inc", "ltd",
];

/// Closing punctuation absorbed into the sentence that precedes it.
#[inline(always)]
fn is_closer(c: char) -> bool {
    matches!(
        c,
        '"' | '\'' | ')' | ']' | '}' | '\u{2019}' | '\u{201D}' | '\u{00BB}'
    )
}

#[inline(always)]
fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Regex rule-set tokenizer.
#[derive(Debug, Clone)]
pub struct RulesBackend {
    words: Regex,
    abbreviations: FxHashSet<&'static str>,
}

impl RulesBackend {
    /// Compiles the rule set.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Rules` if the word pattern fails to compile,
    /// which does not happen for the built-in pattern.
    pub fn load() -> Result<Self, BackendError> {
        let words = Regex::new(WORD_PATTERN).map_err(|e| BackendError::Rules(e.to_string()))?;
        Ok(Self {
            words,
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        })
    }

    /// Whether the period at byte `dot` belongs to an abbreviation or initial.
    fn is_abbreviation(&self, text: &str, dot: usize) -> bool {
        let head = &text[..dot];
        let word_start = head
            .rfind(|c: char| c.is_whitespace())
            .map_or(0, |i| i + head[i..].chars().next().map_or(1, char::len_utf8));
        let word = head[word_start..].trim_start_matches(|c: char| !c.is_alphanumeric());

        let mut chars = word.chars();
        match (chars.next(), chars.next()) {
            (None, _) => false,
            (Some(c), None) => c.is_alphabetic(),
            _ => self
                .abbreviations
                .contains(word.to_ascii_lowercase().as_str()),
        }
    }
}

impl TokenizerAdapter for RulesBackend {
    fn id(&self) -> BackendId {
        BackendId::Rules
    }

    fn sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let bytes = text.as_bytes();
        let mut out = Vec::new();
        let mut start = 0usize;
        let mut resume = 0usize;

        for i in memchr3_iter(b'.', b'!', b'?', bytes) {
            if i < resume {
                continue;
            }

            // Absorb trailing terminators and closers ("?!", ".'", ".)").
            let mut end = i + 1;
            for c in text[end..].chars() {
                if is_terminator(c) || is_closer(c) {
                    end += c.len_utf8();
                } else {
                    break;
                }
            }
            resume = end;

            let at_boundary = text[end..].chars().next().map_or(true, char::is_whitespace);
            if !at_boundary {
                continue;
            }
            if bytes[i] == b'.' && end == i + 1 && self.is_abbreviation(text, i) {
                continue;
            }

            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                out.push(sentence);
            }
            start = end;
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            out.push(tail);
        }
        out
    }

    fn words<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.words.find_iter(text).map(|m| m.as_str()).collect()
    }
}

//! Lexicon-model tokenizer.
//!
//! Needs a model file on disk. The backend is unavailable for the run when
//! that file is missing or malformed. Each call analyzes the whole document
//! into a token stream with sentence starts marked, then projects the
//! requested view. Asking for sentences and then words analyzes the text twice.
//!
//! ## Model format
//!
//! UTF-8 text with one abbreviation per line, written without its final
//! period. Blank lines and lines starting with `#` are ignored. Matching
//! is case-insensitive.
//!
//! ```text
//! # English abbreviations
//! mr
//! mrs
//! e.g
//! ```
//!
//! ## Boundaries
//!
//! A terminator (`.`, `!`, `?`, `…`) ends a sentence when all of these hold:
//! - it is not the period of a model abbreviation (dotted entries included)
//!   or a single-letter initial,
//! - whitespace or the end of input follows (after any closing quotes or brackets),
//! - the next token starts with an uppercase letter, a digit or opening punctuation.
//!
//! Only tokens made entirely of alphabetic characters count as words.

use std::fs;
use std::io;
use std::path::Path;

use rustc_hash::FxHashSet;
use tokbench_types::{BackendError, BackendId};
use unicode_segmentation::UnicodeSegmentation;

use super::TokenizerAdapter;

/// Abbreviation model loaded from disk.
#[derive(Debug, Clone, Default)]
pub struct LexiconModel {
    abbreviations: FxHashSet<String>,
}

impl LexiconModel {
    /// Reads and parses a model file.
    ///
    /// # Errors
    ///
    /// - `BackendError::ModelMissing` if the file does not exist
    /// - `BackendError::ModelInvalid` if it has no entries or an entry contains whitespace
    /// - `BackendError::Io` for any other read failure
    pub fn load(path: &Path) -> Result<Self, BackendError> {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(BackendError::ModelMissing(path.to_path_buf()))
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(BackendError::ModelInvalid {
                    path: path.to_path_buf(),
                    reason: "not valid UTF-8".into(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        Self::parse(&source).map_err(|reason| BackendError::ModelInvalid {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parses model text.
    fn parse(source: &str) -> Result<Self, String> {
        let mut abbreviations = FxHashSet::default();

        for (n, line) in source.lines().enumerate() {
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            if entry.contains(char::is_whitespace) {
                return Err(format!("line {}: entry contains whitespace", n + 1));
            }
            abbreviations.insert(entry.trim_end_matches('.').to_lowercase());
        }

        if abbreviations.is_empty() {
            return Err("no entries".into());
        }
        Ok(Self { abbreviations })
    }

    /// Builds a model from in-memory entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            abbreviations: entries
                .into_iter()
                .map(|e| e.as_ref().trim_end_matches('.').to_lowercase())
                .collect(),
        }
    }

    /// Returns `true` if `word` (without its period) is a known abbreviation.
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(&word.to_lowercase())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.abbreviations.len()
    }

    /// Returns `true` if the model has no entries.
    pub fn is_empty(&self) -> bool {
        self.abbreviations.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Alpha,
    Space,
    Terminator,
    Closer,
    Opener,
    Other,
}

#[derive(Debug, Clone, Copy)]
struct Token<'t> {
    text: &'t str,
    start: usize,
    kind: Kind,
}

impl Token<'_> {
    #[inline]
    fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

fn classify(piece: &str) -> Kind {
    let mut chars = piece.chars();
    let Some(first) = chars.next() else {
        return Kind::Other;
    };

    if first.is_whitespace() {
        Kind::Space
    } else if piece.chars().all(char::is_alphabetic) {
        Kind::Alpha
    } else if chars.next().is_none() {
        match first {
            '.' | '!' | '?' | '\u{2026}' => Kind::Terminator,
            '"' | '\'' | ')' | ']' | '}' | '\u{2019}' | '\u{201D}' | '\u{00BB}' => Kind::Closer,
            '(' | '[' | '{' | '\u{2018}' | '\u{201C}' | '\u{00AB}' => Kind::Opener,
            _ => Kind::Other,
        }
    } else {
        Kind::Other
    }
}

/// A document analyzed into tokens with sentence boundaries.
struct Doc<'t> {
    text: &'t str,
    tokens: Vec<Token<'t>>,
    /// Token indices where a sentence begins.
    starts: Vec<usize>,
}

impl<'t> Doc<'t> {
    fn sentences(&self) -> Vec<&'t str> {
        let mut out = Vec::with_capacity(self.starts.len());
        for (n, &first) in self.starts.iter().enumerate() {
            let last = self.starts.get(n + 1).copied().unwrap_or(self.tokens.len());
            let span = &self.tokens[first..last];
            let (Some(a), Some(b)) = (
                span.iter().find(|t| t.kind != Kind::Space),
                span.iter().rev().find(|t| t.kind != Kind::Space),
            ) else {
                continue;
            };
            out.push(&self.text[a.start..b.end()]);
        }
        out
    }

    fn words(&self) -> Vec<&'t str> {
        self.tokens
            .iter()
            .filter(|t| t.kind == Kind::Alpha)
            .map(|t| t.text)
            .collect()
    }
}

/// Model-driven segmenter.
#[derive(Debug, Clone)]
pub struct LexiconBackend {
    model: LexiconModel,
}

impl LexiconBackend {
    /// Loads the model at `path`.
    ///
    /// # Errors
    ///
    /// Propagates [`LexiconModel::load`] failures.
    pub fn load(path: &Path) -> Result<Self, BackendError> {
        Ok(Self::new(LexiconModel::load(path)?))
    }

    /// Wraps an already-loaded model.
    pub fn new(model: LexiconModel) -> Self {
        Self { model }
    }

    /// The loaded model.
    pub fn model(&self) -> &LexiconModel {
        &self.model
    }

    fn analyze<'t>(&self, text: &'t str) -> Doc<'t> {
        let tokens: Vec<Token<'t>> = text
            .split_word_bound_indices()
            .map(|(start, piece)| Token {
                text: piece,
                start,
                kind: classify(piece),
            })
            .collect();

        let mut starts = Vec::new();
        let mut i = 0usize;
        let mut open = false;

        while i < tokens.len() {
            let tok = tokens[i];
            if !open && tok.kind != Kind::Space {
                starts.push(i);
                open = true;
            }

            if tok.kind == Kind::Terminator && self.ends_sentence(&tokens, i) {
                // Swallow repeated terminators and closers into this sentence.
                let mut j = i + 1;
                while j < tokens.len() && matches!(tokens[j].kind, Kind::Terminator | Kind::Closer) {
                    j += 1;
                }
                if tokens.get(j).map_or(true, |t| t.kind == Kind::Space)
                    && self.next_starts_sentence(&tokens, j)
                {
                    open = false;
                }
                i = j;
                continue;
            }
            i += 1;
        }

        Doc {
            text,
            tokens,
            starts,
        }
    }

    /// Whether the terminator at `i` could end a sentence, judging by the
    /// word before it.
    fn ends_sentence(&self, tokens: &[Token<'_>], i: usize) -> bool {
        if tokens[i].text != "." {
            return true;
        }
        let Some(prev) = i.checked_sub(1).map(|p| tokens[p]) else {
            return true;
        };
        if prev.kind == Kind::Space {
            return true;
        }
        // Dotted entries such as `e.g` arrive as one non-alphabetic piece.
        let initial = prev.kind == Kind::Alpha && prev.text.chars().nth(1).is_none();
        !(initial || self.model.is_abbreviation(prev.text))
    }

    /// Whether the first non-space token at or after `j` may open a sentence.
    fn next_starts_sentence(&self, tokens: &[Token<'_>], j: usize) -> bool {
        let Some(next) = tokens[j..].iter().find(|t| t.kind != Kind::Space) else {
            return true;
        };
        match next.kind {
            Kind::Opener | Kind::Closer => true,
            _ => next
                .text
                .chars()
                .next()
                .is_some_and(|c| c.is_uppercase() || c.is_numeric()),
        }
    }
}

impl TokenizerAdapter for LexiconBackend {
    fn id(&self) -> BackendId {
        BackendId::Lexicon
    }

    fn sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.analyze(text).sentences()
    }

    fn words<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.analyze(text).words()
    }
}

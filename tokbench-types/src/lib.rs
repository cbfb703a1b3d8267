//! Core types and errors for the tokbench harness.
//!
//! This crate holds the vocabulary shared between the engine and the CLI:
//!
//! - **Identifiers**: the closed set of tokenizer backends and operations
//! - **Measurements**: per-operation timings with an explicit "unavailable" state
//! - **Errors**: fatal harness errors and non-fatal backend load errors

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Identifier of a tokenizer backend.
///
/// The set is closed: every run knows about exactly these three backends,
/// whether or not they turn out to be usable. Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BackendId {
    /// Regex rule set, keeps punctuation tokens.
    Rules = 0,
    /// Unicode UAX #29 text segmentation.
    Uax29 = 1,
    /// Lexicon-model segmenter, alphabetic words only.
    Lexicon = 2,
}

impl BackendId {
    /// Every backend, in report order.
    pub const ALL: [BackendId; 3] = [BackendId::Rules, BackendId::Uax29, BackendId::Lexicon];

    /// Name used in the timing report.
    #[must_use]
    #[inline]
    pub const fn display_name(self) -> &'static str {
        match self {
            BackendId::Rules => "Rules",
            BackendId::Uax29 => "UAX29",
            BackendId::Lexicon => "Lexicon",
        }
    }

    /// Lowercase key accepted on the command line.
    #[must_use]
    #[inline]
    pub const fn key(self) -> &'static str {
        match self {
            BackendId::Rules => "rules",
            BackendId::Uax29 => "uax29",
            BackendId::Lexicon => "lexicon",
        }
    }

    /// Position of this backend in [`BackendId::ALL`].
    #[must_use]
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for BackendId {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self> {
        BackendId::ALL
            .into_iter()
            .find(|id| id.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| HarnessError::Config(format!("unknown backend: {s}")))
    }
}

/// The two segmentation operations every backend offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Sentence segmentation.
    Sentence,
    /// Word segmentation.
    Word,
}

impl Operation {
    /// Both operations, in report column order.
    pub const ALL: [Operation; 2] = [Operation::Sentence, Operation::Word];
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Sentence => f.write_str("sentence"),
            Operation::Word => f.write_str("word"),
        }
    }
}

/// Outcome of timing one operation on one backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    /// Wall-clock duration of a single invocation.
    Measured(Duration),
    /// The backend was not usable in this run, nothing was timed.
    Unavailable,
}

impl Timing {
    /// Text written in place of a duration for unavailable backends.
    pub const UNAVAILABLE_LABEL: &'static str = "N/A";

    /// Elapsed seconds, or `None` when unavailable.
    #[must_use]
    #[inline]
    pub fn as_secs_f64(self) -> Option<f64> {
        match self {
            Timing::Measured(d) => Some(d.as_secs_f64()),
            Timing::Unavailable => None,
        }
    }

    /// Returns `true` if a duration was recorded.
    #[must_use]
    #[inline]
    pub const fn is_measured(self) -> bool {
        matches!(self, Timing::Measured(_))
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timing::Measured(d) => write!(f, "{}", d.as_secs_f64()),
            Timing::Unavailable => f.write_str(Self::UNAVAILABLE_LABEL),
        }
    }
}

/// Whether a backend's prerequisite was acquired at startup.
///
/// Computed once when the backend set is built and never re-evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    /// The backend loaded and may be invoked.
    Available,
    /// The backend failed to load; carries the diagnostic.
    Unavailable {
        /// Human-readable reason.
        reason: String,
    },
}

impl Capability {
    /// The capability flag: `true` if the backend may be invoked.
    #[must_use]
    #[inline]
    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Available => f.write_str("available"),
            Capability::Unavailable { reason } => write!(f, "unavailable ({reason})"),
        }
    }
}

/// Fatal errors that abort a harness run.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// The source document does not exist.
    #[error("resource not found: {}", .0.display())]
    ResourceNotFound(PathBuf),

    /// The source document is not valid UTF-8.
    #[error("document is not valid UTF-8: {}", .0.display())]
    InvalidUtf8(PathBuf),

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while acquiring a backend's prerequisite.
///
/// These never abort a run; the affected backend is marked unavailable.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The model file does not exist.
    #[error("model not found: {}", .0.display())]
    ModelMissing(PathBuf),

    /// The model file exists but could not be used.
    #[error("invalid model {}: {reason}", .path.display())]
    ModelInvalid {
        /// Path of the offending model.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// The rule set failed to compile.
    #[error("rule set failed to compile: {0}")]
    Rules(String),

    /// The backend was switched off in the configuration.
    #[error("disabled by configuration")]
    Disabled,

    /// I/O failure while reading a prerequisite.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;

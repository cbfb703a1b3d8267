//! Benchmark runner.
//!
//! Every backend gets the same raw text. For an available backend the sentence
//! and word operations are timed separately. Each one is a fresh call on the
//! raw text with no state shared between the two, so a backend that does all
//! its work in both calls pays for it twice. Outputs are discarded: only the
//! timings are kept.
//!
//! An unavailable backend is never called and reports
//! [`Timing::Unavailable`] for both operations.
//!
//! Each timing is one measurement with no warm-up or repetition, so a cold
//! first call is included in the number.

use core::fmt;

use log::debug;
use smallvec::SmallVec;
use tokbench_types::{BackendId, Operation, Timing};

use super::measure::measure;
use crate::backend::{BackendSet, Slot, TokenizerAdapter};

/// Timings of one backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTiming {
    /// Which backend.
    pub backend: BackendId,
    /// Sentence segmentation time.
    pub sentence: Timing,
    /// Word segmentation time.
    pub word: Timing,
}

impl BackendTiming {
    /// Row for a backend that was not run.
    pub const fn unavailable(backend: BackendId) -> Self {
        Self {
            backend,
            sentence: Timing::Unavailable,
            word: Timing::Unavailable,
        }
    }

    /// Timing for one operation.
    #[inline]
    pub fn get(&self, op: Operation) -> Timing {
        match op {
            Operation::Sentence => self.sentence,
            Operation::Word => self.word,
        }
    }
}

impl fmt::Display for BackendTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.backend, self.sentence, self.word)
    }
}

/// Result of one benchmark run: one row per backend, in report order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchmarkReport {
    rows: SmallVec<[BackendTiming; 3]>,
}

impl BenchmarkReport {
    /// Rows in report order.
    pub fn rows(&self) -> &[BackendTiming] {
        &self.rows
    }

    /// Row for `backend`, if it was part of the run.
    pub fn row(&self, backend: BackendId) -> Option<&BackendTiming> {
        self.rows.iter().find(|r| r.backend == backend)
    }

    /// Timing of `op` on `backend`; unavailable if the backend was not run.
    pub fn timing(&self, backend: BackendId, op: Operation) -> Timing {
        self.row(backend).map_or(Timing::Unavailable, |r| r.get(op))
    }
}

/// Times every backend of a [`BackendSet`].
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkRunner<'b> {
    backends: &'b BackendSet,
}

impl<'b> BenchmarkRunner<'b> {
    /// Creates a runner over `backends`.
    pub fn new(backends: &'b BackendSet) -> Self {
        Self { backends }
    }

    /// Benchmarks every backend on `text`.
    pub fn run(&self, text: &str) -> BenchmarkReport {
        let rows = self
            .backends
            .slots()
            .iter()
            .map(|slot| Self::run_slot(slot, text))
            .collect();
        BenchmarkReport { rows }
    }

    fn run_slot(slot: &Slot, text: &str) -> BackendTiming {
        let Some(adapter) = slot.adapter() else {
            debug!("{}: skipped, unavailable", slot.id());
            return BackendTiming::unavailable(slot.id());
        };

        let row = BackendTiming {
            backend: slot.id(),
            sentence: time_op(adapter, Operation::Sentence, text),
            word: time_op(adapter, Operation::Word, text),
        };
        debug!("{}: sentence={} word={}", row.backend, row.sentence, row.word);
        row
    }
}

fn time_op(adapter: &dyn TokenizerAdapter, op: Operation, text: &str) -> Timing {
    let elapsed = match op {
        Operation::Sentence => measure(|| adapter.sentences(text)),
        Operation::Word => measure(|| adapter.words(text)),
    };
    Timing::Measured(elapsed)
}

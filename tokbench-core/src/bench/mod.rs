//! Backend timing.
//!
//! - **Measure**: times a single invocation of a thunk
//! - **Runner**: times every available backend on the same raw text

pub mod measure;
pub mod runner;

pub use measure::measure;
pub use runner::{BackendTiming, BenchmarkReport, BenchmarkRunner};

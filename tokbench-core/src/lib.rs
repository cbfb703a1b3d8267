//! Tokenizer benchmarking harness.
//!
//! Cleans a raw document into a canonical token stream, ranks token
//! frequencies, and times several tokenizer backends on the same input.
//!
//! ```no_run
//! use tokbench_core::{Harness, HarnessConfig};
//!
//! let summary = Harness::new(HarnessConfig::default()).run()?;
//! for (token, count) in &summary.top {
//!     println!("{token} {count}");
//! }
//! # Ok::<(), tokbench_types::HarnessError>(())
//! ```

pub mod analyzer;
pub mod backend;
pub mod bench;
pub mod config;
pub mod harness;
pub mod report;
pub mod source;

pub use config::{BackendConfig, HarnessConfig};
pub use harness::{Harness, RunSummary};

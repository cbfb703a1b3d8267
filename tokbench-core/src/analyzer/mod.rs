//! Text analysis pipeline.
//!
//! This module provides the components that turn a raw document into
//! frequency statistics:
//! - **Stopwords**: The injected set of words to drop
//! - **Cleaner**: Normalizes raw text into a canonical token stream
//! - **Frequency**: Counts tokens and ranks the most frequent ones

pub mod cleaner;
pub mod frequency;
pub mod stopwords;

pub use cleaner::{CleanedText, TextCleaner};
pub use frequency::{top_k, FrequencyEntry, FrequencyTable};
pub use stopwords::StopwordSet;

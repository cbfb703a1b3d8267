//! Tokenizer backends.
//!
//! Every backend implements [`TokenizerAdapter`] and is identified by one of
//! the fixed [`BackendId`] variants:
//!
//! - **Rules** (`rules`): regex rule set. Word output keeps punctuation tokens.
//! - **UAX29** (`uax29`): Unicode text segmentation. Word output has no punctuation.
//! - **Lexicon** (`lexicon`): driven by an abbreviation model loaded from disk.
//!   Word output keeps alphabetic tokens only.
//!
//! The backends disagree on what a "word" is. That is what is being compared,
//! so the outputs are never reconciled.
//!
//! ## Capability
//!
//! Each backend has a prerequisite that may be missing at runtime. A
//! [`BackendSet`] probes all of them once. Every slot records whether its
//! backend loaded. A slot that failed holds no adapter, so it cannot be
//! invoked, and its diagnostic is logged once.

pub mod lexicon;
pub mod rules;
pub mod uax29;

use std::fmt;

use log::{debug, info, warn};
use tokbench_types::{BackendError, BackendId, Capability};

use crate::config::BackendConfig;

pub use lexicon::{LexiconBackend, LexiconModel};
pub use rules::RulesBackend;
pub use uax29::Uax29Backend;

/// Sentences and words produced from one raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation<'t> {
    /// Sentences in document order.
    pub sentences: Vec<&'t str>,
    /// Words in document order, by the backend's own definition of "word".
    pub words: Vec<&'t str>,
}

/// A tokenization engine that can segment raw text.
///
/// Implementations read the *raw* document: sentence boundaries depend on
/// punctuation the cleaner would have removed. Returned tokens borrow from
/// the input.
pub trait TokenizerAdapter {
    /// Which backend this is.
    fn id(&self) -> BackendId;

    /// Splits `text` into sentences.
    fn sentences<'t>(&self, text: &'t str) -> Vec<&'t str>;

    /// Splits `text` into words.
    fn words<'t>(&self, text: &'t str) -> Vec<&'t str>;

    /// Runs both operations.
    fn segment<'t>(&self, text: &'t str) -> Segmentation<'t> {
        Segmentation {
            sentences: self.sentences(text),
            words: self.words(text),
        }
    }
}

/// Outcome of trying to construct a backend.
pub type LoadResult = Result<Box<dyn TokenizerAdapter>, BackendError>;

enum SlotState {
    Ready(Box<dyn TokenizerAdapter>),
    Unavailable(String),
}

/// One backend position in a [`BackendSet`].
pub struct Slot {
    id: BackendId,
    state: SlotState,
}

impl Slot {
    fn new(id: BackendId, loaded: LoadResult) -> Self {
        let state = match loaded {
            Ok(adapter) => {
                debug_assert_eq!(adapter.id(), id, "adapter loaded into wrong slot");
                info!("{id}: available");
                SlotState::Ready(adapter)
            }
            Err(err) => {
                warn!("{id} unavailable: {err}");
                SlotState::Unavailable(err.to_string())
            }
        };
        Self { id, state }
    }

    /// Backend identifier.
    #[inline]
    pub fn id(&self) -> BackendId {
        self.id
    }

    /// The capability flag.
    #[inline]
    pub fn is_available(&self) -> bool {
        matches!(self.state, SlotState::Ready(_))
    }

    /// Capability with its diagnostic.
    pub fn capability(&self) -> Capability {
        match &self.state {
            SlotState::Ready(_) => Capability::Available,
            SlotState::Unavailable(reason) => Capability::Unavailable {
                reason: reason.clone(),
            },
        }
    }

    /// The adapter, if the backend loaded.
    #[inline]
    pub fn adapter(&self) -> Option<&dyn TokenizerAdapter> {
        match &self.state {
            SlotState::Ready(adapter) => Some(adapter.as_ref()),
            SlotState::Unavailable(_) => None,
        }
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("id", &self.id)
            .field("capability", &self.capability())
            .finish()
    }
}

/// The fixed set of backends, each with its capability decided at startup.
#[derive(Debug)]
pub struct BackendSet {
    slots: [Slot; 3],
}

impl BackendSet {
    /// Probes every backend. Never fails: a backend whose prerequisite cannot
    /// be acquired is marked unavailable.
    pub fn load(config: &BackendConfig) -> Self {
        let attempt = |id: BackendId, load: fn(&BackendConfig) -> LoadResult| {
            if config.is_disabled(id) {
                Err(BackendError::Disabled)
            } else {
                load(config)
            }
        };

        Self::from_results(
            attempt(BackendId::Rules, load_rules),
            attempt(BackendId::Uax29, load_uax29),
            attempt(BackendId::Lexicon, load_lexicon),
        )
    }

    /// Builds a set from already-attempted loads, one per backend.
    pub fn from_results(rules: LoadResult, uax29: LoadResult, lexicon: LoadResult) -> Self {
        Self {
            slots: [
                Slot::new(BackendId::Rules, rules),
                Slot::new(BackendId::Uax29, uax29),
                Slot::new(BackendId::Lexicon, lexicon),
            ],
        }
    }

    /// All slots, in report order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The slot for `id`.
    #[inline]
    pub fn get(&self, id: BackendId) -> &Slot {
        &self.slots[id.index()]
    }

    /// Number of backends that loaded.
    pub fn available_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_available()).count()
    }
}

fn load_rules(_: &BackendConfig) -> LoadResult {
    Ok(Box::new(RulesBackend::load()?))
}

fn load_uax29(_: &BackendConfig) -> LoadResult {
    Ok(Box::new(Uax29Backend::load()?))
}

fn load_lexicon(config: &BackendConfig) -> LoadResult {
    let backend = LexiconBackend::load(&config.lexicon_model)?;
    debug!(
        "lexicon model {}: {} entries",
        config.lexicon_model.display(),
        backend.model().len()
    );
    Ok(Box::new(backend))
}

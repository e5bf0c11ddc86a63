//! Root word lists and selection.

use super::error::LoadError;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{info, instrument, warn};

/// Root word used when a word list turns out to be empty.
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Supplies the candidate root words for a session.
pub trait RootWordSource {
    /// Loads every candidate root word.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the underlying list is unavailable.
    fn load_candidate_root_words(&self) -> Result<Vec<String>, LoadError>;
}

impl<T: RootWordSource + ?Sized> RootWordSource for &T {
    fn load_candidate_root_words(&self) -> Result<Vec<String>, LoadError> {
        (**self).load_candidate_root_words()
    }
}

impl<T: RootWordSource + ?Sized> RootWordSource for Box<T> {
    fn load_candidate_root_words(&self) -> Result<Vec<String>, LoadError> {
        (**self).load_candidate_root_words()
    }
}

/// Root words held in memory as newline-separated text.
#[derive(Debug, Clone)]
pub struct StaticRootWordSource {
    text: String,
}

impl StaticRootWordSource {
    /// Creates a source from newline-separated text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl RootWordSource for StaticRootWordSource {
    fn load_candidate_root_words(&self) -> Result<Vec<String>, LoadError> {
        Ok(parse_word_list(&self.text))
    }
}

/// Splits a newline-separated word list.
///
/// Entries are trimmed and lowercased; blank lines are dropped.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Picks a root word uniformly at random.
///
/// Falls back to [`FALLBACK_ROOT_WORD`] when `words` is empty.
#[instrument(skip(words, rng), fields(candidates = words.len()))]
pub fn pick_root_word<R: Rng + ?Sized>(words: &[String], rng: &mut R) -> String {
    match words.choose(rng) {
        Some(word) => {
            info!(root_word = %word, "Picked root word");
            word.clone()
        }
        None => {
            warn!(fallback = FALLBACK_ROOT_WORD, "Root word list is empty, using fallback");
            FALLBACK_ROOT_WORD.to_string()
        }
    }
}

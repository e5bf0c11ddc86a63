//! A single word scramble session.

use super::error::LoadError;
use super::invariants::SessionInvariants;
use super::oracle::SpellCheckOracle;
use super::outcome::ValidationOutcome;
use super::root_words::{RootWordSource, pick_root_word};
use super::validator::WordValidator;
use super::word::normalize;
use derive_getters::Getters;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Session state owned by the game shell.
///
/// Holds the root word and the accepted words (newest first). The
/// validator is consulted on every submission; it never mutates the
/// session itself.
#[derive(Debug, Clone, Getters)]
pub struct GameSession<O> {
    root_word: String,
    used_words: Vec<String>,
    #[getter(skip)]
    validator: WordValidator<O>,
}

impl<O: SpellCheckOracle> GameSession<O> {
    /// Creates a session with a known root word and no accepted words.
    #[instrument(skip_all)]
    pub fn new(root_word: impl Into<String>, validator: WordValidator<O>) -> Self {
        let root_word = normalize(&root_word.into());
        info!(root_word = %root_word, "Starting word scramble session");
        Self {
            root_word,
            used_words: Vec::new(),
            validator,
        }
    }

    /// Starts a session with a root word picked at random from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the source cannot be read. An empty list
    /// is not an error; the fallback root word is used instead.
    #[instrument(skip_all)]
    pub fn start<S, R>(source: &S, validator: WordValidator<O>, rng: &mut R) -> Result<Self, LoadError>
    where
        S: RootWordSource + ?Sized,
        R: Rng + ?Sized,
    {
        let words = source.load_candidate_root_words()?;
        Ok(Self::new(pick_root_word(&words, rng), validator))
    }

    /// Returns the validator used for submissions.
    pub fn validator(&self) -> &WordValidator<O> {
        &self.validator
    }

    /// Normalizes and validates `raw`, recording the word on acceptance.
    ///
    /// Accepted words are inserted at the front of the history.
    #[instrument(skip(self), fields(root_word = %self.root_word))]
    pub fn submit(&mut self, raw: &str) -> ValidationOutcome {
        let candidate = normalize(raw);
        let outcome = self
            .validator
            .validate(&candidate, &self.root_word, &self.used_words);

        if outcome.is_accepted() {
            info!(word = %candidate, total = self.used_words.len() + 1, "Word accepted");
            self.used_words.insert(0, candidate);
            debug_assert!(
                SessionInvariants::hold(&self.root_word, &self.used_words),
                "Session invariants violated"
            );
        } else {
            debug!(%candidate, %outcome, "Word rejected");
        }

        outcome
    }

    /// Replaces the root word with a fresh pick and clears the history.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the source cannot be read; the session is
    /// left unchanged in that case.
    #[instrument(skip_all, fields(previous = %self.root_word))]
    pub fn scramble<S, R>(&mut self, source: &S, rng: &mut R) -> Result<(), LoadError>
    where
        S: RootWordSource + ?Sized,
        R: Rng + ?Sized,
    {
        let words = source.load_candidate_root_words()?;
        self.root_word = normalize(&pick_root_word(&words, rng));
        self.used_words.clear();
        info!(root_word = %self.root_word, "Session scrambled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::WordListOracle;
    use crate::outcome::Rejection;
    use crate::root_words::StaticRootWordSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> GameSession<WordListOracle> {
        let oracle = WordListOracle::with_words("en", ["wilks", "milk", "worm", "silk"]);
        GameSession::new("silkworm", WordValidator::new(oracle))
    }

    #[test]
    fn test_accepted_words_are_newest_first() {
        let mut s = session();
        assert!(s.submit("milk").is_accepted());
        assert!(s.submit("worm").is_accepted());
        assert_eq!(s.used_words(), &["worm".to_string(), "milk".to_string()]);
    }

    #[test]
    fn test_submit_normalizes_input() {
        let mut s = session();
        assert_eq!(s.submit("  WILKS\n"), ValidationOutcome::Accepted);
        assert_eq!(s.used_words(), &["wilks".to_string()]);
    }

    #[test]
    fn test_rejection_leaves_history_untouched() {
        let mut s = session();
        assert_eq!(s.submit("xyz"), ValidationOutcome::Rejected(Rejection::NotPossible));
        assert_eq!(s.submit("   "), ValidationOutcome::Rejected(Rejection::Empty));
        assert!(s.used_words().is_empty());
    }

    #[test]
    fn test_scramble_resets_history() {
        let mut s = session();
        assert!(s.submit("milk").is_accepted());
        let source = StaticRootWordSource::new("anagrams\n");
        let mut rng = StdRng::seed_from_u64(3);
        s.scramble(&source, &mut rng).expect("static source");
        assert_eq!(s.root_word(), "anagrams");
        assert!(s.used_words().is_empty());
    }

    #[test]
    fn test_start_picks_from_source() {
        let source = StaticRootWordSource::new("Bookcase\n");
        let mut rng = StdRng::seed_from_u64(9);
        let s = GameSession::start(&source, WordValidator::new(WordListOracle::new()), &mut rng)
            .expect("static source");
        assert_eq!(s.root_word(), "bookcase");
    }
}

//! The word validator.

use super::oracle::{DEFAULT_LANGUAGE, SpellCheckOracle};
use super::outcome::ValidationOutcome;
use super::rules::{LegalSubmission, Submission};
use tracing::{debug, instrument};

/// Decides whether a candidate is a legal new submission.
///
/// Stateless per call: the root word and history are passed in, and
/// nothing is mutated. The dictionary oracle and language tag are fixed
/// at construction.
#[derive(Debug, Clone)]
pub struct WordValidator<O> {
    oracle: O,
    language: String,
}

impl<O: SpellCheckOracle> WordValidator<O> {
    /// Creates a validator that checks words in English.
    pub fn new(oracle: O) -> Self {
        Self::with_language(oracle, DEFAULT_LANGUAGE)
    }

    /// Creates a validator that checks words in `language`.
    pub fn with_language(oracle: O, language: impl Into<String>) -> Self {
        Self {
            oracle,
            language: language.into(),
        }
    }

    /// Returns the dictionary oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Returns the language tag passed to the oracle.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Validates an already normalized candidate.
    ///
    /// Checks run in order (empty, already used, root word, letters,
    /// dictionary) and the first failure is returned.
    #[instrument(skip(self, used_words), fields(used = used_words.len()))]
    pub fn validate(
        &self,
        candidate: &str,
        root_word: &str,
        used_words: &[String],
    ) -> ValidationOutcome {
        let submission = Submission::new(candidate, root_word, used_words);
        let outcome =
            ValidationOutcome::from(LegalSubmission::check(&submission, &self.oracle, &self.language));
        debug!(%outcome, "Candidate validated");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::WordListOracle;
    use crate::outcome::Rejection;

    fn validator() -> WordValidator<WordListOracle> {
        WordValidator::new(WordListOracle::with_words(
            "en",
            ["wilks", "milk", "silk", "worm", "i", "silks", "xyz", "silkworm"],
        ))
    }

    #[test]
    fn test_accepts_composable_real_word() {
        let v = validator();
        assert_eq!(v.validate("wilks", "silkworm", &[]), ValidationOutcome::Accepted);
    }

    #[test]
    fn test_empty_regardless_of_history() {
        let v = validator();
        let history = vec!["milk".to_string()];
        assert_eq!(
            v.validate("", "silkworm", &history),
            ValidationOutcome::Rejected(Rejection::Empty)
        );
        assert_eq!(
            v.validate("", "", &[]),
            ValidationOutcome::Rejected(Rejection::Empty)
        );
    }

    #[test]
    fn test_root_word_rejected_even_if_real() {
        let v = validator();
        assert_eq!(
            v.validate("silkworm", "silkworm", &[]),
            ValidationOutcome::Rejected(Rejection::IsRootWord)
        );
    }

    #[test]
    fn test_real_but_not_composable() {
        let v = validator();
        assert_eq!(
            v.validate("silks", "silkworm", &[]),
            ValidationOutcome::Rejected(Rejection::NotPossible)
        );
    }

    #[test]
    fn test_composable_but_not_real() {
        let v = validator();
        assert_eq!(
            v.validate("wolk", "silkworm", &[]),
            ValidationOutcome::Rejected(Rejection::NotReal)
        );
    }

    #[test]
    fn test_single_letter_has_no_length_rule() {
        let v = validator();
        assert_eq!(v.validate("i", "silkworm", &[]), ValidationOutcome::Accepted);
        assert_eq!(
            v.validate("s", "silkworm", &[]),
            ValidationOutcome::Rejected(Rejection::NotReal)
        );
    }

    #[test]
    fn test_language_is_forwarded() {
        let v = WordValidator::with_language(WordListOracle::with_words("en", ["milk"]), "fr");
        assert_eq!(v.language(), "fr");
        assert_eq!(
            v.validate("milk", "silkworm", &[]),
            ValidationOutcome::Rejected(Rejection::NotReal)
        );
    }
}

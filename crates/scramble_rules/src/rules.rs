//! Submission rules for word scramble.
//!
//! Each rule is a precondition on a candidate word. Rules are evaluated in
//! a fixed order and the first failure decides the rejection, so a candidate
//! that breaks several rules always reports the same reason.

use super::oracle::SpellCheckOracle;
use super::outcome::Rejection;
use super::word::LetterPool;
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Submission context
// ─────────────────────────────────────────────────────────────

/// Everything a rule may look at besides the candidate itself.
#[derive(Debug, Clone, Copy)]
pub struct Submission<'a> {
    /// Normalized candidate word.
    pub candidate: &'a str,
    /// The session's root word.
    pub root_word: &'a str,
    /// Words accepted so far, newest first.
    pub used_words: &'a [String],
}

impl<'a> Submission<'a> {
    /// Creates a submission context.
    pub fn new(candidate: &'a str, root_word: &'a str, used_words: &'a [String]) -> Self {
        Self {
            candidate,
            root_word,
            used_words,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Individual rules
// ─────────────────────────────────────────────────────────────

/// Rule: something was entered.
pub struct NotEmpty;

impl NotEmpty {
    /// Rejects a zero-length candidate with [`Rejection::Empty`].
    #[instrument(skip_all)]
    pub fn check(submission: &Submission<'_>) -> Result<(), Rejection> {
        if submission.candidate.is_empty() {
            Err(Rejection::Empty)
        } else {
            Ok(())
        }
    }
}

/// Rule: the word has not been accepted before.
pub struct IsOriginal;

impl IsOriginal {
    /// Rejects an exact match in the used-word history.
    #[instrument(skip_all, fields(candidate = submission.candidate))]
    pub fn check(submission: &Submission<'_>) -> Result<(), Rejection> {
        if submission
            .used_words
            .iter()
            .any(|used| used == submission.candidate)
        {
            Err(Rejection::AlreadyUsed)
        } else {
            Ok(())
        }
    }
}

/// Rule: the word is not the root word.
pub struct NotRootWord;

impl NotRootWord {
    /// Rejects an exact match with the root word.
    #[instrument(skip_all, fields(candidate = submission.candidate))]
    pub fn check(submission: &Submission<'_>) -> Result<(), Rejection> {
        if submission.candidate == submission.root_word {
            Err(Rejection::IsRootWord)
        } else {
            Ok(())
        }
    }
}

/// Rule: the root word has enough letters to spell the candidate.
pub struct IsComposable;

impl IsComposable {
    /// Rejects a candidate that needs a letter the root word lacks or
    /// uses a letter more often than the root word holds it.
    #[instrument(skip_all, fields(candidate = submission.candidate, root_word = submission.root_word))]
    pub fn check(submission: &Submission<'_>) -> Result<(), Rejection> {
        if LetterPool::new(submission.root_word).can_spell(submission.candidate) {
            Ok(())
        } else {
            Err(Rejection::NotPossible)
        }
    }
}

/// Rule: the dictionary recognizes the candidate.
pub struct IsRealWord;

impl IsRealWord {
    /// Rejects words the oracle does not know in `language`.
    #[instrument(skip_all, fields(candidate = submission.candidate, language = language))]
    pub fn check<O: SpellCheckOracle + ?Sized>(
        submission: &Submission<'_>,
        oracle: &O,
        language: &str,
    ) -> Result<(), Rejection> {
        if oracle.is_recognized_word(submission.candidate, language) {
            Ok(())
        } else {
            Err(Rejection::NotReal)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Composite rule
// ─────────────────────────────────────────────────────────────

/// Composite rule: a submission is legal if every rule holds.
///
/// Order: empty, originality, identity, composability, dictionary.
pub struct LegalSubmission;

impl LegalSubmission {
    /// Validates all rules for a submission.
    #[instrument(skip_all, fields(candidate = submission.candidate))]
    pub fn check<O: SpellCheckOracle + ?Sized>(
        submission: &Submission<'_>,
        oracle: &O,
        language: &str,
    ) -> Result<(), Rejection> {
        NotEmpty::check(submission)?;
        IsOriginal::check(submission)?;
        NotRootWord::check(submission)?;
        IsComposable::check(submission)?;
        IsRealWord::check(submission, oracle, language)?;
        debug!("All submission rules passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::WordListOracle;

    fn used(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_rule() {
        let history = used(&[]);
        assert_eq!(
            NotEmpty::check(&Submission::new("", "silkworm", &history)),
            Err(Rejection::Empty)
        );
        assert!(NotEmpty::check(&Submission::new("a", "silkworm", &history)).is_ok());
    }

    #[test]
    fn test_originality_is_exact_match() {
        let history = used(&["wilks"]);
        assert_eq!(
            IsOriginal::check(&Submission::new("wilks", "silkworm", &history)),
            Err(Rejection::AlreadyUsed)
        );
        assert!(IsOriginal::check(&Submission::new("wilk", "silkworm", &history)).is_ok());
    }

    #[test]
    fn test_identity_rule() {
        let history = used(&[]);
        assert_eq!(
            NotRootWord::check(&Submission::new("silkworm", "silkworm", &history)),
            Err(Rejection::IsRootWord)
        );
    }

    #[test]
    fn test_composability_counts_letters() {
        let history = used(&[]);
        assert!(IsComposable::check(&Submission::new("wilks", "silkworm", &history)).is_ok());
        assert_eq!(
            IsComposable::check(&Submission::new("silks", "silkworm", &history)),
            Err(Rejection::NotPossible)
        );
    }

    #[test]
    fn test_used_wins_over_not_possible() {
        // Contrived history containing a word the root cannot spell.
        let history = used(&["xyz"]);
        let oracle = WordListOracle::new();
        assert_eq!(
            LegalSubmission::check(&Submission::new("xyz", "silkworm", &history), &oracle, "en"),
            Err(Rejection::AlreadyUsed)
        );
    }

    #[test]
    fn test_used_wins_over_root_word() {
        let history = used(&["silkworm"]);
        let oracle = WordListOracle::new();
        assert_eq!(
            LegalSubmission::check(
                &Submission::new("silkworm", "silkworm", &history),
                &oracle,
                "en"
            ),
            Err(Rejection::AlreadyUsed)
        );
    }

    #[test]
    fn test_not_possible_wins_over_not_real() {
        let history = used(&[]);
        let oracle = WordListOracle::new();
        assert_eq!(
            LegalSubmission::check(&Submission::new("xyz", "silkworm", &history), &oracle, "en"),
            Err(Rejection::NotPossible)
        );
    }

    #[test]
    fn test_dictionary_uses_language() {
        let history = used(&[]);
        let oracle = WordListOracle::with_words("en", ["milk"]);
        let submission = Submission::new("milk", "silkworm", &history);
        assert!(IsRealWord::check(&submission, &oracle, "en").is_ok());
        assert_eq!(
            IsRealWord::check(&submission, &oracle, "de"),
            Err(Rejection::NotReal)
        );
    }
}

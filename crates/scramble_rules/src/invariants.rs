//! Session invariants.
//!
//! These hold after every submission: the history never holds the root
//! word, never holds a word twice, and every word in it can be spelled
//! from the root word. Dictionary membership is checked once at
//! acceptance and deliberately not re-verified here.

use super::word::LetterPool;
use std::collections::HashSet;
use tracing::{instrument, warn};

/// A violated session invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Name of the invariant that failed.
    pub invariant: &'static str,
    /// Description of the violation.
    pub description: String,
}

impl InvariantViolation {
    fn new(invariant: &'static str, description: String) -> Self {
        warn!(invariant, %description, "Session invariant violated");
        Self {
            invariant,
            description,
        }
    }
}

/// The invariants of a word scramble session.
pub struct SessionInvariants;

impl SessionInvariants {
    /// Checks every invariant, collecting all violations.
    #[instrument(skip(used_words), fields(used = used_words.len()))]
    pub fn check_all(root_word: &str, used_words: &[String]) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        let pool = LetterPool::new(root_word);
        let mut seen = HashSet::new();

        for word in used_words {
            if word == root_word {
                violations.push(InvariantViolation::new(
                    "root_word_absent",
                    format!("Root word '{}' is in the used words", word),
                ));
            }
            if !seen.insert(word.as_str()) {
                violations.push(InvariantViolation::new(
                    "no_duplicates",
                    format!("'{}' appears more than once", word),
                ));
            }
            if !pool.can_spell(word) {
                violations.push(InvariantViolation::new(
                    "composable",
                    format!("'{}' cannot be spelled from '{}'", word, root_word),
                ));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Returns `true` when every invariant holds.
    pub fn hold(root_word: &str, used_words: &[String]) -> bool {
        Self::check_all(root_word, used_words).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_valid_history_holds() {
        assert!(SessionInvariants::hold("silkworm", &words(&["milk", "wilks", "worm"])));
        assert!(SessionInvariants::hold("silkworm", &[]));
    }

    #[test]
    fn test_detects_each_violation() {
        let violations =
            SessionInvariants::check_all("silkworm", &words(&["silkworm", "milk", "milk", "silks"]))
                .expect_err("corrupted history");
        let names: Vec<&str> = violations.iter().map(|v| v.invariant).collect();
        assert!(names.contains(&"root_word_absent"));
        assert!(names.contains(&"no_duplicates"));
        assert!(names.contains(&"composable"));
    }
}

//! Validation outcomes for a single submission.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Why a candidate was not accepted.
///
/// The set is closed. Every kind except [`Rejection::Empty`] is shown to the
/// player as a dismissible alert.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Nothing was entered.
    #[display("empty")]
    Empty,
    /// The word was already accepted this session.
    #[display("already used")]
    AlreadyUsed,
    /// The word is the root word itself.
    #[display("is the root word")]
    IsRootWord,
    /// The root word does not have the letters to spell the word.
    #[display("not possible")]
    NotPossible,
    /// The dictionary does not recognize the word.
    #[display("not a real word")]
    NotReal,
}

impl Rejection {
    /// Returns `true` when the rejection should not be surfaced to the player.
    pub fn is_silent(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Alert title shown for this rejection.
    pub fn title(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::AlreadyUsed => "Word used already",
            Self::IsRootWord => "Word invalid",
            Self::NotPossible => "Word not possible",
            Self::NotReal => "Word not recognized",
        }
    }

    /// Alert message shown for this rejection.
    ///
    /// `root_word` is interpolated where the message refers to it.
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::Empty => String::new(),
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::IsRootWord => "That is the original word".to_string(),
            Self::NotPossible => format!("You can't spell that word from '{}'", root_word),
            Self::NotReal => "That is not a real word".to_string(),
        }
    }
}

/// Result of validating one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// The candidate is a legal new word.
    #[display("accepted")]
    Accepted,
    /// The candidate was refused.
    #[display("rejected ({})", _0)]
    Rejected(Rejection),
}

impl ValidationOutcome {
    /// Returns `true` for [`ValidationOutcome::Accepted`].
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(self) -> Option<Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

impl From<Result<(), Rejection>> for ValidationOutcome {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => Self::Accepted,
            Err(reason) => Self::Rejected(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_visible_rejections_have_distinct_text() {
        let visible: Vec<Rejection> = Rejection::iter().filter(|r| !r.is_silent()).collect();
        assert_eq!(visible.len(), 4);

        let titles: HashSet<&str> = visible.iter().map(|r| r.title()).collect();
        let messages: HashSet<String> = visible.iter().map(|r| r.message("silkworm")).collect();
        assert_eq!(titles.len(), visible.len());
        assert_eq!(messages.len(), visible.len());
        assert!(titles.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn test_only_empty_is_silent() {
        assert!(Rejection::Empty.is_silent());
        assert!(!Rejection::NotReal.is_silent());
    }

    #[test]
    fn test_outcome_from_result() {
        assert_eq!(ValidationOutcome::from(Ok(())), ValidationOutcome::Accepted);
        assert_eq!(
            ValidationOutcome::from(Err(Rejection::NotPossible)),
            ValidationOutcome::Rejected(Rejection::NotPossible)
        );
    }

    #[test]
    fn test_outcome_json_shape() {
        let json = serde_json::to_string(&ValidationOutcome::Rejected(Rejection::AlreadyUsed))
            .expect("serialize");
        assert_eq!(json, r#"{"outcome":"rejected","reason":"already_used"}"#);
        let json = serde_json::to_string(&ValidationOutcome::Accepted).expect("serialize");
        assert_eq!(json, r#"{"outcome":"accepted"}"#);
    }
}

//! Non-interactive word checking.

use derive_new::new;
use scramble_rules::{GameSession, SpellCheckOracle, ValidationOutcome};
use serde::Serialize;
use tracing::instrument;

/// Outcome of one word fed through [`check_words`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct CheckLine {
    /// The word as given on the command line.
    pub word: String,
    /// What the session decided.
    #[serde(flatten)]
    pub outcome: ValidationOutcome,
}

impl std::fmt::Display for CheckLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.word, self.outcome)
    }
}

/// Submits `words` in order, as if typed one after another.
///
/// Accepted words stay in the session, so a repeated word reports
/// already used.
#[instrument(skip_all, fields(root_word = %session.root_word(), count = words.len()))]
pub fn check_words<O: SpellCheckOracle>(
    session: &mut GameSession<O>,
    words: &[String],
) -> Vec<CheckLine> {
    words
        .iter()
        .map(|word| CheckLine::new(word.clone(), session.submit(word)))
        .collect()
}

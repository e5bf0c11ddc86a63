//! Word scramble rules.
//!
//! The player is given a root word and submits other words spelled from
//! its letters. This crate holds the pure game logic:
//!
//! - **Validation**: [`WordValidator`] runs the submission rules in a fixed
//!   order and returns a [`ValidationOutcome`].
//! - **Dictionary**: [`SpellCheckOracle`] is injected into the validator;
//!   [`WordListOracle`] is the in-memory implementation.
//! - **Root words**: [`RootWordSource`] loads candidates and
//!   [`pick_root_word`] chooses one.
//! - **Session**: [`GameSession`] owns the root word and accepted words.
//!
//! # Example
//!
//! ```
//! use scramble_rules::{GameSession, Rejection, ValidationOutcome, WordListOracle, WordValidator};
//!
//! let oracle = WordListOracle::with_words("en", ["wilks"]);
//! let mut session = GameSession::new("silkworm", WordValidator::new(oracle));
//!
//! assert_eq!(session.submit("wilks"), ValidationOutcome::Accepted);
//! assert_eq!(
//!     session.submit("wilks"),
//!     ValidationOutcome::Rejected(Rejection::AlreadyUsed)
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod invariants;
mod oracle;
mod outcome;
mod root_words;
mod rules;
mod session;
mod validator;
mod word;

// Crate-level exports - Errors
pub use error::LoadError;

// Crate-level exports - Validation
pub use outcome::{Rejection, ValidationOutcome};
pub use rules::{IsComposable, IsOriginal, IsRealWord, LegalSubmission, NotEmpty, NotRootWord, Submission};
pub use validator::WordValidator;

// Crate-level exports - Dictionary
pub use oracle::{DEFAULT_LANGUAGE, SpellCheckOracle, WordListOracle};

// Crate-level exports - Root words
pub use root_words::{
    FALLBACK_ROOT_WORD, RootWordSource, StaticRootWordSource, parse_word_list, pick_root_word,
};

// Crate-level exports - Session
pub use invariants::{InvariantViolation, SessionInvariants};
pub use session::GameSession;
pub use word::{LetterPool, letter_count, normalize};

//! Application state for the game screen.

use derive_getters::Getters;
use derive_new::new;
use rand::rngs::StdRng;
use scramble_rules::{
    GameSession, LoadError, Rejection, RootWordSource, SpellCheckOracle, ValidationOutcome,
};
use tracing::{debug, info, instrument};

use super::input::Command;

/// A dismissible notification shown after a visible rejection.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Alert {
    title: String,
    message: String,
}

impl Alert {
    /// Builds the alert for a rejection, or `None` for silent rejections.
    pub fn for_rejection(reason: Rejection, root_word: &str) -> Option<Self> {
        if reason.is_silent() {
            None
        } else {
            Some(Self::new(reason.title().to_string(), reason.message(root_word)))
        }
    }
}

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
///
/// Owns the session, the root word source used for scrambling, the input
/// line and the open alert, if any.
pub struct App<O> {
    session: GameSession<O>,
    source: Box<dyn RootWordSource>,
    rng: StdRng,
    input: String,
    alert: Option<Alert>,
}

impl<O: SpellCheckOracle> App<O> {
    /// Creates an application around a started session.
    #[instrument(skip_all, fields(root_word = %session.root_word()))]
    pub fn new(session: GameSession<O>, source: Box<dyn RootWordSource>, rng: StdRng) -> Self {
        debug!("Creating app");
        Self {
            session,
            source,
            rng,
            input: String::new(),
            alert: None,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession<O> {
        &self.session
    }

    /// Gets the text typed so far.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Gets the open alert.
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Applies a command from the keyboard.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if scrambling cannot read the root word list.
    #[instrument(skip(self))]
    pub fn handle_command(&mut self, command: Command) -> Result<AppAction, LoadError> {
        match command {
            Command::Type(c) => self.input.push(c),
            Command::Backspace => {
                self.input.pop();
            }
            Command::Submit => self.submit(),
            Command::Scramble => {
                self.session.scramble(self.source.as_ref(), &mut self.rng)?;
                self.input.clear();
                self.alert = None;
            }
            Command::Dismiss => self.alert = None,
            Command::Quit => {
                info!("User quit");
                return Ok(AppAction::Quit);
            }
            Command::Ignore => {}
        }
        Ok(AppAction::Continue)
    }

    /// Submits the input line. The line is cleared whatever the outcome.
    fn submit(&mut self) {
        let candidate = std::mem::take(&mut self.input);
        match self.session.submit(&candidate) {
            ValidationOutcome::Accepted => {}
            ValidationOutcome::Rejected(reason) => {
                self.alert = Alert::for_rejection(reason, self.session.root_word());
            }
        }
    }
}

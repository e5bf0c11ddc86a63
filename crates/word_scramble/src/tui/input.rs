//! Key bindings for the game screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Append a character to the input line.
    Type(char),
    /// Delete the last input character.
    Backspace,
    /// Submit the input line.
    Submit,
    /// Start over with a new root word.
    Scramble,
    /// Close the alert.
    Dismiss,
    /// Leave the game.
    Quit,
    /// Key has no binding in the current state.
    Ignore,
}

/// Maps a key press to a command.
///
/// While an alert is open only dismissal and quitting are possible, so a
/// rejected word cannot be followed by another submission before the
/// player has seen why.
pub fn command_for(key: KeyEvent, alert_open: bool) -> Command {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl {
        return match key.code {
            KeyCode::Char('c') => Command::Quit,
            KeyCode::Char('n') if !alert_open => Command::Scramble,
            _ => Command::Ignore,
        };
    }

    if alert_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Command::Dismiss,
            _ => Command::Ignore,
        };
    }

    match key.code {
        KeyCode::Esc => Command::Quit,
        KeyCode::Enter => Command::Submit,
        KeyCode::Backspace => Command::Backspace,
        KeyCode::Char(c) => Command::Type(c),
        _ => Command::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_keys() {
        assert_eq!(command_for(key(KeyCode::Char('w')), false), Command::Type('w'));
        assert_eq!(command_for(key(KeyCode::Backspace), false), Command::Backspace);
        assert_eq!(command_for(key(KeyCode::Enter), false), Command::Submit);
        assert_eq!(command_for(key(KeyCode::Esc), false), Command::Quit);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(command_for(ctrl('n'), false), Command::Scramble);
        assert_eq!(command_for(ctrl('c'), false), Command::Quit);
        assert_eq!(command_for(ctrl('c'), true), Command::Quit);
    }

    #[test]
    fn test_alert_blocks_input() {
        assert_eq!(command_for(key(KeyCode::Char('w')), true), Command::Ignore);
        assert_eq!(command_for(ctrl('n'), true), Command::Ignore);
        assert_eq!(command_for(key(KeyCode::Enter), true), Command::Dismiss);
        assert_eq!(command_for(key(KeyCode::Esc), true), Command::Dismiss);
    }
}

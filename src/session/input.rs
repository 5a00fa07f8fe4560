//! Symbolic input events
//!
//! Raw device input is the caller's business; the session only understands
//! these four events.

use crate::game::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Lowercase ASCII letter
    Letter(char),
    Submit,
    Delete,
    NewGame,
}

impl InputEvent {
    /// Parse a key name such as `"a"`, `"ENTER"` or `"NEW_GAME"`
    ///
    /// Letters are accepted in either case. Unknown names yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let mut chars = raw.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return ch
                .is_ascii_alphabetic()
                .then(|| Self::Letter(ch.to_ascii_lowercase()));
        }

        match raw.to_ascii_uppercase().as_str() {
            "ENTER" | "SUBMIT" => Some(Self::Submit),
            "BACKSPACE" | "DELETE" => Some(Self::Delete),
            "NEW_GAME" => Some(Self::NewGame),
            _ => None,
        }
    }

    /// Engine action for this event
    #[must_use]
    pub const fn action(self) -> Action {
        match self {
            Self::Letter(ch) => Action::AppendLetter(ch),
            Self::Submit => Action::SubmitGuess,
            Self::Delete => Action::DeleteLetter,
            Self::NewGame => Action::StartNewGame,
        }
    }
}

//! Game engine
//!
//! A reducer-style state machine: [`transition`] takes a [`GameState`] and an
//! [`Action`] and returns the next snapshot. The engine owns no timers and does
//! no I/O; it reaches words only through the [`Dictionary`] trait.
//!
//! States are `Playing`, `Won` and `Lost`; the last two are terminal until a
//! `StartNewGame` action produces a fresh snapshot.

mod board;
mod message;
mod state;
mod transition;

pub use board::{Board, KeyboardFeedback, Row, Tile};
pub use message::{MessageId, MessageKind, StatusMessage};
pub use state::{GameState, GameStatus};
pub use transition::{Action, END_OF_GAME_MESSAGE_TTL, ValidationError, transition};

use crate::core::Word;
use crate::wordlists::{SourceError, WordLists, WordSource};
use std::sync::Arc;

/// What the engine needs from a word source
pub trait Dictionary {
    /// Case-insensitive check that `word` may be guessed
    fn is_guess_allowed(&self, word: &str) -> bool;

    /// Draw a target for a new game
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if no target is available.
    fn pick_target(&self) -> Result<Word, SourceError>;
}

impl Dictionary for WordLists {
    fn is_guess_allowed(&self, word: &str) -> bool {
        WordLists::is_guess_allowed(self, word)
    }

    fn pick_target(&self) -> Result<Word, SourceError> {
        WordLists::pick_target(self)
    }
}

impl Dictionary for WordSource {
    fn is_guess_allowed(&self, word: &str) -> bool {
        WordSource::is_guess_allowed(self, word)
    }

    fn pick_target(&self) -> Result<Word, SourceError> {
        WordSource::pick_target(self)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Arc<D> {
    fn is_guess_allowed(&self, word: &str) -> bool {
        (**self).is_guess_allowed(word)
    }

    fn pick_target(&self) -> Result<Word, SourceError> {
        (**self).pick_target()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Dictionary;
    use crate::core::Word;
    use crate::wordlists::{SourceError, WordLists};

    /// Embedded allowed list with a fixed target
    pub(crate) struct FixedWords {
        lists: Option<WordLists>,
        target: Word,
    }

    impl FixedWords {
        pub(crate) fn new(target: &str) -> Self {
            Self {
                lists: Some(WordLists::embedded().unwrap()),
                target: Word::new(target).unwrap(),
            }
        }

        /// Behaves like a source whose lists never loaded
        pub(crate) fn unavailable() -> Self {
            Self {
                lists: None,
                target: Word::new("apple").unwrap(),
            }
        }
    }

    impl Dictionary for FixedWords {
        fn is_guess_allowed(&self, word: &str) -> bool {
            self.lists
                .as_ref()
                .is_some_and(|lists| lists.is_guess_allowed(word))
        }

        fn pick_target(&self) -> Result<Word, SourceError> {
            match self.lists {
                Some(_) => Ok(self.target.clone()),
                None => Err(SourceError::NotLoaded),
            }
        }
    }
}

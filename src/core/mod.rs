//! Core domain types for the game
//!
//! Pure value types with no I/O: validated words, per-letter feedback states,
//! and the scoring rules that turn a guess into feedback.

mod feedback;
mod letter_state;
mod word;

pub use feedback::{Feedback, score_guess};
pub use letter_state::{LetterState, merge_key_state};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of guesses the player gets
pub const MAX_ATTEMPTS: usize = 6;

//! Command implementations

pub mod play;
pub mod score;

pub use play::{Flow, enter_word, handle_line, run_play};
pub use score::{ScoreResult, score_words};

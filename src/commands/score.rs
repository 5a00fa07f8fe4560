//! Score command
//!
//! Scores one guess against a chosen target without playing a game.

use crate::core::{Feedback, Word, score_guess};
use crate::game::ValidationError;
use crate::wordlists::WordLists;
use anyhow::{Context, Result, bail};

/// A guess, the target it was scored against, and the feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if:
/// - Either word is not five ASCII letters
/// - The guess is not in the allowed list
pub fn score_words(guess: &str, target: &str, lists: &WordLists) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("Invalid target '{target}'"))?;

    if !lists.contains(&guess) {
        bail!("{}: '{guess}'", ValidationError::NotInWordList);
    }

    let feedback = score_guess(&guess, &target);
    Ok(ScoreResult {
        guess,
        target,
        feedback,
    })
}

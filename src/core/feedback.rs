//! Guess scoring and the per-row feedback it produces
//!
//! Feedback is stored as one `LetterState` per position.

use super::{LetterState, WORD_LENGTH, Word};
use std::fmt;

/// Scored feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterState::Correct; WORD_LENGTH]);

    /// Wrap raw per-position states
    #[inline]
    #[must_use]
    pub const fn new(states: [LetterState; WORD_LENGTH]) -> Self {
        Self(states)
    }

    /// Per-position states in guess order
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// True when every tile is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&s| s == LetterState::Correct)
    }

    /// Count the correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterState::Correct)
    }

    /// Count the displaced letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterState::Present)
    }

    fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Parse feedback from a string like "GY-G-" or "🟩🟨⬜🟩⬜"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wrdl::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut states = [LetterState::Empty; WORD_LENGTH];
        let mut chars = s.chars();

        for slot in &mut states {
            *slot = match chars.next()? {
                'G' | 'g' | '🟩' => LetterState::Correct,
                'Y' | 'y' | '🟨' => LetterState::Present,
                '-' | '_' | '⬜' => LetterState::Absent,
                _ => return None,
            };
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(states))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|state| state.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.0 {
            write!(f, "{}", state.code())?;
        }
        Ok(())
    }
}

/// Score `guess` against `target`
///
/// Implements the two-pass rule that handles duplicate letters:
/// 1. Exact positions are marked correct and both letters are consumed
/// 2. Remaining guess letters, left to right, consume the leftmost unconsumed
///    matching target letter and are marked present
///
/// Everything else stays absent, so a repeated letter is never credited more
/// times than it occurs in the target.
///
/// # Examples
/// ```
/// use wrdl::core::{Feedback, Word, score_guess};
///
/// let guess = Word::new("crane").unwrap();
/// let target = Word::new("slate").unwrap();
/// assert_eq!(score_guess(&guess, &target), Feedback::parse("--G-G").unwrap());
/// ```
#[must_use]
pub fn score_guess(guess: &Word, target: &Word) -> Feedback {
    let mut result = [LetterState::Absent; WORD_LENGTH];
    let mut target_used = [false; WORD_LENGTH];

    for (i, (g, t)) in guess.chars().iter().zip(target.chars()).enumerate() {
        if g == t {
            result[i] = LetterState::Correct;
            target_used[i] = true;
        }
    }

    for (i, &letter) in guess.chars().iter().enumerate() {
        if result[i] == LetterState::Correct {
            continue;
        }

        let slot = (0..WORD_LENGTH).find(|&j| !target_used[j] && target.char_at(j) == letter);

        if let Some(j) = slot {
            target_used[j] = true;
            result[i] = LetterState::Present;
        }
    }

    Feedback(result)
}

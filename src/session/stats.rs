//! Per-session play statistics

use crate::core::MAX_ATTEMPTS;
use crate::game::{GameState, GameStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Wins by number of guesses; index 0 holds one-guess wins
    pub guess_distribution: [usize; MAX_ATTEMPTS],
}

impl Statistics {
    /// Record a finished game; games still in progress are ignored
    pub fn record(&mut self, state: &GameState) {
        match state.status() {
            GameStatus::Playing => {}
            GameStatus::Won => {
                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(slot) = state
                    .guesses_used()
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *slot += 1;
                }
            }
            GameStatus::Lost => {
                self.games_played += 1;
                self.current_streak = 0;
            }
        }
    }

    /// Whole-number win percentage
    #[must_use]
    pub fn win_percentage(&self) -> usize {
        (self.games_won * 100).checked_div(self.games_played).unwrap_or(0)
    }
}

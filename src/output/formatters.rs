//! Formatting utilities for terminal output

use crate::core::LetterState;
use crate::game::{Board, Tile};
use colored::{ColoredString, Colorize};

/// Upper-cased tile letter padded to a three-column cell
#[must_use]
pub fn tile_text(tile: Tile) -> String {
    match tile.letter() {
        Some(letter) => format!(" {} ", letter.to_ascii_uppercase()),
        None => " · ".to_string(),
    }
}

/// Color `text` the way a tile or key in `state` is shown
#[must_use]
pub fn paint(text: &str, state: LetterState) -> ColoredString {
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
        LetterState::Empty => text.bright_white(),
    }
}

/// Emoji grid of the scored rows, one line per guess
#[must_use]
pub fn emoji_grid(board: &Board) -> String {
    board
        .rows()
        .filter(|row| row.iter().all(|t| t.state().is_scored()))
        .map(|row| {
            row.iter()
                .map(|t| t.state().emoji())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a bar `width` cells wide, filled in proportion to `value / max`
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = (value * width).checked_div(max).unwrap_or(0).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Action, GameState, test_support::FixedWords};

    #[test]
    fn tile_cells() {
        assert_eq!(tile_text(Tile::typed('q')), " Q ");
        assert_eq!(tile_text(Tile::EMPTY), " · ");
    }

    #[test]
    fn emoji_grid_skips_unscored_rows() {
        let words = FixedWords::new("apple");
        let mut state = GameState::start(&words).unwrap();
        for guess in ["paper", "apple"] {
            for ch in guess.chars() {
                state = state.apply(Action::AppendLetter(ch), &words).unwrap();
            }
            state = state.apply(Action::SubmitGuess, &words).unwrap();
        }
        assert_eq!(emoji_grid(state.board()), "🟨🟨🟩🟨⬜\n🟩🟩🟩🟩🟩");
        assert_eq!(emoji_grid(&Board::default()), "");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 10, 10), "░░░░░░░░░░");
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(10, 10, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(5, 10, 10), "█████░░░░░");
    }
}

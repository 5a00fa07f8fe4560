//! Board tiles and aggregate keyboard feedback

use crate::core::{Feedback, LetterState, MAX_ATTEMPTS, WORD_LENGTH, Word, merge_key_state};

/// One letter cell on the board
///
/// Tiles are replaced wholesale, never edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tile {
    letter: Option<char>,
    state: LetterState,
}

impl Tile {
    /// Blank, unscored tile
    pub const EMPTY: Self = Self {
        letter: None,
        state: LetterState::Empty,
    };

    /// A typed but not yet submitted letter
    #[must_use]
    pub const fn typed(letter: char) -> Self {
        Self {
            letter: Some(letter.to_ascii_lowercase()),
            state: LetterState::Empty,
        }
    }

    /// Same letter with its scored state
    #[must_use]
    pub const fn scored(self, state: LetterState) -> Self {
        Self {
            letter: self.letter,
            state,
        }
    }

    /// Lowercase letter, if any
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> LetterState {
        self.state
    }
}

/// One row of tiles
pub type Row = [Tile; WORD_LENGTH];

/// `MAX_ATTEMPTS` rows of `WORD_LENGTH` tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board([Row; MAX_ATTEMPTS]);

impl Default for Board {
    fn default() -> Self {
        Self([[Tile::EMPTY; WORD_LENGTH]; MAX_ATTEMPTS])
    }
}

impl Board {
    /// Tiles of a row, or `None` past the last row
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&Row> {
        self.0.get(row)
    }

    /// A single tile, or `None` out of bounds
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        self.0.get(row)?.get(col).copied()
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.0.iter()
    }

    /// The row's letters as a word, if every tile holds a letter
    #[must_use]
    pub fn row_word(&self, row: usize) -> Option<Word> {
        let text: Option<String> = self.row(row)?.iter().map(Tile::letter).collect();
        Word::new(text?).ok()
    }

    pub(crate) fn set_tile(&mut self, row: usize, col: usize, tile: Tile) {
        if let Some(slot) = self.0.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = tile;
        }
    }

    pub(crate) fn score_row(&mut self, row: usize, feedback: &Feedback) {
        if let Some(tiles) = self.0.get_mut(row) {
            for (tile, &state) in tiles.iter_mut().zip(feedback.states()) {
                *tile = tile.scored(state);
            }
        }
    }
}

/// Best-known state of every letter key across the game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyboardFeedback([LetterState; 26]);

impl Default for KeyboardFeedback {
    fn default() -> Self {
        Self([LetterState::Empty; 26])
    }
}

impl KeyboardFeedback {
    fn index(letter: char) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_lowercase() as u8 - b'a'))
    }

    /// State of a key (case-insensitive); non-letters read as `Empty`
    #[must_use]
    pub fn get(&self, letter: char) -> LetterState {
        Self::index(letter).map_or(LetterState::Empty, |i| self.0[i])
    }

    /// Keys `a..=z` with their states
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        ('a'..='z').zip(self.0.iter().copied())
    }

    /// Fold a scored guess into the keyboard
    #[must_use]
    pub fn merged(&self, guess: &Word, feedback: &Feedback) -> Self {
        let mut next = *self;
        for (&letter, &state) in guess.chars().iter().zip(feedback.states()) {
            if let Some(i) = Self::index(char::from(letter)) {
                next.0[i] = merge_key_state(next.0[i], state);
            }
        }
        next
    }
}

//! Immutable game snapshot
//!
//! A `GameState` is plain data (`Send + Sync`), so snapshots can be shared
//! freely for reading. Every action produces a new snapshot; callers must
//! dispatch actions one at a time.

use super::board::{Board, KeyboardFeedback};
use super::message::{MessageId, StatusMessage};
use crate::core::{MAX_ATTEMPTS, WORD_LENGTH, Word};

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_row: usize,
    pub(crate) current_tile: usize,
    pub(crate) is_game_over: bool,
    pub(crate) has_won: bool,
    pub(crate) target_word: Word,
    pub(crate) keyboard: KeyboardFeedback,
    pub(crate) messages: Vec<StatusMessage>,
    pub(crate) next_message_id: MessageId,
}

impl GameState {
    /// Fresh game for `target` with an empty board and no messages
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self::with_message_ids_from(target, MessageId::FIRST)
    }

    /// Fresh game whose first message id is `first_id`
    ///
    /// Used across new games so ids keep increasing within a session.
    #[must_use]
    pub fn with_message_ids_from(target: Word, first_id: MessageId) -> Self {
        Self {
            board: Board::default(),
            current_row: 0,
            current_tile: 0,
            is_game_over: false,
            has_won: false,
            target_word: target,
            keyboard: KeyboardFeedback::default(),
            messages: Vec::new(),
            next_message_id: first_id,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Row the next guess goes into; equals `MAX_ATTEMPTS` once all are used
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    /// Letters typed into the current row
    #[must_use]
    pub const fn current_tile(&self) -> usize {
        self.current_tile
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    #[must_use]
    pub const fn has_won(&self) -> bool {
        self.has_won
    }

    #[must_use]
    pub const fn target_word(&self) -> &Word {
        &self.target_word
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardFeedback {
        &self.keyboard
    }

    /// Pending messages, oldest first
    #[must_use]
    pub fn status_messages(&self) -> &[StatusMessage] {
        &self.messages
    }

    /// Id the next message will receive
    #[must_use]
    pub const fn next_message_id(&self) -> MessageId {
        self.next_message_id
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        match (self.is_game_over, self.has_won) {
            (true, true) => GameStatus::Won,
            (true, false) => GameStatus::Lost,
            (false, _) => GameStatus::Playing,
        }
    }

    /// Number of submitted guesses
    #[must_use]
    pub const fn guesses_used(&self) -> usize {
        self.current_row
    }

    /// True when the current row holds a full word
    #[must_use]
    pub const fn row_is_full(&self) -> bool {
        self.current_tile == WORD_LENGTH
    }

    /// True when no more rows are available
    #[must_use]
    pub const fn rows_exhausted(&self) -> bool {
        self.current_row >= MAX_ATTEMPTS
    }
}

//! Pure state transitions
//!
//! `transition` maps a snapshot and an action to a new snapshot. It never edits
//! its input and performs no I/O; the dictionary is consulted only when a guess
//! is submitted or a new game picks its target.

use super::message::{MessageId, MessageKind, StatusMessage};
use super::state::GameState;
use super::{Dictionary, board::Tile};
use crate::core::{LetterState, MAX_ATTEMPTS, score_guess};
use crate::wordlists::SourceError;
use std::time::Duration;
use thiserror::Error;

/// How long the win/loss announcement stays up
pub const END_OF_GAME_MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Input to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AppendLetter(char),
    DeleteLetter,
    SubmitGuess,
    StartNewGame,
    DismissMessage(MessageId),
    ExpireOldestMessage,
}

/// A rejected player input, reported as an error message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Word must be 5 letters")]
    WordTooLong,
    #[error("Not enough letters")]
    NotEnoughLetters,
    #[error("Not in word list")]
    NotInWordList,
}

/// Apply `action` to `state`
///
/// # Errors
///
/// Only `Action::StartNewGame` can fail, when the dictionary cannot supply a
/// target; the error is returned as-is and no fallback is invented here.
pub fn transition<D: Dictionary + ?Sized>(
    state: &GameState,
    action: Action,
    dictionary: &D,
) -> Result<GameState, SourceError> {
    let next = match action {
        Action::AppendLetter(letter) => append_letter(state, letter),
        Action::DeleteLetter => delete_letter(state),
        Action::SubmitGuess => submit_guess(state, dictionary),
        Action::StartNewGame => start_new_game(state, dictionary)?,
        Action::DismissMessage(id) => remove_message(state, |m| m.id() == id),
        Action::ExpireOldestMessage => {
            let oldest = state.messages.iter().map(StatusMessage::id).min();
            remove_message(state, |m| Some(m.id()) == oldest)
        }
    };
    Ok(next)
}

impl GameState {
    /// Start a game with a target drawn from `dictionary`
    ///
    /// # Errors
    ///
    /// Returns the dictionary's `SourceError` if no target can be picked.
    pub fn start<D: Dictionary + ?Sized>(dictionary: &D) -> Result<Self, SourceError> {
        Ok(Self::new(dictionary.pick_target()?))
    }

    /// Method form of [`transition`]
    ///
    /// # Errors
    ///
    /// See [`transition`].
    pub fn apply<D: Dictionary + ?Sized>(
        &self,
        action: Action,
        dictionary: &D,
    ) -> Result<Self, SourceError> {
        transition(self, action, dictionary)
    }

    fn push_message(&mut self, kind: MessageKind, text: impl Into<String>, ttl: Option<Duration>) {
        let id = self.next_message_id;
        self.next_message_id = id.next();
        let message = StatusMessage::new(id, kind, text);
        self.messages.push(match ttl {
            Some(ttl) => message.with_ttl(ttl),
            None => message,
        });
    }

    fn reject(&self, error: ValidationError) -> Self {
        tracing::debug!(%error, row = self.current_row, "input rejected");
        let mut next = self.clone();
        next.push_message(MessageKind::Error, error.to_string(), None);
        next
    }
}

fn append_letter(state: &GameState, letter: char) -> GameState {
    if state.is_game_over || state.rows_exhausted() || !letter.is_ascii_alphabetic() {
        return state.clone();
    }
    if state.row_is_full() {
        return state.reject(ValidationError::WordTooLong);
    }

    let mut next = state.clone();
    next.board.set_tile(state.current_row, state.current_tile, Tile::typed(letter));
    next.current_tile += 1;
    next
}

fn delete_letter(state: &GameState) -> GameState {
    if state.is_game_over || state.current_tile == 0 {
        return state.clone();
    }

    let mut next = state.clone();
    next.current_tile -= 1;
    next.board.set_tile(state.current_row, next.current_tile, Tile::EMPTY);
    next
}

fn submit_guess<D: Dictionary + ?Sized>(state: &GameState, dictionary: &D) -> GameState {
    if state.is_game_over {
        return state.clone();
    }
    if !state.row_is_full() {
        return state.reject(ValidationError::NotEnoughLetters);
    }
    if state.rows_exhausted() {
        return state.clone();
    }

    let Some(guess) = state.board.row_word(state.current_row) else {
        return state.clone();
    };
    if !dictionary.is_guess_allowed(guess.text()) {
        return state.reject(ValidationError::NotInWordList);
    }

    let feedback = score_guess(&guess, &state.target_word);
    tracing::debug!(guess = %guess, %feedback, row = state.current_row, "guess scored");

    let mut next = state.clone();
    next.board.score_row(state.current_row, &feedback);
    next.keyboard = state.keyboard.merged(&guess, &feedback);
    next.current_row += 1;
    next.current_tile = 0;

    // Tile-based win check: every scored tile must be correct.
    next.has_won = next
        .board
        .row(state.current_row)
        .is_some_and(|row| row.iter().all(|t| t.state() == LetterState::Correct));
    next.is_game_over = next.has_won || next.current_row == MAX_ATTEMPTS;

    if next.has_won {
        tracing::info!(guesses = next.current_row, "game won");
        next.push_message(
            MessageKind::Success,
            "Congratulations! You won!",
            Some(END_OF_GAME_MESSAGE_TTL),
        );
    } else if next.is_game_over {
        tracing::info!(word = %state.target_word, "game lost");
        let text = format!(
            "Game over! The word was {}",
            state.target_word.text().to_uppercase()
        );
        next.push_message(MessageKind::Info, text, Some(END_OF_GAME_MESSAGE_TTL));
    }

    next
}

fn start_new_game<D: Dictionary + ?Sized>(
    state: &GameState,
    dictionary: &D,
) -> Result<GameState, SourceError> {
    let target = dictionary.pick_target()?;
    tracing::info!("new game started");
    Ok(GameState::with_message_ids_from(target, state.next_message_id))
}

fn remove_message(state: &GameState, matches: impl Fn(&StatusMessage) -> bool) -> GameState {
    let mut next = state.clone();
    next.messages.retain(|m| !matches(m));
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{WORD_LENGTH, Word};
    use crate::game::{GameStatus, test_support::FixedWords};

    fn type_word(mut state: GameState, word: &str, words: &FixedWords) -> GameState {
        for ch in word.chars() {
            state = state.apply(Action::AppendLetter(ch), words).unwrap();
        }
        state
    }

    fn guess(state: GameState, word: &str, words: &FixedWords) -> GameState {
        type_word(state, word, words)
            .apply(Action::SubmitGuess, words)
            .unwrap()
    }

    fn texts(state: &GameState) -> Vec<&str> {
        state.status_messages().iter().map(StatusMessage::text).collect()
    }

    #[test]
    fn append_and_delete() {
        let words = FixedWords::new("apple");
        let state = GameState::start(&words).unwrap();

        let state = state.apply(Action::AppendLetter('A'), &words).unwrap();
        assert_eq!(state.current_tile(), 1);
        assert_eq!(state.board().tile(0, 0).unwrap().letter(), Some('a'));

        let state = state.apply(Action::DeleteLetter, &words).unwrap();
        assert_eq!(state.current_tile(), 0);
        assert_eq!(state.board().tile(0, 0).unwrap(), Tile::EMPTY);

        let unchanged = state.apply(Action::DeleteLetter, &words).unwrap();
        assert_eq!(unchanged, state);
    }

    #[test]
    fn transitions_do_not_touch_their_input() {
        let words = FixedWords::new("apple");
        let before = GameState::start(&words).unwrap();
        let copy = before.clone();
        let _after = before.apply(Action::AppendLetter('x'), &words).unwrap();
        assert_eq!(before, copy);
    }

    #[test]
    fn non_letters_are_ignored() {
        let words = FixedWords::new("apple");
        let state = GameState::start(&words).unwrap();
        for ch in ['1', ' ', 'é', '\n'] {
            assert_eq!(state.apply(Action::AppendLetter(ch), &words).unwrap(), state);
        }
    }

    #[test]
    fn sixth_letter_is_rejected() {
        let words = FixedWords::new("apple");
        let state = type_word(GameState::start(&words).unwrap(), "crane", &words);
        let state = state.apply(Action::AppendLetter('s'), &words).unwrap();

        assert_eq!(state.current_tile(), WORD_LENGTH);
        assert_eq!(state.board().row_word(0).unwrap().text(), "crane");
        assert_eq!(texts(&state), ["Word must be 5 letters"]);
        assert_eq!(state.status_messages()[0].kind(), MessageKind::Error);
        assert_eq!(state.status_messages()[0].ttl(), None);
    }

    #[test]
    fn submit_incomplete_word() {
        let words = FixedWords::new("apple");
        let state = type_word(GameState::start(&words).unwrap(), "cra", &words);
        let state = state.apply(Action::SubmitGuess, &words).unwrap();

        assert_eq!(state.current_row(), 0);
        assert_eq!(state.current_tile(), 3);
        assert_eq!(texts(&state), ["Not enough letters"]);
    }

    #[test]
    fn submit_word_not_in_list() {
        let words = FixedWords::new("apple");
        let typed = type_word(GameState::start(&words).unwrap(), "xyzzy", &words);
        let state = typed.apply(Action::SubmitGuess, &words).unwrap();

        assert_eq!(state.current_row(), 0);
        assert_eq!(state.current_tile(), WORD_LENGTH);
        assert_eq!(state.board(), typed.board());
        assert_eq!(texts(&state), ["Not in word list"]);

        // The player may edit and resubmit
        let state = state.apply(Action::DeleteLetter, &words).unwrap();
        assert_eq!(state.current_tile(), 4);
    }

    #[test]
    fn scored_guess_advances_row() {
        let words = FixedWords::new("apple");
        let state = guess(GameState::start(&words).unwrap(), "paper", &words);

        assert_eq!(state.current_row(), 1);
        assert_eq!(state.current_tile(), 0);
        assert_eq!(state.status(), GameStatus::Playing);
        assert!(state.status_messages().is_empty());

        let states: Vec<LetterState> = state.board().row(0).unwrap().iter().map(Tile::state).collect();
        assert_eq!(
            states,
            [
                LetterState::Present,
                LetterState::Present,
                LetterState::Correct,
                LetterState::Present,
                LetterState::Absent,
            ]
        );
        assert_eq!(state.keyboard().get('p'), LetterState::Correct);
        assert_eq!(state.keyboard().get('r'), LetterState::Absent);
    }

    #[test]
    fn winning_guess() {
        let words = FixedWords::new("apple");
        let state = guess(GameState::start(&words).unwrap(), "APPLE", &words);

        assert!(
            state
                .board()
                .row(0)
                .unwrap()
                .iter()
                .all(|t| t.state() == LetterState::Correct)
        );
        assert!(state.has_won());
        assert!(state.is_game_over());
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(texts(&state), ["Congratulations! You won!"]);
        let message = &state.status_messages()[0];
        assert_eq!(message.kind(), MessageKind::Success);
        assert_eq!(message.ttl(), Some(END_OF_GAME_MESSAGE_TTL));

        // Terminal: no further board changes
        let after = state.apply(Action::AppendLetter('a'), &words).unwrap();
        assert_eq!(after, state);
        let after = state.apply(Action::DeleteLetter, &words).unwrap();
        assert_eq!(after, state);
    }

    #[test]
    fn losing_after_six_guesses() {
        let words = FixedWords::new("apple");
        let mut state = GameState::start(&words).unwrap();
        for word in ["crane", "slate", "beach", "chair", "dance", "eagle"] {
            assert!(!state.is_game_over());
            state = guess(state, word, &words);
        }

        assert!(state.is_game_over());
        assert!(!state.has_won());
        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.current_row(), MAX_ATTEMPTS);
        assert_eq!(texts(&state), ["Game over! The word was APPLE"]);
        assert_eq!(state.status_messages()[0].kind(), MessageKind::Info);
        assert_eq!(state.status_messages()[0].ttl(), Some(END_OF_GAME_MESSAGE_TTL));

        let seventh = state.apply(Action::SubmitGuess, &words).unwrap();
        assert_eq!(seventh, state);
    }

    #[test]
    fn keyboard_never_loses_information() {
        let words = FixedWords::new("apple");
        let mut state = GameState::start(&words).unwrap();
        for word in ["paper", "eagle", "apply", "crane", "speed"] {
            let before = *state.keyboard();
            state = guess(state, word, &words);
            for ((_, old), (_, new)) in before.iter().zip(state.keyboard().iter()) {
                assert!(new >= old, "{word}: {old} -> {new}");
            }
        }
    }

    #[test]
    fn rows_are_scored_independently() {
        let words = FixedWords::new("apple");
        let state = guess(GameState::start(&words).unwrap(), "apply", &words);
        let state = guess(state, "eagle", &words);

        let expected = score_guess(&Word::new("eagle").unwrap(), &Word::new("apple").unwrap());
        let row: Vec<LetterState> = state.board().row(1).unwrap().iter().map(Tile::state).collect();
        assert_eq!(row, expected.states());
    }

    #[test]
    fn messages_dismiss_and_expire() {
        let words = FixedWords::new("apple");
        let mut state = GameState::start(&words).unwrap();
        for _ in 0..3 {
            state = state.apply(Action::SubmitGuess, &words).unwrap();
        }
        let ids: Vec<MessageId> = state.status_messages().iter().map(StatusMessage::id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));

        let state = state.apply(Action::DismissMessage(ids[1]), &words).unwrap();
        let remaining: Vec<MessageId> = state.status_messages().iter().map(StatusMessage::id).collect();
        assert_eq!(remaining, [ids[0], ids[2]]);

        let state = state.apply(Action::ExpireOldestMessage, &words).unwrap();
        let remaining: Vec<MessageId> = state.status_messages().iter().map(StatusMessage::id).collect();
        assert_eq!(remaining, [ids[2]]);
    }

    #[test]
    fn dismissing_unknown_message_is_a_no_op() {
        let words = FixedWords::new("apple");
        let state = GameState::start(&words)
            .unwrap()
            .apply(Action::SubmitGuess, &words)
            .unwrap();

        let after = state.apply(Action::DismissMessage(MessageId::new(999)), &words).unwrap();
        assert_eq!(after, state);

        let empty = GameState::start(&words).unwrap();
        let after = empty.apply(Action::ExpireOldestMessage, &words).unwrap();
        assert_eq!(after, empty);
    }

    #[test]
    fn new_game_resets_board_and_keeps_ids_increasing() {
        let words = FixedWords::new("apple");
        let state = guess(GameState::start(&words).unwrap(), "apple", &words);
        let last_id = state.status_messages()[0].id();

        let fresh = state.apply(Action::StartNewGame, &words).unwrap();
        assert_eq!(fresh.status(), GameStatus::Playing);
        assert_eq!(fresh.current_row(), 0);
        assert!(fresh.status_messages().is_empty());
        assert!(fresh.keyboard().iter().all(|(_, s)| s == LetterState::Empty));
        assert!(fresh.next_message_id() > last_id);

        let fresh = fresh.apply(Action::SubmitGuess, &words).unwrap();
        assert!(fresh.status_messages()[0].id() > last_id);
    }

    #[test]
    fn new_game_propagates_missing_target() {
        let words = FixedWords::new("apple");
        let state = GameState::start(&words).unwrap();

        let err = state.apply(Action::StartNewGame, &FixedWords::unavailable()).unwrap_err();
        assert_eq!(err, SourceError::NotLoaded);
        assert!(GameState::start(&FixedWords::unavailable()).is_err());
    }
}

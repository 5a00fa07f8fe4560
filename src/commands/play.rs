//! Interactive play mode
//!
//! Line-oriented game loop: each line is a whole guess or a command.

use crate::game::{Action, MessageId};
use crate::output::{
    print_banner, print_board, print_game_summary, print_keyboard, print_messages,
    print_statistics,
};
use crate::session::{InputEvent, Session};
use crate::wordlists::LoadStatus;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// What the loop does after a line is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run the interactive game until the player quits or input ends
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub async fn run_play(session: &mut Session) -> Result<()> {
    print_banner();
    if let LoadStatus::Failed(error) = session.source().status() {
        println!(
            "{}",
            format!("⚠ Word lists unavailable ({error}); guesses cannot be checked. Type 'new' to retry.")
                .yellow()
        );
    }

    let mut last_shown: Option<MessageId> = None;
    let mut summary_shown = false;

    loop {
        session.tick(Instant::now());
        let state = session.state();

        print_board(state);
        print_keyboard(state.keyboard());
        print_messages(
            state
                .status_messages()
                .iter()
                .filter(|m| last_shown.is_none_or(|id| m.id() > id)),
        );
        if let Some(newest) = state.status_messages().last() {
            last_shown = Some(newest.id());
        }

        if state.is_game_over() && !summary_shown {
            print_game_summary(state);
            summary_shown = true;
        }

        let Some(line) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        let was_over = session.state().is_game_over();
        if handle_line(session, &line).await? == Flow::Quit {
            print_statistics(session.stats());
            println!("👋 Thanks for playing!\n");
            return Ok(());
        }
        if was_over && !session.state().is_game_over() {
            summary_shown = false;
        }
    }
}

/// Handle one line of player input
///
/// # Errors
///
/// Propagates failures the session cannot recover from.
pub async fn handle_line(session: &mut Session, line: &str) -> Result<Flow> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "" => {}
        "quit" | "q" | "exit" => return Ok(Flow::Quit),
        "stats" => print_statistics(session.stats()),
        "new" | "n" => send_event(session, InputEvent::NewGame).await,
        _ => {
            if let Some(key) = line.strip_prefix('/') {
                match InputEvent::parse(key) {
                    Some(event) => send_event(session, event).await,
                    None => println!("{}", format!("Unknown key '{key}'").red()),
                }
            } else {
                enter_word(session, line)?;
            }
        }
    }
    Ok(Flow::Continue)
}

/// Only a new game can fail; the current game is kept and play goes on
async fn send_event(session: &mut Session, event: InputEvent) {
    if let Err(error) = session.handle_event(event).await {
        println!("{}", format!("✗ Could not start a new game: {error}").red());
    }
}

/// Replace the current row with `word` and submit it
///
/// Letters past the fifth trigger a single length error and nothing is
/// submitted.
///
/// # Errors
///
/// Propagates session dispatch failures.
pub fn enter_word(session: &mut Session, word: &str) -> Result<()> {
    if session.state().is_game_over() {
        println!("Game over. Type 'new' to play again.");
        return Ok(());
    }

    for _ in 0..session.state().current_tile() {
        session.dispatch(Action::DeleteLetter)?;
    }

    for ch in word.chars().filter(char::is_ascii_alphabetic) {
        let overflow = session.state().row_is_full();
        session.dispatch(Action::AppendLetter(ch))?;
        if overflow {
            return Ok(());
        }
    }

    session.dispatch(Action::SubmitGuess)?;
    Ok(())
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameStatus;
    use crate::session::SessionConfig;
    use crate::wordlists::WordSource;
    use std::sync::Arc;

    async fn session(target: &str) -> Session {
        Session::start_with_target(
            Arc::new(WordSource::embedded()),
            SessionConfig::default(),
            Word::new(target).unwrap(),
        )
        .await
        .unwrap()
    }

    fn texts(session: &Session) -> Vec<String> {
        session
            .state()
            .status_messages()
            .iter()
            .map(|m| m.text().to_string())
            .collect()
    }

    #[tokio::test]
    async fn word_is_typed_and_submitted() {
        let mut session = session("apple").await;
        enter_word(&mut session, "Crane").unwrap();
        assert_eq!(session.state().current_row(), 1);
        assert_eq!(session.state().board().row_word(0).unwrap().text(), "crane");
    }

    #[tokio::test]
    async fn long_word_reports_once() {
        let mut session = session("apple").await;
        enter_word(&mut session, "cranes").unwrap();
        assert_eq!(session.state().current_row(), 0);
        assert_eq!(texts(&session), ["Word must be 5 letters"]);

        // Retyping replaces the pending row
        enter_word(&mut session, "slate").unwrap();
        assert_eq!(session.state().current_row(), 1);
        assert_eq!(session.state().board().row_word(0).unwrap().text(), "slate");
    }

    #[tokio::test]
    async fn short_and_unknown_words_are_rejected() {
        let mut session = session("apple").await;
        enter_word(&mut session, "cra").unwrap();
        enter_word(&mut session, "xyzzy").unwrap();
        assert_eq!(session.state().current_row(), 0);
        assert_eq!(texts(&session), ["Not enough letters", "Not in word list"]);
    }

    #[tokio::test]
    async fn key_lines_and_commands() {
        let mut session = session("apple").await;
        handle_line(&mut session, "apple").await.unwrap();
        assert_eq!(session.state().status(), GameStatus::Won);

        handle_line(&mut session, "new").await.unwrap();
        assert_eq!(session.state().status(), GameStatus::Playing);
        assert_eq!(session.stats().games_won, 1);

        for ch in "crane".chars() {
            handle_line(&mut session, &format!("/{ch}")).await.unwrap();
        }
        handle_line(&mut session, "/BACKSPACE").await.unwrap();
        assert_eq!(session.state().current_tile(), 4);
        handle_line(&mut session, "/e").await.unwrap();
        handle_line(&mut session, "/ENTER").await.unwrap();
        assert_eq!(session.state().current_row(), 1);

        assert_eq!(handle_line(&mut session, "/nope").await.unwrap(), Flow::Continue);
        assert_eq!(handle_line(&mut session, "QUIT").await.unwrap(), Flow::Quit);
    }
}

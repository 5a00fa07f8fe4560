//! Display functions for game state and command results

use super::formatters::{create_progress_bar, emoji_grid, paint, tile_text};
use crate::commands::ScoreResult;
use crate::game::{GameState, KeyboardFeedback, MessageKind, StatusMessage};
use crate::session::Statistics;
use colored::Colorize;

const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

pub fn print_banner() {
    println!("\n{}", "═".repeat(40).bright_cyan());
    println!("{}", "          W R D L".bright_green().bold());
    println!("{}", "═".repeat(40).bright_cyan());
    println!("\nGuess the hidden five-letter word in six tries.");
    println!("Type a word and press Enter. Other commands:");
    println!("  new    start a new game");
    println!("  stats  show statistics");
    println!("  /KEY   send one key: /BACKSPACE, /ENTER, /NEW_GAME");
    println!("  quit   leave\n");
}

/// Print the six rows of tiles
pub fn print_board(state: &GameState) {
    println!();
    for row in state.board().rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|&tile| paint(&tile_text(tile), tile.state()).to_string())
            .collect();
        println!("    {}", cells.join(" "));
    }
    println!();
}

/// Print the on-screen keyboard with each key's best-known state
pub fn print_keyboard(keys: &KeyboardFeedback) {
    for (indent, row) in KEY_ROWS.iter().enumerate() {
        let cells: Vec<String> = row
            .chars()
            .map(|ch| {
                let text = ch.to_ascii_uppercase().to_string();
                paint(&text, keys.get(ch)).to_string()
            })
            .collect();
        println!("  {}{}", " ".repeat(indent), cells.join(" "));
    }
    println!();
}

pub fn print_messages<'a>(messages: impl IntoIterator<Item = &'a StatusMessage>) {
    for message in messages {
        let text = match message.kind() {
            MessageKind::Error => format!("✗ {}", message.text()).red().bold(),
            MessageKind::Success => format!("🎉 {}", message.text()).green().bold(),
            MessageKind::Info => format!("ℹ {}", message.text()).bright_cyan(),
        };
        println!("  {text}");
    }
}

/// Print the share grid for a finished game
pub fn print_game_summary(state: &GameState) {
    let score = if state.has_won() {
        state.guesses_used().to_string()
    } else {
        "X".to_string()
    };
    println!("\n  {} {score}/6", "WRDL".bright_white().bold());
    for line in emoji_grid(state.board()).lines() {
        println!("  {line}");
    }
    println!("\n  Type 'new' to play again.\n");
}

pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    println!("   Played:          {}", stats.games_played);
    println!("   Win %:           {}", stats.win_percentage());
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count, max, 20);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
    println!();
}

/// Print a scored guess as letters and emoji
pub fn print_score_result(result: &ScoreResult) {
    let letters: Vec<String> = result
        .guess
        .text()
        .chars()
        .zip(result.feedback.states())
        .map(|(ch, &state)| paint(&format!(" {} ", ch.to_ascii_uppercase()), state).to_string())
        .collect();

    println!(
        "\n{} vs {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("  {}", letters.join(" "));
    println!("  {}  {}", result.feedback.to_emoji(), result.feedback);

    if result.feedback.is_perfect() {
        println!("{}", "✅ Exact match".green().bold());
    }
}

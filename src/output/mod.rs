//! Terminal output formatting
//!
//! Board, keyboard and result rendering for the CLI.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_board, print_game_summary, print_keyboard, print_messages,
    print_score_result, print_statistics,
};

//! WRDL
//!
//! A terminal word-guessing game built around a pure, reducer-style engine.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wrdl::game::{Action, GameState};
//! use wrdl::wordlists::WordLists;
//!
//! let words = WordLists::embedded().unwrap();
//! let mut state = GameState::start(&words).unwrap();
//! for ch in "crane".chars() {
//!     state = state.apply(Action::AppendLetter(ch), &words).unwrap();
//! }
//! let state = state.apply(Action::SubmitGuess, &words).unwrap();
//! println!("{:?}", state.board().row(0));
//! ```

// Core domain types
pub mod core;

// Word lists and loading
pub mod wordlists;

// Game engine
pub mod game;

// Session controller
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

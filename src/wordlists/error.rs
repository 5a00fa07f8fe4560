//! Word source failures

use std::fmt;
use thiserror::Error;

/// Which of the two word lists an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Allowed,
    Targets,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Allowed => "allowed-guess",
            Self::Targets => "target",
        };
        write!(f, "{label}")
    }
}

/// The word source could not supply words
///
/// `Clone` so one shared load result can be handed to every waiter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("word lists have not been loaded")]
    NotLoaded,

    #[error("{list} word list is empty")]
    Empty { list: ListKind },

    #[error("failed to read word list {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("word provider failed: {0}")]
    Provider(String),

    #[error("'{word}' is not in the target word list")]
    NotATarget { word: String },
}

//! Error type shared by every part of the game core.

use thiserror::Error;

/// Errors from move-set validation, selection, and commitment operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid number of moves: {count} (need an odd number, at least 3)")]
    InvalidMoveCount { count: usize },

    #[error("Duplicate move: {0}")]
    DuplicateMove(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Randomness source failed: {0}")]
    RandomnessFailure(String),

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
}

impl From<rand::Error> for GameError {
    fn from(err: rand::Error) -> Self {
        GameError::RandomnessFailure(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

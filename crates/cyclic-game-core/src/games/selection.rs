//! Player input, resolved once at the boundary.

use super::MoveSet;
use crate::error::{GameError, Result};

/// Token that asks for the help table
pub const HELP_TOKEN: &str = "?";

/// Token that leaves the game
pub const EXIT_TOKEN: &str = "0";

/// What a raw input token means for a given move set
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based move index, already range-checked
    Move(usize),
    Help,
    Exit,
    Invalid(String),
}

impl Selection {
    /// Parse a token from the menu: `1..=n` picks a move, `?` asks for help,
    /// `0` exits. Surrounding whitespace is ignored.
    pub fn parse(token: &str, moves: &MoveSet) -> Self {
        let token = token.trim();
        match token {
            HELP_TOKEN => Selection::Help,
            EXIT_TOKEN => Selection::Exit,
            _ => match token.parse::<usize>() {
                Ok(number) if (1..=moves.len()).contains(&number) => Selection::Move(number - 1),
                _ => Selection::Invalid(token.to_string()),
            },
        }
    }

    /// The move index, or `InvalidSelection` for anything that is not a move
    pub fn index(&self) -> Result<usize> {
        match self {
            Selection::Move(index) => Ok(*index),
            Selection::Help => Err(GameError::InvalidSelection(HELP_TOKEN.to_string())),
            Selection::Exit => Err(GameError::InvalidSelection(EXIT_TOKEN.to_string())),
            Selection::Invalid(token) => Err(GameError::InvalidSelection(token.clone())),
        }
    }
}

//! Validated, ordered move sets.

use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Index;

/// Smallest playable number of moves
pub const MIN_MOVES: usize = 3;

/// Ordered list of distinct move labels with an odd length of at least 3.
///
/// The order defines the circular win/lose relation: each move loses to the
/// `n / 2` moves after it and beats the `n / 2` moves before it. A `MoveSet`
/// can only be obtained through [`MoveSet::new`], so every other part of the
/// crate may assume the invariant holds.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Validate a candidate move list
    pub fn new<I, S>(moves: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();

        if moves.len() < MIN_MOVES || moves.len() % 2 == 0 {
            return Err(GameError::InvalidMoveCount { count: moves.len() });
        }

        let mut seen = HashSet::with_capacity(moves.len());
        for label in &moves {
            if !seen.insert(label.as_str()) {
                return Err(GameError::DuplicateMove(label.clone()));
            }
        }

        Ok(Self(moves))
    }

    /// Number of moves
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves each move beats (and loses to)
    pub fn half(&self) -> usize {
        self.0.len() / 2
    }

    /// Label at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Position of `label`, if present
    pub fn position(&self, label: &str) -> Option<usize> {
        self.0.iter().position(|m| m == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Menu listing the moves with their 1-based selection numbers
    pub fn menu(&self) -> String {
        let mut menu = String::from("Available moves:\n");
        for (i, label) in self.iter().enumerate() {
            menu.push_str(&format!("{} - {}\n", i + 1, label));
        }
        menu.push_str("0 - exit\n? - help");
        menu
    }
}

impl Index<usize> for MoveSet {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.0[index]
    }
}

impl fmt::Debug for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

impl<'de> Deserialize<'de> for MoveSet {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let moves = Vec::<String>::deserialize(d)?;
        MoveSet::new(moves).map_err(serde::de::Error::custom)
    }
}

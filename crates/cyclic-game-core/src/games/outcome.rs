//! Circular win/lose/draw resolution for an odd number of moves.

use super::MoveSet;
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one move against another, from the first move's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Short label used in the help table
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }

    /// Player-facing sentence
    pub fn verdict(&self) -> &'static str {
        match self {
            Outcome::Win => "You win!",
            Outcome::Lose => "You lose!",
            Outcome::Draw => "It's a draw!",
        }
    }

    /// The same pairing seen from the other side
    pub fn reverse(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stateless resolver over move positions on a circle of `n` moves.
///
/// `mine` loses to the `n / 2` moves following it and beats the `n / 2`
/// moves preceding it, wrapping around modulo `n`.
pub struct CyclicResolver;

impl CyclicResolver {
    /// Resolve `mine` against `theirs` for a validated move set
    pub fn resolve(moves: &MoveSet, mine: usize, theirs: usize) -> Result<Outcome> {
        Self::resolve_indices(moves.len(), mine, theirs)
    }

    /// Resolve on a bare circle of `n` positions.
    ///
    /// Fails with `InvalidMoveCount` when `n` is even or below 3, and with
    /// `InvalidSelection` when either index is outside `[0, n)`.
    pub fn resolve_indices(n: usize, mine: usize, theirs: usize) -> Result<Outcome> {
        if n < super::MIN_MOVES || n % 2 == 0 {
            return Err(GameError::InvalidMoveCount { count: n });
        }
        for index in [mine, theirs] {
            if index >= n {
                return Err(GameError::InvalidSelection(format!(
                    "index {} out of range 0..{}",
                    index, n
                )));
            }
        }

        Ok(Self::outcome_at(n, mine, theirs))
    }

    /// Caller guarantees odd `n` and both indices in range
    fn outcome_at(n: usize, mine: usize, theirs: usize) -> Outcome {
        // steps forward from mine to theirs: 1..=half is the losing window,
        // half+1..n (i.e. mine-half..mine-1) the winning window
        let distance = (theirs + n - mine) % n;

        if distance == 0 {
            Outcome::Draw
        } else if distance <= n / 2 {
            Outcome::Lose
        } else {
            Outcome::Win
        }
    }

    /// Positions that beat `mine`: `mine+1 ..= mine+half` (mod n)
    pub fn losing_window(moves: &MoveSet, mine: usize) -> Vec<usize> {
        let n = moves.len();
        (1..=moves.half()).map(|k| (mine + k) % n).collect()
    }

    /// Positions that `mine` beats: `mine-half ..= mine-1` (mod n)
    pub fn winning_window(moves: &MoveSet, mine: usize) -> Vec<usize> {
        let n = moves.len();
        let half = moves.half();
        (0..half).map(|k| (mine + n - half + k) % n).collect()
    }

    /// Outcome of every ordered pair, row = `mine`, column = `theirs`
    pub fn outcome_matrix(moves: &MoveSet) -> OutcomeMatrix {
        let n = moves.len();
        let mut cells = Vec::with_capacity(n * n);
        for mine in 0..n {
            for theirs in 0..n {
                cells.push(Self::outcome_at(n, mine, theirs));
            }
        }
        OutcomeMatrix { size: n, cells }
    }
}

/// n×n table of outcomes; cell (i, j) is move i played against move j
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeMatrix {
    size: usize,
    cells: Vec<Outcome>,
}

impl OutcomeMatrix {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Outcome of `mine` against `theirs`
    pub fn get(&self, mine: usize, theirs: usize) -> Option<Outcome> {
        if mine >= self.size || theirs >= self.size {
            return None;
        }
        Some(self.cells[mine * self.size + theirs])
    }

    /// One row, i.e. `mine` against every move in order
    pub fn row(&self, mine: usize) -> &[Outcome] {
        &self.cells[mine * self.size..(mine + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Outcome]> {
        self.cells.chunks(self.size.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> MoveSet {
        MoveSet::new(["rock", "paper", "scissors"]).unwrap()
    }

    fn five() -> MoveSet {
        MoveSet::new(["rock", "paper", "scissors", "lizard", "spock"]).unwrap()
    }

    #[test]
    fn test_rock_beats_scissors() {
        let moves = classic();
        assert_eq!(CyclicResolver::resolve(&moves, 0, 2), Ok(Outcome::Win));
        assert_eq!(CyclicResolver::resolve(&moves, 2, 0), Ok(Outcome::Lose));
    }

    #[test]
    fn test_paper_beats_rock() {
        let moves = classic();
        assert_eq!(CyclicResolver::resolve(&moves, 1, 0), Ok(Outcome::Win));
        assert_eq!(CyclicResolver::resolve(&moves, 0, 1), Ok(Outcome::Lose));
    }

    #[test]
    fn test_scissors_beats_paper() {
        let moves = classic();
        assert_eq!(CyclicResolver::resolve(&moves, 2, 1), Ok(Outcome::Win));
        assert_eq!(CyclicResolver::resolve(&moves, 1, 2), Ok(Outcome::Lose));
    }

    #[test]
    fn test_draws() {
        let moves = five();
        for i in 0..moves.len() {
            assert_eq!(CyclicResolver::resolve(&moves, i, i), Ok(Outcome::Draw));
        }
    }

    #[test]
    fn test_five_move_windows() {
        let moves = five();
        assert_eq!(CyclicResolver::losing_window(&moves, 0), vec![1, 2]);
        assert_eq!(CyclicResolver::winning_window(&moves, 0), vec![3, 4]);

        assert_eq!(CyclicResolver::resolve(&moves, 0, 1), Ok(Outcome::Lose));
        assert_eq!(CyclicResolver::resolve(&moves, 0, 2), Ok(Outcome::Lose));
        assert_eq!(CyclicResolver::resolve(&moves, 0, 3), Ok(Outcome::Win));
        assert_eq!(CyclicResolver::resolve(&moves, 0, 4), Ok(Outcome::Win));
    }

    #[test]
    fn test_windows_wrap_at_the_end() {
        let moves = five();
        assert_eq!(CyclicResolver::losing_window(&moves, 4), vec![0, 1]);
        assert_eq!(CyclicResolver::winning_window(&moves, 4), vec![2, 3]);
        assert_eq!(CyclicResolver::resolve(&moves, 4, 0), Ok(Outcome::Lose));
        assert_eq!(CyclicResolver::resolve(&moves, 4, 2), Ok(Outcome::Win));
    }

    #[test]
    fn test_even_circle_rejected() {
        assert_eq!(
            CyclicResolver::resolve_indices(4, 0, 1),
            Err(GameError::InvalidMoveCount { count: 4 })
        );
        assert_eq!(
            CyclicResolver::resolve_indices(1, 0, 0),
            Err(GameError::InvalidMoveCount { count: 1 })
        );
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let moves = classic();
        assert!(matches!(
            CyclicResolver::resolve(&moves, 3, 0),
            Err(GameError::InvalidSelection(_))
        ));
        assert!(matches!(
            CyclicResolver::resolve(&moves, 0, 7),
            Err(GameError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_classic_all_outcomes() {
        let matrix = CyclicResolver::outcome_matrix(&classic());
        let mut wins = 0;
        let mut losses = 0;
        let mut draws = 0;

        for row in matrix.rows() {
            for outcome in row {
                match outcome {
                    Outcome::Win => wins += 1,
                    Outcome::Lose => losses += 1,
                    Outcome::Draw => draws += 1,
                }
            }
        }

        assert_eq!(wins, 3);
        assert_eq!(losses, 3);
        assert_eq!(draws, 3);
    }

    #[test]
    fn test_matrix_rows_are_mine() {
        let matrix = CyclicResolver::outcome_matrix(&classic());
        assert_eq!(matrix.size(), 3);
        assert_eq!(matrix.row(0), &[Outcome::Draw, Outcome::Lose, Outcome::Win]);
        assert_eq!(matrix.get(2, 1), Some(Outcome::Win));
        assert_eq!(matrix.get(3, 0), None);
    }

    #[test]
    fn test_outcome_words() {
        assert_eq!(Outcome::Win.verdict(), "You win!");
        assert_eq!(Outcome::Lose.verdict(), "You lose!");
        assert_eq!(Outcome::Draw.verdict(), "It's a draw!");
        assert_eq!(Outcome::Win.reverse(), Outcome::Lose);
        assert_eq!(Outcome::Draw.to_string(), "Draw");
    }
}

//! One game session: commit, resolve, reveal.

use super::{CommitMessage, RevealMessage, RoundReport};
use crate::crypto::{FairnessCommitment, MoveHmac};
use crate::error::Result;
use crate::games::{CyclicResolver, MoveSet, Outcome, Selection};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};
use uuid::Uuid;

/// Unique session identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// Create a new random game ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Debug for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GameId({})", self.0)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single round against the computer.
///
/// The commitment is drawn when the session is built and never changes, so
/// the HMAC from [`Session::commit_message`] can be published right away.
/// A rejected selection leaves the session untouched and can be retried.
pub struct Session {
    id: GameId,
    moves: MoveSet,
    commitment: FairnessCommitment,
}

impl Session {
    /// Commit to a computer move drawn from `rng`
    pub fn new<R: RngCore + CryptoRng + ?Sized>(moves: MoveSet, rng: &mut R) -> Result<Self> {
        let commitment = FairnessCommitment::create(&moves, rng)?;
        let id = GameId::new();
        debug!(game_id = %id, moves = moves.len(), hmac = %commitment.hmac(), "session committed");
        Ok(Self {
            id,
            moves,
            commitment,
        })
    }

    /// Commit using the thread-local CSPRNG
    pub fn random(moves: MoveSet) -> Result<Self> {
        Self::new(moves, &mut rand::thread_rng())
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn hmac(&self) -> &MoveHmac {
        self.commitment.hmac()
    }

    /// What to publish before the player chooses
    pub fn commit_message(&self) -> CommitMessage {
        CommitMessage {
            game_id: self.id,
            hmac: *self.commitment.hmac(),
        }
    }

    /// Outcome for the player's move against the committed one
    pub fn resolve(&self, player_index: usize) -> Result<Outcome> {
        CyclicResolver::resolve(&self.moves, player_index, self.commitment.move_index())
    }

    /// Resolve the player's move and disclose the commitment
    pub fn play(&self, player_index: usize) -> Result<RoundReport> {
        let outcome = self.resolve(player_index).map_err(|err| {
            warn!(game_id = %self.id, player_index, "rejected selection");
            err
        })?;

        let computer_index = self.commitment.move_index();
        debug!(game_id = %self.id, player_index, computer_index, %outcome, "round resolved");

        Ok(RoundReport {
            game_id: self.id,
            player_index,
            player_move: self.moves[player_index].to_string(),
            computer_move: self.moves[computer_index].to_string(),
            outcome,
            reveal: self.reveal_message(),
        })
    }

    /// Play a parsed selection; anything but a move is `InvalidSelection`
    pub fn play_selection(&self, selection: &Selection) -> Result<RoundReport> {
        let index = selection.index().map_err(|err| {
            warn!(game_id = %self.id, ?selection, "rejected selection");
            err
        })?;
        self.play(index)
    }

    fn reveal_message(&self) -> RevealMessage {
        let reveal = self.commitment.reveal();
        RevealMessage {
            game_id: self.id,
            move_label: self.moves[reveal.move_index].to_string(),
            move_index: reveal.move_index,
            key: reveal.key,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("moves", &self.moves)
            .field("commitment", &self.commitment)
            .finish()
    }
}

//! Cyclic Game Core Library
//!
//! Provably fair rock-paper-scissors generalised to any odd number of moves.
//! The computer commits to its move with HMAC-SHA256 before the player
//! chooses, and reveals the key afterwards so the player can check it.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{verify_hex, FairnessCommitment, HmacKey, MoveHmac, Reveal};
pub use error::{GameError, Result};
pub use games::{help_table, CyclicResolver, MoveSet, Outcome, OutcomeMatrix, Selection};
pub use protocol::{CommitMessage, GameId, RevealMessage, RoundReport, Session};

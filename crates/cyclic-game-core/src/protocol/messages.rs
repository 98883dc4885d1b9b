//! Protocol messages.

use super::GameId;
use crate::crypto::{HmacKey, MoveHmac};
use crate::games::{MoveSet, Outcome};
use serde::{Deserialize, Serialize};

/// Published before the player picks a move
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitMessage {
    pub game_id: GameId,
    pub hmac: MoveHmac,
}

/// Published after the player's move is locked in
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealMessage {
    pub game_id: GameId,
    pub key: HmacKey,
    pub move_index: usize,
    pub move_label: String,
}

impl RevealMessage {
    /// Independently check this reveal against an earlier commitment: same
    /// session, label matches the index, and the HMAC recomputes.
    pub fn verify(&self, moves: &MoveSet, commit: &CommitMessage) -> bool {
        self.game_id == commit.game_id
            && moves.get(self.move_index) == Some(self.move_label.as_str())
            && commit.hmac.verify(&self.key, &self.move_label)
    }
}

/// Everything the player is told once the round is over
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundReport {
    pub game_id: GameId,
    pub player_index: usize,
    pub player_move: String,
    pub computer_move: String,
    pub outcome: Outcome,
    pub reveal: RevealMessage,
}

impl RoundReport {
    /// Console lines, in the order they are shown
    pub fn lines(&self) -> [String; 4] {
        [
            format!("Your move: {}", self.player_move),
            format!("Computer move: {}", self.computer_move),
            self.outcome.verdict().to_string(),
            format!("HMAC key: {}", self.reveal.key.to_hex()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Session;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(seed: u64) -> Session {
        let moves = MoveSet::new(["rock", "paper", "scissors", "lizard", "spock"]).unwrap();
        Session::new(moves, &mut StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn test_message_serialization() {
        let session = session(21);
        let commit = session.commit_message();

        let json = serde_json::to_string(&commit).unwrap();
        assert!(json.contains(&commit.hmac.to_string()));

        let deserialized: CommitMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(commit, deserialized);
    }

    #[test]
    fn test_reveal_survives_transport() {
        let session = session(22);
        let commit = session.commit_message();
        let report = session.play(1).unwrap();

        let json = serde_json::to_string(&report.reveal).unwrap();
        let reveal: RevealMessage = serde_json::from_str(&json).unwrap();
        assert!(reveal.verify(session.moves(), &commit));
    }

    #[test]
    fn test_tampered_reveal_rejected() {
        let session = session(23);
        let commit = session.commit_message();
        let honest = session.play(0).unwrap().reveal;
        let moves = session.moves();

        let mut swapped = honest.clone();
        swapped.move_index = (honest.move_index + 1) % moves.len();
        swapped.move_label = moves[swapped.move_index].to_string();
        assert!(!swapped.verify(moves, &commit));

        let mut mislabelled = honest.clone();
        mislabelled.move_label = moves[(honest.move_index + 1) % moves.len()].to_string();
        assert!(!mislabelled.verify(moves, &commit));

        let mut other_game = honest.clone();
        other_game.game_id = GameId::new();
        assert!(!other_game.verify(moves, &commit));

        let mut other_key = honest;
        other_key.key = HmacKey::from_bytes([7; 32]);
        assert!(!other_key.verify(moves, &commit));
    }

    #[test]
    fn test_report_lines() {
        let session = session(24);
        let report = session.play(2).unwrap();
        let lines = report.lines();

        assert_eq!(lines[0], "Your move: scissors");
        assert_eq!(lines[1], format!("Computer move: {}", report.computer_move));
        assert_eq!(lines[2], report.outcome.verdict());
        assert_eq!(lines[3], format!("HMAC key: {}", report.reveal.key.to_hex()));
    }
}

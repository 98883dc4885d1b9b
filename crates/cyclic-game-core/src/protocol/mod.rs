//! Session lifecycle and the messages exchanged out of band.

mod messages;
mod session;

pub use messages::{CommitMessage, RevealMessage, RoundReport};
pub use session::{GameId, Session};

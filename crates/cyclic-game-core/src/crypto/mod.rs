//! Cryptographic primitives for the commit-reveal scheme.
//!
//! This module provides:
//! - HmacKey and MoveHmac for HMAC-SHA256 commitments
//! - FairnessCommitment and Reveal for one session's committed move
//! - Fallible draws from an injected randomness source

mod commitment;
pub mod entropy;

pub use commitment::{verify_hex, FairnessCommitment, HmacKey, MoveHmac, Reveal};

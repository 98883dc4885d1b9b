//! HMAC-SHA256 commitment to the computer's move.

use super::entropy::{random_bytes, uniform_index};
use crate::error::{GameError, Result};
use crate::games::MoveSet;
use hmac::{Hmac, Mac};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

/// Secret HMAC key, disclosed only on reveal
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HmacKey(#[serde(with = "hex32_serde")] [u8; 32]);

impl HmacKey {
    /// Draw a new key from `rng`
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Self> {
        Ok(Self(random_bytes(rng)?))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a 64-character hex string
    pub fn from_hex(s: &str) -> Result<Self> {
        decode_hex32(s).map(Self)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.0).expect("HMAC accepts keys of any length")
    }
}

impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacKey(..)")
    }
}

/// Public digest: HMAC-SHA256(key, move label)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveHmac(#[serde(with = "hex32_serde")] [u8; 32]);

impl MoveHmac {
    /// Compute the digest of `label` under `key`
    pub fn new(key: &HmacKey, label: &str) -> Self {
        let mut mac = key.mac();
        mac.update(label.as_bytes());
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Constant-time check that `key` and `label` produce this digest
    pub fn verify(&self, key: &HmacKey, label: &str) -> bool {
        let mut mac = key.mac();
        mac.update(label.as_bytes());
        mac.verify_slice(&self.0).is_ok()
    }
}

impl fmt::Debug for MoveHmac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveHmac({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for MoveHmac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for MoveHmac {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        decode_hex32(s).map(Self)
    }
}

/// The computer's committed move for one session.
///
/// The key and move index are fixed at construction; only the HMAC is
/// meant to be shown before the opponent has locked in a move.
pub struct FairnessCommitment {
    key: HmacKey,
    move_index: usize,
    hmac: MoveHmac,
}

impl FairnessCommitment {
    /// Draw a key and a uniformly random move from `rng`, then commit to it
    pub fn create<R: RngCore + CryptoRng + ?Sized>(moves: &MoveSet, rng: &mut R) -> Result<Self> {
        let key = HmacKey::generate(rng)?;
        let move_index = uniform_index(rng, moves.len())?;
        let hmac = MoveHmac::new(&key, &moves[move_index]);
        Ok(Self {
            key,
            move_index,
            hmac,
        })
    }

    /// Commit using the thread-local CSPRNG
    pub fn random(moves: &MoveSet) -> Result<Self> {
        Self::create(moves, &mut rand::thread_rng())
    }

    /// The public digest
    pub fn hmac(&self) -> &MoveHmac {
        &self.hmac
    }

    pub(crate) fn move_index(&self) -> usize {
        self.move_index
    }

    /// Disclose the key and move index. Callers must only do this once the
    /// opponent's move is locked in.
    pub fn reveal(&self) -> Reveal {
        Reveal {
            key: self.key.clone(),
            move_index: self.move_index,
        }
    }
}

impl fmt::Debug for FairnessCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FairnessCommitment")
            .field("hmac", &self.hmac)
            .finish_non_exhaustive()
    }
}

/// Disclosed secret pair
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub key: HmacKey,
    pub move_index: usize,
}

impl Reveal {
    /// Recompute the HMAC from this pair and compare with the published one
    pub fn verify(&self, moves: &MoveSet, hmac: &MoveHmac) -> bool {
        match moves.get(self.move_index) {
            Some(label) => hmac.verify(&self.key, label),
            None => false,
        }
    }
}

/// Check hex-encoded key and HMAC against a move label
pub fn verify_hex(key_hex: &str, label: &str, hmac_hex: &str) -> Result<bool> {
    let key = HmacKey::from_hex(key_hex)?;
    let hmac: MoveHmac = hmac_hex.parse()?;
    Ok(hmac.verify(&key, label))
}

fn decode_hex32(s: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(s.trim()).map_err(|e| GameError::InvalidEncoding(e.to_string()))?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| GameError::InvalidEncoding(format!("expected 32 bytes, got {}", b.len())))
}

mod hex32_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        super::decode_hex32(&hex_str).map_err(serde::de::Error::custom)
    }
}

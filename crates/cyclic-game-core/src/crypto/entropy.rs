//! Draws from an injected randomness source.
//!
//! Both draws go through `try_fill_bytes` so an exhausted or broken source
//! surfaces as `RandomnessFailure` instead of a panic.

use crate::error::{GameError, Result};
use rand::RngCore;

/// Fill a 32-byte array from `rng`
pub fn random_bytes<R: RngCore + ?Sized>(rng: &mut R) -> Result<[u8; 32]> {
    let mut bytes = [0u8; 32];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}

/// Uniform index in `[0, n)` by rejection sampling over `u64`
pub fn uniform_index<R: RngCore + ?Sized>(rng: &mut R, n: usize) -> Result<usize> {
    if n == 0 {
        return Err(GameError::InvalidMoveCount { count: 0 });
    }

    let n = n as u64;
    // largest multiple of n that fits; values at or above it would bias low indices
    let zone = u64::MAX - (u64::MAX % n);
    loop {
        let mut buf = [0u8; 8];
        rng.try_fill_bytes(&mut buf)?;
        let value = u64::from_le_bytes(buf);
        if value < zone {
            return Ok((value % n) as usize);
        }
    }
}

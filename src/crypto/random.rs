//! Secure randomness drawn from the operating system.
//!
//! Everything random in pwvault (nonces, password characters, the
//! shuffle) goes through here so there is exactly one source, and its
//! failure is reported as `RandomnessUnavailable` instead of a panic.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::errors::{Result, VaultError};

/// Fill `buf` with bytes from the OS CSPRNG.
pub fn fill(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| VaultError::RandomnessUnavailable(e.to_string()))
}

/// Draw one `u32` from the OS CSPRNG.
fn next_u32() -> Result<u32> {
    OsRng
        .try_next_u32()
        .map_err(|e| VaultError::RandomnessUnavailable(e.to_string()))
}

/// Return a uniformly distributed index in `0..bound`.
///
/// Uses rejection sampling so small alphabets are not biased toward
/// their first characters the way a plain `% bound` would be.
pub fn index_below(bound: usize) -> Result<usize> {
    let bound = u32::try_from(bound)
        .ok()
        .filter(|b| *b > 0)
        .ok_or_else(|| {
            VaultError::RandomnessUnavailable(format!("index bound {bound} out of range"))
        })?;

    // Largest multiple of `bound` that fits in u32; draws at or above it
    // would over-represent the low residues.
    let zone = u32::MAX - (u32::MAX % bound);
    loop {
        let draw = next_u32()?;
        if draw < zone {
            return Ok((draw % bound) as usize);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_produces_non_constant_output() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        fill(&mut a).unwrap();
        fill(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn index_below_stays_in_range() {
        for bound in [1usize, 2, 10, 14, 26, 76] {
            for _ in 0..200 {
                assert!(index_below(bound).unwrap() < bound);
            }
        }
    }

    #[test]
    fn index_below_one_is_always_zero() {
        assert_eq!(index_below(1).unwrap(), 0);
    }

    #[test]
    fn index_below_zero_is_rejected() {
        assert!(index_below(0).is_err());
    }

    #[test]
    fn index_below_hits_every_slot() {
        let mut seen = [false; 10];
        for _ in 0..1_000 {
            seen[index_below(10).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}

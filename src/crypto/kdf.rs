//! Vault key derivation using Argon2id.
//!
//! The vault has one static passphrase and one key, so derivation uses a
//! fixed domain salt: the same passphrase and parameters always give the
//! same key, which is what keeps old entries readable across runs.
//! Parameters are recorded in the vault manifest so changing the
//! configured defaults never orphans existing entries.

use std::time::Instant;

use argon2::{Algorithm, Argon2, Params, Version};
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroize;

use super::keys::{VaultKey, KEY_LEN};
use crate::errors::{Result, VaultError};

/// Domain-separation salt for the static vault key.
const VAULT_KEY_SALT: &[u8] = b"pwvault/vault-key/v1";

/// Minimum safe memory cost in KiB (8 MB).
pub const MIN_MEMORY_KIB: u32 = 8_192;

/// Configurable Argon2id parameters.
///
/// These map 1:1 to the `argon2_*` fields in `Settings` and to the
/// `kdf` block of the vault manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argon2Params {
    /// Memory cost in KiB (default: 65 536 = 64 MB).
    pub memory_kib: u32,
    /// Number of iterations (default: 3).
    pub iterations: u32,
    /// Parallelism lanes (default: 4).
    pub parallelism: u32,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            memory_kib: 65_536,
            iterations: 3,
            parallelism: 4,
        }
    }
}

impl Argon2Params {
    /// Reject dangerously weak or nonsensical settings.
    pub fn validate(&self) -> Result<()> {
        if self.memory_kib < MIN_MEMORY_KIB {
            return Err(VaultError::KeyDerivationFailed(format!(
                "Argon2 memory_kib must be at least {MIN_MEMORY_KIB} (got {})",
                self.memory_kib
            )));
        }
        if self.iterations < 1 {
            return Err(VaultError::KeyDerivationFailed(
                "Argon2 iterations must be at least 1".into(),
            ));
        }
        if self.parallelism < 1 {
            return Err(VaultError::KeyDerivationFailed(
                "Argon2 parallelism must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Derive the vault key from `passphrase` with the default parameters.
pub fn derive_vault_key(passphrase: &[u8]) -> Result<VaultKey> {
    derive_vault_key_with_params(passphrase, &Argon2Params::default())
}

/// Derive the vault key with explicit Argon2id parameters.
///
/// The only failure mode is invalid parameters; with parameters that pass
/// `Argon2Params::validate` this is a pure function of its inputs.
pub fn derive_vault_key_with_params(
    passphrase: &[u8],
    argon2_params: &Argon2Params,
) -> Result<VaultKey> {
    argon2_params.validate()?;

    let params = Params::new(
        argon2_params.memory_kib,
        argon2_params.iterations,
        argon2_params.parallelism,
        Some(KEY_LEN),
    )
    .map_err(|e| VaultError::KeyDerivationFailed(format!("invalid Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let started = Instant::now();
    let mut okm = [0u8; KEY_LEN];
    argon2
        .hash_password_into(passphrase, VAULT_KEY_SALT, &mut okm)
        .map_err(|e| VaultError::KeyDerivationFailed(format!("Argon2id hashing failed: {e}")))?;
    let key = VaultKey::new(okm);
    okm.zeroize();

    debug!(
        memory_kib = argon2_params.memory_kib,
        iterations = argon2_params.iterations,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "derived vault key"
    );

    Ok(key)
}

//! Cryptographic primitives for pwvault.
//!
//! This module provides:
//! - OS-backed secure randomness (`random`)
//! - AES-256-GCM encryption and decryption of entry blobs (`encryption`)
//! - Argon2id key derivation from the vault passphrase (`kdf`)
//! - The zeroize-on-drop `VaultKey` holder (`keys`)

pub mod encryption;
pub mod kdf;
pub mod keys;
pub mod random;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_vault_key, ...};
pub use encryption::{decrypt, encrypt, open, seal};
pub use kdf::{derive_vault_key, derive_vault_key_with_params, Argon2Params};
pub use keys::VaultKey;

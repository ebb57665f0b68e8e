//! AES-256-GCM authenticated encryption of vault entries.
//!
//! Each call to `seal` draws a fresh random 12-byte nonce and prepends
//! it to the ciphertext.  `open` splits the nonce back out and verifies
//! the tag before returning anything.
//!
//! Layout of a sealed blob:
//!   [ 12-byte nonce | ciphertext | 16-byte auth tag ]
//!
//! `encrypt` / `decrypt` wrap the same blob in URL-safe base64 so it can
//! be stored as a text file.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::URL_SAFE as BASE64;
use base64::Engine;

use super::keys::VaultKey;
use super::random;
use crate::errors::{Result, VaultError};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Encrypt `plaintext` under `key`.
///
/// Returns the nonce prepended to the ciphertext (nonce || ciphertext || tag).
pub fn seal(key: &VaultKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| VaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    random::fill(&mut nonce_bytes)?;
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| VaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce_bytes);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt a blob produced by `seal`.
///
/// A blob too short to hold a nonce and a tag is malformed; anything
/// that fails tag verification is an authentication failure.
pub fn open(key: &VaultKey, sealed: &[u8]) -> Result<Vec<u8>> {
    if sealed.len() < NONCE_LEN + TAG_LEN {
        return Err(VaultError::MalformedEntry(format!(
            "blob is {} bytes, shorter than nonce and tag ({} bytes)",
            sealed.len(),
            NONCE_LEN + TAG_LEN
        )));
    }

    let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| VaultError::AuthenticationFailed)?;

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| VaultError::AuthenticationFailed)
}

/// Encrypt `plaintext` and encode the sealed blob as base64 text.
pub fn encrypt(key: &VaultKey, plaintext: &[u8]) -> Result<String> {
    let sealed = seal(key, plaintext)?;
    Ok(BASE64.encode(sealed))
}

/// Decode base64 text produced by `encrypt` and decrypt it.
///
/// Surrounding whitespace (e.g. a trailing newline added by an editor)
/// is ignored.
pub fn decrypt(key: &VaultKey, encoded: &str) -> Result<Vec<u8>> {
    let sealed = BASE64
        .decode(encoded.trim())
        .map_err(|e| VaultError::MalformedEntry(format!("invalid base64: {e}")))?;
    open(key, &sealed)
}

//! Integration tests for the pwvault crypto module.

use pwvault::crypto::kdf::{Argon2Params, MIN_MEMORY_KIB};
use pwvault::crypto::{decrypt, derive_vault_key_with_params, encrypt, open, seal, VaultKey};
use pwvault::errors::VaultError;

/// Fast Argon2 params so the suite stays quick.
fn fast_params() -> Argon2Params {
    Argon2Params {
        memory_kib: MIN_MEMORY_KIB,
        iterations: 1,
        parallelism: 1,
    }
}

fn key(byte: u8) -> VaultKey {
    VaultKey::new([byte; 32])
}

// ---------------------------------------------------------------------------
// Encryption round-trip
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = key(0xAB);
    let plaintext = "Zq8#mP2!rT";

    let encoded = encrypt(&key, plaintext.as_bytes()).expect("encrypt should succeed");
    let recovered = decrypt(&key, &encoded).expect("decrypt should succeed");

    assert_eq!(recovered, plaintext.as_bytes());
}

#[test]
fn roundtrip_empty_string() {
    let key = key(0x01);
    let encoded = encrypt(&key, b"").unwrap();
    assert_eq!(decrypt(&key, &encoded).unwrap(), b"");
}

#[test]
fn roundtrip_non_ascii() {
    let key = key(0x02);
    let plaintext = "pässwörd — 密码 🔐";
    let encoded = encrypt(&key, plaintext.as_bytes()).unwrap();
    let recovered = String::from_utf8(decrypt(&key, &encoded).unwrap()).unwrap();
    assert_eq!(recovered, plaintext);
}

#[test]
fn encoded_blob_is_url_safe_base64_text() {
    let encoded = encrypt(&key(0x03), b"some password").unwrap();
    assert!(encoded
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'=')));
}

// ---------------------------------------------------------------------------
// Nonce uniqueness
// ---------------------------------------------------------------------------

#[test]
fn encrypt_produces_different_blob_each_time() {
    let key = key(0xCD);
    let plaintext = b"same-password";

    let a = encrypt(&key, plaintext).expect("encrypt 1");
    let b = encrypt(&key, plaintext).expect("encrypt 2");

    // Because each call generates a new random nonce, the output must differ.
    assert_ne!(a, b, "two encryptions of the same plaintext must differ");
}

// ---------------------------------------------------------------------------
// Tampering and wrong keys
// ---------------------------------------------------------------------------

#[test]
fn flipping_any_bit_of_sealed_blob_fails_authentication() {
    let key = key(0x11);
    let sealed = seal(&key, b"hunter2!").unwrap();

    for byte in 0..sealed.len() {
        for bit in 0..8 {
            let mut tampered = sealed.clone();
            tampered[byte] ^= 1 << bit;
            let result = open(&key, &tampered);
            assert!(
                matches!(result, Err(VaultError::AuthenticationFailed)),
                "byte {byte} bit {bit} was not detected"
            );
        }
    }
}

#[test]
fn flipping_any_bit_of_encoded_text_never_yields_plaintext() {
    let key = key(0x12);
    let encoded = encrypt(&key, b"Secret#123").unwrap();

    for byte in 0..encoded.len() {
        for bit in 0..7 {
            let mut tampered = encoded.clone().into_bytes();
            tampered[byte] ^= 1 << bit;
            // Low seven bits keep every byte ASCII, so this is still UTF-8.
            let text = String::from_utf8(tampered).unwrap();
            assert!(decrypt(&key, &text).is_err(), "byte {byte} bit {bit}");
        }
    }
}

#[test]
fn decrypt_with_wrong_key_fails_authentication() {
    let encoded = encrypt(&key(0x21), b"TOP_SECRET").unwrap();
    let result = decrypt(&key(0x22), &encoded);
    assert!(matches!(result, Err(VaultError::AuthenticationFailed)));
}

#[test]
fn invalid_base64_is_malformed_not_auth_failure() {
    let result = decrypt(&key(0x31), "this is not base64!!");
    assert!(matches!(result, Err(VaultError::MalformedEntry(_))));
}

#[test]
fn truncated_blob_is_malformed() {
    let sealed = seal(&key(0x32), b"pw").unwrap();
    let result = open(&key(0x32), &sealed[..20]);
    assert!(matches!(result, Err(VaultError::MalformedEntry(_))));
}

// ---------------------------------------------------------------------------
// Key derivation (Argon2id)
// ---------------------------------------------------------------------------

#[test]
fn derive_same_passphrase_same_key() {
    let a = derive_vault_key_with_params(b"static passphrase", &fast_params()).unwrap();
    let b = derive_vault_key_with_params(b"static passphrase", &fast_params()).unwrap();
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn derive_different_passphrase_different_key() {
    let a = derive_vault_key_with_params(b"passphrase-one", &fast_params()).unwrap();
    let b = derive_vault_key_with_params(b"passphrase-two", &fast_params()).unwrap();
    assert_ne!(a.as_bytes(), b.as_bytes());
}

#[test]
fn derive_depends_on_params() {
    let slower = Argon2Params {
        iterations: 2,
        ..fast_params()
    };
    let a = derive_vault_key_with_params(b"pw", &fast_params()).unwrap();
    let b = derive_vault_key_with_params(b"pw", &slower).unwrap();
    assert_ne!(a.as_bytes(), b.as_bytes());
}

#[test]
fn derived_key_is_32_bytes_and_usable() {
    let key = derive_vault_key_with_params(b"pw", &fast_params()).unwrap();
    assert_eq!(key.as_bytes().len(), 32);

    let encoded = encrypt(&key, b"value").unwrap();
    let again = derive_vault_key_with_params(b"pw", &fast_params()).unwrap();
    assert_eq!(decrypt(&again, &encoded).unwrap(), b"value");
}

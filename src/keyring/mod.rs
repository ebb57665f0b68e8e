//! OS keyring integration for the vault passphrase.
//!
//! Stores and retrieves the passphrase from the operating system's
//! secure credential store:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring / KDE Wallet)
//!
//! All operations fail gracefully — if the keyring is unavailable, the
//! error is returned and the caller falls back to the next source.

use crate::errors::{Result, VaultError};

/// Service name used in the OS keyring.
const SERVICE_NAME: &str = "pwvault";

fn entry(account: &str) -> Result<keyring::Entry> {
    keyring::Entry::new(SERVICE_NAME, account)
        .map_err(|e| VaultError::KeyringError(format!("failed to create keyring entry: {e}")))
}

/// Store the passphrase for the vault identified by `account`.
pub fn store_passphrase(account: &str, passphrase: &str) -> Result<()> {
    entry(account)?.set_password(passphrase).map_err(|e| {
        VaultError::KeyringError(format!("failed to store passphrase in keyring: {e}"))
    })
}

/// Retrieve the passphrase for the vault identified by `account`.
///
/// Returns `None` if nothing is stored (rather than an error).
pub fn get_passphrase(account: &str) -> Result<Option<String>> {
    match entry(account)?.get_password() {
        Ok(passphrase) => Ok(Some(passphrase)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(VaultError::KeyringError(format!(
            "failed to read from keyring: {e}"
        ))),
    }
}

/// Delete a stored passphrase.
pub fn delete_passphrase(account: &str) -> Result<()> {
    match entry(account)?.delete_credential() {
        Ok(()) => Ok(()),
        Err(keyring::Error::NoEntry) => Ok(()), // Already gone, that's fine.
        Err(e) => Err(VaultError::KeyringError(format!(
            "failed to delete from keyring: {e}"
        ))),
    }
}

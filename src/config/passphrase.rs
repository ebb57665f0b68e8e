//! Resolve the static vault passphrase at startup.
//!
//! Sources, in order:
//! 1. The environment variable named by `Settings::passphrase_env`.
//! 2. The OS keyring (if compiled with the `keyring-store` feature).
//!
//! There is deliberately no interactive unlock prompt.

use std::path::Path;

use zeroize::Zeroizing;

use super::settings::Settings;
use crate::errors::{Result, VaultError};

/// Resolve the passphrase for the vault described by `settings`.
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn resolve_passphrase(settings: &Settings) -> Result<Zeroizing<String>> {
    resolve_with(&settings.passphrase_env, &settings.vault_dir, |name| {
        std::env::var(name).ok()
    })
}

/// Keyring account name for a vault directory.
pub fn keyring_account(vault_dir: &Path) -> String {
    vault_dir.to_string_lossy().into_owned()
}

fn resolve_with(
    env_name: &str,
    vault_dir: &Path,
    lookup_env: impl Fn(&str) -> Option<String>,
) -> Result<Zeroizing<String>> {
    if let Some(pw) = lookup_env(env_name) {
        if !pw.is_empty() {
            tracing::debug!(source = "env", "resolved vault passphrase");
            return Ok(Zeroizing::new(pw));
        }
    }

    #[cfg(feature = "keyring-store")]
    match crate::keyring::get_passphrase(&keyring_account(vault_dir)) {
        Ok(Some(pw)) => {
            tracing::debug!(source = "keyring", "resolved vault passphrase");
            return Ok(Zeroizing::new(pw));
        }
        Ok(None) => {}
        Err(e) => tracing::debug!(error = %e, "keyring lookup failed"),
    }

    // Suppress unused variable warning when keyring feature is off.
    #[cfg(not(feature = "keyring-store"))]
    let _ = vault_dir;

    Err(VaultError::MissingPassphrase(format!(
        "set the {env_name} environment variable"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_value_is_used() {
        let pw = resolve_with("PW", Path::new("/tmp/v"), |name| {
            (name == "PW").then(|| "correct horse".to_string())
        })
        .unwrap();
        assert_eq!(pw.as_str(), "correct horse");
    }

    #[cfg(not(feature = "keyring-store"))]
    #[test]
    fn missing_env_is_an_error_naming_the_variable() {
        let err = resolve_with("PW_MISSING", Path::new("/tmp/v"), |_| None).unwrap_err();
        assert!(matches!(err, VaultError::MissingPassphrase(_)));
        assert!(err.to_string().contains("PW_MISSING"));
    }

    #[cfg(not(feature = "keyring-store"))]
    #[test]
    fn empty_env_counts_as_missing() {
        let result = resolve_with("PW", Path::new("/tmp/v"), |_| Some(String::new()));
        assert!(result.is_err());
    }

    #[test]
    fn keyring_account_is_the_vault_path() {
        assert_eq!(keyring_account(Path::new("/home/me/vault")), "/home/me/vault");
    }
}

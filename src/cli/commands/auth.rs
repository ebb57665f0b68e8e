//! `pwvault auth` — manage the passphrase stored in the OS keyring.
//!
//! - `pwvault auth keyring`          — save the passphrase to the OS keyring
//! - `pwvault auth keyring --delete` — remove it again
//!
//! When the keyring feature is not compiled in, these commands return a
//! helpful error message.

use crate::config::Settings;
use crate::errors::Result;

/// Execute `pwvault auth keyring` — save or delete the passphrase.
pub fn execute_keyring(settings: &Settings, delete: bool) -> Result<()> {
    #[cfg(feature = "keyring-store")]
    {
        use zeroize::Zeroizing;

        use crate::cli::output;
        use crate::config::passphrase::keyring_account;
        use crate::errors::VaultError;
        use crate::vault::Vault;

        let account = keyring_account(&settings.vault_dir);

        if delete {
            crate::keyring::delete_passphrase(&account)?;
            output::success("Passphrase removed from OS keyring.");
            return Ok(());
        }

        let passphrase = dialoguer::Password::new()
            .with_prompt("Vault passphrase to store")
            .with_confirmation("Confirm passphrase", "Passphrases do not match")
            .interact()
            .map(Zeroizing::new)
            .map_err(|e| VaultError::CommandFailed(format!("passphrase prompt: {e}")))?;

        // Verify the passphrase against an existing entry before storing it.
        let vault = Vault::open(
            &settings.vault_dir,
            passphrase.clone(),
            &settings.argon2_params(),
        )?;
        if let Some(first) = vault.list()?.into_iter().next() {
            vault.retrieve(&first)?;
        }

        crate::keyring::store_passphrase(&account, &passphrase)?;
        output::success("Passphrase saved to OS keyring.");
        Ok(())
    }

    #[cfg(not(feature = "keyring-store"))]
    {
        let _ = (settings, delete);
        Err(crate::errors::VaultError::KeyringError(
            "keyring support not compiled — rebuild with `cargo build --features keyring-store`"
                .into(),
        ))
    }
}

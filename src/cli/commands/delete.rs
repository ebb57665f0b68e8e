//! `pwvault delete` — remove a saved entry.

use dialoguer::Confirm;

use crate::cli::output;
use crate::config::Settings;
use crate::errors::{Result, VaultError};
use crate::vault::VaultStore;

/// Execute the `delete` command.
pub fn execute(settings: &Settings, name: &str, force: bool) -> Result<()> {
    let store = VaultStore::new(&settings.vault_dir);

    // Report a missing entry before asking for confirmation.
    if !store.contains(name)? {
        return Err(VaultError::EntryNotFound(name.to_string()));
    }

    // Unless --force is set, ask for confirmation before deleting.
    if !force && !confirm_delete(name)? {
        output::info("Cancelled.");
        return Ok(());
    }

    store.delete(name)?;
    output::success(&format!("Entry '{name}' deleted"));

    Ok(())
}

/// Ask "Delete entry '<name>'?" (defaults to no).
pub(crate) fn confirm_delete(name: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(format!("Delete entry '{name}'?"))
        .default(false)
        .interact()
        .map_err(|e| VaultError::CommandFailed(format!("confirm prompt: {e}")))
}

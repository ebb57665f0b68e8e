//! `pwvault list` — display all saved entries in a table.
//!
//! Listing only reads file names, so no passphrase is needed.

use crate::cli::output;
use crate::config::Settings;
use crate::errors::Result;
use crate::vault::VaultStore;

/// Execute the `list` command.
pub fn execute(settings: &Settings) -> Result<()> {
    let store = VaultStore::new(&settings.vault_dir);
    let entries = store.entries()?;

    output::info(&format!(
        "{} — {} entr{}",
        store.dir().display(),
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" }
    ));

    output::print_entries_table(&entries);

    Ok(())
}

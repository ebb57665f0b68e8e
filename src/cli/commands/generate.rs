//! `pwvault generate` — generate a password, optionally saving it.

use crate::cli::{clipboard, open_vault, output};
use crate::config::Settings;
use crate::errors::Result;
use crate::generator::{generate, resolve_length};
use crate::vault::validate_entry_name;

/// Execute the `generate` command.
pub fn execute(
    settings: &Settings,
    length: Option<&str>,
    save: Option<&str>,
    copy: bool,
) -> Result<()> {
    let choice = resolve_length(length.unwrap_or(""));
    if let Some(notice) = choice.notice {
        output::warning(&notice.to_string());
    }

    // Reject a bad entry name before doing any work.
    if let Some(name) = save {
        validate_entry_name(name)?;
    }

    let password = generate(choice.length)?;

    if let Some(name) = save {
        let mut vault = open_vault(settings)?;
        let existed = vault.contains(name)?;
        vault.save(name, &password)?;

        if existed {
            output::success(&format!("Password for '{name}' updated"));
        } else {
            output::success(&format!("Password for '{name}' saved"));
        }
    }

    if copy {
        clipboard::copy(&password)?;
        output::success("Password copied to clipboard");
    } else {
        println!("{}", password.as_str());
    }

    Ok(())
}

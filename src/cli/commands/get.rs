//! `pwvault get` — retrieve and print a single saved password.

use crate::cli::{clipboard, open_vault, output};
use crate::config::Settings;
use crate::errors::Result;

/// Execute the `get` command.
pub fn execute(settings: &Settings, name: &str, copy: bool) -> Result<()> {
    let vault = open_vault(settings)?;
    let password = vault.retrieve(name)?;

    if copy {
        clipboard::copy(&password)?;
        output::success(&format!("Password for '{name}' copied to clipboard"));
    } else {
        println!("{}", password.as_str());
    }

    Ok(())
}

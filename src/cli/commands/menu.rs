//! `pwvault menu` — the interactive loop.
//!
//! Offers generate / retrieve / list / delete / exit.  Recoverable
//! errors (bad names, missing entries, tampered blobs) are printed and
//! the loop continues; fatal ones end the session with a non-zero exit.

use dialoguer::{Confirm, Input, Select};

use crate::cli::commands::delete::confirm_delete;
use crate::cli::{open_vault, output};
use crate::config::Settings;
use crate::errors::{Result, VaultError};
use crate::generator::{generate, resolve_length, DEFAULT_LENGTH};
use crate::vault::Vault;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Generate,
    Retrieve,
    List,
    Delete,
    Exit,
}

impl MenuAction {
    /// Menu order.
    pub const ALL: [MenuAction; 5] = [
        MenuAction::Generate,
        MenuAction::Retrieve,
        MenuAction::List,
        MenuAction::Delete,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Generate => "Generate password",
            MenuAction::Retrieve => "Retrieve password",
            MenuAction::List => "List saved entries",
            MenuAction::Delete => "Delete entry",
            MenuAction::Exit => "Exit",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Execute the interactive menu.
pub fn execute(settings: &Settings) -> Result<()> {
    let mut vault = open_vault(settings)?;
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    loop {
        // A failing top-level prompt (closed stdin, no terminal) ends the
        // session rather than spinning.
        let selection = Select::new()
            .with_prompt("Choose an option")
            .items(&labels[..])
            .default(0)
            .interact_opt()
            .map_err(|e| VaultError::CommandFailed(format!("menu prompt: {e}")))?;

        // Esc / q behaves like Exit.
        let action = selection
            .and_then(MenuAction::from_index)
            .unwrap_or(MenuAction::Exit);

        let outcome = match action {
            MenuAction::Generate => generate_flow(&mut vault),
            MenuAction::Retrieve => retrieve_flow(&vault),
            MenuAction::List => list_flow(&vault),
            MenuAction::Delete => delete_flow(&vault),
            MenuAction::Exit => {
                output::info("Goodbye!");
                return Ok(());
            }
        };

        recover(outcome)?;
    }
}

/// Print a recoverable error and carry on; pass fatal errors up.
pub fn recover(outcome: Result<()>) -> Result<()> {
    match outcome {
        Ok(()) => Ok(()),
        Err(e) if !e.is_fatal() => {
            output::error(&e.to_string());
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn generate_flow(vault: &mut Vault) -> Result<()> {
    let raw: String = Input::new()
        .with_prompt(format!("Password length (default {DEFAULT_LENGTH})"))
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let choice = resolve_length(&raw);
    if let Some(notice) = choice.notice {
        output::warning(&notice.to_string());
    }

    let password = generate(choice.length)?;
    println!("Generated password: {}", password.as_str());

    let save = Confirm::new()
        .with_prompt("Save this password?")
        .default(true)
        .interact()
        .map_err(prompt_error)?;
    if !save {
        return Ok(());
    }

    let name = prompt_name("Entry name (e.g. example.com)")?;
    vault.save(&name, &password)?;
    output::success(&format!("Password for '{name}' saved"));
    Ok(())
}

fn retrieve_flow(vault: &Vault) -> Result<()> {
    let name = prompt_name("Entry name to retrieve")?;
    let password = vault.retrieve(&name)?;
    println!("Password for {name}: {}", password.as_str());
    Ok(())
}

fn list_flow(vault: &Vault) -> Result<()> {
    let entries = vault.entries()?;
    output::print_entries_table(&entries);
    Ok(())
}

fn delete_flow(vault: &Vault) -> Result<()> {
    let name = prompt_name("Entry name to delete")?;
    if !vault.contains(&name)? {
        return Err(VaultError::EntryNotFound(name));
    }
    if !confirm_delete(&name)? {
        output::info("Cancelled.");
        return Ok(());
    }
    vault.delete(&name)?;
    output::success(&format!("Entry '{name}' deleted"));
    Ok(())
}

fn prompt_name(prompt: &str) -> Result<String> {
    let name: String = Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(prompt_error)?;
    Ok(name.trim().to_string())
}

fn prompt_error(e: dialoguer::Error) -> VaultError {
    VaultError::CommandFailed(format!("input prompt: {e}"))
}

//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod clipboard;
pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::config::{resolve_passphrase, Settings};
use crate::errors::Result;
use crate::vault::Vault;

/// pwvault CLI: encrypted password generator and vault.
#[derive(Parser)]
#[command(
    name = "pwvault",
    about = "Encrypted password generator and vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Vault directory (overrides the config file)
    #[arg(long, env = "PWVAULT_DIR", global = true)]
    pub vault_dir: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, env = "PWVAULT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Generate a password (8-32 characters, default 10)
    Generate {
        /// Desired length
        #[arg(allow_negative_numbers = true)]
        length: Option<String>,
        /// Save the password under this entry name
        #[arg(short, long)]
        save: Option<String>,
        /// Copy to the clipboard instead of printing
        #[arg(short, long)]
        copy: bool,
    },

    /// Retrieve a saved password
    Get {
        /// Entry name (e.g. example.com)
        name: String,
        /// Copy to the clipboard instead of printing
        #[arg(short, long)]
        copy: bool,
    },

    /// List saved entries
    List,

    /// Delete a saved entry
    Delete {
        /// Entry name
        name: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Interactive menu (default when no command is given)
    Menu,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Manage the passphrase stored in the OS keyring
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

/// Auth subcommands for keyring management.
#[derive(clap::Subcommand)]
pub enum AuthAction {
    /// Save the vault passphrase to the OS keyring
    Keyring {
        /// Remove the passphrase from the keyring instead of saving
        #[arg(long)]
        delete: bool,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load settings from `--config` (or the default location) and apply
/// the `--vault-dir` override.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::resolve(cli.config.as_deref())?;
    if let Some(dir) = &cli.vault_dir {
        settings.vault_dir = dir.clone();
    }
    Ok(settings)
}

/// Resolve the passphrase and open the configured vault.
pub fn open_vault(settings: &Settings) -> Result<Vault> {
    let passphrase = resolve_passphrase(settings)?;
    Vault::open(&settings.vault_dir, passphrase, &settings.argon2_params())
}

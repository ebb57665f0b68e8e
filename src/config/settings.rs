use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::crypto::kdf::Argon2Params;
use crate::errors::{Result, VaultError};

/// User-level configuration, loaded from `config.toml`.
///
/// Every field has a sensible default so pwvault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory where entry files are stored.
    #[serde(default = "default_vault_dir")]
    pub vault_dir: PathBuf,

    /// Name of the environment variable holding the vault passphrase.
    #[serde(default = "default_passphrase_env")]
    pub passphrase_env: String,

    /// Argon2 memory cost in KiB for new vaults (default: 64 MB).
    #[serde(default = "default_argon2_memory_kib")]
    pub argon2_memory_kib: u32,

    /// Argon2 iteration count for new vaults (default: 3).
    #[serde(default = "default_argon2_iterations")]
    pub argon2_iterations: u32,

    /// Argon2 parallelism degree for new vaults (default: 4).
    #[serde(default = "default_argon2_parallelism")]
    pub argon2_parallelism: u32,

    /// Default log filter when neither `RUST_LOG` nor `-v` is given.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("pwvault"))
        .unwrap_or_else(|| PathBuf::from(".pwvault"))
}

fn default_passphrase_env() -> String {
    "PWVAULT_PASSPHRASE".to_string()
}

fn default_argon2_memory_kib() -> u32 {
    65_536 // 64 MB
}

fn default_argon2_iterations() -> u32 {
    3
}

fn default_argon2_parallelism() -> u32 {
    4
}

fn default_log_level() -> String {
    "warn".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: default_vault_dir(),
            passphrase_env: default_passphrase_env(),
            argon2_memory_kib: default_argon2_memory_kib(),
            argon2_iterations: default_argon2_iterations(),
            argon2_parallelism: default_argon2_parallelism(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Location of the per-user config file, if the platform has one.
    ///
    /// Example: `~/.config/pwvault/config.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("pwvault").join("config.toml"))
    }

    /// Load settings from `config_path`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            VaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Load settings from an explicit path, or from `default_path()`.
    ///
    /// An explicit path that does not exist is an error, since the user
    /// asked for that file specifically.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) if !path.exists() => Err(VaultError::ConfigError(format!(
                "config file {} does not exist",
                path.display()
            ))),
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Convert the Argon2 settings into crypto-layer params.
    pub fn argon2_params(&self) -> Argon2Params {
        Argon2Params {
            memory_kib: self.argon2_memory_kib,
            iterations: self.argon2_iterations,
            parallelism: self.argon2_parallelism,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.passphrase_env, "PWVAULT_PASSPHRASE");
        assert!(s.vault_dir.ends_with("pwvault") || s.vault_dir.ends_with(".pwvault"));
        assert_eq!(s.argon2_memory_kib, 65_536);
        assert_eq!(s.argon2_iterations, 3);
        assert_eq!(s.argon2_parallelism, 4);
        assert_eq!(s.log_level, "warn");
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(settings.passphrase_env, "PWVAULT_PASSPHRASE");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
vault_dir = "/srv/vault"
passphrase_env = "MY_VAULT_KEY"
argon2_memory_kib = 131072
argon2_iterations = 5
argon2_parallelism = 8
log_level = "debug"
"#;
        let path = tmp.path().join("config.toml");
        fs::write(&path, config).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.vault_dir, PathBuf::from("/srv/vault"));
        assert_eq!(settings.passphrase_env, "MY_VAULT_KEY");
        assert_eq!(settings.argon2_memory_kib, 131_072);
        assert_eq!(settings.argon2_iterations, 5);
        assert_eq!(settings.argon2_parallelism, 8);
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "vault_dir = \"secrets\"\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.vault_dir, PathBuf::from("secrets"));
        // Rest should be defaults
        assert_eq!(settings.passphrase_env, "PWVAULT_PASSPHRASE");
        assert_eq!(settings.argon2_iterations, 3);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "not valid {{toml").unwrap();

        assert!(matches!(
            Settings::load(&path),
            Err(VaultError::ConfigError(_))
        ));
    }

    #[test]
    fn resolve_rejects_missing_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        assert!(Settings::resolve(Some(&missing)).is_err());
    }

    #[test]
    fn argon2_params_mirror_settings() {
        let s = Settings {
            argon2_memory_kib: 8_192,
            argon2_iterations: 1,
            argon2_parallelism: 2,
            ..Settings::default()
        };
        let p = s.argon2_params();
        assert_eq!(p.memory_kib, 8_192);
        assert_eq!(p.iterations, 1);
        assert_eq!(p.parallelism, 2);
    }
}

//! Vault manifest: the KDF version and parameters a vault was created with.
//!
//! Stored as `.pwvault.json` in the vault directory:
//!
//! ```text
//! {
//!   "version": 1,
//!   "kdf": { "algorithm": "argon2id", "memory_kib": 65536, "iterations": 3, "parallelism": 4 },
//!   "created_at": "2026-01-01T00:00:00Z"
//! }
//! ```
//!
//! Every entry in a vault is encrypted under the same derived key, so the
//! parameters must stay fixed once the first entry is written.  A future
//! KDF change bumps `version` instead of silently re-keying.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::store::{ensure_private_dir, write_private_atomic};
use crate::crypto::kdf::Argon2Params;
use crate::errors::{Result, VaultError};

/// Manifest file name inside the vault directory.
pub const MANIFEST_FILE: &str = ".pwvault.json";

/// Current manifest format version.
pub const CURRENT_VERSION: u8 = 1;

/// KDF description stored in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "lowercase")]
pub enum StoredKdf {
    Argon2id {
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    },
}

/// Vault-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultManifest {
    /// Format version.
    pub version: u8,

    /// How the vault key is derived.
    pub kdf: StoredKdf,

    /// When the first entry was written.
    pub created_at: DateTime<Utc>,
}

impl VaultManifest {
    /// A fresh manifest for a vault using `params`.
    pub fn new(params: &Argon2Params) -> Self {
        Self {
            version: CURRENT_VERSION,
            kdf: StoredKdf::Argon2id {
                memory_kib: params.memory_kib,
                iterations: params.iterations,
                parallelism: params.parallelism,
            },
            created_at: Utc::now(),
        }
    }

    /// Path of the manifest inside `dir`.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join(MANIFEST_FILE)
    }

    /// Load the manifest from `dir`, or `None` if the vault has none yet.
    pub fn load(dir: &Path) -> Result<Option<Self>> {
        let path = Self::path(dir);
        let contents = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let manifest: VaultManifest = serde_json::from_str(&contents)
            .map_err(|e| VaultError::InvalidManifest(format!("{}: {e}", path.display())))?;

        if manifest.version != CURRENT_VERSION {
            return Err(VaultError::InvalidManifest(format!(
                "unsupported version {}, expected {CURRENT_VERSION}",
                manifest.version
            )));
        }

        Ok(Some(manifest))
    }

    /// Write the manifest into `dir` (created owner-only if missing).
    pub fn save(&self, dir: &Path) -> Result<()> {
        let json = serde_json::to_vec_pretty(self)
            .map_err(|e| VaultError::InvalidManifest(format!("serialize: {e}")))?;

        ensure_private_dir(dir)?;
        write_private_atomic(&Self::path(dir), &json)?;

        info!(dir = %dir.display(), version = self.version, "wrote vault manifest");
        Ok(())
    }

    /// Convert the stored KDF description into crypto-layer params.
    pub fn argon2_params(&self) -> Argon2Params {
        match self.kdf {
            StoredKdf::Argon2id {
                memory_kib,
                iterations,
                parallelism,
            } => Argon2Params {
                memory_kib,
                iterations,
                parallelism,
            },
        }
    }
}

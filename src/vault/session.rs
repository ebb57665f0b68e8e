//! High-level vault operations used by CLI commands.
//!
//! `Vault` ties the store, the manifest and the crypto layer together so
//! the rest of the application can work with simple method calls like
//! `vault.save("example.com", &password)`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use zeroize::{Zeroize, Zeroizing};

use super::manifest::VaultManifest;
use super::name::validate_entry_name;
use super::store::{EntryInfo, VaultStore};
use crate::crypto::encryption::{decrypt, encrypt};
use crate::crypto::kdf::{derive_vault_key_with_params, Argon2Params};
use crate::crypto::keys::VaultKey;
use crate::errors::{Result, VaultError};

/// The main vault handle.  Open one with `Vault::open`, then use its
/// methods to manage entries.
pub struct Vault {
    store: VaultStore,

    /// Manifest loaded from disk, or the one that will be written on the
    /// first save.
    manifest: VaultManifest,

    /// Whether `manifest` is already persisted.
    manifest_on_disk: bool,

    /// The static vault passphrase (zeroized on drop).
    passphrase: Zeroizing<String>,
}

impl Vault {
    /// Open the vault in `dir`.
    ///
    /// If the vault already has a manifest its KDF parameters are used;
    /// otherwise `configured` is used and recorded on the first save.
    pub fn open(
        dir: impl Into<PathBuf>,
        passphrase: Zeroizing<String>,
        configured: &Argon2Params,
    ) -> Result<Self> {
        let store = VaultStore::new(dir);

        let (manifest, manifest_on_disk) = match VaultManifest::load(store.dir())? {
            Some(m) => (m, true),
            None => {
                configured.validate()?;
                (VaultManifest::new(configured), false)
            }
        };

        Ok(Self {
            store,
            manifest,
            manifest_on_disk,
            passphrase,
        })
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Encrypt `plaintext` and store it under `name` (last write wins).
    pub fn save(&mut self, name: &str, plaintext: &str) -> Result<()> {
        validate_entry_name(name)?;

        let blob = {
            let key = self.derive_key()?;
            encrypt(&key, plaintext.as_bytes())?
        };

        if !self.manifest_on_disk {
            self.manifest.save(self.store.dir())?;
            self.manifest_on_disk = true;
        }

        self.store.create(name, &blob)
    }

    /// Decrypt and return the value stored under `name`.
    pub fn retrieve(&self, name: &str) -> Result<Zeroizing<String>> {
        let blob = self.store.read(name)?;

        let plaintext_bytes = {
            let key = self.derive_key()?;
            decrypt(&key, &blob)?
        };

        // On error, zeroize the bytes inside the error before discarding.
        String::from_utf8(plaintext_bytes)
            .map(Zeroizing::new)
            .map_err(|e| {
                let mut bad_bytes = e.into_bytes();
                bad_bytes.zeroize();
                VaultError::MalformedEntry("decrypted value is not valid UTF-8".into())
            })
    }

    /// Remove the entry stored under `name`.
    pub fn delete(&self, name: &str) -> Result<()> {
        self.store.delete(name)
    }

    /// Names of all stored entries.
    pub fn list(&self) -> Result<BTreeSet<String>> {
        self.store.list()
    }

    /// Metadata for all stored entries, sorted by name.
    pub fn entries(&self) -> Result<Vec<EntryInfo>> {
        self.store.entries()
    }

    /// Returns `true` if an entry named `name` exists.
    pub fn contains(&self, name: &str) -> Result<bool> {
        self.store.contains(name)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the vault directory.
    pub fn dir(&self) -> &Path {
        self.store.dir()
    }

    /// Returns the manifest in effect for this vault.
    pub fn manifest(&self) -> &VaultManifest {
        &self.manifest
    }

    /// The key lives only for the duration of one encrypt/decrypt call.
    fn derive_key(&self) -> Result<VaultKey> {
        derive_vault_key_with_params(
            self.passphrase.as_bytes(),
            &self.manifest.argon2_params(),
        )
    }
}

//! File-backed entry store.
//!
//! One directory, one file per entry.  The file name is the (validated)
//! entry name and the content is the base64 blob produced by
//! `crypto::encrypt`.  The store never sees plaintext or keys.

use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::name::validate_entry_name;
use crate::errors::{Result, VaultError};

/// Lightweight metadata about a stored entry (no blob).
///
/// Returned by `VaultStore::entries` so callers can display entry names
/// and timestamps without reading any ciphertext.
#[derive(Debug, Clone)]
pub struct EntryInfo {
    pub name: String,
    pub modified: Option<DateTime<Utc>>,
    pub size: u64,
}

/// Handle to a vault directory.
#[derive(Debug, Clone)]
pub struct VaultStore {
    dir: PathBuf,
}

impl VaultStore {
    /// Create a handle for `dir`.  Nothing is touched on disk until the
    /// first `create`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Write `blob` under `name`, replacing any previous value.
    ///
    /// Creates the directory (owner-only) if needed.  The write goes to a
    /// temp file first and is renamed into place, so readers see either
    /// the old blob or the new one.
    pub fn create(&self, name: &str, blob: &str) -> Result<()> {
        validate_entry_name(name)?;
        ensure_private_dir(&self.dir)?;

        let path = self.entry_path(name);
        let replaced = path.exists();
        write_private_atomic(&path, blob.as_bytes())?;

        info!(entry = name, replaced, "stored entry");
        Ok(())
    }

    /// Read the blob stored under `name`.
    pub fn read(&self, name: &str) -> Result<String> {
        validate_entry_name(name)?;
        let path = self.existing_entry(name)?;
        let bytes = fs::read(&path)?;
        let blob = String::from_utf8(bytes)
            .map_err(|_| VaultError::MalformedEntry("entry file is not text".into()))?;
        debug!(entry = name, bytes = blob.len(), "read entry");
        Ok(blob)
    }

    /// Remove the entry stored under `name`.
    pub fn delete(&self, name: &str) -> Result<()> {
        validate_entry_name(name)?;
        let path = self.existing_entry(name)?;
        fs::remove_file(&path)?;
        info!(entry = name, "deleted entry");
        Ok(())
    }

    /// Returns `true` if an entry named `name` exists.
    pub fn contains(&self, name: &str) -> Result<bool> {
        validate_entry_name(name)?;
        match self.existing_entry(name) {
            Ok(_) => Ok(true),
            Err(VaultError::EntryNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Names of all stored entries.
    ///
    /// A vault directory that does not exist yet simply has no entries.
    pub fn list(&self) -> Result<BTreeSet<String>> {
        Ok(self.scan()?.into_iter().map(|(name, _)| name).collect())
    }

    /// Metadata for all stored entries, sorted by name.
    pub fn entries(&self) -> Result<Vec<EntryInfo>> {
        let mut list: Vec<EntryInfo> = self
            .scan()?
            .into_iter()
            .map(|(name, meta)| EntryInfo {
                name,
                modified: meta.modified().ok().map(DateTime::<Utc>::from),
                size: meta.len(),
            })
            .collect();

        list.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(list)
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn entry_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Path of `name` if it exists as a non-directory, else `EntryNotFound`.
    fn existing_entry(&self, name: &str) -> Result<PathBuf> {
        let path = self.entry_path(name);
        match fs::symlink_metadata(&path) {
            Ok(meta) if !meta.is_dir() => Ok(path),
            Ok(_) => Err(VaultError::EntryNotFound(name.to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(VaultError::EntryNotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Every non-directory file with a valid entry name.
    fn scan(&self) -> Result<Vec<(String, fs::Metadata)>> {
        let read_dir = match fs::read_dir(&self.dir) {
            Ok(rd) => rd,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut found = Vec::new();
        for entry in read_dir {
            let entry = entry?;
            let meta = entry.metadata()?;
            if meta.is_dir() {
                continue;
            }

            // Dot files (manifest, temp files) and anything that could not
            // have been written through `create` are not entries.
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if validate_entry_name(&name).is_err() {
                debug!(file = %name, "skipping non-entry file in vault directory");
                continue;
            }
            found.push((name, meta));
        }
        Ok(found)
    }
}

/// Create `dir` and any missing parents with owner-only access.
pub(crate) fn ensure_private_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(dir)?;

    info!(dir = %dir.display(), "created vault directory");
    Ok(())
}

/// Write `contents` to `path` **atomically** with owner-only permissions.
///
/// 1. Write to `.<file name>.tmp` in the same directory (mode 0600).
/// 2. Flush to disk.
/// 3. Rename the temp file over the target path.
///
/// The temp file is removed again if any step fails.
pub(crate) fn write_private_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    // A leftover from an interrupted write would keep its old mode.
    match fs::remove_file(&tmp_path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    let result = write_new_private(&tmp_path, contents).and_then(|()| {
        fs::rename(&tmp_path, path)?;
        Ok(())
    });

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_new_private(path: &Path, contents: &[u8]) -> Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    Ok(())
}

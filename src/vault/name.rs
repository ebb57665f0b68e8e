//! Entry-name validation.
//!
//! Entry names become file names inside the vault directory, so they are
//! checked against an allow-list before touching the filesystem.  Names
//! starting with `.` are reserved for the manifest and temp files.

use crate::errors::{Result, VaultError};

/// Longest entry name accepted.
///
/// The atomic writer stages entries as `.<name>.tmp`, which must still fit
/// the usual 255-byte file name limit.
pub const MAX_NAME_LEN: usize = 250;

/// Validate that an entry name is safe to use as a file name.
///
/// Allowed: ASCII letters, digits, `.`, `_`, `-`, `@`, `+`.
/// Must be non-empty, at most `MAX_NAME_LEN` bytes, must not start with
/// `.` and must not contain `..`.
pub fn validate_entry_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(VaultError::InvalidEntryName(
            "name cannot be empty".into(),
        ));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(VaultError::InvalidEntryName(format!(
            "name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }
    if !name
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-' | b'@' | b'+'))
    {
        return Err(VaultError::InvalidEntryName(format!(
            "'{name}' contains invalid characters — only ASCII letters, digits, '.', '_', '-', '@' and '+' are allowed"
        )));
    }
    if name.starts_with('.') {
        return Err(VaultError::InvalidEntryName(format!(
            "'{name}' cannot start with a period"
        )));
    }
    if name.contains("..") {
        return Err(VaultError::InvalidEntryName(format!(
            "'{name}' cannot contain '..'"
        )));
    }
    Ok(())
}

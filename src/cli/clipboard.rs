//! System clipboard access for `--copy`.

use crate::errors::{Result, VaultError};

/// Put `text` on the system clipboard.
///
/// Headless sessions have no clipboard; that is reported as a normal
/// command failure so the caller can fall back to printing.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| VaultError::CommandFailed(format!("clipboard unavailable: {e}")))?;
    clipboard
        .set_text(text)
        .map_err(|e| VaultError::CommandFailed(format!("clipboard write failed: {e}")))
}

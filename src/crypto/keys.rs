//! The in-memory vault key.
//!
//! A `VaultKey` is derived from the vault passphrase for a single
//! encrypt or decrypt call and dropped right after.  It is never
//! written to disk.

use zeroize::Zeroize;

/// Length of the vault key (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// A wrapper around a 32-byte vault key that automatically zeroes
/// its memory when dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct VaultKey {
    bytes: [u8; KEY_LEN],
}

impl VaultKey {
    /// Create a new `VaultKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to build the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

// Never print key material, even in debug output.
impl std::fmt::Debug for VaultKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("VaultKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_bytes() {
        let key = VaultKey::new([0x42; KEY_LEN]);
        let shown = format!("{key:?}");
        assert_eq!(shown, "VaultKey(..)");
        assert!(!shown.contains("66"));
    }

    #[test]
    fn as_bytes_returns_input() {
        let key = VaultKey::new([7u8; KEY_LEN]);
        assert_eq!(key.as_bytes(), &[7u8; KEY_LEN]);
    }
}

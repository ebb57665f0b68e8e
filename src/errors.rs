use thiserror::Error;

/// All errors that can occur in pwvault.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Validation errors ---
    #[error("Invalid entry name: {0}")]
    InvalidEntryName(String),

    // --- Not-found errors ---
    #[error("Entry '{0}' does not exist")]
    EntryNotFound(String),

    // --- Crypto errors ---
    #[error("Malformed entry: {0}")]
    MalformedEntry(String),

    #[error("Decryption failed — corrupt or tampered entry, or wrong passphrase")]
    AuthenticationFailed,

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Secure randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    // --- Vault errors ---
    #[error("Invalid vault manifest: {0}")]
    InvalidManifest(String),

    // --- Config errors ---
    #[error("No vault passphrase configured: {0}")]
    MissingPassphrase(String),

    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- Keyring errors ---
    #[error("Keyring error: {0}")]
    KeyringError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

impl VaultError {
    /// Whether this error should end the process rather than just the
    /// operation in progress.
    ///
    /// Validation, not-found and per-entry crypto failures are reported
    /// and recovered from; I/O, configuration and randomness failures
    /// mean the vault cannot be trusted to work at all.
    pub fn is_fatal(&self) -> bool {
        match self {
            VaultError::InvalidEntryName(_)
            | VaultError::EntryNotFound(_)
            | VaultError::MalformedEntry(_)
            | VaultError::AuthenticationFailed
            | VaultError::CommandFailed(_)
            | VaultError::UserCancelled => false,

            VaultError::EncryptionFailed(_)
            | VaultError::KeyDerivationFailed(_)
            | VaultError::RandomnessUnavailable(_)
            | VaultError::InvalidManifest(_)
            | VaultError::MissingPassphrase(_)
            | VaultError::ConfigError(_)
            | VaultError::KeyringError(_)
            | VaultError::Io(_) => true,
        }
    }
}

/// Convenience type alias for pwvault results.
pub type Result<T> = std::result::Result<T, VaultError>;

//! Vault module — encrypted entry storage.
//!
//! This module provides:
//! - Entry-name validation (`name`)
//! - The directory-backed blob store (`store`)
//! - The vault manifest recording KDF parameters (`manifest`)
//! - The high-level `Vault` handle for save/retrieve/list/delete (`session`)

pub mod manifest;
pub mod name;
pub mod session;
pub mod store;

// Re-export the most commonly used items.
pub use manifest::VaultManifest;
pub use name::validate_entry_name;
pub use session::Vault;
pub use store::{EntryInfo, VaultStore};

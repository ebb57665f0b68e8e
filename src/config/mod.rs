//! Configuration: settings file and passphrase resolution.

pub mod passphrase;
pub mod settings;

pub use passphrase::resolve_passphrase;
pub use settings::Settings;

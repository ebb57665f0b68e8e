//! Command implementations, one module per subcommand.

pub mod auth;
pub mod completions;
pub mod delete;
pub mod generate;
pub mod get;
pub mod list;
pub mod menu;

//! tsuru-admin: administrative client for the tsuru PaaS
//!
//! Every subcommand performs one request against the API server and prints
//! either a confirmation line or a table. Commands are listed in
//! [`commands::registry`] and dispatched by [`manager::Manager`].

pub mod commands;
pub mod config;
pub mod error;
pub mod flags;
pub mod manager;
pub mod prompt;
pub mod table;

pub use config::Config;
pub use error::{CommandError, Result};
pub use manager::{Command, Context, Describe, Info, Manager, Registry};

//! Vinyl Vote CLI Library
//!
//! Terminal front end over the session and album stores. The session is
//! kept in a JSON file between runs, so `vinyl login` followed by
//! `vinyl albums` behaves like navigating from the login view to the list.
//!
//! This library exposes the command runner and configuration for testing.

pub mod commands;
pub mod config;
pub mod error;

// Re-export commonly used types for convenience
pub use commands::{App, Command};
pub use config::{AppConfig, StorageSettings};
pub use error::{CliError, Result};

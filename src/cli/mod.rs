//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `show` - Print the resolved runtime configuration
//! - `validate` - Check a build descriptor file
//! - `init` - Write a default build descriptor file

pub mod args;

pub use args::{Cli, Commands};

//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lamp to My Feet - Configuration and build descriptor tooling
#[derive(Parser, Debug)]
#[command(name = "lamp-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved runtime configuration as JSON
    Show(ShowArgs),

    /// Validate a build descriptor file
    Validate(ValidateArgs),

    /// Write a default build descriptor file
    Init(InitArgs),
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Dotenv file to load before resolving
    #[arg(short, long)]
    pub env_file: Option<PathBuf>,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Descriptor file to check
    #[arg(default_value = "lamp.build.toml")]
    pub path: PathBuf,
}

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the descriptor
    #[arg(default_value = "lamp.build.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

//! Lamp to My Feet - Configuration layer
//!
//! This crate holds the two configuration artifacts of the Lamp to My Feet
//! web client: the runtime settings table the application reads at startup,
//! and the declarative build descriptor the bundling tool consumes. The rest
//! of the application (auth flows, UI, routing, the bundler itself) lives
//! elsewhere and only reads what is defined here.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Runtime settings and application-wide constants
//! - **build**: Declarative build descriptor and chunk grouping
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the resolved runtime configuration
//! cargo run -- show
//!
//! # Validate a build descriptor
//! cargo run -- validate lamp.build.toml
//!
//! # Write the default build descriptor
//! cargo run -- init
//! ```

pub mod build;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types at crate root
pub use build::{BuildDescriptor, ChunkMap, HtmlInjection, PluginSpec, PreviewPolicy};
pub use config::{FeatureFlagSet, Settings};
pub use errors::{AppError, AppResult};

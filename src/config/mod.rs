//! Application configuration module
//!
//! Handles environment variables and application-wide constants.

mod constants;
mod features;
mod settings;

pub use constants::*;
pub use features::FeatureFlagSet;
pub use settings::Settings;

//! Build descriptor module
//!
//! Declarative description of how the client bundle is assembled: path
//! aliases, plugin list, HTML injection data, preview host policy, and
//! output chunk grouping. The bundler consuming it is an external tool.

mod chunks;
mod descriptor;

pub use chunks::ChunkMap;
pub use descriptor::{BuildDescriptor, HtmlInjection, PluginSpec, PreviewPolicy};

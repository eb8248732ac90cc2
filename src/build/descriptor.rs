//! Declarative build descriptor consumed by the bundling tool.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use super::chunks::ChunkMap;

/// One entry in the ordered build plugin list.
///
/// Options are an open table passed through to the plugin untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, serde_json::Value>,
}

impl PluginSpec {
    /// Create a plugin entry with no options.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: BTreeMap::new(),
        }
    }
}

/// Literal data injected into the HTML template by the HTML plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlInjection {
    /// Page title
    pub title: String,
    /// Meta description
    pub description: String,
    /// Minify the templated output
    #[serde(default)]
    pub minify: bool,
}

impl Default for HtmlInjection {
    fn default() -> Self {
        Self {
            title: "Lamp to My Feet".to_string(),
            description: "Your word is a lamp to my feet and a light to my path.".to_string(),
            minify: true,
        }
    }
}

/// Preview-server host policy.
///
/// The serving layer must reject any request whose host is not listed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewPolicy {
    pub allowed_hosts: Vec<String>,
}

impl PreviewPolicy {
    /// Check whether a hostname may serve the preview build.
    ///
    /// Hostnames compare ASCII-case-insensitively; the list is exact, no
    /// wildcard or suffix matching.
    pub fn permits(&self, host: &str) -> bool {
        self.allowed_hosts
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(host))
    }
}

impl Default for PreviewPolicy {
    fn default() -> Self {
        Self {
            allowed_hosts: vec!["lamp-to-my-feet-4.onrender.com".to_string()],
        }
    }
}

/// Static record describing how source becomes a deployable bundle.
///
/// Created once per build invocation, handed to the (external) bundler, and
/// discarded after the artifact is produced. Persisted as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildDescriptor {
    /// Symbolic import prefix to source-root mapping
    pub aliases: BTreeMap<String, String>,
    /// Ordered build plugin list
    pub plugins: Vec<PluginSpec>,
    /// HTML injection data
    pub html: HtmlInjection,
    /// Preview-server host policy
    pub preview: PreviewPolicy,
    /// Output chunk grouping
    pub chunks: ChunkMap,
}

impl Default for BuildDescriptor {
    fn default() -> Self {
        let mut aliases = BTreeMap::new();
        aliases.insert("@".to_string(), "./src".to_string());

        Self {
            aliases,
            plugins: vec![PluginSpec::new("react"), PluginSpec::new("html")],
            html: HtmlInjection::default(),
            preview: PreviewPolicy::default(),
            chunks: ChunkMap::default(),
        }
    }
}

impl BuildDescriptor {
    /// Load a descriptor from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let descriptor = toml::from_str(&contents)?;
        Ok(descriptor)
    }

    /// Write the descriptor to a TOML file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        Ok(())
    }

    /// Validate the descriptor before handing it to the bundler.
    ///
    /// Checks are structural: empty names and ambiguous assignments are
    /// rejected, option values are passed through untouched.
    pub fn validate(&self) -> AppResult<()> {
        for (symbol, target) in &self.aliases {
            if symbol.is_empty() {
                return Err(AppError::validation("Alias symbol must not be empty"));
            }
            if target.is_empty() {
                return Err(AppError::validation(format!(
                    "Alias '{}' has an empty target path",
                    symbol
                )));
            }
        }

        let mut seen_plugins = Vec::new();
        for plugin in &self.plugins {
            if plugin.name.is_empty() {
                return Err(AppError::validation("Plugin name must not be empty"));
            }
            if seen_plugins.contains(&plugin.name.as_str()) {
                return Err(AppError::validation(format!(
                    "Plugin '{}' is listed twice",
                    plugin.name
                )));
            }
            seen_plugins.push(plugin.name.as_str());
        }

        if self.html.title.is_empty() {
            return Err(AppError::validation("HTML title must not be empty"));
        }

        let mut seen_hosts: Vec<String> = Vec::new();
        for host in &self.preview.allowed_hosts {
            if host.is_empty() {
                return Err(AppError::validation(
                    "Preview allow-list contains an empty hostname",
                ));
            }
            let lowered = host.to_ascii_lowercase();
            if seen_hosts.contains(&lowered) {
                return Err(AppError::validation(format!(
                    "Preview host '{}' is listed twice",
                    host
                )));
            }
            seen_hosts.push(lowered);
        }

        for (chunk, packages) in self.chunks.iter() {
            if chunk.is_empty() {
                return Err(AppError::validation("Chunk name must not be empty"));
            }
            if packages.iter().any(|p| p.is_empty()) {
                return Err(AppError::validation(format!(
                    "Chunk '{}' contains an empty package name",
                    chunk
                )));
            }
        }

        let duplicates = self.chunks.duplicate_packages();
        if !duplicates.is_empty() {
            return Err(AppError::validation(format!(
                "Packages assigned to more than one chunk: {}",
                duplicates.join(", ")
            )));
        }

        Ok(())
    }
}

//! Output chunk grouping policy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from chunk name to the packages assigned to it.
///
/// A pure grouping directive for the bundler: code reachable only through a
/// listed package lands in the named chunk, everything else in the default
/// chunk(s). Backed by a `BTreeMap` so iteration order is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChunkMap(BTreeMap<String, Vec<String>>);

impl ChunkMap {
    /// Create an empty chunk map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Assign a list of packages to a named chunk.
    pub fn insert(&mut self, chunk: impl Into<String>, packages: Vec<String>) {
        self.0.insert(chunk.into(), packages);
    }

    /// Look up the chunk a package is assigned to.
    ///
    /// Returns `None` for packages the map does not mention; those fall into
    /// the bundler's default chunk(s).
    pub fn chunk_for(&self, package: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, packages)| packages.iter().any(|p| p == package))
            .map(|(chunk, _)| chunk.as_str())
    }

    /// Packages assigned to more than one chunk.
    ///
    /// A non-empty result means the grouping directive is ambiguous and the
    /// descriptor must be rejected.
    pub fn duplicate_packages(&self) -> Vec<String> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for packages in self.0.values() {
            for package in packages {
                *counts.entry(package.as_str()).or_default() += 1;
            }
        }

        counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(package, _)| package.to_string())
            .collect()
    }

    /// Iterate over `(chunk name, packages)` entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(chunk, packages)| (chunk.as_str(), packages.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ChunkMap {
    fn default() -> Self {
        let mut map = Self::new();
        map.insert(
            "vendor",
            vec!["react".to_string(), "react-dom".to_string()],
        );
        map.insert("router", vec!["react-router-dom".to_string()]);
        map.insert(
            "ui",
            vec!["bootstrap".to_string(), "framer-motion".to_string()],
        );
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grouping() {
        let chunks = ChunkMap::default();

        assert_eq!(chunks.chunk_for("react"), Some("vendor"));
        assert_eq!(chunks.chunk_for("react-dom"), Some("vendor"));
        assert_eq!(chunks.chunk_for("react-router-dom"), Some("router"));
        assert_eq!(chunks.chunk_for("bootstrap"), Some("ui"));
        assert_eq!(chunks.chunk_for("framer-motion"), Some("ui"));
    }

    #[test]
    fn test_unlisted_package_gets_no_chunk() {
        let chunks = ChunkMap::default();

        assert_eq!(chunks.chunk_for("axios"), None);
    }

    #[test]
    fn test_default_has_no_duplicates() {
        assert!(ChunkMap::default().duplicate_packages().is_empty());
    }

    #[test]
    fn test_duplicate_detection() {
        let mut chunks = ChunkMap::new();
        chunks.insert("vendor", vec!["react".to_string(), "react-dom".to_string()]);
        chunks.insert("ui", vec!["react-dom".to_string()]);

        assert_eq!(chunks.duplicate_packages(), vec!["react-dom".to_string()]);
    }
}

//! Resolution of the local Hydra fork.

use std::path::{Path, PathBuf};

use hydra_common::config::RepositoryConfig;

/// How the fork directory was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositorySource {
    /// Passed in as the target folder input.
    Explicit,
    /// `repository.root` in the config file.
    Configured,
    /// A directory under the search root whose name contains the marker.
    Discovered,
    /// `<search_root>/<default_name>`, whether or not it exists.
    Fallback,
}

/// A candidate fork directory. Existence is checked by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocation {
    pub path: PathBuf,
    pub source: RepositorySource,
}

impl RepositoryLocation {
    /// Resolve the default fork location from configuration.
    ///
    /// Called once when the exporter is created, never mid-export.
    pub fn from_config(config: &RepositoryConfig) -> Self {
        if let Some(root) = &config.root {
            return Self {
                path: root.clone(),
                source: RepositorySource::Configured,
            };
        }

        if let Some(path) = discover(&config.search_root, &config.marker) {
            tracing::debug!(path = %path.display(), "Discovered Hydra fork");
            return Self {
                path,
                source: RepositorySource::Discovered,
            };
        }

        Self {
            path: config.search_root.join(&config.default_name),
            source: RepositorySource::Fallback,
        }
    }

    /// An explicit target folder wins over the configured default.
    pub fn select(explicit: Option<&Path>, default: &RepositoryLocation) -> Self {
        match explicit {
            Some(path) => Self {
                path: path.to_path_buf(),
                source: RepositorySource::Explicit,
            },
            None => default.clone(),
        }
    }
}

/// First directory (by name) under `search_root` whose name contains `marker`.
fn discover(search_root: &Path, marker: &str) -> Option<PathBuf> {
    if marker.is_empty() {
        return None;
    }
    let entries = std::fs::read_dir(search_root).ok()?;
    let mut candidates: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.contains(marker))
        })
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}

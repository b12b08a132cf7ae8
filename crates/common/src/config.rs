//! Exporter configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{HydraError, HydraResult};

/// Global exporter configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExporterConfig {
    /// Where the local Hydra fork lives.
    pub repository: RepositoryConfig,

    /// Screenshot and thumbnail settings.
    pub imaging: ImagingConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Repository discovery settings.
///
/// Resolution order: explicit target folder, then `root`, then the first
/// directory under `search_root` whose name contains `marker`, then
/// `search_root/default_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Fixed path to the fork. Skips discovery when set.
    pub root: Option<PathBuf>,

    /// Directory scanned for a fork (defaults to `<Documents>/GitHub`).
    pub search_root: PathBuf,

    /// Substring a directory name must contain to be picked up.
    pub marker: String,

    /// Directory name used when nothing under `search_root` matches.
    pub default_name: String,
}

/// Image capture and thumbnail settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagingConfig {
    /// Thumbnail width in pixels. Height follows the source aspect ratio.
    pub thumbnail_width: u32,

    /// Upper bound for each axis of the stitched canvas image.
    pub max_canvas_dimension: u32,

    /// Highest accepted tile column/row index. Tiles beyond it are dropped.
    pub max_tile_index: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "hydra=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            root: None,
            search_root: default_search_root(),
            marker: "hydra".to_string(),
            default_name: "hydra".to_string(),
        }
    }
}

impl Default for ImagingConfig {
    fn default() -> Self {
        Self {
            thumbnail_width: 200,
            max_canvas_dimension: 16_000,
            max_tile_index: 15,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl ExporterConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    /// Load config from an explicit path, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load_from(config_path: &Path) -> Self {
        if config_path.exists() {
            match std::fs::read_to_string(config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> HydraResult<()> {
        self.save_to(&config_file_path())
    }

    /// Save config to an explicit path.
    pub fn save_to(&self, config_path: &Path) -> HydraResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| HydraError::config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(config_path, json)?;
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("hydra").join("config.json")
}

/// Default directory scanned for the fork: `<Documents>/GitHub`.
fn default_search_root() -> PathBuf {
    dirs::document_dir()
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join("Documents")
        })
        .join("GitHub")
}

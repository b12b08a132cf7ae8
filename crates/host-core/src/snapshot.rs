//! File-backed host described by a JSON snapshot.
//!
//! ```json
//! {
//!   "document_path": "MyTest.gh",
//!   "model_document_path": "MyTest.3dm",
//!   "objects": [{ "name": "Loft", "category": "Surface", "subcategory": "Freeform" }],
//!   "canvas": { "tiles_dir": "tiles", "width": 1800, "height": 900 },
//!   "viewport": "viewport.png"
//! }
//! ```
//!
//! Relative paths are resolved against the directory holding the snapshot.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use hydra_common::error::{HydraError, HydraResult};
use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::{
    CanvasBounds, CanvasObject, HostContext, HostMessage, MessageLevel, TiledCapture,
    DEFAULT_TILE_SIZE,
};

/// On-disk snapshot of a host session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostSnapshot {
    #[serde(default)]
    pub document_path: Option<PathBuf>,

    #[serde(default)]
    pub model_document_path: Option<PathBuf>,

    #[serde(default)]
    pub objects: Vec<CanvasObject>,

    #[serde(default)]
    pub canvas: Option<CanvasSnapshot>,

    #[serde(default)]
    pub viewport: Option<PathBuf>,
}

/// Pre-rendered canvas tiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasSnapshot {
    /// Directory holding `"<column>;<row>.png"` tiles.
    pub tiles_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_tile_size")]
    pub tile_width: u32,
    #[serde(default = "default_tile_size")]
    pub tile_height: u32,
}

fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE
}

/// [`HostContext`] backed by a [`HostSnapshot`].
#[derive(Debug)]
pub struct SnapshotHost {
    base_dir: PathBuf,
    snapshot: HostSnapshot,
    messages: RefCell<Vec<HostMessage>>,
}

impl SnapshotHost {
    /// Build a host from an in-memory snapshot. Relative paths resolve
    /// against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>, snapshot: HostSnapshot) -> Self {
        Self {
            base_dir: base_dir.into(),
            snapshot,
            messages: RefCell::new(Vec::new()),
        }
    }

    /// Load a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> HydraResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HydraError::file_not_found(path)
            } else {
                HydraError::Io(e)
            }
        })?;
        let snapshot: HostSnapshot = serde_json::from_str(&content)?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        tracing::debug!(
            snapshot = %path.display(),
            objects = snapshot.objects.len(),
            "Loaded host snapshot"
        );
        Ok(Self::new(base_dir, snapshot))
    }

    /// Messages reported so far, in order.
    pub fn messages(&self) -> Vec<HostMessage> {
        self.messages.borrow().clone()
    }

    pub fn snapshot(&self) -> &HostSnapshot {
        &self.snapshot
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    fn canvas(&self) -> HydraResult<&CanvasSnapshot> {
        self.snapshot
            .canvas
            .as_ref()
            .ok_or_else(|| HydraError::host("Snapshot has no canvas tiles"))
    }
}

impl HostContext for SnapshotHost {
    fn current_document_path(&self) -> Option<PathBuf> {
        self.snapshot
            .document_path
            .as_deref()
            .map(|p| self.resolve(p))
    }

    fn model_document_path(&self) -> Option<PathBuf> {
        self.snapshot
            .model_document_path
            .as_deref()
            .map(|p| self.resolve(p))
    }

    fn list_canvas_objects(&self) -> Vec<CanvasObject> {
        self.snapshot.objects.clone()
    }

    fn canvas_bounds(&self) -> CanvasBounds {
        match &self.snapshot.canvas {
            Some(canvas) => CanvasBounds {
                x: 0,
                y: 0,
                width: canvas.width,
                height: canvas.height,
            },
            None => CanvasBounds::default(),
        }
    }

    fn capture_canvas_tiles(&self, bounds: CanvasBounds) -> HydraResult<TiledCapture> {
        let canvas = self.canvas()?;
        let tiles_dir = self.resolve(&canvas.tiles_dir);

        let mut tiles = Vec::new();
        for entry in std::fs::read_dir(&tiles_dir)? {
            let path = entry?.path();
            let is_png = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
            if path.is_file() && is_png {
                tiles.push(path);
            }
        }

        tracing::debug!(
            tiles = tiles.len(),
            width = bounds.width,
            height = bounds.height,
            "Collected snapshot canvas tiles"
        );

        Ok(TiledCapture {
            tiles,
            width: canvas.width,
            height: canvas.height,
            tile_width: canvas.tile_width,
            tile_height: canvas.tile_height,
        })
    }

    fn capture_viewport(&self) -> HydraResult<DynamicImage> {
        let path = self
            .snapshot
            .viewport
            .as_deref()
            .map(|p| self.resolve(p))
            .ok_or_else(|| HydraError::host("Snapshot has no viewport image"))?;
        image::open(&path).map_err(|e| {
            HydraError::imaging(format!(
                "Failed to read viewport image {}: {e}",
                path.display()
            ))
        })
    }

    fn report(&self, level: MessageLevel, message: &str) {
        match level {
            MessageLevel::Warning => tracing::warn!("{message}"),
            MessageLevel::Remark => tracing::info!("{message}"),
        }
        self.messages.borrow_mut().push(HostMessage {
            level,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn relative_paths_resolve_against_snapshot_dir() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot_path = dir.path().join("host.json");
        std::fs::write(
            &snapshot_path,
            r#"{
                "document_path": "docs/Example.gh",
                "model_document_path": "/abs/Example.3dm",
                "objects": [{ "name": "Loft", "category": "Surface", "subcategory": "Freeform" }]
            }"#,
        )
        .unwrap();

        let host = SnapshotHost::load(&snapshot_path).unwrap();
        assert_eq!(
            host.current_document_path(),
            Some(dir.path().join("docs/Example.gh"))
        );
        assert_eq!(
            host.model_document_path(),
            Some(PathBuf::from("/abs/Example.3dm"))
        );
        assert_eq!(host.list_canvas_objects().len(), 1);
        assert_eq!(host.canvas_bounds(), CanvasBounds::default());
    }

    #[test]
    fn missing_snapshot_is_file_not_found() {
        let err = SnapshotHost::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, HydraError::FileNotFound { .. }));
    }

    #[test]
    fn tiles_are_listed_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let tiles_dir = dir.path().join("tiles");
        std::fs::create_dir_all(&tiles_dir).unwrap();
        for name in ["0;0.png", "0;1.png", "notes.txt"] {
            let path = tiles_dir.join(name);
            if name.ends_with(".png") {
                RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]))
                    .save(&path)
                    .unwrap();
            } else {
                std::fs::write(&path, "ignored").unwrap();
            }
        }

        let snapshot = HostSnapshot {
            canvas: Some(CanvasSnapshot {
                tiles_dir: PathBuf::from("tiles"),
                width: 4,
                height: 8,
                tile_width: 4,
                tile_height: 4,
            }),
            ..HostSnapshot::default()
        };
        let host = SnapshotHost::new(dir.path(), snapshot);
        let capture = host.capture_canvas_tiles(host.canvas_bounds()).unwrap();
        assert_eq!(capture.tiles.len(), 2);
        assert_eq!((capture.width, capture.height), (4, 8));
    }

    #[test]
    fn reported_messages_are_kept_in_order() {
        let host = SnapshotHost::new(".", HostSnapshot::default());
        host.report(MessageLevel::Warning, "first");
        host.report(MessageLevel::Remark, "second");

        let messages = host.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].level, MessageLevel::Warning);
        assert_eq!(messages[1].message, "second");
    }

    #[test]
    fn viewport_without_image_is_host_error() {
        let host = SnapshotHost::new(".", HostSnapshot::default());
        assert!(matches!(
            host.capture_viewport(),
            Err(HydraError::Host { .. })
        ));
    }
}

//! Hydra host contracts.
//!
//! The exporter runs inside a visual-programming host (canvas document,
//! canvas objects, hi-res canvas tiling, 3D viewport). This crate describes
//! that host as the [`HostContext`] trait so the export pipeline never
//! touches host singletons directly. Production bindings implement the trait
//! against a live host; [`snapshot::SnapshotHost`] implements it from a JSON
//! description on disk.

use std::path::PathBuf;

use hydra_common::error::HydraResult;
use image::DynamicImage;
use serde::{Deserialize, Serialize};

pub mod snapshot;

pub use snapshot::SnapshotHost;

/// Severity of a message sent to the host's message channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageLevel {
    /// Blocking problem; the export does not run.
    Warning,
    /// Advisory notice; the export still runs.
    Remark,
}

/// A message reported to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostMessage {
    pub level: MessageLevel,
    pub message: String,
}

/// What sort of object sits on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    #[default]
    Component,
    /// A script component of the same platform as the exporter itself.
    ScriptComponent,
    Parameter,
    Group,
    Other,
}

/// One object placed on the canvas, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasObject {
    /// Display name.
    pub name: String,
    /// Top-level tab category.
    #[serde(default)]
    pub category: String,
    /// Panel within the category.
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub kind: ObjectKind,
}

impl CanvasObject {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            subcategory: subcategory.into(),
            kind: ObjectKind::Component,
        }
    }

    pub fn with_kind(mut self, kind: ObjectKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Canvas-space rectangle enclosing every object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CanvasBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Result of a hi-res tiled canvas capture.
///
/// Each tile is an image file whose stem is `"<column>;<row>"`. The list is
/// unordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TiledCapture {
    pub tiles: Vec<PathBuf>,
    /// Full image size in pixels (before clamping).
    pub width: u32,
    pub height: u32,
    /// Size of a single tile in pixels.
    pub tile_width: u32,
    pub tile_height: u32,
}

/// Tile edge length the host renders at.
pub const DEFAULT_TILE_SIZE: u32 = 1000;

/// Abstract interface to the host application.
pub trait HostContext {
    /// Path of the active canvas document, if it has been saved.
    fn current_document_path(&self) -> Option<PathBuf>;

    /// Path of the companion 3D model document, if it has been saved.
    fn model_document_path(&self) -> Option<PathBuf>;

    /// Every object currently placed on the canvas.
    fn list_canvas_objects(&self) -> Vec<CanvasObject>;

    /// Bounding box of the canvas contents.
    fn canvas_bounds(&self) -> CanvasBounds;

    /// Render the given canvas region as tiles.
    fn capture_canvas_tiles(&self, bounds: CanvasBounds) -> HydraResult<TiledCapture>;

    /// Capture the active 3D viewport at its on-screen size.
    fn capture_viewport(&self) -> HydraResult<DynamicImage>;

    /// Send a message to the host's message channel.
    fn report(&self, level: MessageLevel, message: &str) {
        match level {
            MessageLevel::Warning => tracing::warn!("{message}"),
            MessageLevel::Remark => tracing::info!("{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_object_kind_defaults_to_component() {
        let object: CanvasObject =
            serde_json::from_str(r#"{ "name": "Loft", "category": "Surface" }"#).unwrap();
        assert_eq!(object.kind, ObjectKind::Component);
        assert_eq!(object.subcategory, "");
    }

    #[test]
    fn script_kind_uses_snake_case() {
        let object = CanvasObject::new("Python", "Maths", "Script")
            .with_kind(ObjectKind::ScriptComponent);
        let json = serde_json::to_value(&object).unwrap();
        assert_eq!(json["kind"], "script_component");
    }
}

//! Export inputs and the normalized export request.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::tags::normalize_tags;

/// Raw values wired into the export component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportInputs {
    /// Name of the example file.
    pub file_name: String,

    /// Description paragraphs, one README line each.
    pub description: Vec<String>,

    /// Changes since a previous version of the example.
    #[serde(default)]
    pub change_log: Vec<String>,

    /// Free-form tags (see [`normalize_tags`]).
    #[serde(default)]
    pub tags: Vec<String>,

    /// Local fork directory, overriding discovery.
    #[serde(default)]
    pub target_folder: Option<PathBuf>,

    /// Bundle the companion 3D model into the archive.
    #[serde(default)]
    pub include_source_model: bool,

    /// Use the canvas screenshot for the thumbnail instead of the viewport.
    #[serde(default)]
    pub use_canvas_for_thumbnail: bool,

    /// Extra images to publish next to the example.
    #[serde(default)]
    pub additional_images: Vec<PathBuf>,

    /// Trigger; nothing runs while this is false.
    #[serde(default)]
    pub export: bool,
}

impl ExportInputs {
    /// Whether the mandatory inputs (file name and description) are present.
    pub fn has_mandatory_inputs(&self) -> bool {
        !self.file_name.trim().is_empty() && !self.description.is_empty()
    }
}

/// Which screenshot the thumbnail is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbnailSource {
    Canvas,
    Viewport,
}

/// A normalized export request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    /// File name with surrounding whitespace removed and inner whitespace
    /// replaced by underscores.
    pub file_name: String,
    pub description: Vec<String>,
    pub change_log: Vec<String>,
    /// Normalized tags, always containing the sentinel tag once.
    pub tags: Vec<String>,
    pub target_folder: Option<PathBuf>,
    pub include_source_model: bool,
    pub use_canvas_for_thumbnail: bool,
    pub additional_images: Vec<PathBuf>,
}

impl ExportRequest {
    /// Normalize raw inputs.
    pub fn from_inputs(inputs: &ExportInputs) -> Self {
        Self {
            file_name: normalize_file_name(&inputs.file_name),
            description: inputs.description.clone(),
            change_log: inputs.change_log.clone(),
            tags: normalize_tags(&inputs.tags, inputs.file_name.trim()),
            target_folder: inputs.target_folder.clone(),
            include_source_model: inputs.include_source_model,
            use_canvas_for_thumbnail: inputs.use_canvas_for_thumbnail,
            additional_images: inputs.additional_images.clone(),
        }
    }

    pub fn thumbnail_source(&self) -> ThumbnailSource {
        if self.use_canvas_for_thumbnail {
            ThumbnailSource::Canvas
        } else {
            ThumbnailSource::Viewport
        }
    }
}

/// Trim the name and replace each whitespace character and path separator
/// with `_`. A name made only of dots has them replaced too, so the result
/// is always a single normal path component.
pub fn normalize_file_name(raw: &str) -> String {
    let name: String = raw
        .trim()
        .chars()
        .map(|c| {
            if c.is_whitespace() || c == '/' || c == '\\' {
                '_'
            } else {
                c
            }
        })
        .collect();
    if !name.is_empty() && name.chars().all(|c| c == '.') {
        return name.replace('.', "_");
    }
    name
}

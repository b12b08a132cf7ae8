//! Hydra Imaging
//!
//! Produces the screenshots published with an example:
//!
//! ```text
//! host tiles "c;r".png ──► group by column ──► stitch ──► <name>_GH.png ──┐
//!                                                                         ├──► thumbnail.png
//! host viewport ─────────────────────────────────────────► <name>_Rhino.png ┘
//! ```
//!
//! Every function hands back a [`CapturedImage`] that owns its bitmap;
//! callers drop it once it has been consumed.

use std::path::{Path, PathBuf};

use hydra_common::error::{HydraError, HydraResult};
use image::{DynamicImage, ImageFormat};

pub mod canvas;
pub mod thumbnail;
pub mod tiles;
pub mod viewport;

pub use canvas::{capture_canvas, stitch_tiles};
pub use thumbnail::{make_thumbnail, thumbnail_height};
pub use tiles::{TileGrid, TileId, TilePlacement};
pub use viewport::capture_viewport;

/// A bitmap that has been written to disk.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    pub path: PathBuf,
    pub image: DynamicImage,
    pub width: u32,
    pub height: u32,
}

impl CapturedImage {
    fn new(path: PathBuf, image: DynamicImage) -> Self {
        let (width, height) = (image.width(), image.height());
        Self {
            path,
            image,
            width,
            height,
        }
    }
}

/// Write `image` as PNG, creating the parent directory if needed.
pub(crate) fn save_png(image: &DynamicImage, path: &Path) -> HydraResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| HydraError::imaging(format!("Failed to save {}: {e}", path.display())))
}

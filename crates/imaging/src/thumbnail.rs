//! Fixed-width thumbnail derived from a screenshot.

use std::path::{Path, PathBuf};

use hydra_common::error::{HydraError, HydraResult};
use image::imageops::FilterType;

use crate::{save_png, CapturedImage};

/// Height that keeps the source aspect ratio at `width` (never below 1).
pub fn thumbnail_height(source_width: u32, source_height: u32, width: u32) -> u32 {
    if source_width == 0 {
        return 1;
    }
    let height = (width as f64 * source_height as f64 / source_width as f64).round();
    height.max(1.0) as u32
}

/// Resize `source` to `width` pixels wide and save it to `output`.
pub fn make_thumbnail(source: &CapturedImage, width: u32, output: &Path) -> HydraResult<PathBuf> {
    if width == 0 || source.width == 0 || source.height == 0 {
        return Err(HydraError::imaging(format!(
            "Cannot thumbnail a {}x{} image at width {width}",
            source.width, source.height
        )));
    }
    let height = thumbnail_height(source.width, source.height, width);
    let thumbnail = source.image.resize_exact(width, height, FilterType::Triangle);

    tracing::info!(
        source = %source.path.display(),
        width,
        height,
        "Writing thumbnail"
    );
    save_png(&thumbnail, output)?;
    Ok(output.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};

    #[test]
    fn height_preserves_aspect_ratio() {
        assert_eq!(thumbnail_height(1600, 800, 200), 100);
        assert_eq!(thumbnail_height(1000, 3000, 200), 600);
        assert_eq!(thumbnail_height(4000, 1, 200), 1);
    }

    #[test]
    fn thumbnail_is_written_at_fixed_width() {
        let dir = tempfile::tempdir().unwrap();
        let source = CapturedImage::new(
            dir.path().join("source.png"),
            DynamicImage::ImageRgb8(RgbImage::new(1600, 800)),
        );
        let output = dir.path().join("thumbnail.png");

        make_thumbnail(&source, 200, &output).unwrap();
        let written = image::open(&output).unwrap();
        assert_eq!((written.width(), written.height()), (200, 100));
    }
}

//! Hi-res canvas screenshot stitched from host tiles.

use std::path::Path;

use hydra_common::config::ImagingConfig;
use hydra_common::error::{HydraError, HydraResult};
use hydra_host_core::{HostContext, TiledCapture};
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};

use crate::tiles::TileGrid;
use crate::{save_png, CapturedImage};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Capture the whole canvas through the host, stitch it, and save it to `output`.
pub fn capture_canvas(
    host: &dyn HostContext,
    output: &Path,
    imaging: &ImagingConfig,
) -> HydraResult<CapturedImage> {
    let bounds = host.canvas_bounds();
    let capture = host.capture_canvas_tiles(bounds)?;

    tracing::info!(
        tiles = capture.tiles.len(),
        width = capture.width,
        height = capture.height,
        "Stitching canvas capture"
    );

    let stitched = DynamicImage::ImageRgb8(stitch_tiles(&capture, imaging)?);
    save_png(&stitched, output)?;
    Ok(CapturedImage::new(output.to_path_buf(), stitched))
}

/// Paint every accepted tile into one white RGB bitmap.
///
/// The bitmap is the capture size clamped to `max_canvas_dimension` per
/// axis. Tiles are scaled (nearest neighbour) to the nominal tile size when
/// they differ from it and clipped at the bitmap edges.
pub fn stitch_tiles(capture: &TiledCapture, imaging: &ImagingConfig) -> HydraResult<RgbImage> {
    let width = capture.width.min(imaging.max_canvas_dimension);
    let height = capture.height.min(imaging.max_canvas_dimension);
    if width == 0 || height == 0 {
        return Err(HydraError::imaging(format!(
            "Canvas capture has no area ({}x{})",
            capture.width, capture.height
        )));
    }
    if capture.tile_width == 0 || capture.tile_height == 0 {
        return Err(HydraError::imaging("Canvas capture reported a zero tile size"));
    }

    let grid = TileGrid::from_tiles(&capture.tiles, imaging.max_tile_index);
    let mut full = RgbImage::from_pixel(width, height, BACKGROUND);

    for placement in grid.placements(capture.tile_width, capture.tile_height) {
        let tile = image::open(&placement.path)
            .map_err(|e| {
                HydraError::imaging(format!(
                    "Failed to read tile {}: {e}",
                    placement.path.display()
                ))
            })?
            .to_rgb8();

        let tile = if tile.dimensions() == (capture.tile_width, capture.tile_height) {
            tile
        } else {
            imageops::resize(
                &tile,
                capture.tile_width,
                capture.tile_height,
                FilterType::Nearest,
            )
        };

        imageops::replace(&mut full, &tile, placement.x as i64, placement.y as i64);
    }

    tracing::debug!(
        columns = grid.column_count(),
        tiles = grid.tile_count(),
        width,
        height,
        "Stitched canvas tiles"
    );
    Ok(full)
}

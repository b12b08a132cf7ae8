//! 3D viewport screenshot.

use std::path::Path;

use hydra_common::error::HydraResult;
use hydra_host_core::HostContext;

use crate::{save_png, CapturedImage};

/// Capture the active viewport at its on-screen size and save it to `output`.
pub fn capture_viewport(host: &dyn HostContext, output: &Path) -> HydraResult<CapturedImage> {
    let image = host.capture_viewport()?;
    tracing::info!(
        width = image.width(),
        height = image.height(),
        "Captured viewport"
    );
    save_png(&image, output)?;
    Ok(CapturedImage::new(output.to_path_buf(), image))
}

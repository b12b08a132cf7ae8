//! `input.json` for an exported example.

use std::path::{Path, PathBuf};

use hydra_common::error::{HydraError, HydraResult};
use hydra_export_model::{
    filter_objects, ExportRequest, ExportTarget, ImageEntry, MetadataRecord, ThumbnailSource,
};
use hydra_host_core::HostContext;

/// Images listed in the record: the canvas screenshot, the viewport
/// screenshot unless the canvas is the thumbnail, then every additional
/// image that exists on disk.
pub fn image_manifest(request: &ExportRequest, target: &ExportTarget) -> Vec<ImageEntry> {
    let mut images = vec![ImageEntry::canvas(target.canvas_image_name())];
    if request.thumbnail_source() == ThumbnailSource::Viewport {
        images.push(ImageEntry::viewport(target.viewport_image_name()));
    }
    images.extend(
        request
            .additional_images
            .iter()
            .filter(|path| path.is_file())
            .filter_map(|path| path.file_name())
            .map(|name| ImageEntry::additional(name.to_string_lossy())),
    );
    images
}

/// Collect the canvas objects from the host and assemble the record.
pub fn build_metadata(
    host: &dyn HostContext,
    request: &ExportRequest,
    target: &ExportTarget,
    only_scripts: bool,
) -> MetadataRecord {
    let objects = filter_objects(&host.list_canvas_objects(), only_scripts);
    tracing::debug!(objects = objects.len(), "Collected canvas objects");

    MetadataRecord::build(
        &objects,
        image_manifest(request, target),
        request.tags.clone(),
        target.archive_name(),
    )
}

/// Serialize `record` to `path`.
pub fn write_metadata(path: &Path, record: &MetadataRecord) -> HydraResult<PathBuf> {
    let json = serde_json::to_string_pretty(record)?;
    std::fs::write(path, json).map_err(|e| {
        HydraError::metadata(format!("Failed to write {}: {e}", path.display()))
    })?;

    tracing::info!(
        path = %path.display(),
        components = record.components.len(),
        dependencies = record.dependencies.len(),
        "Wrote metadata"
    );
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydra_export_model::ExportInputs;

    #[test]
    fn manifest_follows_thumbnail_source_and_skips_missing_images() {
        let dir = tempfile::tempdir().unwrap();
        let extra = dir.path().join("detail.png");
        std::fs::write(&extra, "png").unwrap();

        let mut inputs = ExportInputs {
            file_name: "Rose".to_string(),
            description: vec!["d".to_string()],
            additional_images: vec![extra, dir.path().join("gone.png")],
            ..ExportInputs::default()
        };
        let target = ExportTarget::new(dir.path(), "Rose");

        let viewport = image_manifest(&ExportRequest::from_inputs(&inputs), &target);
        assert_eq!(
            viewport,
            vec![
                ImageEntry::canvas("Rose_GH.png"),
                ImageEntry::viewport("Rose_Rhino.png"),
                ImageEntry::additional("detail.png"),
            ]
        );

        inputs.use_canvas_for_thumbnail = true;
        let canvas = image_manifest(&ExportRequest::from_inputs(&inputs), &target);
        assert_eq!(canvas.len(), 2);
        assert_eq!(canvas[1], ImageEntry::additional("detail.png"));
    }
}

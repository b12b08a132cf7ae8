//! Export orchestration.

use std::path::PathBuf;

use hydra_common::config::ExporterConfig;
use hydra_common::error::HydraResult;
use hydra_export_model::{ExportInputs, ExportTarget, ThumbnailSource};
use hydra_host_core::HostContext;
use hydra_imaging::{capture_canvas, capture_viewport, make_thumbnail};

use crate::archive::build_archive;
use crate::assets::copy_additional_images;
use crate::locate::RepositoryLocation;
use crate::metadata::{build_metadata, write_metadata};
use crate::readme::write_readme;
use crate::validate::{validate, Diagnostic, ValidatedExport, ValidationReport};

/// Files produced by one export.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub target: ExportTarget,
    pub archive: PathBuf,
    pub canvas_image: PathBuf,
    /// Only captured when the viewport is the thumbnail source.
    pub viewport_image: Option<PathBuf>,
    pub thumbnail: PathBuf,
    pub readme: PathBuf,
    pub metadata: PathBuf,
    pub copied_images: Vec<PathBuf>,
    /// Additional images that could not be copied, with the reason.
    pub failed_images: Vec<(PathBuf, String)>,
}

/// What happened when the component was solved.
#[derive(Debug, Clone)]
pub enum ComponentOutcome {
    /// The export trigger was off.
    Idle,
    /// Validation failed; nothing was written.
    Blocked(Vec<Diagnostic>),
    Exported(ExportReport),
}

/// Runs exports against a host.
#[derive(Debug, Clone)]
pub struct Exporter {
    config: ExporterConfig,
    default_repository: RepositoryLocation,
}

impl Exporter {
    /// Create an exporter, resolving the default fork location once.
    pub fn new(config: ExporterConfig) -> Self {
        let default_repository = RepositoryLocation::from_config(&config.repository);
        tracing::debug!(
            path = %default_repository.path.display(),
            source = ?default_repository.source,
            "Resolved default repository"
        );
        Self {
            config,
            default_repository,
        }
    }

    pub fn config(&self) -> &ExporterConfig {
        &self.config
    }

    pub fn default_repository(&self) -> &RepositoryLocation {
        &self.default_repository
    }

    /// Validate inputs without writing anything.
    pub fn validate(&self, inputs: &ExportInputs, host: &dyn HostContext) -> ValidationReport {
        validate(inputs, host, &self.default_repository)
    }

    /// Component entry point: honour the trigger, validate, report every
    /// diagnostic to the host, then export.
    pub fn solve(
        &self,
        inputs: &ExportInputs,
        host: &dyn HostContext,
    ) -> HydraResult<ComponentOutcome> {
        if !inputs.export {
            return Ok(ComponentOutcome::Idle);
        }

        let report = self.validate(inputs, host);
        for diagnostic in &report.diagnostics {
            host.report(diagnostic.level, &diagnostic.message);
        }

        match report.export {
            Some(export) => Ok(ComponentOutcome::Exported(self.run(&export, host)?)),
            None => Ok(ComponentOutcome::Blocked(report.diagnostics)),
        }
    }

    /// Run every export step in order. The first error aborts the run;
    /// files already written stay on disk.
    pub fn run(
        &self,
        export: &ValidatedExport,
        host: &dyn HostContext,
    ) -> HydraResult<ExportReport> {
        let request = &export.request;
        let target = &export.target;
        tracing::info!(
            file = %request.file_name,
            root = %target.root_path.display(),
            owner = %export.identity.owner,
            fork = %export.identity.fork,
            "Starting Hydra export"
        );

        let archive = build_archive(
            target,
            &export.canvas_document,
            export.model_document.as_deref(),
            request.include_source_model,
        )?;

        let canvas = capture_canvas(host, &target.canvas_image_path(), &self.config.imaging)?;
        let viewport = match request.thumbnail_source() {
            ThumbnailSource::Viewport => {
                Some(capture_viewport(host, &target.viewport_image_path())?)
            }
            ThumbnailSource::Canvas => None,
        };

        let thumbnail_source = match &viewport {
            Some(viewport) => viewport,
            None => &canvas,
        };
        let thumbnail = make_thumbnail(
            thumbnail_source,
            self.config.imaging.thumbnail_width,
            &target.thumbnail_path(),
        )?;

        let canvas_image = canvas.path.clone();
        drop(canvas);
        let viewport_image = viewport.map(|captured| captured.path);

        let copied = copy_additional_images(&request.additional_images, &target.root_path);
        let readme = write_readme(&target.readme_path(), request, &export.identity)?;

        let record = build_metadata(host, request, target, false);
        let metadata = write_metadata(&target.metadata_path(), &record)?;

        tracing::info!(
            archive = %archive.display(),
            copied_images = copied.copied.len(),
            failed_images = copied.failed.len(),
            "Hydra export complete"
        );

        Ok(ExportReport {
            target: target.clone(),
            archive,
            canvas_image,
            viewport_image,
            thumbnail,
            readme,
            metadata,
            copied_images: copied.copied,
            failed_images: copied.failed,
        })
    }
}

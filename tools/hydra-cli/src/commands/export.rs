//! Export a canvas document into the Hydra fork.

use std::path::Path;

use hydra_common::config::ExporterConfig;
use hydra_export_model::ExportInputs;
use hydra_exporter::{ComponentOutcome, Exporter};

use super::{load_host, print_diagnostics};

pub fn run(config: ExporterConfig, host_path: &Path, inputs: ExportInputs) -> anyhow::Result<()> {
    let host = load_host(host_path)?;
    let exporter = Exporter::new(config);

    println!("Exporting {}...", inputs.file_name.trim());

    match exporter.solve(&inputs, &host)? {
        ComponentOutcome::Idle => {
            println!("Export trigger is off; nothing to do.");
            Ok(())
        }
        ComponentOutcome::Blocked(diagnostics) => {
            println!("\nExport blocked:");
            print_diagnostics(&diagnostics);
            anyhow::bail!("validation failed")
        }
        ComponentOutcome::Exported(report) => {
            println!("\nExport complete: {}", report.target.root_path.display());
            println!("  Archive: {}", report.archive.display());
            println!("  Canvas image: {}", report.canvas_image.display());
            if let Some(viewport) = &report.viewport_image {
                println!("  Viewport image: {}", viewport.display());
            }
            println!("  Thumbnail: {}", report.thumbnail.display());
            println!("  README: {}", report.readme.display());
            println!("  Metadata: {}", report.metadata.display());
            for image in &report.copied_images {
                println!("  Image: {}", image.display());
            }
            for (image, reason) in &report.failed_images {
                println!("  Skipped image {}: {reason}", image.display());
            }
            Ok(())
        }
    }
}

//! Validate export inputs against a host snapshot.

use std::path::Path;

use hydra_common::config::ExporterConfig;
use hydra_export_model::ExportInputs;
use hydra_exporter::Exporter;

use super::{load_host, print_diagnostics};

pub fn run(config: ExporterConfig, host_path: &Path, inputs: ExportInputs) -> anyhow::Result<()> {
    let host = load_host(host_path)?;
    let exporter = Exporter::new(config);

    let repository = exporter.default_repository();
    println!(
        "Default fork: {} ({:?})",
        repository.path.display(),
        repository.source
    );

    let report = exporter.validate(&inputs, &host);
    if !report.diagnostics.is_empty() {
        println!("\nDiagnostics:");
        print_diagnostics(&report.diagnostics);
    }

    let export = report.into_export()?;
    println!("\nReady to export.");
    println!("  File: {}", export.request.file_name);
    println!("  Target: {}", export.target.root_path.display());
    println!("  Fork: {}/{}", export.identity.owner, export.identity.fork);
    println!("  Tags: {}", export.request.tags.join(", "));
    println!("  Thumbnail: {:?}", export.request.thumbnail_source());
    Ok(())
}

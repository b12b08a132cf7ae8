//! Show what `input.json` would record for a host snapshot.

use std::path::Path;

use hydra_export_model::{collect_dependencies, filter_objects, tally_components};
use hydra_host_core::HostContext;

use super::load_host;

pub fn run(host_path: &Path, scripts_only: bool) -> anyhow::Result<()> {
    let host = load_host(host_path)?;

    let objects = filter_objects(&host.list_canvas_objects(), scripts_only);
    let tally = tally_components(&objects);
    let dependencies = collect_dependencies(&objects);

    println!("Host snapshot: {}", host_path.display());
    match host.current_document_path() {
        Some(path) => println!("  Document: {}", path.display()),
        None => println!("  Document: (unsaved)"),
    }
    match host.model_document_path() {
        Some(path) => println!("  Model: {}", path.display()),
        None => println!("  Model: (unsaved)"),
    }
    println!("  Objects: {}", objects.len());
    println!();

    println!("Components:");
    if tally.is_empty() {
        println!("  (none)");
    }
    for (name, count) in &tally {
        println!("  {name}: {count}");
    }
    println!();

    println!("Dependencies:");
    if dependencies.is_empty() {
        println!("  (none)");
    }
    for dependency in &dependencies {
        println!("  {dependency}");
    }

    Ok(())
}

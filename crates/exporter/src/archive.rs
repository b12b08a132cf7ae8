//! Source archive: copy documents into a working directory, zip, clean up.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use hydra_common::error::{HydraError, HydraResult};
use hydra_export_model::ExportTarget;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Build `<root_path>/<file_name>.zip` from the canvas document and,
/// when requested, the model document.
///
/// The working directory is removed once the archive is written. Any I/O
/// failure aborts the build; nothing is rolled back.
pub fn build_archive(
    target: &ExportTarget,
    canvas_document: &Path,
    model_document: Option<&Path>,
    include_model: bool,
) -> HydraResult<PathBuf> {
    let working = &target.working_directory;
    std::fs::create_dir_all(working)?;

    std::fs::copy(canvas_document, target.canvas_copy_path())?;

    let model_copy = target.model_copy_path();
    if include_model {
        if let Some(model) = model_document.filter(|p| !p.as_os_str().is_empty()) {
            std::fs::copy(model, &model_copy)?;
        }
    } else if model_copy.is_file() {
        tracing::debug!(path = %model_copy.display(), "Removing stale model copy");
        std::fs::remove_file(&model_copy)?;
    }

    let archive_path = target.archive_path();
    let entries = zip_directory(working, &archive_path)?;
    std::fs::remove_dir_all(working)?;

    tracing::info!(
        archive = %archive_path.display(),
        entries,
        "Wrote source archive"
    );
    Ok(archive_path)
}

/// Deflate every file under `source_dir` into `archive_path`, storing paths
/// relative to `source_dir` with `/` separators. Returns the entry count.
pub fn zip_directory(source_dir: &Path, archive_path: &Path) -> HydraResult<usize> {
    let file = File::create(archive_path)?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = 0;
    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry =
            entry.map_err(|e| HydraError::archive(format!("Failed to walk directory: {e}")))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = archive_name(source_dir, entry.path())?;
        zip.start_file(name.as_str(), options)
            .with_context(|| format!("Failed to add {name} to archive"))?;
        let mut source = File::open(entry.path())?;
        std::io::copy(&mut source, &mut zip)?;
        entries += 1;
    }

    let mut writer = zip
        .finish()
        .with_context(|| format!("Failed to finish {}", archive_path.display()))?;
    writer.flush()?;
    Ok(entries)
}

fn archive_name(root: &Path, path: &Path) -> HydraResult<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        HydraError::archive(format!(
            "{} is outside {}",
            path.display(),
            root.display()
        ))
    })?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}

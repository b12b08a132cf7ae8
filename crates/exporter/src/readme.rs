//! `README.md` for an exported example.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use hydra_common::error::HydraResult;
use hydra_export_model::{ExportRequest, RepositoryIdentity};

/// Write the README to `path`.
pub fn write_readme(
    path: &Path,
    request: &ExportRequest,
    identity: &RepositoryIdentity,
) -> HydraResult<PathBuf> {
    let mut writer = BufWriter::new(File::create(path)?);
    render_readme(&mut writer, request, identity)?;
    writer.flush()?;

    tracing::info!(path = %path.display(), "Wrote README");
    Ok(path.to_path_buf())
}

/// Render the README contents.
pub fn render_readme<W: Write>(
    out: &mut W,
    request: &ExportRequest,
    identity: &RepositoryIdentity,
) -> std::io::Result<()> {
    writeln!(out, "### Description ")?;
    for paragraph in &request.description {
        writeln!(out, "{paragraph}")?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "This file has been submitted by [{}]({})",
        identity.owner,
        identity.profile_url()
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "[Check out this example on Hydra!]({})",
        identity.viewer_url(&request.file_name)
    )?;

    for line in &request.change_log {
        writeln!(out, "{line}")?;
    }

    writeln!(out, "### Tags ")?;
    writeln!(out, "{}", request.tags.join(", "))?;

    writeln!(out, "### Thumbnail ")?;
    writeln!(
        out,
        "![Screenshot]({})",
        identity.thumbnail_url(&request.file_name)
    )?;
    Ok(())
}

pub mod export;
pub mod inspect;
pub mod validate;

use std::path::Path;

use anyhow::Context;
use hydra_exporter::Diagnostic;
use hydra_host_core::{MessageLevel, SnapshotHost};

pub(crate) fn load_host(path: &Path) -> anyhow::Result<SnapshotHost> {
    SnapshotHost::load(path)
        .with_context(|| format!("Failed to load host snapshot {}", path.display()))
}

pub(crate) fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        let marker = match diagnostic.level {
            MessageLevel::Warning => "warning",
            MessageLevel::Remark => "remark",
        };
        println!("  [{marker}] {}", diagnostic.message);
    }
}

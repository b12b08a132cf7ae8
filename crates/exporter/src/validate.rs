//! Input validation.
//!
//! Every check runs even when an earlier one failed so the user sees all
//! problems at once. Nothing here touches the filesystem beyond reads.

use std::path::{Path, PathBuf};

use hydra_common::error::{HydraError, HydraResult};
use hydra_export_model::{
    git_config_path, parse_git_config, ExportInputs, ExportRequest, ExportTarget,
    RepositoryIdentity,
};
use hydra_host_core::{HostContext, MessageLevel};

use crate::locate::{RepositoryLocation, RepositorySource};

pub const MISSING_MANDATORY_INPUTS: &str = "One of the mandatory inputs is missing!";

/// One problem or notice found while validating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: MessageLevel,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            message: message.into(),
        }
    }

    pub fn remark(message: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Remark,
            message: message.into(),
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.level == MessageLevel::Warning
    }
}

/// Everything the pipeline needs once validation has passed.
#[derive(Debug, Clone)]
pub struct ValidatedExport {
    pub request: ExportRequest,
    pub identity: RepositoryIdentity,
    pub target: ExportTarget,
    pub canvas_document: PathBuf,
    /// Saved companion model, if any.
    pub model_document: Option<PathBuf>,
}

/// Outcome of validation: diagnostics, plus the export when nothing blocks.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub diagnostics: Vec<Diagnostic>,
    pub export: Option<ValidatedExport>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.export.is_some()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_blocking())
    }

    /// The validated export, or a validation error listing every warning.
    pub fn into_export(self) -> HydraResult<ValidatedExport> {
        match self.export {
            Some(export) => Ok(export),
            None => {
                let reasons: Vec<&str> = self
                    .diagnostics
                    .iter()
                    .filter(|d| d.is_blocking())
                    .map(|d| d.message.as_str())
                    .collect();
                Err(HydraError::validation(reasons.join(" ")))
            }
        }
    }
}

/// Validate raw inputs against the host and the filesystem.
pub fn validate(
    inputs: &ExportInputs,
    host: &dyn HostContext,
    default_repository: &RepositoryLocation,
) -> ValidationReport {
    if !inputs.has_mandatory_inputs() {
        return ValidationReport {
            diagnostics: vec![Diagnostic::warning(MISSING_MANDATORY_INPUTS)],
            export: None,
        };
    }

    let request = ExportRequest::from_inputs(inputs);
    let mut diagnostics = Vec::new();

    let repository =
        RepositoryLocation::select(request.target_folder.as_deref(), default_repository);
    let repo_root = if repository.path.is_dir() {
        Some(repository.path.clone())
    } else {
        diagnostics.push(Diagnostic::warning(match repository.source {
            RepositorySource::Explicit => format!(
                "The target folder {} does not exist on your machine.",
                repository.path.display()
            ),
            _ => format!(
                "Cannot find the hydra repo on your machine (looked for {}). \
                 Connect the path of your hydra fork to the target folder input.",
                repository.path.display()
            ),
        }));
        None
    };

    let identity = repo_root
        .as_deref()
        .and_then(|root| read_identity(root, &mut diagnostics));

    let canvas_document = host.current_document_path().filter(|p| p.is_file());
    if canvas_document.is_none() {
        diagnostics.push(Diagnostic::warning(
            "You have not yet saved this Grasshopper file to your machine. \
             You must save it first in order to export it to Hydra.",
        ));
    }

    let model_document = host.model_document_path().filter(|p| p.is_file());
    if model_document.is_none() {
        if request.include_source_model {
            diagnostics.push(Diagnostic::warning(
                "You must save your Rhino file in order to export it to Hydra. \
                 Either save your file or turn off source model inclusion.",
            ));
        } else {
            diagnostics.push(Diagnostic::remark(
                "You have not yet saved this Rhino file to your machine. \
                 Save it to be able to include it with your example.",
            ));
        }
    }

    let blocked = diagnostics.iter().any(Diagnostic::is_blocking);
    let export = match (blocked, repo_root, identity, canvas_document) {
        (false, Some(root), Some(identity), Some(canvas_document)) => Some(ValidatedExport {
            target: ExportTarget::new(root, &request.file_name),
            request,
            identity,
            canvas_document,
            model_document,
        }),
        _ => None,
    };

    ValidationReport {
        diagnostics,
        export,
    }
}

fn read_identity(
    repo_root: &Path,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<RepositoryIdentity> {
    let config_path = git_config_path(repo_root);
    if !config_path.is_file() {
        diagnostics.push(Diagnostic::warning(format!(
            "Could not find the git config file of your Hydra fork at {}. \
             Make sure you have cloned hydra, or connect the correct path to the target folder input.",
            config_path.display()
        )));
        return None;
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) => {
            diagnostics.push(Diagnostic::warning(format!(
                "Failed to read {}: {e}",
                config_path.display()
            )));
            return None;
        }
    };

    let identity = parse_git_config(&content);
    if identity.is_none() {
        diagnostics.push(Diagnostic::warning(format!(
            "{} has no GitHub URL for the \"origin\" remote.",
            config_path.display()
        )));
    }
    identity
}

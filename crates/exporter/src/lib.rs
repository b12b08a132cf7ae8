//! Hydra Exporter
//!
//! Publishes the active canvas document into a local clone of a Hydra fork:
//!
//! 1. validate inputs and resolve the fork (`validate`, `locate`)
//! 2. copy documents into a working directory and zip it (`archive`)
//! 3. stitch the canvas screenshot, capture the viewport, derive a thumbnail
//! 4. copy additional images (`assets`)
//! 5. write `README.md` (`readme`) and `input.json` (`metadata`)
//!
//! Everything host-specific goes through [`hydra_host_core::HostContext`].

pub mod archive;
pub mod assets;
pub mod locate;
pub mod metadata;
pub mod pipeline;
pub mod readme;
pub mod validate;

pub use pipeline::{ComponentOutcome, ExportReport, Exporter};
pub use validate::{Diagnostic, ValidatedExport, ValidationReport};

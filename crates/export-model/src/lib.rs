//! Hydra Export Model
//!
//! Defines the data contracts of a single export:
//! - **Request:** raw component inputs and the normalized request
//! - **Tags:** tag splitting and the sentinel tag
//! - **Identity:** the owner/fork recovered from the fork's git config
//! - **Metadata:** component tallies, dependencies, and the `input.json` record
//! - **Target:** the directory layout an export writes into

pub mod identity;
pub mod metadata;
pub mod request;
pub mod tags;
pub mod target;

pub use identity::*;
pub use metadata::*;
pub use request::*;
pub use tags::*;
pub use target::*;

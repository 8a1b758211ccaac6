//! Core types: the manifest record and the error taxonomy.

pub mod errors;
pub mod manifest;

pub use errors::ReportError;
pub use manifest::{Manifest, MANIFEST_FILE};

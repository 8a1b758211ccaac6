//! High-level operations.

pub mod report_version;

pub use report_version::{manifest_path, manifest_path_for, report_version, run};

//! pkgver - print the version from the `package.json` installed beside the binary
//!
//! The library resolves the manifest next to the running executable, parses
//! it, and hands back the `version` field or a [`ReportError`] whose
//! [`exit_code`](ReportError::exit_code) tells `1` (unreadable manifest) apart
//! from `2` (no version).

pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::{errors::ReportError, manifest::Manifest};
pub use crate::ops::{report_version, run};

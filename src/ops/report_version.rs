//! Report the version of the manifest installed beside the executable.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::errors::ReportError;
use crate::core::manifest::{Manifest, MANIFEST_FILE};

/// Locate the manifest for the running executable.
///
/// The path is anchored on the executable's real location, with symlinks
/// resolved, and never on the current working directory.
pub fn manifest_path() -> Result<PathBuf, ReportError> {
    let exe = env::current_exe().map_err(|source| ReportError::Locate { source })?;
    let exe = fs::canonicalize(&exe).map_err(|source| ReportError::Locate { source })?;

    let path = manifest_path_for(&exe);
    debug!(exe = %exe.display(), manifest = %path.display(), "resolved manifest path");
    Ok(path)
}

/// The manifest path that belongs to the executable at `exe`.
pub fn manifest_path_for(exe: &Path) -> PathBuf {
    exe.parent()
        .unwrap_or_else(|| Path::new("."))
        .join(MANIFEST_FILE)
}

/// Read the manifest at `path` and return its non-empty version.
pub fn report_version(path: &Path) -> Result<String, ReportError> {
    let manifest = Manifest::load(path)?;
    manifest.require_version()
}

/// Locate the manifest and report its version.
pub fn run() -> Result<String, ReportError> {
    let path = manifest_path()?;
    report_version(&path)
}

//! Error types for version reporting.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::util::diagnostic::Diagnostic;

/// Exit status for a successful report.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit status when the manifest could not be located, read, or parsed.
pub const EXIT_FAILURE: i32 = 1;

/// Exit status when the manifest is readable but carries no usable version.
pub const EXIT_VERSION_NOT_FOUND: i32 = 2;

/// Error while reporting the manifest version.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to locate the running executable: {source}")]
    Locate {
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("version not found")]
    VersionNotFound { path: PathBuf },
}

impl ReportError {
    /// Process exit status for this error.
    ///
    /// Callers script against the split between `1` (the manifest itself is
    /// unusable) and `2` (the manifest is fine but has no version).
    pub fn exit_code(&self) -> i32 {
        match self {
            ReportError::Locate { .. } | ReportError::Read { .. } | ReportError::Parse { .. } => {
                EXIT_FAILURE
            }
            ReportError::VersionNotFound { .. } => EXIT_VERSION_NOT_FOUND,
        }
    }

    /// Convert to a user-facing diagnostic.
    ///
    /// Read and parse messages already name the manifest, so only the
    /// fixed not-found message gets a location attached.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ReportError::VersionNotFound { path } => {
                Diagnostic::error(self.to_string()).with_location(path)
            }
            _ => Diagnostic::error(self.to_string()),
        }
    }
}

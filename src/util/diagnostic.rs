//! User-facing diagnostic lines.
//!
//! Every failure is reported as a single `error: ...` line on stderr so that
//! scripts can capture it without parsing multi-line output.

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

fn error_label(color: bool) -> &'static str {
    if color {
        "\x1b[1;31merror\x1b[0m"
    } else {
        "error"
    }
}

/// A one-line diagnostic message.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Related file, printed before the message
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            location: None,
        }
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl AsRef<Path>) -> Self {
        self.location = Some(path.as_ref().to_path_buf());
        self
    }

    /// Format the diagnostic for terminal output, newline included.
    pub fn format(&self, color: bool) -> String {
        let label = error_label(color);
        match &self.location {
            Some(path) => format!("{}: {}: {}\n", label, path.display(), self.message),
            None => format!("{}: {}\n", label, self.message),
        }
    }
}

/// Print a diagnostic to stderr, colored only when stderr is a terminal.
pub fn emit(diagnostic: &Diagnostic) {
    let mut stderr = io::stderr().lock();
    let color = stderr.is_terminal();
    // Nothing useful is left to do if stderr itself is gone.
    let _ = stderr.write_all(diagnostic.format(color).as_bytes());
}

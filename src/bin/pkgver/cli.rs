//! CLI definitions using clap.

use clap::Parser;

/// Print the version from the package.json installed next to this binary
///
/// Exits 0 on success, 1 when package.json cannot be read or parsed, and 2
/// when it has no non-empty `version` field.
#[derive(Parser)]
#[command(name = "pkgver")]
#[command(about, long_about = None, disable_version_flag = true)]
pub struct Cli {}

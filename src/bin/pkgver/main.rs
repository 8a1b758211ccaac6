//! pkgver CLI - print the version of the package.json beside the executable

use std::process;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pkgver::core::errors::{EXIT_FAILURE, EXIT_SUCCESS};
use pkgver::util::diagnostic::{self, Diagnostic};

mod cli;

use cli::Cli;

fn main() {
    if let Err(e) = init_logging() {
        diagnostic::emit(&Diagnostic::error(format!("{:#}", e)));
        process::exit(EXIT_FAILURE);
    }

    // Usage errors exit 1, never clap's default 2, which means "no version".
    if let Err(e) = Cli::try_parse() {
        match e.kind() {
            ErrorKind::DisplayHelp => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(EXIT_FAILURE);
            }
        }
    }

    match pkgver::ops::run() {
        Ok(version) => {
            println!("{}", version);
            process::exit(EXIT_SUCCESS);
        }
        Err(e) => {
            debug!(error = ?e, "version report failed");
            diagnostic::emit(&e.to_diagnostic());
            process::exit(e.exit_code());
        }
    }
}

fn init_logging() -> Result<()> {
    // Fixed filter: the tool reads no environment variables.
    let filter = EnvFilter::try_new("pkgver=warn")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?;

    Ok(())
}

//! finddups - Duplicate File Finder
//!
//! Scans a directory tree and reports groups of files that are likely
//! duplicates: same size and MD5 hash, same file name, or same stem with
//! different extensions.

pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::{validate_directory, Cli};
use crate::config::Config;
use crate::duplicates::{DuplicateFinder, FinderConfig};
use crate::error::ExitCode;
use crate::output::TextOutput;

/// Run the application, printing the report to standard output.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, or if traversal or
/// hashing fails.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    let stdout = io::stdout();
    run_with_output(&cli, stdout.lock())
}

/// Run the application, writing user-facing output to `out`.
///
/// An invalid root path writes its message to `out` and returns
/// [`ExitCode::InvalidPath`] before configuration is loaded.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, or if traversal,
/// hashing or writing the report fails.
pub fn run_with_output<W: Write>(cli: &Cli, mut out: W) -> Result<ExitCode> {
    if let Err(e) = validate_directory(&cli.directory) {
        log::debug!("Rejected root path: {:?}", e);
        writeln!(out, "{e}")?;
        return Ok(ExitCode::InvalidPath);
    }

    let config = Config::load(cli.config.as_deref())?.apply_cli(cli);
    log::debug!("Effective configuration: {:?}", config);

    let finder_config = FinderConfig::default().with_walker_config(config.walker_config());
    let finder = DuplicateFinder::new(finder_config);
    let (report, summary) = finder
        .find_duplicates(&cli.directory)
        .with_context(|| format!("Failed to scan {}", cli.directory.display()))?;

    log::info!("Scan finished in {:.2?}", summary.scan_duration);

    TextOutput::new(&report)
        .write_to(&mut out)
        .context("Failed to write report")?;
    Ok(ExitCode::Success)
}

//! Command-line interface definitions for finddups.
//!
//! This module defines the CLI arguments using the clap derive API, plus the
//! two input checks the shell performs before scanning: extension
//! normalization and root directory validation.
//!
//! # Example
//!
//! ```bash
//! # Report every kind of potential duplicate under ~/Documents
//! finddups ~/Documents
//!
//! # Only consider text and markdown files
//! finddups ~/Documents -e txt .md
//!
//! # Verbose mode for debugging
//! finddups -v ~/Documents
//! ```

use clap::Parser;
use std::path::{Path, PathBuf};

/// Find duplicate files in a directory tree.
///
/// Files are reported when they share size and content hash, when they share
/// a file name, or when they share a stem with different extensions.
#[derive(Debug, Parser)]
#[command(name = "finddups")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The root directory to search for duplicate files
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// List of file extensions to include in the search (e.g. txt .md)
    #[arg(short, long, value_name = "EXT", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Follow symbolic links during the scan
    #[arg(short = 'L', long)]
    pub follow_symlinks: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH", env = "FINDDUPS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Ensure every extension starts with a dot.
///
/// ```
/// use finddups::cli::normalize_extensions;
///
/// let normalized = normalize_extensions(&["txt".to_string(), ".jpg".to_string()]);
/// assert_eq!(normalized, vec![".txt", ".jpg"]);
/// ```
#[must_use]
pub fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| {
            if ext.starts_with('.') {
                ext.clone()
            } else {
                format!(".{ext}")
            }
        })
        .collect()
}

/// Reasons a root path cannot be scanned.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing exists at the path.
    #[error("The directory '{}' does not exist.", .0.display())]
    NotFound(PathBuf),

    /// The path exists but is not a directory.
    #[error("The path '{}' is not a valid directory.", .0.display())]
    NotADirectory(PathBuf),
}

/// Check that `path` exists and is a directory.
///
/// # Errors
///
/// Returns [`ValidationError`] describing the first failed check.
pub fn validate_directory(path: &Path) -> Result<(), ValidationError> {
    if !path.exists() {
        return Err(ValidationError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ValidationError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

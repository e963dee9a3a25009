//! Scanner module for directory traversal and file hashing.
//!
//! This module provides functionality for:
//! - Recursive directory walking with an optional extension filter
//! - Streaming MD5 content hashing
//! - File name, suffix and stem extraction
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal and file discovery
//! - [`hasher`]: MD5 file hashing (streaming)
//! - [`path_utils`]: Name, suffix and stem helpers used as grouping keys
//!
//! # Example
//!
//! ```no_run
//! use finddups::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let config = WalkerConfig {
//!     extensions: Some(vec![".txt".to_string()]),
//!     ..Default::default()
//! };
//!
//! let walker = Walker::new(Path::new("."), config);
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(path) => println!("{}", path.display()),
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

pub mod hasher;
pub mod path_utils;
pub mod walker;

use std::ffi::OsStr;
use std::path::PathBuf;

// Re-export main types
pub use hasher::{hash_to_hex, Hash, Hasher, CHUNK_SIZE};
pub use walker::Walker;

/// Configuration for directory walking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Extension filter. Each entry includes its leading dot (`.txt`).
    /// `None` accepts every regular file.
    pub extensions: Option<Vec<String>>,

    /// Follow symbolic links during traversal.
    /// Warning: cycles are only caught by the underlying walker.
    pub follow_symlinks: bool,
}

impl WalkerConfig {
    /// Create a new configuration.
    ///
    /// # Arguments
    ///
    /// * `extensions` - Normalized extension filter, or `None` for all files
    /// * `follow_symlinks` - Whether to follow symbolic links
    #[must_use]
    pub fn new(extensions: Option<Vec<String>>, follow_symlinks: bool) -> Self {
        Self {
            extensions,
            follow_symlinks,
        }
    }

    /// Check whether a file suffix passes the extension filter.
    #[must_use]
    pub fn accepts_suffix(&self, suffix: &OsStr) -> bool {
        match &self.extensions {
            None => true,
            Some(exts) => exts.iter().any(|ext| suffix == OsStr::new(ext)),
        }
    }
}

/// Errors that can occur during directory scanning.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// An I/O error occurred while accessing a file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Classify an I/O error raised for `path`.
    pub(crate) fn from_io(path: &std::path::Path, error: std::io::Error) -> Self {
        use std::io::ErrorKind;

        match error.kind() {
            ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }
}

/// Errors that can occur during file hashing.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

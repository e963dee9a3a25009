//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory
//! tree and collecting the regular files that take part in duplicate
//! detection. Traversal is single-threaded and sorted by file name within
//! each directory, so repeated scans of an unchanged tree produce the
//! same file list.
//!
//! # Features
//!
//! - Recursive traversal with no depth limit
//! - Extension filtering on the final suffix (case-sensitive)
//! - Optional symlink following (cycle detection provided by walkdir)
//!
//! # Example
//!
//! ```no_run
//! use finddups::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Downloads"), WalkerConfig::default());
//! let files = walker.collect_files().unwrap();
//! println!("Found {} files", files.len());
//! ```

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::path_utils::file_suffix;
use super::{ScanError, WalkerConfig};

/// Directory walker for file discovery.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Walker configuration
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given path.
    ///
    /// # Arguments
    ///
    /// * `path` - Root directory to scan
    /// * `config` - Walker configuration options
    #[must_use]
    pub fn new(path: &Path, config: WalkerConfig) -> Self {
        Self {
            root: path.to_path_buf(),
            config,
        }
    }

    /// Walk the directory tree, yielding regular file paths.
    ///
    /// Errors are yielded as [`ScanError`] values; the caller decides
    /// whether to stop. Yielded paths are the root joined with the
    /// relative path, so a relative root yields relative paths.
    pub fn walk(&self) -> impl Iterator<Item = Result<PathBuf, ScanError>> + '_ {
        WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => self.process_entry(entry),
                Err(e) if Self::is_dangling_link(&e) => {
                    log::debug!("Skipping dangling symlink: {}", e);
                    None
                }
                Err(e) => Some(Err(self.convert_walk_error(e))),
            })
    }

    /// Walk the tree and materialize the file list.
    ///
    /// # Errors
    ///
    /// Fails fast with the first [`ScanError`] encountered.
    pub fn collect_files(&self) -> Result<Vec<PathBuf>, ScanError> {
        let files = self.walk().collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "Collected {} file(s) under {}",
            files.len(),
            self.root.display()
        );
        Ok(files)
    }

    fn process_entry(&self, entry: DirEntry) -> Option<Result<PathBuf, ScanError>> {
        let file_type = entry.file_type();
        if file_type.is_dir() {
            return None;
        }

        if !file_type.is_file() {
            if !file_type.is_symlink() {
                log::trace!("Skipping non-regular file: {}", entry.path().display());
                return None;
            }
            // Unfollowed symlink: keep it only if it points at a regular file
            match std::fs::metadata(entry.path()) {
                Ok(meta) if meta.is_file() => {}
                _ => {
                    log::trace!("Skipping symlink: {}", entry.path().display());
                    return None;
                }
            }
        }

        let path = entry.into_path();
        if !self.config.accepts_suffix(&file_suffix(&path)) {
            log::trace!("Skipping file due to extension filter: {}", path.display());
            return None;
        }

        Some(Ok(path))
    }

    /// A followed link whose target is missing is skipped, not fatal.
    fn is_dangling_link(error: &walkdir::Error) -> bool {
        let target_missing = error
            .io_error()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound);
        target_missing
            && error.path().is_some_and(|p| {
                std::fs::symlink_metadata(p).is_ok_and(|m| m.file_type().is_symlink())
            })
    }

    fn convert_walk_error(&self, error: walkdir::Error) -> ScanError {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);
        let message = error.to_string();
        log::warn!("Walker error for {}: {}", path.display(), message);

        match error.into_io_error() {
            Some(io) => ScanError::from_io(&path, io),
            None => ScanError::Io {
                path,
                source: std::io::Error::other(message),
            },
        }
    }
}

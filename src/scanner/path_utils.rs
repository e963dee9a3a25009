//! File name, suffix and stem extraction.
//!
//! These helpers produce the string keys used by name and stem grouping
//! and the suffix tested by the walker's extension filter.
//!
//! # Suffix rules
//!
//! The suffix is the final `.`-separated part of the file name including
//! the dot. A name has no suffix when its only dot is the first character
//! (`.bashrc`) or the last one (`notes.`). Double extensions are not
//! special: `archive.tar.gz` has suffix `.gz` and stem `archive.tar`.
//!
//! # Example
//!
//! ```
//! use finddups::scanner::path_utils::{file_stem, file_suffix};
//! use std::path::Path;
//!
//! let path = Path::new("/data/report.v2.txt");
//! assert_eq!(file_suffix(path), ".txt");
//! assert_eq!(file_stem(path), "report.v2");
//! ```
//!
//! Keys are `OsString`s taken straight from the path, so names that are
//! not valid UTF-8 stay distinct. Convert lossily only for display.

use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Final path component, or empty if the path has none.
#[must_use]
pub fn file_name(path: &Path) -> OsString {
    path.file_name().map(OsStr::to_os_string).unwrap_or_default()
}

/// Extension without its dot, if the name has a non-empty one.
///
/// `Path::extension` already treats `.bashrc` as extensionless; a
/// trailing dot (`notes.`) yields an empty extension, which counts as none.
fn extension(path: &Path) -> Option<&OsStr> {
    path.extension().filter(|ext| !ext.is_empty())
}

/// Final extension of the file name including its leading dot.
///
/// Returns an empty string when the name has no suffix.
#[must_use]
pub fn file_suffix(path: &Path) -> OsString {
    match extension(path) {
        Some(ext) => {
            let mut suffix = OsString::from(".");
            suffix.push(ext);
            suffix
        }
        None => OsString::new(),
    }
}

/// File name with its final extension removed.
#[must_use]
pub fn file_stem(path: &Path) -> OsString {
    match (extension(path), path.file_stem()) {
        (Some(_), Some(stem)) => stem.to_os_string(),
        _ => file_name(path),
    }
}

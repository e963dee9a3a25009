//! File grouping passes and singleton pruning.
//!
//! # Overview
//!
//! Each grouping pass buckets a file list under one key:
//!
//! | Pass                          | Key                         | I/O            |
//! |-------------------------------|-----------------------------|----------------|
//! | [`group_by_size`]             | byte length                 | `stat` only    |
//! | [`group_by_hash`]             | MD5 hex digest              | full read      |
//! | [`group_by_name`]             | final path component        | none           |
//! | [`group_by_stem_diff_suffix`] | name without final suffix   | none           |
//!
//! Every pass returns a [`GroupMap`]: keys appear in the order they were
//! first seen, and files within a key keep discovery order. A file lands
//! under exactly one key per pass.
//!
//! [`prune_singletons`] drops every key holding fewer than two files,
//! since a group of one cannot be a duplicate.
//!
//! # Example
//!
//! ```
//! use finddups::duplicates::{group_by_name, prune_singletons};
//! use std::ffi::OsStr;
//! use std::path::PathBuf;
//!
//! let files = vec![
//!     PathBuf::from("/a/notes.txt"),
//!     PathBuf::from("/b/notes.txt"),
//!     PathBuf::from("/c/todo.txt"),
//! ];
//!
//! let groups = prune_singletons(group_by_name(&files));
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[OsStr::new("notes.txt")].len(), 2);
//! ```

use std::ffi::OsString;
use std::hash::Hash as StdHash;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::scanner::path_utils::{file_name, file_stem, file_suffix};
use crate::scanner::{hash_to_hex, HashError, Hasher, ScanError};

/// Files bucketed by a grouping key, in first-seen key order.
pub type GroupMap<K> = IndexMap<K, Vec<PathBuf>>;

/// Group files by size in bytes.
///
/// Only metadata is read. Files with equal size share a group
/// regardless of content.
///
/// # Errors
///
/// Returns [`ScanError`] for the first file whose metadata cannot be read.
pub fn group_by_size(files: &[PathBuf]) -> Result<GroupMap<u64>, ScanError> {
    let mut groups: GroupMap<u64> = IndexMap::new();

    for file in files {
        let size = std::fs::metadata(file)
            .map_err(|e| {
                log::warn!("Cannot read metadata for {}: {}", file.display(), e);
                ScanError::from_io(file, e)
            })?
            .len();
        groups.entry(size).or_default().push(file.clone());
    }

    log::debug!(
        "Size grouping: {} files -> {} distinct sizes",
        files.len(),
        groups.len()
    );
    Ok(groups)
}

/// Group files by MD5 content digest.
///
/// Every file of every input group is hashed; the input keys are
/// ignored. Callers normally pass size groups that have already been
/// pruned, which skips hashing files whose size is unique. Hashing the
/// unpruned list gives the same groups once the result is pruned.
///
/// # Errors
///
/// Returns [`HashError`] for the first file that cannot be read.
pub fn group_by_hash<K>(
    groups: &GroupMap<K>,
    hasher: &Hasher,
) -> Result<GroupMap<String>, HashError> {
    let mut by_hash: GroupMap<String> = IndexMap::new();
    let mut hashed = 0usize;

    for file in groups.values().flatten() {
        let hash = hasher.full_hash(file).map_err(|e| {
            log::warn!("Cannot hash {}: {}", file.display(), e);
            e
        })?;
        hashed += 1;
        by_hash.entry(hash_to_hex(&hash)).or_default().push(file.clone());
    }

    log::debug!(
        "Hash grouping: {} files hashed -> {} distinct digests",
        hashed,
        by_hash.len()
    );
    Ok(by_hash)
}

/// Group files by their final path component.
///
/// Names are compared as raw OS strings, byte for byte.
#[must_use]
pub fn group_by_name(files: &[PathBuf]) -> GroupMap<OsString> {
    let mut groups: GroupMap<OsString> = IndexMap::new();

    for file in files {
        groups.entry(file_name(file)).or_default().push(file.clone());
    }

    log::debug!(
        "Name grouping: {} files -> {} distinct names",
        files.len(),
        groups.len()
    );
    groups
}

/// Group files by stem, keeping at most one file per suffix in each group.
///
/// Files are visited once, in order. A file joins its stem's group only if
/// no file already in that group has the same suffix, so the result
/// captures "same base name, different extension". Same-name files are
/// left to [`group_by_name`].
#[must_use]
pub fn group_by_stem_diff_suffix(files: &[PathBuf]) -> GroupMap<OsString> {
    let mut groups: GroupMap<OsString> = IndexMap::new();

    for file in files {
        let suffix = file_suffix(file);
        let members = groups.entry(file_stem(file)).or_default();

        if members.iter().any(|m| file_suffix(m) == suffix) {
            log::trace!(
                "Stem grouping: suffix '{}' already present, skipping {}",
                suffix.to_string_lossy(),
                file.display()
            );
            continue;
        }
        members.push(file.clone());
    }

    log::debug!(
        "Stem grouping: {} files -> {} distinct stems",
        files.len(),
        groups.len()
    );
    groups
}

/// Remove every group with fewer than two files.
///
/// The relative order of the remaining keys is preserved.
#[must_use]
pub fn prune_singletons<K>(groups: GroupMap<K>) -> GroupMap<K>
where
    K: StdHash + Eq,
{
    let before = groups.len();
    let pruned: GroupMap<K> = groups
        .into_iter()
        .filter(|(_, files)| files.len() > 1)
        .collect();

    log::trace!("Pruned {} singleton group(s)", before - pruned.len());
    pruned
}

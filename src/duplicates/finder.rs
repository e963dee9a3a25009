//! Duplicate finder orchestrating the three detection strategies.
//!
//! # Overview
//!
//! The finder enumerates the tree once and runs three independent
//! pipelines over the same file list:
//!
//! 1. **Same size and hash**: size grouping, prune, MD5 grouping over the
//!    surviving size groups, prune
//! 2. **Same name**: name grouping, prune
//! 3. **Same stem, different suffix**: stem grouping, prune
//!
//! A file may show up under more than one reason.
//!
//! # Example
//!
//! ```no_run
//! use finddups::duplicates::{DuplicateFinder, DuplicateReason};
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::with_defaults();
//! let (report, summary) = finder.find_duplicates(Path::new(".")).unwrap();
//!
//! for (reason, groups) in report.iter() {
//!     println!("{}: {} group(s)", reason, groups.len());
//! }
//! println!("Scanned {} files", summary.total_files);
//! ```

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use bytesize::ByteSize;

use super::groups::{
    group_by_hash, group_by_name, group_by_size, group_by_stem_diff_suffix, prune_singletons,
    GroupMap,
};
use crate::cli::{validate_directory, ValidationError};
use crate::scanner::{HashError, Hasher, ScanError, Walker, WalkerConfig};

/// Why a group of files is reported as potential duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuplicateReason {
    /// Equal size and equal MD5 digest.
    SameSizeAndHash,
    /// Equal file name, anywhere in the tree.
    SameName,
    /// Equal stem with differing suffixes.
    SameStemDiffSuffix,
}

impl DuplicateReason {
    /// All reasons, in report order.
    pub const ALL: [DuplicateReason; 3] = [
        DuplicateReason::SameSizeAndHash,
        DuplicateReason::SameName,
        DuplicateReason::SameStemDiffSuffix,
    ];

    /// Human-readable description used in reports.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::SameSizeAndHash => "same size and hash",
            Self::SameName => "same name",
            Self::SameStemDiffSuffix => "same stem different suffix",
        }
    }
}

impl fmt::Display for DuplicateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Pruned duplicate groups for every [`DuplicateReason`].
///
/// Every reason is always present, possibly with no groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateReport {
    /// Groups keyed by hex MD5 digest
    pub same_size_and_hash: GroupMap<String>,
    /// Groups keyed by file name
    pub same_name: GroupMap<OsString>,
    /// Groups keyed by file stem
    pub same_stem_diff_suffix: GroupMap<OsString>,
}

impl DuplicateReport {
    /// File groups found for one reason, in key order.
    #[must_use]
    pub fn groups(&self, reason: DuplicateReason) -> Vec<&[PathBuf]> {
        fn files<K>(groups: &GroupMap<K>) -> Vec<&[PathBuf]> {
            groups.values().map(Vec::as_slice).collect()
        }

        match reason {
            DuplicateReason::SameSizeAndHash => files(&self.same_size_and_hash),
            DuplicateReason::SameName => files(&self.same_name),
            DuplicateReason::SameStemDiffSuffix => files(&self.same_stem_diff_suffix),
        }
    }

    /// Iterate over every reason and its groups in report order.
    pub fn iter(&self) -> impl Iterator<Item = (DuplicateReason, Vec<&[PathBuf]>)> {
        DuplicateReason::ALL
            .into_iter()
            .map(move |reason| (reason, self.groups(reason)))
    }

    /// Total number of groups across all reasons.
    #[must_use]
    pub fn total_groups(&self) -> usize {
        self.iter().map(|(_, groups)| groups.len()).sum()
    }

    /// Whether no reason produced any group.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_groups() == 0
    }
}

/// Configuration for the duplicate finder.
#[derive(Debug, Clone, Default)]
pub struct FinderConfig {
    /// Walker configuration for directory traversal.
    pub walker_config: WalkerConfig,
}

impl FinderConfig {
    /// Set the walker configuration.
    #[must_use]
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Restrict the scan to the given (normalized) extensions.
    #[must_use]
    pub fn with_extensions(mut self, extensions: Option<Vec<String>>) -> Self {
        self.walker_config.extensions = extensions;
        self
    }
}

/// Summary statistics from a duplicate scan.
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    /// Total number of files in the scanned list
    pub total_files: usize,
    /// Total size of all scanned files in bytes
    pub total_size: u64,
    /// Number of files that went through content hashing
    pub hashed_files: usize,
    /// Groups with the same size and hash
    pub hash_groups: usize,
    /// Groups with the same name
    pub name_groups: usize,
    /// Groups with the same stem and different suffixes
    pub stem_groups: usize,
    /// Duration of the entire scan
    pub scan_duration: Duration,
}

impl ScanSummary {
    /// Format total size as human-readable string.
    #[must_use]
    pub fn total_size_display(&self) -> String {
        ByteSize::b(self.total_size).to_string()
    }
}

/// Errors that can occur during duplicate finding.
#[derive(thiserror::Error, Debug)]
pub enum FinderError {
    /// The root is missing or is not a directory.
    #[error(transparent)]
    InvalidRoot(#[from] ValidationError),

    /// Walking the tree or reading file metadata failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Reading a file for hashing failed.
    #[error(transparent)]
    Hash(#[from] HashError),
}

/// Duplicate finder that runs every detection strategy over one file list.
#[derive(Debug, Default)]
pub struct DuplicateFinder {
    config: FinderConfig,
    hasher: Hasher,
}

impl DuplicateFinder {
    /// Create a new duplicate finder with the given configuration.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        Self {
            config,
            hasher: Hasher::new(),
        }
    }

    /// Create a new duplicate finder with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(FinderConfig::default())
    }

    /// Find potential duplicates under `path`.
    ///
    /// The tree is walked once with the configured extension filter and the
    /// resulting list feeds all three strategies.
    ///
    /// # Errors
    ///
    /// Returns `FinderError` if:
    /// - The path does not exist or is not a directory
    /// - Traversal, metadata access or hashing fails for any file
    pub fn find_duplicates(
        &self,
        path: &Path,
    ) -> Result<(DuplicateReport, ScanSummary), FinderError> {
        validate_directory(path)?;

        let start_time = Instant::now();
        log::info!("Scanning {}", path.display());

        let walker = Walker::new(path, self.config.walker_config.clone());
        let files = walker.collect_files()?;

        let (report, mut summary) = self.find_duplicates_in_files(&files)?;
        summary.scan_duration = start_time.elapsed();
        Ok((report, summary))
    }

    /// Find potential duplicates within an already enumerated file list.
    ///
    /// # Errors
    ///
    /// Returns `FinderError` if metadata access or hashing fails.
    pub fn find_duplicates_in_files(
        &self,
        files: &[PathBuf],
    ) -> Result<(DuplicateReport, ScanSummary), FinderError> {
        let start_time = Instant::now();
        let mut summary = ScanSummary {
            total_files: files.len(),
            ..Default::default()
        };

        let by_size = group_by_size(files)?;
        summary.total_size = by_size
            .iter()
            .map(|(size, group)| size * group.len() as u64)
            .sum();

        let by_size = prune_singletons(by_size);
        summary.hashed_files = by_size.values().map(Vec::len).sum();
        let same_size_and_hash = prune_singletons(group_by_hash(&by_size, &self.hasher)?);

        let same_name = prune_singletons(group_by_name(files));
        let same_stem_diff_suffix = prune_singletons(group_by_stem_diff_suffix(files));

        summary.hash_groups = same_size_and_hash.len();
        summary.name_groups = same_name.len();
        summary.stem_groups = same_stem_diff_suffix.len();
        summary.scan_duration = start_time.elapsed();

        log::info!(
            "Scanned {} files ({}): {} hash group(s), {} name group(s), {} stem group(s)",
            summary.total_files,
            summary.total_size_display(),
            summary.hash_groups,
            summary.name_groups,
            summary.stem_groups
        );

        let report = DuplicateReport {
            same_size_and_hash,
            same_name,
            same_stem_diff_suffix,
        };
        Ok((report, summary))
    }
}

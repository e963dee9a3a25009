//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Size, content hash, name and stem grouping
//! - Singleton pruning
//! - Orchestration of the three detection strategies

pub mod finder;
pub mod groups;

pub use finder::{
    DuplicateFinder, DuplicateReason, DuplicateReport, FinderConfig, FinderError, ScanSummary,
};
pub use groups::{
    group_by_hash, group_by_name, group_by_size, group_by_stem_diff_suffix, prune_singletons,
    GroupMap,
};

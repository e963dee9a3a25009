//! Output formatters for duplicate scan results.
//!
//! # Example
//!
//! ```no_run
//! use finddups::duplicates::DuplicateFinder;
//! use finddups::output::TextOutput;
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::with_defaults();
//! let (report, _summary) = finder.find_duplicates(Path::new(".")).unwrap();
//!
//! let output = TextOutput::new(&report);
//! output.write_to(std::io::stdout()).unwrap();
//! ```

pub mod text;

pub use text::TextOutput;

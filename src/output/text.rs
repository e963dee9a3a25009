//! Plain text report for duplicate scan results.
//!
//! # Format
//!
//! One block per [`DuplicateReason`], always in the same order:
//!
//! ```text
//! Reason: same size and hash
//!     - /data/dup1.txt
//!     - /data/dup2.txt
//!
//!
//! Reason: same name
//!     No potential duplicates found.
//!
//! ```
//!
//! Each group is followed by an empty line and each non-empty reason by
//! one more. A reason with no groups prints the "No potential duplicates
//! found." line followed by a single empty line.

use std::io;

use crate::duplicates::{DuplicateReason, DuplicateReport};

const NO_DUPLICATES: &str = "    No potential duplicates found.";

/// Text report formatter.
pub struct TextOutput<'a> {
    report: &'a DuplicateReport,
}

impl<'a> TextOutput<'a> {
    /// Create a new text formatter.
    #[must_use]
    pub fn new(report: &'a DuplicateReport) -> Self {
        Self { report }
    }

    /// Render the report without a trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        for (reason, groups) in self.report.iter() {
            lines.push(Self::header(reason));
            if groups.is_empty() {
                lines.push(format!("{NO_DUPLICATES}\n"));
                continue;
            }
            for files in groups {
                lines.extend(files.iter().map(|f| format!("    - {}", f.display())));
                lines.push(String::new());
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }

    /// Write the rendered report followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by `writer`.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "{}", self.render())?;
        writer.flush()
    }

    fn header(reason: DuplicateReason) -> String {
        format!("Reason: {reason}")
    }
}

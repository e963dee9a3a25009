//! Process exit codes.

/// Exit codes for the finddups application.
///
/// - 0: Success (report printed, whether or not duplicates were found)
/// - 1: Invalid root path, or a fatal error during the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success: the report was printed.
    Success,
    /// The root path does not exist or is not a directory.
    InvalidPath,
    /// General error: traversal or hashing failed.
    GeneralError,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::InvalidPath | Self::GeneralError => 1,
        }
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "FD000",
            Self::InvalidPath | Self::GeneralError => "FD001",
        }
    }
}

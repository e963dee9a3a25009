//! MD5 file hasher with streaming support.
//!
//! # Overview
//!
//! This module provides the [`Hasher`] struct for computing MD5 digests
//! of file contents. Files are read in [`CHUNK_SIZE`] chunks so peak
//! memory does not depend on file size.
//!
//! MD5 is used as a fast fingerprint, not for collision resistance. Two
//! files with the same digest are reported as duplicates without a
//! byte-by-byte comparison.
//!
//! # Example
//!
//! ```no_run
//! use finddups::scanner::{hash_to_hex, Hasher};
//! use std::path::Path;
//!
//! let hasher = Hasher::new();
//! let hash = hasher.full_hash(Path::new("some_file.txt")).unwrap();
//! println!("{}", hash_to_hex(&hash));
//! ```

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use md5::{Digest, Md5};

use super::HashError;

/// Size of each read when streaming a file through the digest.
pub const CHUNK_SIZE: usize = 4096;

/// A 128-bit MD5 digest.
pub type Hash = [u8; 16];

/// Streaming content hasher.
#[derive(Debug, Clone)]
pub struct Hasher {
    chunk_size: usize,
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher {
    /// Create a hasher reading [`CHUNK_SIZE`] bytes at a time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
        }
    }

    /// Chunk size used for reads.
    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Compute the MD5 digest of the entire file.
    ///
    /// The file is opened, streamed and closed within this call; the
    /// handle is released on every return path, including read errors.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the file cannot be opened or read.
    pub fn full_hash(&self, path: &Path) -> Result<Hash, HashError> {
        let mut file = File::open(path).map_err(|e| Self::map_io_error(path, e))?;
        let mut digest = Md5::new();
        let mut buffer = vec![0u8; self.chunk_size];

        loop {
            let read = match file.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Self::map_io_error(path, e)),
            };
            digest.update(&buffer[..read]);
        }

        log::trace!("Hashed {}", path.display());
        let mut hash: Hash = [0u8; 16];
        hash.copy_from_slice(&digest.finalize());
        Ok(hash)
    }

    /// Compute the digest and render it as lowercase hex.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the file cannot be opened or read.
    pub fn full_hash_hex(&self, path: &Path) -> Result<String, HashError> {
        self.full_hash(path).map(|hash| hash_to_hex(&hash))
    }

    fn map_io_error(path: &Path, error: std::io::Error) -> HashError {
        match error.kind() {
            ErrorKind::NotFound => HashError::NotFound(path.to_path_buf()),
            ErrorKind::PermissionDenied => HashError::PermissionDenied(path.to_path_buf()),
            _ => HashError::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }
}

/// Render a digest as a 32-character lowercase hex string.
#[must_use]
pub fn hash_to_hex(hash: &Hash) -> String {
    use std::fmt::Write;

    hash.iter().fold(String::with_capacity(32), |mut out, byte| {
        let _ = write!(out, "{byte:02x}");
        out
    })
}

//! Error types for checksum computation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The requested algorithm name is not one we can compute.
#[derive(Debug, Error)]
#[error("unsupported checksum algorithm: {name:?}")]
pub struct UnsupportedAlgorithm {
    pub name: String,
}

/// A read failed partway through a stream. The digest of the consumed prefix is discarded.
#[derive(Debug, Error)]
#[error("read failed after {bytes_read} bytes")]
pub struct StreamError {
    pub bytes_read: u64,
    #[source]
    pub source: io::Error,
}

/// Failure to compute a file digest.
#[derive(Debug, Error)]
pub enum ChecksumError {
    #[error(transparent)]
    UnsupportedAlgorithm(#[from] UnsupportedAlgorithm),

    #[error("file not found: {}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open {} for reading", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Mid-stream failure; never reported as a digest of the partial content.
    #[error("read {} failed after {bytes_read} bytes", .path.display())]
    ReadFailure {
        path: PathBuf,
        bytes_read: u64,
        #[source]
        source: io::Error,
    },
}

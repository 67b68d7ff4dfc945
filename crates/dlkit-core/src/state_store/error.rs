//! Error types for state persistence.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to save or restore a persisted state value.
#[derive(Debug, Error)]
pub enum StateError {
    /// No state file at the path (e.g. first run).
    #[error("no saved state at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("state I/O failed for {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize {type_tag} state")]
    Serialization {
        type_tag: &'static str,
        #[source]
        source: bincode::Error,
    },

    #[error("failed to decode state payload in {}", .path.display())]
    Deserialization {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    /// The file is not a valid state envelope (truncated, bad magic, checksum mismatch).
    #[error("corrupt state file {}: {reason}", .path.display())]
    CorruptState { path: PathBuf, reason: String },

    /// The file holds a different state type than the one requested.
    #[error("state file {} holds {found:?}, expected {expected:?}", .path.display())]
    TypeMismatch {
        path: PathBuf,
        expected: &'static str,
        found: String,
    },

    #[error(
        "state file {} has schema version {found}, expected {expected}",
        .path.display()
    )]
    VersionMismatch {
        path: PathBuf,
        expected: u32,
        found: u32,
    },

    /// A store entry name that sanitizes to nothing usable as a filename.
    #[error("invalid state name: {name:?}")]
    InvalidName { name: String },
}

impl StateError {
    pub(crate) fn io(path: &std::path::Path, source: io::Error) -> Self {
        StateError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn corrupt(path: &std::path::Path, reason: impl Into<String>) -> Self {
        StateError::CorruptState {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

//! Saved task record for a completed download.

use dlkit_core::classify::{self, FileKind, TypeHint};
use dlkit_core::format::format_bytes;
use dlkit_core::state_store::StateType;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What `dlkit record` saves. The kind is not stored; it is re-derived from the hint and name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub path: PathBuf,
    pub url: Option<String>,
    pub hint: char,
    pub size: u64,
    pub algorithm: String,
    pub digest: String,
    /// Seconds since the Unix epoch.
    pub recorded_at: u64,
}

impl StateType for TaskRecord {
    const TYPE_TAG: &'static str = "dlkit.task-record";
}

impl TaskRecord {
    /// Classify by hint, then by URL when present, else by the local file name.
    pub fn kind(&self) -> FileKind {
        let hint = TypeHint::from_char(self.hint);
        let by_path = classify::classify(hint, &self.path.to_string_lossy());
        match &self.url {
            Some(url) if by_path == FileKind::Unknown => classify::classify(hint, url),
            _ => by_path,
        }
    }

    pub fn view(&self) -> TaskRecordView<'_> {
        TaskRecordView {
            path: &self.path,
            url: self.url.as_deref(),
            kind: self.kind(),
            size: self.size,
            size_display: format_bytes(self.size),
            algorithm: &self.algorithm,
            digest: &self.digest,
            recorded_at: self.recorded_at,
        }
    }
}

/// Display form of a record (used for `show --json`).
#[derive(Debug, Serialize)]
pub struct TaskRecordView<'a> {
    pub path: &'a std::path::Path,
    pub url: Option<&'a str>,
    pub kind: FileKind,
    pub size: u64,
    pub size_display: String,
    pub algorithm: &'a str,
    pub digest: &'a str,
    pub recorded_at: u64,
}

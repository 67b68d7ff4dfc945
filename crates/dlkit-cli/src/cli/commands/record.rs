//! `dlkit record <path>` – checksum a completed download and save its task record.

use anyhow::{Context, Result};
use dlkit_core::checksum::{self, Algorithm};
use dlkit_core::format::format_bytes;
use dlkit_core::state_store::StateStore;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::cli::record::TaskRecord;

/// Inputs for `run_record`, resolved from CLI args and config.
#[derive(Debug, Clone)]
pub struct RecordRequest {
    pub path: PathBuf,
    pub name: Option<String>,
    pub url: Option<String>,
    pub hint: char,
    pub algorithm: Algorithm,
    pub buf_size: usize,
}

/// Builds the record (digest on a blocking task) and saves it. Returns the record name.
pub async fn run_record(store: &StateStore, req: RecordRequest) -> Result<String> {
    let path = std::fs::canonicalize(&req.path)
        .with_context(|| format!("resolve {}", req.path.display()))?;
    let name = match req.name {
        Some(n) => n,
        None => path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .with_context(|| format!("no file name in {}", path.display()))?,
    };

    let size = std::fs::metadata(&path)
        .with_context(|| format!("stat {}", path.display()))?
        .len();
    let algorithm = req.algorithm;
    let buf_size = req.buf_size;
    let p = path.clone();
    let digest = tokio::task::spawn_blocking(move || {
        checksum::digest_path_with_buffer(&p, algorithm, buf_size)
    })
    .await??;

    let recorded_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let record = TaskRecord {
        path,
        url: req.url,
        hint: req.hint,
        size,
        algorithm: algorithm.to_string(),
        digest,
        recorded_at,
    };
    store.save(&name, &record)?;

    println!(
        "Recorded {}: {}, {}, {} {}",
        name,
        record.kind(),
        format_bytes(record.size),
        record.algorithm,
        record.digest
    );
    Ok(name)
}

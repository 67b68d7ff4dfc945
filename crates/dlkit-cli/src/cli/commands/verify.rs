//! `dlkit verify <name>` – recompute a recorded file's checksum and compare.

use anyhow::{anyhow, bail, Result};
use dlkit_core::checksum::{self, Algorithm};
use dlkit_core::state_store::StateStore;

use crate::cli::record::TaskRecord;

/// Returns Ok only if the file still matches its recorded digest.
pub async fn run_verify(store: &StateStore, name: &str, buf_size: usize) -> Result<()> {
    let record: TaskRecord = store
        .load(name)
        .ok_or_else(|| anyhow!("no saved state for {name}"))?;
    let algorithm: Algorithm = record.algorithm.parse()?;

    let p = record.path.clone();
    let actual = tokio::task::spawn_blocking(move || {
        checksum::digest_path_with_buffer(&p, algorithm, buf_size)
    })
    .await??;

    if !actual.eq_ignore_ascii_case(&record.digest) {
        println!("MISMATCH  {}", record.path.display());
        bail!(
            "{} of {} is {}, recorded {}",
            algorithm,
            record.path.display(),
            actual,
            record.digest
        );
    }
    println!("OK  {}", record.path.display());
    Ok(())
}

//! `dlkit checksum <path>` – digest a file, optionally checking it against an expected value.

use anyhow::{bail, Result};
use dlkit_core::checksum::{self, Algorithm};
use std::path::Path;

/// Compute and print the digest of the given file. The read runs on a blocking task.
pub async fn run_checksum(
    path: &Path,
    algorithm: Algorithm,
    buf_size: usize,
    expect: Option<&str>,
) -> Result<()> {
    let p = path.to_path_buf();
    let digest = tokio::task::spawn_blocking(move || {
        checksum::digest_path_with_buffer(&p, algorithm, buf_size)
    })
    .await??;
    println!("{}  {}", digest, path.display());

    if let Some(expected) = expect {
        if !digest.eq_ignore_ascii_case(expected.trim()) {
            bail!(
                "{} mismatch for {}: expected {}",
                algorithm,
                path.display(),
                expected.trim()
            );
        }
        tracing::info!(path = %path.display(), %algorithm, "checksum verified");
    }
    Ok(())
}

//! Fixture files standing in for completed downloads.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Deterministic body of `len` bytes.
pub fn body(len: usize) -> Vec<u8> {
    (0u8..251).cycle().take(len).collect()
}

/// Write `body` to `dir/name` in `chunk`-sized writes, as a downloader would.
pub fn write_download(dir: &Path, name: &str, body: &[u8], chunk: usize) -> PathBuf {
    let path = dir.join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    for piece in body.chunks(chunk.max(1)) {
        f.write_all(piece).unwrap();
    }
    f.sync_all().unwrap();
    path
}

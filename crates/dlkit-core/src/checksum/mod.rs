//! Checksum verification of completed downloads.
//!
//! Computes digests on demand, after a download finishes, never inline with
//! the transfer. Files are streamed through a fixed-size buffer so memory use
//! is bounded regardless of file size. A read error partway through the file
//! is an error: a digest over a truncated stream is never returned.

mod algorithm;
mod error;

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub use algorithm::Algorithm;
pub use error::{ChecksumError, StreamError, UnsupportedAlgorithm};

/// Default read buffer for file digests.
pub const DEFAULT_BUF_SIZE: usize = 64 * 1024;

/// Compute the digest of `path` under the algorithm named by `algorithm`
/// (e.g. `"MD5"`, `"SHA-1"`, `"SHA-256"`), as lowercase hex.
///
/// The algorithm name is checked before the file is opened.
pub fn compute_digest(path: &Path, algorithm: &str) -> Result<String, ChecksumError> {
    let algorithm: Algorithm = algorithm.parse()?;
    digest_path(path, algorithm)
}

/// Compute the digest of `path` with the default buffer size.
pub fn digest_path(path: &Path, algorithm: Algorithm) -> Result<String, ChecksumError> {
    digest_path_with_buffer(path, algorithm, DEFAULT_BUF_SIZE)
}

/// Compute SHA-256 of a file and return the digest as lowercase hex.
pub fn sha256_path(path: &Path) -> Result<String, ChecksumError> {
    digest_path(path, Algorithm::Sha256)
}

/// Compute the digest of `path`, reading `buf_size` bytes at a time.
pub fn digest_path_with_buffer(
    path: &Path,
    algorithm: Algorithm,
    buf_size: usize,
) -> Result<String, ChecksumError> {
    let f = open_for_digest(path)?;
    digest_opened(path, f, algorithm, buf_size)
}

/// Digest an already opened `reader` for `path`; read errors become `ReadFailure` on `path`.
fn digest_opened<R: Read>(
    path: &Path,
    reader: R,
    algorithm: Algorithm,
    buf_size: usize,
) -> Result<String, ChecksumError> {
    let digest =
        digest_reader(reader, algorithm, buf_size).map_err(|e| ChecksumError::ReadFailure {
            path: path.to_path_buf(),
            bytes_read: e.bytes_read,
            source: e.source,
        })?;
    tracing::debug!(path = %path.display(), %algorithm, "computed digest");
    Ok(digest)
}

/// Recompute the digest of `path` and compare it with `expected` (hex, case-insensitive).
pub fn verify(path: &Path, algorithm: &str, expected: &str) -> Result<bool, ChecksumError> {
    let actual = compute_digest(path, algorithm)?;
    let ok = actual.eq_ignore_ascii_case(expected.trim());
    if !ok {
        tracing::warn!(
            path = %path.display(),
            algorithm,
            expected = expected.trim(),
            actual = %actual,
            "checksum mismatch"
        );
    }
    Ok(ok)
}

/// Stream `reader` to EOF through `algorithm` and return the lowercase hex digest.
///
/// `Interrupted` reads are retried. Any other read error aborts with the number
/// of bytes consumed so far. A `buf_size` of 0 is treated as 1.
pub fn digest_reader<R: Read>(
    mut reader: R,
    algorithm: Algorithm,
    buf_size: usize,
) -> Result<String, StreamError> {
    let mut hasher = algorithm.hasher();
    let mut buf = vec![0u8; buf_size.max(1)];
    let mut bytes_read: u64 = 0;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => return Err(StreamError { bytes_read, source }),
        };
        hasher.update(&buf[..n]);
        bytes_read += n as u64;
    }
    Ok(hex::encode(hasher.finalize()))
}

fn open_for_digest(path: &Path) -> Result<File, ChecksumError> {
    let f = File::open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ChecksumError::FileNotFound {
                path: path.to_path_buf(),
                source,
            }
        } else {
            ChecksumError::FileUnreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let is_dir = f
        .metadata()
        .map_err(|source| ChecksumError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        })?
        .is_dir();
    if is_dir {
        return Err(ChecksumError::FileUnreadable {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
        });
    }
    Ok(f)
}

#[cfg(test)]
mod tests;

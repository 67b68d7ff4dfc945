use super::*;
use std::io::Write;

const HELLO_SHA256: &str = "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03";

fn temp_with(content: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(content).unwrap();
    f.flush().unwrap();
    f
}

/// Yields `good` bytes in small pieces, then fails with `kind`.
struct FailingReader {
    good: Vec<u8>,
    pos: usize,
    kind: io::ErrorKind,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.good.len() {
            return Err(io::Error::new(self.kind, "device went away"));
        }
        let n = buf.len().min(7).min(self.good.len() - self.pos);
        buf[..n].copy_from_slice(&self.good[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Returns `Interrupted` before every real read.
struct InterruptingReader<R> {
    inner: R,
    interrupt_next: bool,
}

impl<R: Read> Read for InterruptingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt_next {
            self.interrupt_next = false;
            return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
        }
        self.interrupt_next = true;
        self.inner.read(buf)
    }
}

#[test]
fn sha256_path_empty_file() {
    let f = tempfile::NamedTempFile::new().unwrap();
    let digest = sha256_path(f.path()).unwrap();
    assert_eq!(
        digest,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn sha256_path_known_content() {
    let f = temp_with(b"hello\n");
    assert_eq!(sha256_path(f.path()).unwrap(), HELLO_SHA256);
}

#[test]
fn compute_digest_known_vectors() {
    let f = temp_with(b"hello\n");
    assert_eq!(
        compute_digest(f.path(), "MD5").unwrap(),
        "b1946ac92492d2347c6235b4d2611184"
    );
    assert_eq!(
        compute_digest(f.path(), "SHA-1").unwrap(),
        "f572d396fae9206628714fb2ce00f72e94f2258f"
    );
    assert_eq!(compute_digest(f.path(), "sha256").unwrap(), HELLO_SHA256);

    let empty = tempfile::NamedTempFile::new().unwrap();
    assert_eq!(
        compute_digest(empty.path(), "md5").unwrap(),
        "d41d8cd98f00b204e9800998ecf8427e"
    );
    assert_eq!(
        compute_digest(empty.path(), "sha1").unwrap(),
        "da39a3ee5e6b4b0d3255bfef95601890afd80709"
    );
}

#[test]
fn digest_is_lowercase_hex_of_expected_length() {
    let f = temp_with(b"abc");
    for alg in Algorithm::all() {
        let d = digest_path(f.path(), *alg).unwrap();
        assert_eq!(d.len(), alg.digest_len() * 2, "{alg}");
        assert!(d
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

#[test]
fn digest_is_deterministic() {
    let body: Vec<u8> = (0u8..=255).cycle().take(200_000).collect();
    let f = temp_with(&body);
    let a = compute_digest(f.path(), "SHA-256").unwrap();
    let b = compute_digest(f.path(), "SHA-256").unwrap();
    assert_eq!(a, b);
}

#[test]
fn one_byte_change_changes_digest() {
    let mut body: Vec<u8> = (0u8..=255).cycle().take(10_000).collect();
    let before = temp_with(&body);
    body[5_000] ^= 0x01;
    let after = temp_with(&body);
    for alg in Algorithm::all() {
        assert_ne!(
            digest_path(before.path(), *alg).unwrap(),
            digest_path(after.path(), *alg).unwrap(),
            "{alg}"
        );
    }
}

#[test]
fn buffer_size_does_not_affect_digest() {
    let body: Vec<u8> = (0u8..100).cycle().take(5_000).collect();
    let f = temp_with(&body);
    let reference = digest_path(f.path(), Algorithm::Sha1).unwrap();
    for size in [0, 1, 3, 1024, DEFAULT_BUF_SIZE] {
        assert_eq!(
            digest_path_with_buffer(f.path(), Algorithm::Sha1, size).unwrap(),
            reference,
            "buf_size={size}"
        );
    }
}

#[test]
fn missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.bin");
    match compute_digest(&path, "SHA-256") {
        Err(ChecksumError::FileNotFound { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn unsupported_algorithm_checked_before_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.bin");
    match compute_digest(&path, "CRC32") {
        Err(ChecksumError::UnsupportedAlgorithm(e)) => assert_eq!(e.name, "CRC32"),
        other => panic!("expected UnsupportedAlgorithm, got {other:?}"),
    }
}

#[test]
fn directory_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        compute_digest(dir.path(), "MD5"),
        Err(ChecksumError::FileUnreadable { .. })
    ));
}

#[test]
fn mid_stream_read_error_is_not_a_digest() {
    // A naive loop that stops on the first error would return the digest of
    // these 20 bytes as if the stream were complete.
    let reader = FailingReader {
        good: b"partial-content-here".to_vec(),
        pos: 0,
        kind: io::ErrorKind::Other,
    };
    let err = digest_reader(reader, Algorithm::Sha256, 1024).unwrap_err();
    assert_eq!(err.bytes_read, 20);
    assert_eq!(err.source.kind(), io::ErrorKind::Other);
}

#[test]
fn file_read_error_reports_path_and_progress() {
    let path = Path::new("/downloads/episode.mp4");
    let reader = FailingReader {
        good: b"partial-content-here".to_vec(),
        pos: 0,
        kind: io::ErrorKind::TimedOut,
    };
    match digest_opened(path, reader, Algorithm::Md5, 4) {
        Err(ChecksumError::ReadFailure {
            path: p,
            bytes_read,
            source,
        }) => {
            assert_eq!(p, path);
            assert_eq!(bytes_read, 20);
            assert_eq!(source.kind(), io::ErrorKind::TimedOut);
        }
        other => panic!("expected ReadFailure, got {other:?}"),
    }
}

#[test]
fn interrupted_reads_are_retried() {
    let body = b"hello\n".to_vec();
    let reader = InterruptingReader {
        inner: io::Cursor::new(body),
        interrupt_next: true,
    };
    assert_eq!(
        digest_reader(reader, Algorithm::Sha256, 2).unwrap(),
        HELLO_SHA256
    );
}

#[test]
fn verify_compares_case_insensitively() {
    let f = temp_with(b"hello\n");
    assert!(verify(f.path(), "SHA-256", &HELLO_SHA256.to_uppercase()).unwrap());
    assert!(verify(f.path(), "SHA-256", &format!("  {HELLO_SHA256}\n")).unwrap());
    assert!(!verify(f.path(), "SHA-256", "00").unwrap());
    assert!(!verify(f.path(), "MD5", HELLO_SHA256).unwrap());
}

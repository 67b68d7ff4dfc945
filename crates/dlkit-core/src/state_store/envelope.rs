//! On-disk envelope: magic, format version, type tag, schema version, payload checksum, payload.
//!
//! Everything is bincode (varint, little-endian). Decoding is size-limited and
//! rejects trailing bytes, so a truncated or padded file never decodes.

use std::path::Path;

use bincode::Options;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{StateError, StateType};

pub(super) const MAGIC: [u8; 4] = *b"DLST";
pub(super) const FORMAT_VERSION: u16 = 1;

/// Upper bound on a state file, envelope included.
pub const MAX_STATE_BYTES: u64 = 64 * 1024 * 1024;

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct Envelope {
    pub magic: [u8; 4],
    pub format_version: u16,
    pub type_tag: String,
    pub schema_version: u32,
    pub payload_sha256: [u8; 32],
    pub payload: Vec<u8>,
}

fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(MAX_STATE_BYTES)
        .reject_trailing_bytes()
}

/// Encode `value` as a complete state file body.
pub(super) fn encode<T: StateType>(value: &T) -> Result<Vec<u8>, StateError> {
    let serialization = |source| StateError::Serialization {
        type_tag: T::TYPE_TAG,
        source,
    };
    let payload = codec().serialize(value).map_err(serialization)?;
    let envelope = Envelope {
        magic: MAGIC,
        format_version: FORMAT_VERSION,
        type_tag: T::TYPE_TAG.to_string(),
        schema_version: T::SCHEMA_VERSION,
        payload_sha256: Sha256::digest(&payload).into(),
        payload,
    };
    codec().serialize(&envelope).map_err(serialization)
}

/// Decode a state file body read from `path` into `T`, checking every envelope field first.
pub(super) fn decode<T: StateType>(path: &Path, bytes: &[u8]) -> Result<T, StateError> {
    let envelope: Envelope = codec()
        .deserialize(bytes)
        .map_err(|e| StateError::corrupt(path, format!("invalid envelope: {e}")))?;

    if envelope.magic != MAGIC {
        return Err(StateError::corrupt(path, "bad magic"));
    }
    if envelope.format_version != FORMAT_VERSION {
        return Err(StateError::corrupt(
            path,
            format!("unsupported format version {}", envelope.format_version),
        ));
    }
    if envelope.type_tag != T::TYPE_TAG {
        return Err(StateError::TypeMismatch {
            path: path.to_path_buf(),
            expected: T::TYPE_TAG,
            found: envelope.type_tag,
        });
    }
    if envelope.schema_version != T::SCHEMA_VERSION {
        return Err(StateError::VersionMismatch {
            path: path.to_path_buf(),
            expected: T::SCHEMA_VERSION,
            found: envelope.schema_version,
        });
    }
    let actual: [u8; 32] = Sha256::digest(&envelope.payload).into();
    if actual != envelope.payload_sha256 {
        return Err(StateError::corrupt(path, "payload checksum mismatch"));
    }

    codec()
        .deserialize(&envelope.payload)
        .map_err(|source| StateError::Deserialization {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Probe {
        n: u32,
    }

    impl StateType for Probe {
        const TYPE_TAG: &'static str = "probe";
    }

    #[test]
    fn encoded_body_starts_with_magic() {
        let bytes = encode(&Probe { n: 7 }).unwrap();
        assert_eq!(&bytes[..4], b"DLST");
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let mut bytes = encode(&Probe { n: 7 }).unwrap();
        bytes.push(0);
        assert!(matches!(
            decode::<Probe>(Path::new("x"), &bytes),
            Err(StateError::CorruptState { .. })
        ));
    }

    #[test]
    fn tampered_payload_fails_checksum() {
        let body = encode(&Probe { n: 7 }).unwrap();
        let mut envelope: Envelope = codec().deserialize(&body).unwrap();
        envelope.payload[0] ^= 0xff;
        let bytes = codec().serialize(&envelope).unwrap();
        match decode::<Probe>(Path::new("x"), &bytes) {
            Err(StateError::CorruptState { reason, .. }) => {
                assert!(reason.contains("checksum"), "{reason}")
            }
            other => panic!("expected CorruptState, got {other:?}"),
        }
    }

    #[test]
    fn unknown_format_version_is_corrupt() {
        let body = encode(&Probe { n: 7 }).unwrap();
        let mut envelope: Envelope = codec().deserialize(&body).unwrap();
        envelope.format_version = FORMAT_VERSION + 1;
        let bytes = codec().serialize(&envelope).unwrap();
        assert!(matches!(
            decode::<Probe>(Path::new("x"), &bytes),
            Err(StateError::CorruptState { .. })
        ));
    }
}

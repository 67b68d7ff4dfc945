//! Persist caller-defined state values to disk and restore them later.
//!
//! A state file is a versioned, tagged binary envelope (see `envelope`). Saves
//! go to a temp file in the target directory and are renamed into place, so a
//! crashed write leaves either the previous file or none. Loads fail soft:
//! `load` returns `None` for a missing, truncated, corrupt, or foreign file.

mod envelope;
mod error;
mod name;
mod store;

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;

pub use envelope::MAX_STATE_BYTES;
pub use error::StateError;
pub use name::{entry_name, state_file_name};
pub use store::{ensure_dir, StateStore};

/// A value that can be saved by the state store.
///
/// `TYPE_TAG` is written into every file and checked on load, so a file saved
/// as one type never restores as another. Bump `SCHEMA_VERSION` when the
/// serialized shape changes; older files then load as absent.
///
/// The payload is bincode, which is not self-describing: avoid serde
/// attributes that need `deserialize_any` (untagged enums, `flatten`,
/// `skip_serializing_if`).
pub trait StateType: Serialize + DeserializeOwned {
    const TYPE_TAG: &'static str;
    const SCHEMA_VERSION: u32 = 1;
}

/// Save `value` to `path`, replacing any existing file atomically.
/// Creates the parent directory if needed.
pub fn save<T: StateType>(path: &Path, value: &T) -> Result<(), StateError> {
    let bytes = envelope::encode(value)?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| StateError::io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StateError::io(dir, e))?;
    tmp.write_all(&bytes)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| StateError::io(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| StateError::io(path, e.error))?;

    tracing::debug!(
        path = %path.display(),
        type_tag = T::TYPE_TAG,
        bytes = bytes.len(),
        "saved state"
    );
    Ok(())
}

/// Save, logging instead of returning the error. Returns whether the save succeeded.
///
/// For callers that explicitly accept losing a snapshot (e.g. periodic progress saves).
pub fn save_best_effort<T: StateType>(path: &Path, value: &T) -> bool {
    match save(path, value) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(path = %path.display(), "state not saved: {:#}", anyhow::Error::new(e));
            false
        }
    }
}

/// Restore a `T` from `path`, reporting why it could not be restored.
pub fn try_load<T: StateType>(path: &Path) -> Result<T, StateError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StateError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(StateError::io(path, e)),
    };

    let mut bytes = Vec::new();
    file.take(MAX_STATE_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| StateError::io(path, e))?;
    if bytes.len() as u64 > MAX_STATE_BYTES {
        return Err(StateError::corrupt(path, "file exceeds size limit"));
    }

    let value = envelope::decode(path, &bytes)?;
    tracing::debug!(path = %path.display(), type_tag = T::TYPE_TAG, "loaded state");
    Ok(value)
}

/// Restore a `T` from `path`, or `None` if there is no usable saved state.
///
/// A missing file is the normal first-run case and is not logged above debug;
/// any other failure is logged as a warning. Callers treat `None` exactly like
/// "no prior state".
pub fn load<T: StateType>(path: &Path) -> Option<T> {
    match try_load(path) {
        Ok(v) => Some(v),
        Err(StateError::NotFound { .. }) => {
            tracing::debug!(path = %path.display(), "no saved state");
            None
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                "ignoring unusable state: {:#}",
                anyhow::Error::new(e)
            );
            None
        }
    }
}

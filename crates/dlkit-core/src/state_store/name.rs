//! Map store entry names to state file names and back.
//!
//! Names are percent-encoded (everything but ASCII alphanumerics and `-_.~`),
//! so distinct entry names always land in distinct files and `names()` can
//! recover the original name from the file stem.

/// Extension for files written by `StateStore`.
pub const STATE_EXT: &str = "state";

/// Longest encoded name accepted, leaving room for the extension within NAME_MAX.
const MAX_NAME_BYTES: usize = 255 - STATE_EXT.len() - 1;

/// Turns an entry name (often a download's filename or URL tail) into `<encoded>.state`.
///
/// Returns `None` for the empty name, `.` and `..`, and for names whose
/// encoded form would not fit in a single path component.
pub fn state_file_name(name: &str) -> Option<String> {
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    let encoded = urlencoding::encode(name);
    if encoded.len() > MAX_NAME_BYTES {
        return None;
    }
    Some(format!("{encoded}.{STATE_EXT}"))
}

/// Inverse of [`state_file_name`] for a file stem. `None` if the stem is not
/// something `state_file_name` would have produced.
pub fn entry_name(stem: &str) -> Option<String> {
    let decoded = urlencoding::decode(stem).ok()?;
    // Non-canonical stems (`a%41`, `a b`) decode but were not written by the store.
    if urlencoding::encode(&decoded) != stem {
        return None;
    }
    Some(decoded.into_owned())
}

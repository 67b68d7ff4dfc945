//! Extension extraction and lookup tables.

use super::FileKind;

const SUBTITLE_EXTS: &[&str] = &[".srt", ".vtt", ".ssa"];
const AUDIO_EXTS: &[&str] = &[".mp3", ".wav", ".flac", ".m4a", ".opus"];
const VIDEO_EXTS: &[&str] = &[".mp4", ".mpeg", ".rm", ".rmvb", ".flv", ".webp", ".webm"];

/// Lowercased extension of a filename or URL, including the leading dot.
///
/// Drops a `?query` suffix, takes the text from the last `.`, then cuts it at
/// the first `%` (percent-encoded noise) and the first `/` (a dot earlier in
/// the path). Returns `None` if there is no dot.
pub fn file_extension(name: &str) -> Option<String> {
    let name = name.split('?').next().unwrap_or(name);
    let ext = &name[name.rfind('.')?..];
    let ext = ext.split('%').next().unwrap_or(ext);
    let ext = ext.split('/').next().unwrap_or(ext);
    Some(ext.to_ascii_lowercase())
}

/// Kind for a lowercased extension with its leading dot.
pub(super) fn kind_for_extension(ext: &str) -> FileKind {
    if SUBTITLE_EXTS.contains(&ext) {
        FileKind::Subtitle
    } else if AUDIO_EXTS.contains(&ext) {
        FileKind::Audio
    } else if VIDEO_EXTS.contains(&ext) {
        FileKind::Video
    } else {
        FileKind::Unknown
    }
}

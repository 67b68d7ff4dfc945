//! Media classification of downloaded files from a type hint and filename.
//!
//! A specific hint (video/audio/subtitle) always wins. Without one, the
//! extension of the filename (or URL) is looked up in fixed tables.

mod ext;

use std::fmt;

use serde::Serialize;

pub use ext::file_extension;

/// Media category of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Video,
    Audio,
    Subtitle,
    Unknown,
}

impl FileKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FileKind::Video => "video",
            FileKind::Audio => "audio",
            FileKind::Subtitle => "subtitle",
            FileKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied classification hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeHint {
    Video,
    Audio,
    Subtitle,
    /// No hint; classify by extension.
    #[default]
    Unspecified,
}

impl TypeHint {
    /// `v`, `a` and `s` select a kind; any other character (conventionally `?`) is `Unspecified`.
    pub fn from_char(c: char) -> Self {
        match c {
            'v' => TypeHint::Video,
            'a' => TypeHint::Audio,
            's' => TypeHint::Subtitle,
            _ => TypeHint::Unspecified,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            TypeHint::Video => 'v',
            TypeHint::Audio => 'a',
            TypeHint::Subtitle => 's',
            TypeHint::Unspecified => '?',
        }
    }
}

impl From<char> for TypeHint {
    fn from(c: char) -> Self {
        TypeHint::from_char(c)
    }
}

/// Classify `filename` (a bare name, path, or URL) with an optional hint.
pub fn classify(hint: TypeHint, filename: &str) -> FileKind {
    match hint {
        TypeHint::Video => FileKind::Video,
        TypeHint::Audio => FileKind::Audio,
        TypeHint::Subtitle => FileKind::Subtitle,
        TypeHint::Unspecified => file_extension(filename)
            .map(|e| ext::kind_for_extension(&e))
            .unwrap_or(FileKind::Unknown),
    }
}

/// `classify` with a one-character hint code.
pub fn classify_char(hint: char, filename: &str) -> FileKind {
    classify(TypeHint::from_char(hint), filename)
}

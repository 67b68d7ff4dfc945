//! Directory-rooted store of named state files (`<dir>/<name>.state`).

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::name::{entry_name, state_file_name, STATE_EXT};
use super::{StateError, StateType};

/// Create `path` as a directory if it does not exist. With `all`, missing
/// parents are created too; without it, a missing parent is an error.
pub fn ensure_dir(path: &Path, all: bool) -> io::Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    if all {
        std::fs::create_dir_all(path)
    } else {
        match std::fs::create_dir(path) {
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
            other => other,
        }
    }
}

/// Named state files under one directory. Holds no open handles and no cached values;
/// each call is an independent save or load.
#[derive(Debug, Clone)]
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    /// Default store directory: `~/.local/state/dlkit`.
    pub fn default_dir() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("dlkit")?;
        Ok(xdg_dirs.get_state_home())
    }

    /// Open the store at the default directory, creating it if needed.
    pub fn open_default() -> Result<Self> {
        let dir = Self::default_dir()?;
        Ok(Self::open(&dir)?)
    }

    /// Open a store rooted at `dir`, creating it (and parents) if needed.
    pub fn open(dir: &Path) -> Result<Self, StateError> {
        ensure_dir(dir, true).map_err(|e| StateError::io(dir, e))?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for the entry `name`.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, StateError> {
        let file = state_file_name(name).ok_or_else(|| StateError::InvalidName {
            name: name.to_string(),
        })?;
        Ok(self.dir.join(file))
    }

    pub fn save<T: StateType>(&self, name: &str, value: &T) -> Result<(), StateError> {
        super::save(&self.path_for(name)?, value)
    }

    pub fn try_load<T: StateType>(&self, name: &str) -> Result<T, StateError> {
        super::try_load(&self.path_for(name)?)
    }

    /// `None` when the entry is missing, unusable, or the name is invalid.
    pub fn load<T: StateType>(&self, name: &str) -> Option<T> {
        match self.path_for(name) {
            Ok(path) => super::load(&path),
            Err(e) => {
                tracing::warn!("{e}");
                None
            }
        }
    }

    /// Delete the entry. Returns `false` if it did not exist.
    pub fn remove(&self, name: &str) -> Result<bool, StateError> {
        let path = self.path_for(name)?;
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed state");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StateError::io(&path, e)),
        }
    }

    /// Entry names of all entries in the store, sorted. Files whose stem was
    /// not produced by [`StateStore::path_for`] are skipped.
    pub fn names(&self) -> Result<Vec<String>, StateError> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| StateError::io(&self.dir, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| StateError::io(&self.dir, e))?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(STATE_EXT) {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()).and_then(entry_name) {
                Some(name) => names.push(name),
                None => tracing::debug!(path = %path.display(), "skipping foreign file in state dir"),
            }
        }
        names.sort();
        Ok(names)
    }
}

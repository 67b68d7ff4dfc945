use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::checksum::{Algorithm, DEFAULT_BUF_SIZE};

/// Checksum defaults (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecksumConfig {
    /// Algorithm used when a command does not name one (e.g. "SHA-256", "MD5").
    pub default_algorithm: String,
    /// Read buffer size in bytes. Values below 1 are treated as 1.
    pub buffer_bytes: usize,
}

impl Default for ChecksumConfig {
    fn default() -> Self {
        Self {
            default_algorithm: Algorithm::Sha256.to_string(),
            buffer_bytes: DEFAULT_BUF_SIZE,
        }
    }
}

impl ChecksumConfig {
    /// Parsed default algorithm; an unknown name is a config error.
    pub fn algorithm(&self) -> Result<Algorithm> {
        self.default_algorithm
            .parse::<Algorithm>()
            .context("checksum.default_algorithm in config.toml")
    }

    pub fn buffer_bytes(&self) -> usize {
        self.buffer_bytes.max(1)
    }
}

/// Global configuration loaded from `~/.config/dlkit/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DlkitConfig {
    /// Directory for saved state files; defaults to `~/.local/state/dlkit`.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,
    #[serde(default)]
    pub checksum: ChecksumConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dlkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DlkitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DlkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DlkitConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/fwsum/config.toml`.
///
/// Only I/O tuning lives here; the input file and checksum window are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FwsumConfig {
    /// Chunk size in bytes used when reading the input (0 = library default).
    pub read_buffer_bytes: usize,
}

impl Default for FwsumConfig {
    fn default() -> Self {
        Self {
            read_buffer_bytes: 64 * 1024,
        }
    }
}

/// Existing `config.toml` in any XDG config dir, if there is one.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fwsum")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from `path`; a missing file yields defaults.
pub fn load_from(path: &Path) -> Result<FwsumConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(FwsumConfig::default());
    }
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FwsumConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load `path` if given, falling back to defaults with a warning when it cannot be used.
pub fn load_or_default(path: Option<&Path>) -> FwsumConfig {
    let Some(path) = path else {
        return FwsumConfig::default();
    };
    load_from(path).unwrap_or_else(|e| {
        tracing::warn!("ignoring config: {e:#}");
        FwsumConfig::default()
    })
}

/// Load configuration from the XDG config dir. Never creates the file and never fails:
/// an unresolvable XDG dir or an unreadable/malformed file yields defaults.
pub fn load() -> FwsumConfig {
    match config_path() {
        Ok(path) => load_or_default(path.as_deref()),
        Err(e) => {
            tracing::warn!("config dir unavailable ({e:#}), using defaults");
            FwsumConfig::default()
        }
    }
}

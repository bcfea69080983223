//! Global configuration loaded from `~/.config/hubfetch/config.toml`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration. Both fields are optional; the defaults cover a
/// stock GitHub CLI install downloading into `~/Downloads`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HubfetchConfig {
    /// Directory downloads land in. Defaults to `$HOME/Downloads`.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Explicit path to the `gh` binary; when unset, `gh` is looked up on PATH.
    #[serde(default)]
    pub gh_bin: Option<PathBuf>,
}

impl HubfetchConfig {
    /// Effective download directory: configured value, else `$HOME/Downloads`,
    /// else the relative `Downloads` when HOME is unset.
    pub fn effective_download_dir(&self) -> PathBuf {
        if let Some(dir) = &self.download_dir {
            return dir.clone();
        }
        match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join("Downloads"),
            None => PathBuf::from("Downloads"),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hubfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HubfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HubfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: HubfetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}

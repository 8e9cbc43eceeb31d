use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::text::DEFAULT_MAX_TEXT_LEN;

/// Environment variable that overrides the data directory (e.g. `/app/data`
/// in containers).
pub const DATA_PATH_ENV: &str = "NAVMARK_DATA_PATH";

/// Global configuration loaded from `~/.config/navmark/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
    /// Directory holding `data.json`, `users/` and `trash.json`. When unset,
    /// `~/.local/share/navmark` is used.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Owner of the public dataset shown to anonymous visitors.
    pub admin_username: String,
    /// Default number of results for `search`.
    pub search_limit: usize,
    /// Maximum length (in characters) of submitted names and descriptions.
    pub max_text_len: usize,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            admin_username: "admin".to_string(),
            search_limit: 10,
            max_text_len: DEFAULT_MAX_TEXT_LEN,
        }
    }
}

impl NavConfig {
    /// Resolves the data directory: `NAVMARK_DATA_PATH`, then `data_dir`,
    /// then the XDG data home.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(env) = std::env::var_os(DATA_PATH_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(env));
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let xdg_dirs = xdg::BaseDirectories::with_prefix("navmark")?;
        Ok(xdg_dirs.get_data_home().join("navmark"))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("navmark")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NavConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = NavConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: NavConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

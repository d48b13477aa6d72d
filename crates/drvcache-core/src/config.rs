use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::FetchOptions;

// chromedriver 2.34 supports Chrome 61-63
// electron 2.0.2 ships with Chrome 61
pub const DEFAULT_VERSION: &str = "2.34";
pub const DEFAULT_VERSION_STRING: &str =
    "ChromeDriver 2.34.522913 (36222509aa6e819815938cbf2709b4849735537c)";
pub const DEFAULT_DOWNLOAD_HOST: &str = "https://chromedriver.storage.googleapis.com";
pub const DEFAULT_CACHE_DIR_NAME: &str = ".chromedriver";

/// Driver cache configuration loaded from `~/.config/drvcache/config.toml`.
/// Every field is optional in the file; missing ones take the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Release tag used in the download URL (e.g. "2.34").
    pub version: String,
    /// Exact string `chromedriver --version` must print for the cache to be valid.
    pub version_string: String,
    /// Base URL the archive is fetched from.
    pub download_host: String,
    /// Cache subfolder under the working directory.
    pub cache_dir_name: String,
    /// Connect timeout for the archive GET, in seconds.
    pub connect_timeout_secs: u64,
    /// Overall transfer timeout in seconds (None = wait indefinitely).
    pub timeout_secs: Option<u64>,
    /// Expected SHA-256 (hex) of the archive. Checked before extraction when set.
    pub archive_sha256: Option<String>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            version_string: DEFAULT_VERSION_STRING.to_string(),
            download_host: DEFAULT_DOWNLOAD_HOST.to_string(),
            cache_dir_name: DEFAULT_CACHE_DIR_NAME.to_string(),
            connect_timeout_secs: 30,
            timeout_secs: None,
            archive_sha256: None,
        }
    }
}

impl DriverConfig {
    /// Cache directory under the working directory `cwd`.
    pub fn cache_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.cache_dir_name)
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("drvcache")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DriverConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DriverConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from(path: &Path) -> Result<DriverConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: DriverConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

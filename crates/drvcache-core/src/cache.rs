//! Driver cache manager.
//!
//! Keeps `<cwd>/.chromedriver/chromedriver[.exe]` at the expected version:
//! probe what is there, and on mismatch or absence wipe the directory,
//! download the archive, extract it and probe again. Single forward pass,
//! first error wins.

use crate::checksum;
use crate::config::DriverConfig;
use crate::error::DriverError;
use crate::extract;
use crate::fetch;
use crate::platform::Platform;
use crate::probe;
use std::fs;
use std::path::{Path, PathBuf};

/// What `ensure` did to get a working driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The cached driver already reported the expected version.
    Cached { exe: PathBuf, version: String },
    /// The cache was rebuilt from a fresh download.
    Installed { exe: PathBuf, version: String },
}

impl InstallOutcome {
    pub fn exe(&self) -> &Path {
        match self {
            InstallOutcome::Cached { exe, .. } | InstallOutcome::Installed { exe, .. } => exe,
        }
    }

    pub fn version(&self) -> &str {
        match self {
            InstallOutcome::Cached { version, .. } | InstallOutcome::Installed { version, .. } => {
                version
            }
        }
    }
}

/// A driver cache rooted under one working directory.
#[derive(Debug, Clone)]
pub struct DriverCache {
    cache_dir: PathBuf,
    driver_exe: PathBuf,
    platform: Platform,
    config: DriverConfig,
}

impl DriverCache {
    pub fn new(cwd: &Path, config: DriverConfig, platform: Platform) -> Self {
        let cache_dir = config.cache_dir(cwd);
        let driver_exe = cache_dir.join(platform.driver_file_name());
        Self {
            cache_dir,
            driver_exe,
            platform,
            config,
        }
    }

    /// Cache for the running platform.
    pub fn for_current_platform(cwd: &Path, config: DriverConfig) -> Result<Self, DriverError> {
        Ok(Self::new(cwd, config, Platform::current()?))
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn driver_exe(&self) -> &Path {
        &self.driver_exe
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn download_url(&self) -> Result<url::Url, DriverError> {
        fetch::download_url(&self.config.download_host, &self.config.version, self.platform)
    }

    /// Version the cached driver reports, or None if it is missing or broken.
    pub fn cached_version(&self) -> Option<String> {
        match probe::probe_version(&self.driver_exe) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::debug!("no usable cached chromedriver: {}", e.chain_message());
                None
            }
        }
    }

    /// Removes the cache directory. Missing directory is not an error.
    pub fn clear(&self) -> Result<(), DriverError> {
        clear_dir(&self.cache_dir)
    }

    /// Makes sure the cached driver reports `config.version_string`,
    /// downloading a fresh copy when it does not.
    pub fn ensure(&self) -> Result<InstallOutcome, DriverError> {
        let expected = self.config.version_string.as_str();

        match self.cached_version() {
            Some(current) if current == expected => {
                tracing::info!("good version found, keeping it: {}", current);
                return Ok(InstallOutcome::Cached {
                    exe: self.driver_exe.clone(),
                    version: current,
                });
            }
            Some(current) => {
                tracing::info!("found ({}) but expected ({})", current, expected);
            }
            None => tracing::info!("no chromedriver version found"),
        }

        // Bad host config must fail before the cache is touched.
        let url = self.download_url()?;

        self.clear()?;

        tracing::info!("downloading chromedriver...");
        self.create_cache_dir()?;

        tracing::info!("downloading from {}", url);
        let archive = fetch::download_to_memory(url.as_str(), &self.config.fetch_options())?;

        let digest = checksum::sha256_hex(&archive);
        tracing::debug!(bytes = archive.len(), sha256 = %digest, "chromedriver archive");
        if let Some(expected_sha) = &self.config.archive_sha256 {
            checksum::verify_sha256(&archive, expected_sha)?;
        }

        tracing::info!("extracting chromedriver...");
        let files = extract::extract_zip(&archive, &self.cache_dir)?;
        tracing::debug!(files = files.len(), "extracted into {}", self.cache_dir.display());

        let version = probe::probe_version(&self.driver_exe)
            .map_err(|e| DriverError::VerifyInstalled(Box::new(e)))?;
        tracing::info!("{}", version);
        if version != expected {
            tracing::warn!(
                "installed chromedriver reports ({}) but expected ({})",
                version,
                expected
            );
        }

        Ok(InstallOutcome::Installed {
            exe: self.driver_exe.clone(),
            version,
        })
    }

    fn create_cache_dir(&self) -> Result<(), DriverError> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder
            .create(&self.cache_dir)
            .map_err(|source| DriverError::CreateCache {
                path: self.cache_dir.clone(),
                source,
            })
    }
}

/// Removes a cache directory. Missing directory is not an error.
/// Needs no platform, so it works even where no driver build exists.
pub fn clear_dir(dir: &Path) -> Result<(), DriverError> {
    match fs::remove_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(DriverError::RemoveCache {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// Ensure the driver under `cwd` for the running platform.
pub fn ensure_driver(cwd: &Path, config: DriverConfig) -> Result<InstallOutcome, DriverError> {
    DriverCache::for_current_platform(cwd, config)?.ensure()
}

//! `drvcache clean` – remove the driver cache directory.

use anyhow::Result;
use drvcache_core::cache;
use drvcache_core::DriverConfig;
use std::path::Path;

/// Removing the cache needs only its location, not a supported platform.
pub fn run_clean(cwd: &Path, cfg: DriverConfig) -> Result<()> {
    let dir = cfg.cache_dir(cwd);
    cache::clear_dir(&dir)?;
    tracing::info!("removed {}", dir.display());
    println!("removed {}", dir.display());
    Ok(())
}

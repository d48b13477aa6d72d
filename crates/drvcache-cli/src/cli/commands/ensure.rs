//! `drvcache ensure` – install or keep the cached driver.

use anyhow::Result;
use drvcache_core::{DriverCache, DriverConfig, InstallOutcome};
use std::path::Path;

/// Run the cache check/install and print the driver path.
pub fn run_ensure(cwd: &Path, cfg: DriverConfig) -> Result<()> {
    let cache = DriverCache::for_current_platform(cwd, cfg)?;
    let outcome = cache.ensure()?;
    let how = match outcome {
        InstallOutcome::Cached { .. } => "cached",
        InstallOutcome::Installed { .. } => "installed",
    };
    tracing::info!("chromedriver {}: {}", how, outcome.exe().display());
    println!("{}", outcome.exe().display());
    Ok(())
}

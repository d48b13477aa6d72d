//! `drvcache version` – what the cached driver reports.

use anyhow::Result;
use drvcache_core::{DriverCache, DriverConfig};
use std::path::Path;

fn describe(cache: &DriverCache) -> String {
    match cache.cached_version() {
        Some(v) if v == cache.config().version_string => v,
        Some(v) => format!("{} (outdated)", v),
        None => format!("not installed ({})", cache.driver_exe().display()),
    }
}

pub fn run_version(cwd: &Path, cfg: DriverConfig) -> Result<()> {
    let cache = DriverCache::for_current_platform(cwd, cfg)?;
    println!("{}", describe(&cache));
    Ok(())
}

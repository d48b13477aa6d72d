//! `drvcache url` – print the archive URL for a platform.

use anyhow::Result;
use drvcache_core::fetch;
use drvcache_core::{DriverConfig, Platform};

fn render_url(platform: Option<&str>, cfg: &DriverConfig) -> Result<String> {
    let platform = match platform {
        Some(os) => Platform::from_os(os)?,
        None => Platform::current()?,
    };
    let url = fetch::download_url(&cfg.download_host, &cfg.version, platform)?;
    Ok(url.to_string())
}

pub fn run_url(platform: Option<&str>, cfg: &DriverConfig) -> Result<()> {
    println!("{}", render_url(platform, cfg)?);
    Ok(())
}

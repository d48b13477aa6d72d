//! CLI for the chromedriver cache.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use drvcache_core::config::{self, DriverConfig};
use std::path::{Path, PathBuf};

use commands::{run_clean, run_ensure, run_url, run_version};

/// Top-level CLI for the chromedriver cache.
#[derive(Debug, Parser)]
#[command(name = "drvcache")]
#[command(about = "Fetch, cache and version-check chromedriver", long_about = None)]
pub struct Cli {
    /// Load this TOML config instead of ~/.config/drvcache/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Make sure the cached driver reports the expected version, downloading it if not.
    Ensure {
        /// Working directory holding the cache (default: current directory).
        #[arg(long, value_name = "DIR")]
        cwd: Option<PathBuf>,
    },

    /// Print the version the cached driver reports.
    Version {
        /// Working directory holding the cache (default: current directory).
        #[arg(long, value_name = "DIR")]
        cwd: Option<PathBuf>,
    },

    /// Print the archive download URL.
    Url {
        /// OS identifier (windows, linux, macos); default is the running OS.
        #[arg(long, value_name = "OS")]
        platform: Option<String>,
    },

    /// Remove the driver cache directory.
    Clean {
        /// Working directory holding the cache (default: current directory).
        #[arg(long, value_name = "DIR")]
        cwd: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> Result<DriverConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

fn resolve_cwd(cwd: Option<PathBuf>) -> Result<PathBuf> {
    match cwd {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Ensure { cwd } => run_ensure(&resolve_cwd(cwd)?, cfg)?,
            CliCommand::Version { cwd } => run_version(&resolve_cwd(cwd)?, cfg)?,
            CliCommand::Url { platform } => run_url(platform.as_deref(), &cfg)?,
            CliCommand::Clean { cwd } => run_clean(&resolve_cwd(cwd)?, cfg)?,
        }

        Ok(())
    }
}

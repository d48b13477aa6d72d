//! Logging init: file under XDG state dir, or graceful fallback to stderr.

use anyhow::Result;
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

// Covers both the `drvcache` binary and `drvcache_core` (targets match by prefix).
const DEFAULT_FILTER: &str = "info,drvcache=debug";

/// Hands out clones of the log file; a failed clone degrades that event to stderr.
struct LogFile(File);

enum LogSink {
    File(File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or(LogSink::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Single subscriber setup shared by the file and stderr paths.
fn install(writer: BoxMakeWriter) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install tracing subscriber: {}", e))
}

/// Log to `~/.local/state/drvcache/drvcache.log` and return that path.
/// Errors (unwritable state dir, subscriber already set) leave the choice of fallback to the caller.
pub fn init_logging() -> Result<PathBuf> {
    let log_dir = xdg::BaseDirectories::with_prefix("drvcache")?.get_state_home();
    fs::create_dir_all(&log_dir)?;
    let log_file_path = log_dir.join("drvcache.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;
    install(BoxMakeWriter::new(LogFile(file)))?;

    tracing::info!("drvcache logging initialized at {}", log_file_path.display());
    Ok(log_file_path)
}

/// Log to stderr only. Used when `init_logging` fails so the CLI keeps going.
pub fn init_logging_stderr() {
    let _ = install(BoxMakeWriter::new(io::stderr));
}

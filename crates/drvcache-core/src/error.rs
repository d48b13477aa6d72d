//! Error taxonomy for the driver cache.
//!
//! Every variant names the step that failed; the first error aborts the whole
//! install, nothing is retried.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// The driver could not be spawned (missing, not executable).
    #[error("getting chromedriver version from {}", .path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The driver ran but exited unsuccessfully.
    #[error("getting chromedriver version from {}: {status}: {output}", .path.display())]
    ProbeStatus {
        path: PathBuf,
        status: std::process::ExitStatus,
        output: String,
    },

    #[error("removing chromedriver cache {}", .path.display())]
    RemoveCache {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("making chromedriver cache {}", .path.display())]
    CreateCache {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid download URL {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("downloading chromedriver from {url}")]
    Network {
        url: String,
        #[source]
        source: curl::Error,
    },

    #[error("got HTTP {code} when trying to download {url}")]
    HttpStatus { code: u32, url: String },

    #[error("opening chromedriver zip")]
    Archive(#[source] zip::result::ZipError),

    #[error("opening entry {name} in chromedriver zip")]
    ArchiveEntry {
        name: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("chromedriver zip entry {name} escapes the cache directory")]
    UnsafeEntryPath { name: String },

    #[error("creating chromedriver entry file {}", .path.display())]
    CreateEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("writing chromedriver entry file {}", .path.display())]
    WriteEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("chromedriver archive checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// The freshly extracted driver could not report its version. Never folded
    /// into "no cached version"; callers treat it as fatal.
    #[error("verifying installed chromedriver")]
    VerifyInstalled(#[source] Box<DriverError>),
}

impl DriverError {
    /// True when the error came from the post-install version check.
    pub fn is_fatal_verify(&self) -> bool {
        matches!(self, DriverError::VerifyInstalled(_))
    }

    /// Display of this error followed by each source, joined with ": ".
    pub fn chain_message(&self) -> String {
        let mut msg = self.to_string();
        let mut cur = std::error::Error::source(self);
        while let Some(e) = cur {
            msg.push_str(": ");
            msg.push_str(&e.to_string());
            cur = e.source();
        }
        msg
    }
}

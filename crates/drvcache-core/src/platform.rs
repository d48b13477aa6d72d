//! Platform selection: archive suffix and executable extension per OS.

use crate::error::DriverError;
use std::fmt;

/// Base file name of the driver executable, without extension.
pub const DRIVER_NAME: &str = "chromedriver";

/// Operating systems chromedriver archives are published for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    Mac,
}

impl Platform {
    /// Map an OS identifier (`std::env::consts::OS` style; `darwin` is accepted too).
    pub fn from_os(os: &str) -> Result<Self, DriverError> {
        match os.trim().to_ascii_lowercase().as_str() {
            "windows" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            "macos" | "darwin" => Ok(Platform::Mac),
            other => Err(DriverError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Platform of the running process.
    pub fn current() -> Result<Self, DriverError> {
        Self::from_os(std::env::consts::OS)
    }

    /// Suffix in `chromedriver_<suffix>.zip`.
    pub fn archive_suffix(self) -> &'static str {
        match self {
            Platform::Windows => "win32",
            Platform::Linux => "linux64",
            Platform::Mac => "mac64",
        }
    }

    pub fn exe_extension(self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            Platform::Linux | Platform::Mac => "",
        }
    }

    /// `chromedriver` or `chromedriver.exe`.
    pub fn driver_file_name(self) -> String {
        format!("{}{}", DRIVER_NAME, self.exe_extension())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::Mac => "macos",
        };
        f.write_str(s)
    }
}

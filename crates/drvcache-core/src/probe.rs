//! Version probe: run the driver with `--version` and read back what it prints.

use crate::error::DriverError;
use std::path::Path;
use std::process::Command;

/// Runs `exe --version` and returns its combined output (stdout then stderr), trimmed.
///
/// Spawn failure and unsuccessful exit are both errors; the caller decides
/// whether that means "not installed" or something fatal.
pub fn probe_version(exe: &Path) -> Result<String, DriverError> {
    let output = Command::new(exe)
        .arg("--version")
        .output()
        .map_err(|source| DriverError::Probe {
            path: exe.to_path_buf(),
            source,
        })?;

    let mut combined = output.stdout;
    combined.extend_from_slice(&output.stderr);
    let text = String::from_utf8_lossy(&combined).trim().to_string();

    if !output.status.success() {
        return Err(DriverError::ProbeStatus {
            path: exe.to_path_buf(),
            status: output.status,
            output: text,
        });
    }

    Ok(text)
}

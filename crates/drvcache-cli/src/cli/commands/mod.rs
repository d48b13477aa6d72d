//! CLI command handlers, one per file.

mod clean;
mod ensure;
mod url;
mod version;

pub use clean::run_clean;
pub use ensure::run_ensure;
pub use url::run_url;
pub use version::run_version;

// Tests that spawn processes run one at a time so a freshly written fake
// driver is never exec'd while another thread holds it open (ETXTBSY).
#[cfg(test)]
pub(crate) static SPAWN_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(all(test, unix))]
pub(crate) fn seed_driver(exe: &std::path::Path, version: &str) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::create_dir_all(exe.parent().unwrap()).unwrap();
    std::fs::write(exe, format!("#!/bin/sh\necho \"{}\"\n", version)).unwrap();
    std::fs::set_permissions(exe, std::fs::Permissions::from_mode(0o755)).unwrap();
}

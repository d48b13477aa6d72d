//! Fake chromedriver archives and cache seeding.

use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;

pub const GOOD_VERSION: &str =
    "ChromeDriver 2.34.522913 (36222509aa6e819815938cbf2709b4849735537c)";
pub const OLD_VERSION: &str = "ChromeDriver 2.30.477691 (6ee44a7247c639c0703f291d320bdf05c1531b57)";

/// Shell script that prints `version` like `chromedriver --version` would.
pub fn driver_script(version: &str) -> Vec<u8> {
    format!("#!/bin/sh\necho \"{}\"\n", version).into_bytes()
}

/// Zip holding a single `chromedriver` entry with the given unix mode.
pub fn driver_zip(version: &str, mode: u32) -> Vec<u8> {
    let mut w = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let opts = SimpleFileOptions::default().unix_permissions(mode);
    w.start_file("chromedriver", opts).unwrap();
    w.write_all(&driver_script(version)).unwrap();
    w.finish().unwrap().into_inner()
}

/// Writes an executable fake driver at `exe`, creating its directory.
#[cfg(unix)]
pub fn seed_driver(exe: &Path, version: &str) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::create_dir_all(exe.parent().unwrap()).unwrap();
    std::fs::write(exe, driver_script(version)).unwrap();
    std::fs::set_permissions(exe, std::fs::Permissions::from_mode(0o755)).unwrap();
}

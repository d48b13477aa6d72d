//! Zip extraction into the driver cache, preserving each entry's file mode.

use crate::error::DriverError;
use std::fs::{self, File};
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

/// Mode applied on unix when the archive entry carries none.
#[cfg(unix)]
const DEFAULT_FILE_MODE: u32 = 0o644;

/// Extracts every entry of the in-memory zip `bytes` under `dest`.
/// Returns the paths of the files written, in archive order.
pub fn extract_zip(bytes: &[u8], dest: &Path) -> Result<Vec<PathBuf>, DriverError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(DriverError::Archive)?;
    let mut written = Vec::with_capacity(archive.len());

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|source| DriverError::ArchiveEntry {
                name: format!("#{}", i),
                source,
            })?;
        let name = entry.name().to_string();
        let rel = entry
            .enclosed_name()
            .ok_or_else(|| DriverError::UnsafeEntryPath { name: name.clone() })?;
        let out_path = dest.join(rel);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|source| DriverError::CreateEntry {
                path: out_path.clone(),
                source,
            })?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|source| DriverError::CreateEntry {
                path: out_path.clone(),
                source,
            })?;
        }

        let mut out = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&out_path)
            .map_err(|source| DriverError::CreateEntry {
                path: out_path.clone(),
                source,
            })?;
        io::copy(&mut entry, &mut out).map_err(|source| DriverError::WriteEntry {
            path: out_path.clone(),
            source,
        })?;
        // Close before chmod so the file can be exec'd right after.
        drop(out);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = entry.unix_mode().map(|m| m & 0o7777).unwrap_or(DEFAULT_FILE_MODE);
            fs::set_permissions(&out_path, fs::Permissions::from_mode(mode)).map_err(
                |source| DriverError::WriteEntry {
                    path: out_path.clone(),
                    source,
                },
            )?;
        }

        tracing::debug!(entry = %name, "extracted {}", out_path.display());
        written.push(out_path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn zip_with(entries: &[(&str, &[u8], u32)]) -> Vec<u8> {
        let mut w = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data, mode) in entries {
            let opts = SimpleFileOptions::default().unix_permissions(*mode);
            w.start_file(*name, opts).unwrap();
            w.write_all(data).unwrap();
        }
        w.finish().unwrap().into_inner()
    }

    #[test]
    fn extracts_all_entries() {
        let bytes = zip_with(&[("a.txt", b"alpha", 0o644), ("sub/b.txt", b"beta", 0o644)]);
        let dir = tempfile::tempdir().unwrap();
        let written = extract_zip(&bytes, dir.path()).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(fs::read(dir.path().join("a.txt")).unwrap(), b"alpha");
        assert_eq!(fs::read(dir.path().join("sub/b.txt")).unwrap(), b"beta");
    }

    #[cfg(unix)]
    #[test]
    fn preserves_unix_mode() {
        use std::os::unix::fs::PermissionsExt;
        let bytes = zip_with(&[("chromedriver", b"bin", 0o755), ("notes", b"txt", 0o600)]);
        let dir = tempfile::tempdir().unwrap();
        extract_zip(&bytes, dir.path()).unwrap();
        let exe = fs::metadata(dir.path().join("chromedriver")).unwrap();
        assert_eq!(exe.permissions().mode() & 0o777, 0o755);
        let notes = fs::metadata(dir.path().join("notes")).unwrap();
        assert_eq!(notes.permissions().mode() & 0o777, 0o600);
    }

    #[test]
    fn garbage_is_archive_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_zip(b"definitely not a zip file", dir.path()).unwrap_err();
        assert!(matches!(err, DriverError::Archive(_)), "got {:?}", err);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn rejects_entries_escaping_dest() {
        let bytes = zip_with(&[("../evil", b"x", 0o644)]);
        let dir = tempfile::tempdir().unwrap();
        let err = extract_zip(&bytes, dir.path()).unwrap_err();
        assert!(matches!(err, DriverError::UnsafeEntryPath { ref name } if name == "../evil"));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"a much longer stale body").unwrap();
        let bytes = zip_with(&[("a.txt", b"new", 0o644)]);
        extract_zip(&bytes, dir.path()).unwrap();
        assert_eq!(fs::read(dir.path().join("a.txt")).unwrap(), b"new");
    }
}

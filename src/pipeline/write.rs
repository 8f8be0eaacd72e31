//! Output stage: replace the destination file atomically.
//!
//! The module is written to a [`NamedTempFile`] created next to the target
//! and then renamed over it. Readers see either the old file or the new one,
//! never a truncated write. If anything fails before the rename the temp file
//! is unlinked when it is dropped.

use crate::error::Font2JsError;
use std::fs::Permissions;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Write `contents` to `path`, creating or replacing it.
///
/// The parent directory must already exist; it is not created. Returns the
/// number of bytes written.
pub fn write_atomic(path: &Path, contents: &str) -> Result<u64, Font2JsError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(Font2JsError::OutputDirMissing {
            path: dir.to_path_buf(),
        });
    }

    let write_err = |source: std::io::Error| Font2JsError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".font2js-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => Font2JsError::OutputDirMissing {
                path: dir.to_path_buf(),
            },
            _ => write_err(e),
        })?;
    debug!("Writing via temp file {}", tmp.path().display());

    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    if let Some(perms) = target_permissions(path) {
        tmp.as_file().set_permissions(perms).map_err(write_err)?;
    }

    persist(tmp, path).map_err(write_err)?;
    Ok(contents.len() as u64)
}

fn persist(tmp: NamedTempFile, path: &Path) -> std::io::Result<()> {
    tmp.persist(path).map(|_| ()).map_err(|e| e.error)
}

/// Permissions for the replacement file: those of the existing target, or
/// the usual `0o644` for a new one. `None` keeps the platform default.
fn target_permissions(path: &Path) -> Option<Permissions> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Some(meta.permissions()),
        _ => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn leftover_temp_files(dir: &Path) -> Vec<String> {
        std::fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|n| n.starts_with(".font2js-"))
            .collect()
    }

    #[test]
    fn creates_new_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("font.js");

        let n = write_atomic(&path, "export const A = \"B\";\n").unwrap();
        assert_eq!(n, 22);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "export const A = \"B\";\n");
        assert!(leftover_temp_files(dir.path()).is_empty());
    }

    #[test]
    fn replaces_existing_file_completely() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("font.js");
        std::fs::write(&path, "a much longer previous body that must not survive\n").unwrap();

        write_atomic(&path, "short\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn missing_directory_is_reported_and_not_created() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no/such/dir");
        let err = write_atomic(&missing.join("font.js"), "x").unwrap_err();

        assert!(
            matches!(err, Font2JsError::OutputDirMissing { ref path } if path == &missing),
            "got: {err:?}"
        );
        assert!(!missing.exists());
    }

    #[test]
    fn target_that_is_a_directory_fails_without_leftovers() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("font.js");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), "x").unwrap();

        let err = write_atomic(&target, "x").unwrap_err();
        assert!(matches!(err, Font2JsError::OutputWriteFailed { .. }), "got: {err:?}");
        assert!(leftover_temp_files(dir.path()).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn new_file_gets_0644() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("font.js");
        write_atomic(&path, "x").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn existing_mode_is_preserved() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("font.js");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, Permissions::from_mode(0o640)).unwrap();

        write_atomic(&path, "new").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }
}

use std::fs::Permissions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::error::AppError;

/// Write `path` atomically.
///
/// Content goes to a temporary file in the destination directory, which is
/// renamed over `path` only after `write` succeeds and the data is flushed.
/// On any failure the temporary file is removed and `path` is untouched.
///
/// A replaced file keeps its permissions; a new one gets the usual
/// `0o666` minus umask rather than the owner-only mode of a temp file.
pub fn write_atomic<F>(path: &Path, write: F) -> Result<(), AppError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), AppError>,
{
    let io_err = |source| AppError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let existing = std::fs::metadata(path).ok().map(|m| m.permissions());
    let mut tmp = create_temp(dir, existing.as_ref()).map_err(io_err)?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write(&mut writer)?;
        writer.flush().map_err(io_err)?;
    }
    tmp.as_file().sync_all().map_err(io_err)?;

    tmp.persist(path).map_err(|e| io_err(e.error))?;
    tracing::debug!(path = %path.display(), "persisted output");
    Ok(())
}

#[cfg(unix)]
fn create_temp(dir: &Path, existing: Option<&Permissions>) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    let tmp = Builder::new()
        .permissions(Permissions::from_mode(0o666))
        .tempfile_in(dir)?;
    // Not masked by umask, so a replaced file keeps its exact mode
    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms.clone())?;
    }
    Ok(tmp)
}

#[cfg(not(unix))]
fn create_temp(dir: &Path, existing: Option<&Permissions>) -> io::Result<NamedTempFile> {
    let tmp = Builder::new().tempfile_in(dir)?;
    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms.clone())?;
    }
    Ok(tmp)
}

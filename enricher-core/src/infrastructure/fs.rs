use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

/// Create the parent directory of `path`, with intermediate directories.
///
/// Succeeds when the directory already exists. A bare file name has nothing
/// to create.
pub fn ensure_parent_dir(path: &Path) -> Result<(), InfrastructureError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| InfrastructureError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

/// Write content to a file atomically using a temporary file.
///
/// The temporary file is created next to the target so the final rename
/// stays on one filesystem. The target is either fully replaced or left as
/// it was.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_error = |source: std::io::Error| InfrastructureError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Replacing a file keeps its mode, a new file gets the umask default
    let existing = fs::metadata(path).ok().map(|meta| meta.permissions());
    let mut builder = tempfile::Builder::new();
    if existing.is_none() {
        default_file_permissions(&mut builder);
    }
    let mut temp_file = builder.tempfile_in(parent).map_err(write_error)?;
    if let Some(permissions) = existing {
        temp_file
            .as_file()
            .set_permissions(permissions)
            .map_err(write_error)?;
    }

    temp_file.write_all(content.as_ref()).map_err(write_error)?;

    // Atomic rename (persist)
    temp_file.persist(path).map_err(|e| write_error(e.error))?;

    Ok(())
}

/// `0o666`, masked by the process umask when the file is opened.
#[cfg(unix)]
fn default_file_permissions(builder: &mut tempfile::Builder<'_, '_>) {
    use std::os::unix::fs::PermissionsExt;
    builder.permissions(fs::Permissions::from_mode(0o666));
}

#[cfg(not(unix))]
fn default_file_permissions(_builder: &mut tempfile::Builder<'_, '_>) {}

/// Absolute form of `path` with `.` and `..` removed lexically.
///
/// Symlinks are not resolved and the path does not need to exist.
pub fn absolute_path(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                }
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

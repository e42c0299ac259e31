//! Filesystem helpers.
//!
//! Thin wrappers over `std::fs` that separate "the thing is absent", which is
//! an expected outcome, from unexpected I/O failures. Unexpected failures
//! carry the path they occurred on.

use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::consts::COPIED_FILE_MODE;

/// Error during filesystem operations.
#[derive(Debug, Error)]
pub enum FsError {
  #[error("mkdir {path}: {source}")]
  CreateDir {
    path: String,
    #[source]
    source: io::Error,
  },

  #[error("no such file: {0}")]
  SourceNotFound(String),

  #[error("no such dest directory: {0}")]
  DestDirNotFound(String),

  #[error("failed to read metadata for {path}: {source}")]
  Metadata {
    path: String,
    #[source]
    source: io::Error,
  },

  #[error("failed to read {path}: {source}")]
  Read {
    path: String,
    #[source]
    source: io::Error,
  },

  #[error("failed to write {path}: {source}")]
  Write {
    path: String,
    #[source]
    source: io::Error,
  },

  #[error("failed to set permissions on {path}: {source}")]
  SetPermissions {
    path: String,
    #[source]
    source: io::Error,
  },
}

/// Create `path` and any missing parents.
///
/// Does nothing if `path` already exists, whatever it is. Newly created
/// directories get `mode` (before the umask) on Unix; other platforms ignore it.
pub fn mkdir_all(path: &Path, mode: u32) -> Result<(), FsError> {
  if std::fs::metadata(path).is_ok() {
    return Ok(());
  }

  debug!(path = ?path, mode = %format!("{mode:o}"), "creating directory");

  let mut builder = std::fs::DirBuilder::new();
  builder.recursive(true);

  #[cfg(unix)]
  {
    use std::os::unix::fs::DirBuilderExt;
    builder.mode(mode);
  }
  #[cfg(not(unix))]
  let _ = mode;

  builder.create(path).map_err(|e| FsError::CreateDir {
    path: path.display().to_string(),
    source: e,
  })
}

/// Copy the contents of `src` to `dest`.
///
/// `dest` is overwritten if it exists and ends up with mode 0644 on Unix. The
/// parent directory of `dest` must already exist. A destination that was
/// partially written before a failure is left in place.
pub fn copy_file(src: &Path, dest: &Path) -> Result<(), FsError> {
  let dest_dir = match dest.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };

  if let Err(e) = std::fs::metadata(src) {
    if e.kind() == io::ErrorKind::NotFound {
      return Err(FsError::SourceNotFound(src.display().to_string()));
    }
    return Err(FsError::Metadata {
      path: src.display().to_string(),
      source: e,
    });
  }

  if let Err(e) = std::fs::metadata(dest_dir) {
    if e.kind() == io::ErrorKind::NotFound {
      return Err(FsError::DestDirNotFound(dest_dir.display().to_string()));
    }
    return Err(FsError::Metadata {
      path: dest_dir.display().to_string(),
      source: e,
    });
  }

  debug!(src = ?src, dest = ?dest, "copying file");

  let data = std::fs::read(src).map_err(|e| FsError::Read {
    path: src.display().to_string(),
    source: e,
  })?;

  std::fs::write(dest, data).map_err(|e| FsError::Write {
    path: dest.display().to_string(),
    source: e,
  })?;

  set_copied_mode(dest)
}

#[cfg(unix)]
fn set_copied_mode(path: &Path) -> Result<(), FsError> {
  use std::os::unix::fs::PermissionsExt;

  std::fs::set_permissions(path, std::fs::Permissions::from_mode(COPIED_FILE_MODE)).map_err(|e| {
    FsError::SetPermissions {
      path: path.display().to_string(),
      source: e,
    }
  })
}

#[cfg(not(unix))]
fn set_copied_mode(_path: &Path) -> Result<(), FsError> {
  let _ = COPIED_FILE_MODE;
  Ok(())
}

/// Check whether `path` exists.
///
/// Returns `Ok(false)` only when the path is definitely absent. Any other stat
/// failure (permission denied, a file used as a directory, ...) means the
/// answer is unknown and is returned as an error.
pub fn file_exists(path: &Path) -> Result<bool, FsError> {
  match std::fs::metadata(path) {
    Ok(_) => Ok(true),
    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
    Err(e) => Err(FsError::Metadata {
      path: path.display().to_string(),
      source: e,
    }),
  }
}

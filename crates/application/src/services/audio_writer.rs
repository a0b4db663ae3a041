//! Audio writer - persists synthesized audio to disk
//!
//! Bytes go to a temporary file next to the destination and are renamed
//! into place only after a complete write, so a failed write never leaves
//! a truncated file behind and never clobbers an existing one.
//!
//! A symlinked destination is resolved first and its target is replaced,
//! keeping the link itself. The target's permissions carry over to the new
//! file; ownership and extra hard links do not.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::ApplicationError;

/// Writes audio bytes to an output path
#[derive(Debug, Clone, Default)]
pub struct AudioWriter;

impl AudioWriter {
    /// Create a new audio writer
    pub const fn new() -> Self {
        Self
    }

    /// Write `data` to `path`, replacing any existing file
    ///
    /// The parent directory must already exist.
    ///
    /// # Returns
    ///
    /// The number of bytes written.
    #[instrument(skip(self, data), fields(path = %path.display(), size = data.len()))]
    pub async fn write(&self, path: &Path, data: Vec<u8>) -> Result<u64, ApplicationError> {
        let target = path.to_path_buf();

        let result = tokio::task::spawn_blocking(move || write_atomic(&target, &data))
            .await
            .map_err(|e| ApplicationError::FileWriteFailed {
                path: path.to_path_buf(),
                source: io::Error::other(e),
            })?;

        let size = result.map_err(|source| ApplicationError::FileWriteFailed {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(size, "Audio written");
        Ok(size)
    }
}

/// Directory that holds `path`, defaulting to the working directory
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Follow symlinks to the file that is actually replaced
///
/// A destination that does not exist yet (or a dangling link) is used as given.
fn resolve_target(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn write_atomic(path: &Path, data: &[u8]) -> io::Result<u64> {
    let target = resolve_target(path);

    let mut builder = tempfile::Builder::new();
    builder.prefix(".text2speech-").suffix(".part");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }

    let mut temp = builder.tempfile_in(parent_dir(&target))?;
    temp.write_all(data)?;
    if let Some(existing) = std::fs::metadata(&target)
        .ok()
        .filter(std::fs::Metadata::is_file)
    {
        temp.as_file().set_permissions(existing.permissions())?;
    }
    temp.as_file().sync_all()?;
    temp.persist(&target).map_err(|e| e.error)?;

    Ok(data.len() as u64)
}

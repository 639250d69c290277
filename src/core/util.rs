//! File primitives

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::core::error::{FixupError, Result};

/// Read a whole source file as UTF-8
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| FixupError::io(path, e))
}

/// Replace a file's contents atomically
///
/// Content goes to a temp file in the same directory which is then renamed
/// over `path`, so readers see either the old or the new text. The original
/// permissions are carried over. Symlinks are resolved first so the link's
/// target is replaced and the link itself survives.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let path = resolved.as_path();

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let permissions = fs::metadata(path).map(|m| m.permissions()).ok();

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| FixupError::io(parent, e))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| FixupError::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| FixupError::io(tmp.path(), e))?;

    if let Some(permissions) = permissions {
        fs::set_permissions(tmp.path(), permissions).map_err(|e| FixupError::io(tmp.path(), e))?;
    }

    tmp.persist(path).map_err(|e| FixupError::io(path, e.error))?;
    Ok(())
}

//! Path normalization utilities
//!
//! Source files are identified by their path relative to the project root,
//! always rendered with '/' as separator.

use std::path::{Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<PathBuf> {
    path.strip_prefix(root).ok().map(Path::to_path_buf)
}

/// Validate that a path is within the root directory
pub fn is_within_root(path: &Path, root: &Path) -> bool {
    path.canonicalize()
        .ok()
        .and_then(|p| root.canonicalize().ok().map(|r| p.starts_with(r)))
        .unwrap_or(false)
}

/// Project root for an installed tool: the parent of the directory holding it
///
/// `<project>/tools/fixup-headers` resolves to `<project>`.
pub fn project_root_from_exe(exe: &Path) -> Option<PathBuf> {
    exe.parent().and_then(Path::parent).map(Path::to_path_buf)
}

/// Default scan directory under a project root
pub fn default_target_dir(root: &Path) -> PathBuf {
    root.join("src")
}

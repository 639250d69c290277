//! Source set scanning backend
//!
//! Uses walkdir to collect every C++ source file under a directory

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::{FixupError, Result};
use crate::core::paths::make_relative;

/// Recognized source suffixes: header, source, template header
pub const SOURCE_EXTENSIONS: [&str; 3] = ["hpp", "cpp", "tpp"];

/// Whether a file name carries one of the recognized suffixes
pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SOURCE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Collect all source files under `dir`, relative to `root`
///
/// The root-relative path is the canonical identity of a file for the
/// rest of the run. Every directory is descended into; nothing is ignored.
pub fn scan_source_files(root: &Path, dir: &Path) -> Result<BTreeSet<PathBuf>> {
    let mut sources = BTreeSet::new();

    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry?;

        if !entry.file_type().is_file() || !is_source_file(entry.path()) {
            continue;
        }

        let canonical = make_relative(entry.path(), root).ok_or_else(|| {
            FixupError::OutsideRoot {
                path: entry.path().to_path_buf(),
                root: root.to_path_buf(),
            }
        })?;
        sources.insert(canonical);
    }

    Ok(sources)
}

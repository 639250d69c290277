//! Run configuration
//!
//! The project root is resolved once, at the CLI entry point, and passed
//! explicitly to the scanner and rewriter from there on.

use std::path::{Path, PathBuf};

use crate::core::error::{FixupError, Result};
use crate::core::paths::{default_target_dir, is_within_root};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Canonical project root; discovered files are stored relative to it
    pub root: PathBuf,
    /// Canonical directory to scan
    pub target_dir: PathBuf,
}

impl ProjectConfig {
    /// Validate and canonicalize a root/target pair
    ///
    /// `target_dir` defaults to `<root>/src`. Nothing is scanned here; a bad
    /// target is rejected before any file is touched.
    pub fn new(root: &Path, target_dir: Option<&Path>) -> Result<Self> {
        let root = root
            .canonicalize()
            .map_err(|e| FixupError::io(root, e))?;

        let target_dir = match target_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_target_dir(&root),
        };
        if !target_dir.is_dir() {
            return Err(FixupError::InvalidTargetDir(target_dir));
        }
        let target_dir = target_dir
            .canonicalize()
            .map_err(|e| FixupError::io(&target_dir, e))?;

        if !is_within_root(&target_dir, &root) {
            return Err(FixupError::OutsideRoot {
                path: target_dir,
                root,
            });
        }

        Ok(Self { root, target_dir })
    }

    /// Absolute location of a canonical (root-relative) source path
    pub fn resolve(&self, canonical: &Path) -> PathBuf {
        self.root.join(canonical)
    }
}

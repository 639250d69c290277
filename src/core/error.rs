//! Error types for the fixup pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixupError {
    #[error("Invalid target directory: {}", .0.display())]
    InvalidTargetDir(PathBuf),

    #[error("{} is not inside the project root {}", .path.display(), .root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("Failed to parse fixup file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Fixup file {} must contain a JSON object at the top level", .path.display())]
    NotAnObject { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, FixupError>;

impl FixupError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixupError::Io {
            path: path.into(),
            source,
        }
    }

    #[allow(dead_code)]
    pub fn code(&self) -> &'static str {
        match self {
            FixupError::InvalidTargetDir(_) => "INVALID_TARGET_DIR",
            FixupError::OutsideRoot { .. } => "OUTSIDE_ROOT",
            FixupError::Parse { .. } => "PARSE_ERROR",
            FixupError::NotAnObject { .. } => "PARSE_ERROR",
            FixupError::Io { .. } => "IO_ERROR",
            FixupError::Walk(_) => "IO_ERROR",
        }
    }
}

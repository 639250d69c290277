//! Fixup data model
//!
//! The fixup table drives the rewrite; every rewrite pass yields change
//! records instead of printing, so rendering stays a separate step.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::paths::normalize_path;

/// What to do with an include whose bare path is a fixup key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixupAction {
    /// Point the include at a new bare path
    Replace(String),
    /// Delete the whole directive line
    Remove,
}

impl<'de> Deserialize<'de> for FixupAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // A JSON string replaces, a JSON null removes; anything else is rejected
        let value: Option<String> = Option::deserialize(deserializer)?;
        Ok(match value {
            Some(path) => FixupAction::Replace(path),
            None => FixupAction::Remove,
        })
    }
}

/// Exact-match mapping from bare include path to action
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FixupTable {
    entries: HashMap<String, FixupAction>,
}

impl FixupTable {
    /// Look up a bare path (no normalization)
    pub fn get(&self, bare_path: &str) -> Option<&FixupAction> {
        self.entries.get(bare_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Delimiter style of an include directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IncludeStyle {
    /// `#include "path"`
    Local,
    /// `#include <path>`
    System,
}

impl IncludeStyle {
    /// Render a canonical directive line, newline included
    pub fn render(self, bare_path: &str) -> String {
        match self {
            IncludeStyle::Local => format!("#include \"{}\"\n", bare_path),
            IncludeStyle::System => format!("#include <{}>\n", bare_path),
        }
    }
}

/// What happened to a matched directive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChangeKind {
    /// Matched the directive pattern but the path is not a fixup key
    Kept,
    /// Line deleted
    Removed,
    /// Line rewritten to point at `new`
    Replaced { new: String, style: IncludeStyle },
}

/// A single directive outcome within a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    #[serde(serialize_with = "serialize_path")]
    pub file: PathBuf,
    pub old: String,
    #[serde(flatten)]
    pub kind: ChangeKind,
    /// Delimited token of a directive whose delimiters were neither `""`
    /// nor `<>`; such directives are treated as local includes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub malformed: Option<String>,
}

impl Change {
    pub fn new(file: &Path, old: &str, kind: ChangeKind) -> Self {
        Self {
            file: file.to_path_buf(),
            old: old.to_string(),
            kind,
            malformed: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        !matches!(self.kind, ChangeKind::Kept)
    }
}

/// Result of rewriting one source file in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRewrite {
    /// Canonical (project-root relative) path
    pub file: PathBuf,
    /// Fully reconstructed text
    pub text: String,
    pub changes: Vec<Change>,
}

impl FileRewrite {
    /// Whether any directive was removed or replaced
    pub fn is_modified(&self) -> bool {
        self.changes.iter().any(Change::is_edit)
    }
}

/// Totals for a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_modified: usize,
    pub removed: usize,
    pub replaced: usize,
    pub warnings: usize,
}

impl RunSummary {
    pub fn from_rewrites(rewrites: &[FileRewrite]) -> Self {
        let mut summary = RunSummary {
            files_scanned: rewrites.len(),
            ..Default::default()
        };
        for rewrite in rewrites {
            if rewrite.is_modified() {
                summary.files_modified += 1;
            }
            for change in &rewrite.changes {
                if change.malformed.is_some() {
                    summary.warnings += 1;
                }
                match change.kind {
                    ChangeKind::Kept => {}
                    ChangeKind::Removed => summary.removed += 1,
                    ChangeKind::Replaced { .. } => summary.replaced += 1,
                }
            }
        }
        summary
    }
}

fn serialize_path<S>(path: &Path, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&normalize_path(path))
}

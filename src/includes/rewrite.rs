//! Include directive rewriting
//!
//! A directive is a whole line of the form
//! `<spaces>#<spaces>include<spaces>"path"<spaces>\n` (or `<path>`), where
//! "spaces" means the ASCII space only. Tabs never match. Matched lines whose
//! bare path is a fixup key are deleted or rewritten to the canonical
//! `#include "path"\n` / `#include <path>\n` form; everything else is left
//! byte-for-byte intact.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::core::config::ProjectConfig;
use crate::core::error::Result;
use crate::core::model::{Change, ChangeKind, FileRewrite, FixupAction, FixupTable, IncludeStyle};
use crate::core::util::{read_source, write_atomic};

/// Static regex for a full include line, trailing newline included
pub static INCLUDE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^ *# *include *(<.+>|".+") *\n"#).expect("Invalid INCLUDE_RE regex")
});

/// Determine the delimiter style of a delimited token such as `"a.hpp"`
///
/// Returns `(style, malformed)`. Asymmetric delimiters fall back to `Local`
/// and are flagged as malformed.
pub fn classify(token: &str) -> (IncludeStyle, bool) {
    match (token.chars().next(), token.chars().last()) {
        (Some('"'), Some('"')) => (IncludeStyle::Local, false),
        (Some('<'), Some('>')) => (IncludeStyle::System, false),
        _ => (IncludeStyle::Local, true),
    }
}

/// Strip the first and last character of a delimited token
fn bare_path(token: &str) -> &str {
    let mut chars = token.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// Rewrite every matching directive of `text`; performs no I/O
pub fn rewrite_text(file: &Path, text: &str, table: &FixupTable) -> FileRewrite {
    let mut changes = Vec::new();

    let new_text = INCLUDE_RE.replace_all(text, |caps: &Captures| {
        let token = &caps[1];
        let old = bare_path(token);

        match table.get(old) {
            None => {
                changes.push(Change::new(file, old, ChangeKind::Kept));
                caps[0].to_string()
            }
            Some(FixupAction::Remove) => {
                changes.push(Change::new(file, old, ChangeKind::Removed));
                String::new()
            }
            Some(FixupAction::Replace(new)) => {
                let (style, malformed) = classify(token);
                let mut change = Change::new(
                    file,
                    old,
                    ChangeKind::Replaced {
                        new: new.clone(),
                        style,
                    },
                );
                if malformed {
                    change.malformed = Some(token.to_string());
                }
                changes.push(change);
                style.render(new)
            }
        }
    });

    FileRewrite {
        file: file.to_path_buf(),
        text: new_text.into_owned(),
        changes,
    }
}

/// Rewrite one source file in place
///
/// `file` is the canonical (root-relative) path. The file is only written
/// when the text actually changed, and never in dry-run mode.
pub fn fixup_file(
    config: &ProjectConfig,
    file: &Path,
    table: &FixupTable,
    dry_run: bool,
) -> Result<FileRewrite> {
    let path = config.resolve(file);
    let original = read_source(&path)?;

    let rewrite = rewrite_text(file, &original, table);

    if !dry_run && rewrite.text != original {
        write_atomic(&path, &rewrite.text)?;
    }

    Ok(rewrite)
}

/// Rewrite all source files; the first I/O error aborts the run
///
/// `on_file` sees each file's records as soon as that file is done, so
/// notices for files already written survive a later failure.
#[cfg(not(feature = "parallel"))]
pub fn fixup_includes<F>(
    config: &ProjectConfig,
    sources: &BTreeSet<PathBuf>,
    table: &FixupTable,
    dry_run: bool,
    on_file: F,
) -> Result<Vec<FileRewrite>>
where
    F: Fn(&FileRewrite) -> Result<()> + Sync,
{
    sources
        .iter()
        .map(|file| {
            let rewrite = fixup_file(config, file, table, dry_run)?;
            on_file(&rewrite)?;
            Ok(rewrite)
        })
        .collect()
}

/// Rewrite all source files in parallel; files share no state but the table
#[cfg(feature = "parallel")]
pub fn fixup_includes<F>(
    config: &ProjectConfig,
    sources: &BTreeSet<PathBuf>,
    table: &FixupTable,
    dry_run: bool,
    on_file: F,
) -> Result<Vec<FileRewrite>>
where
    F: Fn(&FileRewrite) -> Result<()> + Sync,
{
    use rayon::prelude::*;

    sources
        .par_iter()
        .map(|file| {
            let rewrite = fixup_file(config, file, table, dry_run)?;
            on_file(&rewrite)?;
            Ok(rewrite)
        })
        .collect()
}

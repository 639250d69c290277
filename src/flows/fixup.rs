//! Fixup flow - Apply a fixup table to a source tree
//!
//! Steps:
//! 1. Load the fixup table (a bad table aborts before anything is scanned)
//! 2. Scan the target directory for source files
//! 3. Rewrite every file in memory, write changed files back and render
//!    each file's change records as soon as it is done

use anyhow::{Context, Result};
use std::io;
use std::path::Path;

use crate::backends::scan::scan_source_files;
use crate::core::config::ProjectConfig;
use crate::core::error::FixupError;
use crate::core::model::{FileRewrite, RunSummary};
use crate::core::paths::normalize_path;
use crate::core::render::{RenderConfig, Renderer};
use crate::includes::fixups::load_fixup_file;
use crate::includes::rewrite::fixup_includes;

/// Run the fixup flow and print the notices
pub fn run_fixup(
    config: &ProjectConfig,
    fixup_file: &Path,
    render_config: RenderConfig,
    verbose: bool,
) -> Result<RunSummary> {
    let renderer = Renderer::with_config(render_config);
    let rewrites = apply_fixups(config, fixup_file, false, verbose, |rewrite| {
        renderer
            .render_to(rewrite, io::stdout().lock())
            .map_err(|e| FixupError::io("<stdout>", e))
    })?;

    let summary = RunSummary::from_rewrites(&rewrites);
    if verbose {
        for rewrite in rewrites.iter().filter(|r| r.is_modified()) {
            eprintln!("modified: {}", normalize_path(&rewrite.file));
        }
        eprintln!(
            "{} files scanned, {} modified ({} replaced, {} removed, {} warnings)",
            summary.files_scanned,
            summary.files_modified,
            summary.replaced,
            summary.removed,
            summary.warnings
        );
    }

    Ok(summary)
}

/// Load, scan and rewrite; `on_file` receives each file's records in turn
pub fn apply_fixups<F>(
    config: &ProjectConfig,
    fixup_file: &Path,
    dry_run: bool,
    verbose: bool,
    on_file: F,
) -> Result<Vec<FileRewrite>>
where
    F: Fn(&FileRewrite) -> crate::core::error::Result<()> + Sync,
{
    let table = load_fixup_file(fixup_file)?;

    let sources = scan_source_files(&config.root, &config.target_dir)
        .with_context(|| format!("Failed to scan {}", config.target_dir.display()))?;

    if verbose {
        eprintln!("root: {}", normalize_path(&config.root));
        eprintln!("target: {}", normalize_path(&config.target_dir));
        eprintln!("{} fixups, {} source files", table.len(), sources.len());
    }

    let rewrites = fixup_includes(config, &sources, &table, dry_run, on_file)?;
    Ok(rewrites)
}

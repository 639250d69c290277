//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::config::ProjectConfig;
use crate::core::paths::project_root_from_exe;
use crate::core::render::{OutputFormat, RenderConfig};

/// fixup-headers - rewrite or remove #include directives across a source tree.
#[derive(Parser, Debug)]
#[command(name = "fixup-headers")]
#[command(
    author,
    version,
    about,
    long_about = r#"fixup-headers rewrites #include directives after files were moved or renamed.

FIXUP_FILE is a JSON object mapping the bare path of an include (the text
between the quotes or angle brackets) to its new bare path, or to null to
delete the include line entirely:

    {
        "From.hpp": "To.hpp",
        "ToRemove.hpp": null
    }

Every .hpp, .cpp and .tpp file under TARGET_DIR is rewritten in place. Only
whole lines of the form `#include "path"` / `#include <path>` are considered,
with ASCII spaces allowed around `#` and `include`; tabs never match.

Examples:
    fixup-headers moves.json
    fixup-headers moves.json src/engine
    fixup-headers --root ~/code/learnlib moves.json
"#
)]
pub struct Cli {
    /// JSON file mapping old include paths to new paths (or null).
    #[arg(value_name = "FIXUP_FILE")]
    pub fixup_file: PathBuf,

    /// Directory to scan (defaults to ROOT/src).
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: Option<PathBuf>,

    /// Project root that discovered files are reported relative to.
    #[arg(
        long,
        env = "FIXUP_HEADERS_ROOT",
        value_name = "ROOT",
        long_help = "Project root directory.\n\n\
Discovered files are identified and reported relative to this root, and\n\
TARGET_DIR must lie inside it. Defaults to the parent of the directory\n\
containing the fixup-headers executable (e.g. <project>/tools/fixup-headers)."
    )]
    pub root: Option<PathBuf>,

    /// Output format (text/jsonl).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the notice format.\n\n\
Supported values:\n\
- text (default): `<file>: <old> -> <new>` lines\n\
- jsonl: one JSON object per matched directive and per warning"
    )]
    pub format: String,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (no notices).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (root, target and totals on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolve the project root: explicit flag/env, else relative to the executable
fn resolve_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root);
    }
    let exe = std::env::current_exe().context("Failed to locate the fixup-headers executable")?;
    let exe = exe.canonicalize().unwrap_or(exe);
    project_root_from_exe(&exe)
        .with_context(|| format!("Cannot derive a project root from {}", exe.display()))
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let render_config = RenderConfig::new(format, cli.quiet);

    let root = resolve_root(cli.root)?;
    let config = ProjectConfig::new(&root, cli.target_dir.as_deref())?;

    crate::flows::fixup::run_fixup(&config, &cli.fixup_file, render_config, cli.verbose)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_positionals() {
        let cli = Cli::try_parse_from(["fixup-headers", "moves.json", "src/engine"]).unwrap();
        assert_eq!(cli.fixup_file, PathBuf::from("moves.json"));
        assert_eq!(cli.target_dir, Some(PathBuf::from("src/engine")));
        assert_eq!(cli.format, "text");
    }

    #[test]
    fn test_missing_fixup_file_is_usage_error() {
        assert!(Cli::try_parse_from(["fixup-headers"]).is_err());
    }

    #[test]
    fn test_explicit_root_wins() {
        let root = resolve_root(Some(PathBuf::from("/project"))).unwrap();
        assert_eq!(root, PathBuf::from("/project"));
    }
}

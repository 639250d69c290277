//! Renderer module
//!
//! Renders rewrite records to operator output: text notices or jsonl

use colored::Colorize;
use std::io::Write;

use crate::core::model::{Change, ChangeKind, FileRewrite};
use crate::core::paths::normalize_path;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub quiet: bool,
}

impl RenderConfig {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }
}

/// Renderer for rewrite records
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the records of one file, one line each
    pub fn render(&self, rewrite: &FileRewrite) -> String {
        if self.config.quiet {
            return String::new();
        }
        let lines = match self.config.format {
            OutputFormat::Text => render_text(rewrite),
            OutputFormat::Jsonl => render_jsonl(rewrite),
        };
        lines.join("\n")
    }

    /// Render one file's records to a writer, newline-terminated
    pub fn render_to<W: Write>(&self, rewrite: &FileRewrite, mut writer: W) -> std::io::Result<()> {
        let output = self.render(rewrite);
        if output.is_empty() {
            return Ok(());
        }
        writeln!(writer, "{}", output)?;
        writer.flush()
    }
}

/// Render a single change as a notice; `None` for untouched directives
pub fn change_notice(change: &Change) -> Option<String> {
    let file = normalize_path(&change.file);
    match &change.kind {
        ChangeKind::Kept => None,
        ChangeKind::Removed => Some(format!("{}: {} -> (removed)", file, change.old)),
        ChangeKind::Replaced { new, .. } => Some(format!("{}: {} -> {}", file, change.old, new)),
    }
}

/// Render a malformed-directive warning
pub fn warning_notice(change: &Change, token: &str) -> String {
    format!(
        "{} Invalid quoted form: {} in file {}.",
        "WARNING:".yellow().bold(),
        token,
        normalize_path(&change.file)
    )
}

fn render_text(rewrite: &FileRewrite) -> Vec<String> {
    let mut lines = Vec::new();
    for change in &rewrite.changes {
        if let Some(token) = &change.malformed {
            lines.push(warning_notice(change, token));
        }
        lines.extend(change_notice(change));
    }
    lines
}

fn render_jsonl(rewrite: &FileRewrite) -> Vec<String> {
    rewrite
        .changes
        .iter()
        .filter_map(|change| serde_json::to_string(change).ok())
        .collect()
}

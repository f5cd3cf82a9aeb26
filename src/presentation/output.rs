//! Output Rendering
//!
//! Text mode keeps stdout to the bare published path so callers can capture
//! it. JSON mode writes one NDJSON object per line on stdout.

use std::io::{self, Write};
use std::path::Path;

use crate::domain::entities::Manifest;
use crate::error::DeployError;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Write the result of a successful deploy
///
/// In JSON mode the `published` event already carries the path.
pub fn render_published(
    out: &mut impl Write,
    format: OutputFormat,
    path: &Path,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", path.display()),
        OutputFormat::Json => Ok(()),
    }
}

/// Write a manifest read back from a published tree
pub fn render_manifest(
    out: &mut impl Write,
    format: OutputFormat,
    tree: &Path,
    manifest: &Manifest,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => out.write_all(manifest.render().as_bytes()),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "event": "manifest",
                "command": "inspect",
                "path": tree.display().to_string(),
                "repository": manifest.repository,
                "tag": manifest.tag,
                "time": manifest.time.to_string(),
            });
            writeln!(out, "{}", json)
        }
    }
}

/// JSON error event for a failed command
pub fn error_to_json(command: &str, err: &anyhow::Error) -> serde_json::Value {
    let kind = err
        .downcast_ref::<DeployError>()
        .map(DeployError::kind)
        .unwrap_or("error");
    serde_json::json!({
        "event": "error",
        "command": command,
        "kind": kind,
        "message": format!("{:#}", err),
    })
}

/// Report a failed command
///
/// Text goes to stderr; JSON goes to stdout alongside the event stream.
pub fn render_error(format: OutputFormat, command: &str, err: &anyhow::Error) {
    match format {
        OutputFormat::Text => eprintln!("Error: {:#}", err),
        OutputFormat::Json => {
            let mut out = io::stdout().lock();
            let _ = writeln!(out, "{}", error_to_json(command, err));
        }
    }
}

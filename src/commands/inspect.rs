//! Inspect command: print the manifest of a published tree

use std::io;
use std::path::Path;

use anyhow::Result;
use tagdeploy::application;
use tagdeploy::presentation::{output, OutputFormat};

pub fn cmd_inspect(dir: &Path, format: OutputFormat) -> Result<()> {
    let manifest = application::inspect(dir)?;
    output::render_manifest(&mut io::stdout().lock(), format, dir, &manifest)?;
    Ok(())
}

//! Settings warning value object.

use std::fmt;
use std::path::PathBuf;

/// Non-fatal settings warning surfaced to CLI users.
///
/// Raised for keys in the settings file that nothing reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsWarning {
    /// The unknown key (last path segment)
    pub key: String,
    /// The settings file it was found in
    pub file: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A known key within edit distance 2, if any
    pub suggestion: Option<String>,
}

impl fmt::Display for SettingsWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

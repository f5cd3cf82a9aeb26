//! Published directory name
//!
//! `<deployment_name>-<source_tag>-<timestamp>`, a single path component.

use std::fmt;

use super::Timestamp;

/// Name of a published deployment directory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublishedName(String);

impl PublishedName {
    pub const SEPARATOR: char = '-';

    pub fn new(deployment_name: &str, tag: &str, timestamp: &Timestamp) -> Self {
        Self(format!(
            "{deployment_name}{sep}{tag}{sep}{timestamp}",
            sep = Self::SEPARATOR
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<std::path::Path> for PublishedName {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

/// Check that a value can be embedded in a published name
///
/// The name must stay a single path component.
pub fn validate_name_component(field: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    if value == "." || value == ".." {
        return Err(format!("{} must not be '{}'", field, value));
    }
    if value.contains('/') || value.contains('\0') {
        return Err(format!("{} '{}' cannot contain '/' or NUL", field, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> Timestamp {
        Timestamp::from_naive(
            NaiveDate::from_ymd_opt(2012, 1, 5)
                .unwrap()
                .and_hms_opt(10, 40, 0)
                .unwrap(),
        )
    }

    #[test]
    fn joins_with_hyphens() {
        let name = PublishedName::new("timetables", "2012-01-05T1038", &ts());
        assert_eq!(name.as_str(), "timetables-2012-01-05T1038-20120105T104000");
    }

    #[test]
    fn validates_components() {
        assert!(validate_name_component("tag", "v1.0").is_ok());
        assert!(validate_name_component("tag", "").is_err());
        assert!(validate_name_component("tag", "..").is_err());
        assert!(validate_name_component("tag", "release/1.0").is_err());
    }
}

//! Deployment manifest entity
//!
//! The `DEPLOYMENT` file at the root of every tree records where the tree came
//! from. Three labeled lines, in this order:
//!
//! ```text
//! repository: <location>
//! tag: <tag>
//! time: <YYYYMMDDTHHMMSS>
//! ```

use crate::domain::value_objects::Timestamp;

use super::DeploymentRequest;

const REPOSITORY_KEY: &str = "repository";
const TAG_KEY: &str = "tag";
const TIME_KEY: &str = "time";

/// Provenance record of a deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub repository: String,
    pub tag: String,
    pub time: Timestamp,
}

impl Manifest {
    pub fn from_request(request: &DeploymentRequest) -> Self {
        Self {
            repository: request.source().to_string(),
            tag: request.tag().to_string(),
            time: request.timestamp(),
        }
    }

    /// Render the file content
    pub fn render(&self) -> String {
        format!(
            "{REPOSITORY_KEY}: {}\n{TAG_KEY}: {}\n{TIME_KEY}: {}\n",
            self.repository, self.tag, self.time
        )
    }

    /// Parse manifest content
    ///
    /// Blank lines and `#` comments are ignored so hand-annotated manifests
    /// still read back.
    pub fn parse(content: &str) -> Result<Self, String> {
        let mut repository = None;
        let mut tag = None;
        let mut time = None;

        for (index, line) in content.lines().enumerate() {
            let line_no = index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let (key, value) = trimmed
                .split_once(':')
                .ok_or_else(|| format!("line {}: expected 'key: value'", line_no))?;
            let value = value.trim().to_string();

            let slot = match key.trim() {
                REPOSITORY_KEY => &mut repository,
                TAG_KEY => &mut tag,
                TIME_KEY => &mut time,
                other => return Err(format!("line {}: unknown field '{}'", line_no, other)),
            };
            if slot.is_some() {
                return Err(format!("line {}: duplicate field '{}'", line_no, key.trim()));
            }
            *slot = Some(value);
        }

        let repository = repository.ok_or_else(|| format!("missing '{}'", REPOSITORY_KEY))?;
        let tag = tag.ok_or_else(|| format!("missing '{}'", TAG_KEY))?;
        let time = time.ok_or_else(|| format!("missing '{}'", TIME_KEY))?;
        let time = time
            .parse::<Timestamp>()
            .map_err(|e| format!("invalid time '{}': {}", time, e))?;

        Ok(Self {
            repository,
            tag,
            time,
        })
    }
}

//! Settings type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::DEFAULT_DEPLOYMENT_NAME;
use crate::domain::value_objects::TreePath;
use crate::error::DeployResult;

use super::loader;

/// Where and under which name trees are published
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploySettings {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub destination: Option<PathBuf>,

    /// Parent of the temporary tree; keep it on the destination's filesystem
    #[serde(default)]
    pub staging_dir: Option<PathBuf>,

    /// Tree-relative files created empty before normalization
    #[serde(default)]
    pub ensure_files: Vec<TreePath>,
}

impl Default for DeploySettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            destination: None,
            staging_dir: None,
            ensure_files: Vec::new(),
        }
    }
}

fn default_name() -> String {
    DEFAULT_DEPLOYMENT_NAME.to_string()
}

/// Owner of the normalized subtrees (names or numeric ids)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySettings {
    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub group: Option<String>,
}

/// Revision source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(default)]
    pub repository: Option<String>,

    /// git executable
    #[serde(default = "default_git")]
    pub git: PathBuf,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            repository: None,
            git: default_git(),
        }
    }
}

fn default_git() -> PathBuf {
    PathBuf::from("git")
}

/// Main settings structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub deploy: DeploySettings,

    #[serde(default)]
    pub identity: IdentitySettings,

    #[serde(default)]
    pub source: SourceSettings,
}

impl Settings {
    /// Load settings from a TOML file, logging unknown keys
    pub fn load(path: &Path) -> DeployResult<Self> {
        let (settings, warnings) = loader::load_with_warnings(path)?;
        for warning in warnings {
            tracing::warn!("{}", warning);
        }
        Ok(settings)
    }
}

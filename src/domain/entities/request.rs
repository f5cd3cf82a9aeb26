//! Deployment request entity
//!
//! The one immutable value that drives a whole run. It is built once at the
//! boundary (CLI or caller) and passed by reference through the pipeline; no
//! component reads ambient configuration after that.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{validate_name_component, PublishedName, Timestamp, TreePath};
use crate::error::{DeployError, DeployResult};

/// Prefix used when the operator does not name the deployment
pub const DEFAULT_DEPLOYMENT_NAME: &str = "timetables";

/// Everything needed to stage and publish one deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    source: String,
    tag: String,
    config_file: PathBuf,
    data_dir: PathBuf,
    uid: u32,
    gid: u32,
    destination: PathBuf,
    name: String,
    timestamp: Timestamp,
    staging_parent: Option<PathBuf>,
    ensure_files: Vec<TreePath>,
}

impl DeploymentRequest {
    pub fn builder(source: impl Into<String>, tag: impl Into<String>) -> DeploymentRequestBuilder {
        DeploymentRequestBuilder::new(source.into(), tag.into())
    }

    /// Repository location (path or URL)
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn uid(&self) -> u32 {
        self.uid
    }

    pub fn gid(&self) -> u32 {
        self.gid
    }

    /// Base directory the published tree is renamed into
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Parent directory for the staging tree, `None` for the host temp dir
    pub fn staging_parent(&self) -> Option<&Path> {
        self.staging_parent.as_deref()
    }

    /// Files that must exist (empty if absent) before normalization
    pub fn ensure_files(&self) -> &[TreePath] {
        &self.ensure_files
    }

    pub fn published_name(&self) -> PublishedName {
        PublishedName::new(&self.name, &self.tag, &self.timestamp)
    }
}

/// Builder for [`DeploymentRequest`]
#[derive(Debug, Clone)]
pub struct DeploymentRequestBuilder {
    source: String,
    tag: String,
    config_file: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    owner: Option<(u32, u32)>,
    destination: PathBuf,
    name: String,
    timestamp: Option<Timestamp>,
    staging_parent: Option<PathBuf>,
    ensure_files: Vec<TreePath>,
}

impl DeploymentRequestBuilder {
    fn new(source: String, tag: String) -> Self {
        Self {
            source,
            tag,
            config_file: None,
            data_dir: None,
            owner: None,
            destination: PathBuf::from("."),
            name: DEFAULT_DEPLOYMENT_NAME.to_string(),
            timestamp: None,
            staging_parent: None,
            ensure_files: Vec::new(),
        }
    }

    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(path.into());
        self
    }

    pub fn owner(mut self, uid: u32, gid: u32) -> Self {
        self.owner = Some((uid, gid));
        self
    }

    pub fn destination(mut self, path: impl Into<PathBuf>) -> Self {
        self.destination = path.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Pin the timestamp instead of reading the clock at `build()`
    pub fn timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn staging_parent(mut self, path: Option<PathBuf>) -> Self {
        self.staging_parent = path;
        self
    }

    pub fn ensure_files(mut self, files: Vec<TreePath>) -> Self {
        self.ensure_files = files;
        self
    }

    pub fn build(self) -> DeployResult<DeploymentRequest> {
        let invalid = |message: String| DeployError::InvalidRequest { message };

        if self.source.trim().is_empty() {
            return Err(invalid("source repository must not be empty".to_string()));
        }
        validate_name_component("tag", &self.tag).map_err(invalid)?;
        validate_name_component("deployment name", &self.name).map_err(invalid)?;

        let config_file = self
            .config_file
            .ok_or_else(|| invalid("config file is required".to_string()))?;
        let data_dir = self
            .data_dir
            .ok_or_else(|| invalid("data directory is required".to_string()))?;
        let (uid, gid) = self
            .owner
            .ok_or_else(|| invalid("owning user and group are required".to_string()))?;

        Ok(DeploymentRequest {
            source: self.source,
            tag: self.tag,
            config_file,
            data_dir,
            uid,
            gid,
            destination: self.destination,
            name: self.name,
            timestamp: self.timestamp.unwrap_or_else(Timestamp::now),
            staging_parent: self.staging_parent,
            ensure_files: self.ensure_files,
        })
    }
}

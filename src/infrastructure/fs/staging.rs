//! Staging directory guard
//!
//! A private, uniquely named temporary directory that is removed on every
//! exit path unless ownership is explicitly released with [`StagingDir::release`].

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{DeployError, DeployResult};

const STAGING_PREFIX: &str = ".tagdeploy-staging-";
const STAGING_MODE: u32 = 0o700;

/// Scoped owner of a staging tree
#[derive(Debug)]
pub struct StagingDir {
    dir: Option<TempDir>,
}

impl StagingDir {
    /// Create under `parent`, or under the host temp dir when `None`
    ///
    /// The directory starts empty with mode 0700 whatever the umask.
    pub fn create(parent: Option<&Path>) -> DeployResult<Self> {
        let mut builder = tempfile::Builder::new();
        builder
            .prefix(STAGING_PREFIX)
            .permissions(fs::Permissions::from_mode(STAGING_MODE));
        let dir = match parent {
            Some(parent) => builder
                .tempdir_in(parent)
                .map_err(|e| DeployError::io(parent, e))?,
            None => builder
                .tempdir()
                .map_err(|e| DeployError::io(std::env::temp_dir(), e))?,
        };
        // mkdir filters the requested mode through the umask
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(STAGING_MODE))
            .map_err(|e| DeployError::io(dir.path(), e))?;
        tracing::debug!(path = %dir.path().display(), "staging directory created");
        Ok(Self { dir: Some(dir) })
    }

    pub fn path(&self) -> &Path {
        self.dir
            .as_ref()
            .map(TempDir::path)
            .unwrap_or_else(|| Path::new(""))
    }

    /// Remove the tree now, logging (never returning) cleanup failures
    pub fn discard(mut self) {
        if let Some(dir) = self.dir.take() {
            let path = dir.path().to_path_buf();
            match dir.close() {
                Ok(()) => tracing::debug!(path = %path.display(), "staging directory removed"),
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to remove staging directory"
                ),
            }
        }
    }

    /// Give up ownership; the directory is no longer removed on drop
    pub fn release(mut self) -> PathBuf {
        match self.dir.take() {
            Some(dir) => dir.keep(),
            None => PathBuf::new(),
        }
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take() {
            let path = dir.path().to_path_buf();
            if let Err(e) = dir.close() {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to remove staging directory"
                );
            }
        }
    }
}

//! Git Revision Source
//!
//! Clones a repository with the `git` command line, checks the requested tag
//! against the repository's tag set, then checks that tag out.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::domain::ports::RevisionSource;
use crate::error::{DeployError, DeployResult};

/// Revision source backed by the `git` binary
#[derive(Debug, Clone)]
pub struct GitCliSource {
    git: PathBuf,
}

impl Default for GitCliSource {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitCliSource {
    pub fn new(git: impl Into<PathBuf>) -> Self {
        Self { git: git.into() }
    }

    /// Check if the git binary is installed and runnable
    pub fn check_available(&self) -> bool {
        Command::new(&self.git)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.git);
        // Never block on a credential prompt
        cmd.env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    fn run<I, S>(&self, cwd: Option<&Path>, args: I, repository: &str) -> DeployResult<Output>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = self.command();
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        cmd.args(args);
        tracing::trace!(?cmd, "running git");

        let output = cmd.output().map_err(|e| DeployError::SourceUnavailable {
            repository: repository.to_string(),
            message: format!("failed to run {}: {}", self.git.display(), e),
        })?;

        if !output.status.success() {
            return Err(DeployError::SourceUnavailable {
                repository: repository.to_string(),
                message: failure_message(&output),
            });
        }
        Ok(output)
    }

    /// List the tags of an already cloned working tree
    pub fn list_tags(&self, work_tree: &Path, repository: &str) -> DeployResult<Vec<String>> {
        let output = self.run(Some(work_tree), ["tag", "--list"], repository)?;
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }
}

impl RevisionSource for GitCliSource {
    fn name(&self) -> &'static str {
        "git"
    }

    fn materialize(&self, destination: &Path, repository: &str, tag: &str) -> DeployResult<()> {
        tracing::info!(repository, dest = %destination.display(), "cloning");
        let clone_args: Vec<&OsStr> = vec![
            OsStr::new("clone"),
            OsStr::new("--quiet"),
            OsStr::new("--"),
            OsStr::new(repository),
            destination.as_os_str(),
        ];
        self.run(None, clone_args, repository)?;

        let tags = self.list_tags(destination, repository)?;
        if !tags.iter().any(|t| t == tag) {
            return Err(DeployError::NoSuchTag {
                tag: tag.to_string(),
                repository: repository.to_string(),
            });
        }

        tracing::info!(tag, "checking out tag");
        let tag_ref = format!("tags/{}", tag);
        self.run(
            Some(destination),
            [
                "-c",
                "advice.detachedHead=false",
                "checkout",
                "--quiet",
                tag_ref.as_str(),
            ],
            repository,
        )?;
        Ok(())
    }
}

fn failure_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("git exited with {}", output.status)
    } else {
        stderr.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn git_source_name() {
        assert_eq!(GitCliSource::default().name(), "git");
    }

    #[test]
    fn check_available_does_not_panic() {
        let _ = GitCliSource::default().check_available();
    }

    #[test]
    fn missing_binary_is_source_unavailable() {
        let dir = tempdir().unwrap();
        let source = GitCliSource::new(dir.path().join("no-such-git"));
        let err = source
            .materialize(&dir.path().join("out"), "/repo/app.git", "v1")
            .unwrap_err();
        assert!(matches!(err, DeployError::SourceUnavailable { .. }), "{err}");
    }

    #[test]
    fn unreachable_repository_is_source_unavailable() {
        let source = GitCliSource::default();
        if !source.check_available() {
            return;
        }
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nothing-here.git");
        let err = source
            .materialize(
                &dir.path().join("out"),
                missing.to_str().unwrap(),
                "v1",
            )
            .unwrap_err();
        match err {
            DeployError::SourceUnavailable { repository, .. } => {
                assert_eq!(repository, missing.to_str().unwrap())
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

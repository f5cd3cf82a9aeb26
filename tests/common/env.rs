//! Test environment builder for isolated tagdeploy testing.
//!
//! Provides `TestEnv` - a temp directory holding a tagged git repository,
//! overlay sources, a destination and a staging parent, plus helpers to run
//! the tagdeploy binary against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

use super::fixtures::{CONFIG_CONTENT, RELEASE_TAG, REPO_FILES};

/// Result of running a tagdeploy command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Published path printed on stdout
    pub fn published_path(&self) -> PathBuf {
        let lines: Vec<&str> = self.stdout.lines().collect();
        assert_eq!(lines.len(), 1, "expected exactly one stdout line:\n{}", self.stdout);
        PathBuf::from(lines[0])
    }

    /// stdout parsed as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", line, e))
            })
            .collect()
    }
}

/// Whether a usable `git` is on PATH
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Isolated test environment.
///
/// Layout under `root`:
/// - `repo/` tagged git repository
/// - `cfg.txt` config overlay
/// - `datadir/` data overlay
/// - `srv/` destination base
/// - `staging/` staging parent
/// - `home/` HOME and XDG_CONFIG_HOME for the binary
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn repo(&self) -> PathBuf {
        self.path("repo")
    }

    pub fn destination(&self) -> PathBuf {
        self.path("srv")
    }

    pub fn staging(&self) -> PathBuf {
        self.path("staging")
    }

    /// Arguments for a standard deploy of `tag`
    pub fn deploy_args(&self, tag: &str) -> Vec<String> {
        [
            "-s".to_string(),
            self.repo().display().to_string(),
            "-t".to_string(),
            tag.to_string(),
            "-c".to_string(),
            self.path("cfg.txt").display().to_string(),
            "-d".to_string(),
            self.path("datadir").display().to_string(),
            "--staging-dir".to_string(),
            self.staging().display().to_string(),
            self.destination().display().to_string(),
        ]
        .to_vec()
    }

    /// Run tagdeploy with the standard deploy arguments
    pub fn deploy(&self, tag: &str) -> TestResult {
        let args = self.deploy_args(tag);
        self.run(&args.iter().map(String::as_str).collect::<Vec<_>>())
    }

    /// Run tagdeploy in this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run tagdeploy with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", self.path("home"))
            .env("XDG_CONFIG_HOME", self.path("home/.config"))
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env_remove("RUST_LOG");
        for var in [
            "TAGDEPLOY_NAME",
            "TAGDEPLOY_DESTINATION",
            "TAGDEPLOY_STAGING_DIR",
            "TAGDEPLOY_USER",
            "TAGDEPLOY_GROUP",
            "TAGDEPLOY_GIT",
            "TAGDEPLOY_REPOSITORY",
            "TAGDEPLOY_SETTINGS_PATH",
        ] {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute tagdeploy");
        output_to_result(output)
    }

    /// Write a file relative to the env root
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    tags: Vec<String>,
    data_files: usize,
    init_repo: bool,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            tags: vec![RELEASE_TAG.to_string()],
            data_files: 10,
            init_repo: true,
        }
    }

    /// Tags to create on the fixture commit
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Number of empty files in the data overlay
    pub fn with_data_files(mut self, count: usize) -> Self {
        self.data_files = count;
        self
    }

    /// Skip creating the git repository
    pub fn without_repo(mut self) -> Self {
        self.init_repo = false;
        self
    }

    /// Build the TestEnv; `None` when the repo needs git and git is missing
    pub fn build(self) -> Option<TestEnv> {
        if self.init_repo && !git_available() {
            eprintln!("git not installed; skipping");
            return None;
        }

        let root = TempDir::new().expect("Failed to create temp dir");
        let env = TestEnv {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_tagdeploy")),
        };

        for dir in ["srv", "staging", "home/.config", "datadir"] {
            std::fs::create_dir_all(env.path(dir)).expect("Failed to create directory");
        }
        env.write_file("cfg.txt", CONFIG_CONTENT);
        for i in 0..self.data_files {
            env.write_file(&format!("datadir/file{}", i), "");
        }

        if self.init_repo {
            create_repo(&env, &self.tags);
        }

        Some(env)
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn create_repo(env: &TestEnv, tags: &[String]) {
    let repo = env.repo();
    std::fs::create_dir_all(&repo).expect("Failed to create repo dir");
    for (path, content) in REPO_FILES {
        env.write_file(&format!("repo/{}", path), content);
    }

    git(env, &repo, &["init", "--quiet"]);
    git(env, &repo, &["add", "--all"]);
    git(
        env,
        &repo,
        &[
            "-c",
            "user.name=tagdeploy tests",
            "-c",
            "user.email=tests@example.com",
            "-c",
            "commit.gpgsign=false",
            "commit",
            "--quiet",
            "-m",
            "initial",
        ],
    );
    for tag in tags {
        git(env, &repo, &["tag", tag]);
    }
}

fn git(env: &TestEnv, cwd: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .env("HOME", env.path("home"))
        .env("XDG_CONFIG_HOME", env.path("home/.config"))
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

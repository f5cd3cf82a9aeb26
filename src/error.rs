//! Error types for tagdeploy
//!
//! Every failure of the staging and publish pipeline maps onto one variant of
//! [`DeployError`]. None of them are retried; the binary reports them verbatim.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tagdeploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for tagdeploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// The requested tag is not in the source repository's tag set
    #[error("no such tag: {tag} (repository: {repository})")]
    NoSuchTag { tag: String, repository: String },

    /// The repository could not be cloned or queried
    #[error("source repository unavailable: {repository}: {message}")]
    SourceUnavailable { repository: String, message: String },

    /// A config file or data directory overlay does not exist
    #[error("overlay source missing: {path}")]
    OverlaySourceMissing { path: PathBuf },

    /// The process lacks the privilege to chown/chmod to the target identity
    #[error("permission denied while normalizing {path}: {source}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The final destination is occupied or the rename failed
    #[error("cannot publish to {destination}: {message}")]
    PublishConflict {
        destination: PathBuf,
        message: String,
    },

    /// A user or group name is not known to the host
    #[error("unknown {kind} '{name}'")]
    UnknownIdentity { kind: IdentityKind, name: String },

    /// Settings file could not be parsed or holds an invalid value
    #[error("invalid settings in {file}: {message}")]
    InvalidSettings { file: PathBuf, message: String },

    /// A DEPLOYMENT manifest could not be parsed
    #[error("invalid manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// A request field cannot be used to build a deployment
    #[error("invalid deployment request: {message}")]
    InvalidRequest { message: String },

    /// Interrupted before the tree was published
    #[error("deployment cancelled before publish")]
    Cancelled,

    /// IO error on a specific path
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Which identity database a lookup went to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {
    User,
    Group,
}

impl std::fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentityKind::User => write!(f, "user"),
            IdentityKind::Group => write!(f, "group"),
        }
    }
}

impl DeployError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DeployError::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable, machine-readable name of the variant (used in JSON output)
    pub fn kind(&self) -> &'static str {
        match self {
            DeployError::NoSuchTag { .. } => "no_such_tag",
            DeployError::SourceUnavailable { .. } => "source_unavailable",
            DeployError::OverlaySourceMissing { .. } => "overlay_source_missing",
            DeployError::PermissionDenied { .. } => "permission_denied",
            DeployError::PublishConflict { .. } => "publish_conflict",
            DeployError::UnknownIdentity { .. } => "unknown_identity",
            DeployError::InvalidSettings { .. } => "invalid_settings",
            DeployError::InvalidManifest { .. } => "invalid_manifest",
            DeployError::InvalidRequest { .. } => "invalid_request",
            DeployError::Cancelled => "cancelled",
            DeployError::Io { .. } => "io",
        }
    }
}

//! tagdeploy - staged, atomic deployment of tagged git revisions
//!
//! A deployment clones a repository at a tag into a private temporary
//! directory, overlays a config file and a data directory, normalizes
//! ownership and modes, records a `DEPLOYMENT` manifest, then renames the
//! finished tree to `<destination>/<name>-<tag>-<YYYYMMDDTHHMMSS>`. Any
//! failure before the rename removes the temporary tree.
//!
//! ```ignore
//! use tagdeploy::application::DeployUseCase;
//! use tagdeploy::infrastructure::GitCliSource;
//! use tagdeploy::DeploymentRequest;
//!
//! let request = DeploymentRequest::builder("/repo/timetables.git", "2012-01-05T1038")
//!     .config_file("cfg.txt")
//!     .data_dir("datadir")
//!     .owner(33, 33)
//!     .destination("/srv")
//!     .build()?;
//! let published = DeployUseCase::new(GitCliSource::default()).execute(&request)?;
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{inspect, CancelFlag, DeployUseCase, Publisher, StageUseCase, StagedTree};
pub use config::Settings;
pub use domain::entities::{DeploymentRequest, Manifest};
pub use domain::value_objects::{IdentitySpec, PublishedName, Timestamp, TreePath};
pub use error::{DeployError, DeployResult};

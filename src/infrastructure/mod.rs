//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `git/` - `RevisionSource` over the git command line
//! - `identity/` - `IdentityResolver` over the host user/group database
//! - `fs/` - overlay, permission normalization, manifest, staging guard
//! - `events/` - deploy event sinks (JSON, log)

pub mod events;
pub mod fs;
pub mod git;
pub mod identity;

// Re-export for convenience
pub use events::{JsonEventSink, LogEventSink};
pub use fs::StagingDir;
pub use git::GitCliSource;
pub use identity::SystemIdentityResolver;

//! File System Implementations
//!
//! Everything that touches the staging tree on disk.

pub mod manifest;
pub mod overlay;
pub mod permissions;
pub mod staging;

pub use manifest::{read_manifest, write_manifest};
pub use overlay::{apply_config, apply_data, ensure_files};
pub use permissions::{normalize, NormalizeStats};
pub use staging::StagingDir;

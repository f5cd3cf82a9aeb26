//! Inspect use case - reads the provenance of a published tree

use std::path::Path;

use crate::domain::entities::Manifest;
use crate::error::DeployResult;
use crate::infrastructure::fs::read_manifest;

/// Read the manifest of a published (or staged) tree
pub fn inspect(tree_root: &Path) -> DeployResult<Manifest> {
    read_manifest(tree_root)
}

//! Manifest Writer
//!
//! Writes the `DEPLOYMENT` provenance record and makes it read-only.

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use crate::domain::entities::Manifest;
use crate::domain::value_objects::layout::{MANIFEST_FILE, MANIFEST_MODE};
use crate::error::{DeployError, DeployResult};

/// Write the manifest at the tree root, then chmod it 0444
///
/// The mode is set on the open handle so there is no window where a
/// different file could be swapped in at the same path.
pub fn write_manifest(tree_root: &Path, manifest: &Manifest) -> DeployResult<PathBuf> {
    let path = tree_root.join(MANIFEST_FILE);
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .map_err(|e| DeployError::io(&path, e))?;
    file.write_all(manifest.render().as_bytes())
        .and_then(|_| file.sync_all())
        .map_err(|e| DeployError::io(&path, e))?;
    file.set_permissions(fs::Permissions::from_mode(MANIFEST_MODE))
        .map_err(|e| DeployError::io(&path, e))?;
    Ok(path)
}

/// Read and parse the manifest of a tree
pub fn read_manifest(tree_root: &Path) -> DeployResult<Manifest> {
    let path = tree_root.join(MANIFEST_FILE);
    let content = fs::read_to_string(&path).map_err(|e| DeployError::io(&path, e))?;
    Manifest::parse(&content).map_err(|message| DeployError::InvalidManifest {
        file: path,
        message,
    })
}

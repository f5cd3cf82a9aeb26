//! Permission Normalizer
//!
//! Gives the web-server identity read/write access to `secret/` and `data/`
//! while keeping the tree closed to everyone else. Requires the privilege to
//! chown to the target uid/gid (normally root, or the target user itself
//! with a group it belongs to); without it the run fails with
//! `PermissionDenied`.

use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use walkdir::WalkDir;

use crate::domain::value_objects::layout::{DIR_MODE, FILE_MODE, NORMALIZED_SUBTREES, ROOT_MODE};
use crate::error::{DeployError, DeployResult};

/// Counts of entries touched by [`normalize`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub directories: usize,
    pub files: usize,
}

/// Normalize ownership and modes of the designated subtrees and the root
///
/// Directories under `secret/` and `data/` get uid:gid 0770, regular files
/// uid:gid 0660. Symlinks are not followed and left alone, including a
/// designated subtree that is itself a symlink. Absent subtrees are skipped.
/// The root keeps its owner, gets group `gid` and mode 0750.
pub fn normalize(tree_root: &Path, uid: u32, gid: u32) -> DeployResult<NormalizeStats> {
    let mut stats = NormalizeStats::default();

    for subtree in NORMALIZED_SUBTREES {
        let dir = tree_root.join(subtree);
        match dir.symlink_metadata() {
            Err(_) => {
                tracing::debug!(subtree, "subtree absent, skipping normalization");
                continue;
            }
            Ok(meta) if meta.file_type().is_symlink() => {
                tracing::warn!(subtree, "subtree is a symlink, leaving it untouched");
                continue;
            }
            Ok(_) => take_ownership(&dir, uid, gid, &mut stats)?,
        }
    }

    std::os::unix::fs::chown(tree_root, None, Some(gid)).map_err(|e| denied(tree_root, e))?;
    set_mode(tree_root, ROOT_MODE)?;

    tracing::debug!(
        directories = stats.directories,
        files = stats.files,
        uid,
        gid,
        "permissions normalized"
    );
    Ok(stats)
}

fn take_ownership(
    dir: &Path,
    uid: u32,
    gid: u32,
    stats: &mut NormalizeStats,
) -> DeployResult<()> {
    for entry in WalkDir::new(dir).follow_links(false).follow_root_links(false) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            denied(&path, e.into())
        })?;
        let path = entry.path();
        let file_type = entry.file_type();

        let mode = if file_type.is_dir() {
            stats.directories += 1;
            DIR_MODE
        } else if file_type.is_file() {
            stats.files += 1;
            FILE_MODE
        } else {
            continue;
        };

        std::os::unix::fs::chown(path, Some(uid), Some(gid)).map_err(|e| denied(path, e))?;
        set_mode(path, mode)?;
    }
    Ok(())
}

fn set_mode(path: &Path, mode: u32) -> DeployResult<()> {
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|e| denied(path, e))
}

fn denied(path: &Path, source: io::Error) -> DeployError {
    if source.kind() == io::ErrorKind::PermissionDenied {
        DeployError::PermissionDenied {
            path: path.to_path_buf(),
            source,
        }
    } else {
        DeployError::io(path, source)
    }
}

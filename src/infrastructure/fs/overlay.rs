//! Overlay Applier
//!
//! Copies the operator's config file and data directory into fixed locations
//! of a freshly materialized tree. Copies are not resumable: a failure half
//! way leaves an invalid tree, which the staging pipeline then discards.
//!
//! Nothing is ever written through a symlink the revision ships: a link found
//! where the overlay needs a directory or file is replaced by the real thing.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::value_objects::layout::{CONFIG_FILE, DATA_DIR};
use crate::domain::value_objects::TreePath;
use crate::error::{DeployError, DeployResult};

/// Copy `config_file` to `config/config.txt` inside the tree
///
/// An existing file at the target is overwritten.
pub fn apply_config(tree_root: &Path, config_file: &Path) -> DeployResult<PathBuf> {
    if !config_file.is_file() {
        return Err(DeployError::OverlaySourceMissing {
            path: config_file.to_path_buf(),
        });
    }

    let dest = tree_root.join(CONFIG_FILE);
    if let Some(parent) = dest.parent() {
        ensure_real_dir(parent)?;
    }
    remove_link(&dest)?;
    fs::copy(config_file, &dest).map_err(|e| DeployError::io(&dest, e))?;
    tracing::debug!(from = %config_file.display(), to = %dest.display(), "config applied");
    Ok(dest)
}

/// Copy `data_dir` recursively into `data/` inside the tree
///
/// Merges over anything the revision already ships under `data/`; overlay
/// files win. Symlinks are recreated, not followed. Anything other than a
/// directory, regular file or symlink (FIFOs, sockets, devices) is an error.
/// Returns the number of non-directory entries copied.
pub fn apply_data(tree_root: &Path, data_dir: &Path) -> DeployResult<usize> {
    if !data_dir.is_dir() {
        return Err(DeployError::OverlaySourceMissing {
            path: data_dir.to_path_buf(),
        });
    }

    let dest = tree_root.join(DATA_DIR);
    let copied = copy_dir_recursive(data_dir, &dest)?;
    tracing::debug!(from = %data_dir.display(), to = %dest.display(), copied, "data applied");
    Ok(copied)
}

/// Create each listed file empty unless it already exists
pub fn ensure_files(tree_root: &Path, files: &[TreePath]) -> DeployResult<()> {
    for file in files {
        let path = file.under(tree_root);
        reject_linked_ancestors(tree_root, &path)?;
        if path.symlink_metadata().is_ok() {
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| DeployError::io(parent, e))?;
        }
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| DeployError::io(&path, e))?;
        tracing::debug!(path = %path.display(), "created empty file");
    }
    Ok(())
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> DeployResult<usize> {
    ensure_real_dir(dst)?;
    let mut copied = 0;

    for entry in WalkDir::new(src).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            DeployError::io(path, e.into())
        })?;

        let rel_path = match entry.path().strip_prefix(src) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel,
            _ => continue,
        };
        let dst_path = dst.join(rel_path);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            ensure_real_dir(&dst_path)?;
        } else if file_type.is_symlink() {
            let target =
                fs::read_link(entry.path()).map_err(|e| DeployError::io(entry.path(), e))?;
            if dst_path.symlink_metadata().is_ok() {
                fs::remove_file(&dst_path).map_err(|e| DeployError::io(&dst_path, e))?;
            }
            std::os::unix::fs::symlink(&target, &dst_path)
                .map_err(|e| DeployError::io(&dst_path, e))?;
            copied += 1;
        } else if file_type.is_file() {
            remove_link(&dst_path)?;
            fs::copy(entry.path(), &dst_path).map_err(|e| DeployError::io(&dst_path, e))?;
            copied += 1;
        } else {
            return Err(DeployError::io(
                entry.path(),
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "not a regular file, directory or symlink",
                ),
            ));
        }
    }

    Ok(copied)
}

/// Make `path` a real directory, replacing a symlink or file left there
fn ensure_real_dir(path: &Path) -> DeployResult<()> {
    match path.symlink_metadata() {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(meta) => {
            tracing::warn!(
                path = %path.display(),
                symlink = meta.file_type().is_symlink(),
                "replacing non-directory with overlay directory"
            );
            fs::remove_file(path).map_err(|e| DeployError::io(path, e))?;
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(DeployError::io(path, e)),
    }
    fs::create_dir(path).map_err(|e| DeployError::io(path, e))
}

/// Remove a symlink at `path` so a following copy cannot write through it
fn remove_link(path: &Path) -> DeployResult<()> {
    match path.symlink_metadata() {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::remove_file(path).map_err(|e| DeployError::io(path, e))
        }
        _ => Ok(()),
    }
}

/// Fail if any existing directory between the root and `path` is a symlink
fn reject_linked_ancestors(tree_root: &Path, path: &Path) -> DeployResult<()> {
    let Ok(rel) = path.strip_prefix(tree_root) else {
        return Ok(());
    };
    let mut current = tree_root.to_path_buf();
    let mut components = rel.components().peekable();
    while let Some(component) = components.next() {
        if components.peek().is_none() {
            break;
        }
        if let Component::Normal(part) = component {
            current.push(part);
        }
        if let Ok(meta) = current.symlink_metadata() {
            if meta.file_type().is_symlink() {
                return Err(DeployError::io(
                    &current,
                    io::Error::new(io::ErrorKind::InvalidInput, "path passes through a symlink"),
                ));
            }
        }
    }
    Ok(())
}

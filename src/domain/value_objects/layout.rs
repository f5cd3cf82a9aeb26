//! Tree layout value objects
//!
//! Fixed, well-known locations inside a deployment tree, plus a validated
//! tree-relative path type for operator-supplied entries.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where the config overlay lands
pub const CONFIG_FILE: &str = "config/config.txt";
/// Where the data overlay lands
pub const DATA_DIR: &str = "data";
/// Secrets shipped in the tagged revision
pub const SECRET_DIR: &str = "secret";
/// Provenance record at the tree root
pub const MANIFEST_FILE: &str = "DEPLOYMENT";

/// Mode for directories under the normalized subtrees
pub const DIR_MODE: u32 = 0o770;
/// Mode for regular files under the normalized subtrees
pub const FILE_MODE: u32 = 0o660;
/// Mode for the tree root
pub const ROOT_MODE: u32 = 0o750;
/// Mode for the manifest once written
pub const MANIFEST_MODE: u32 = 0o444;

/// Subtrees that get ownership and mode normalization
pub const NORMALIZED_SUBTREES: [&str; 2] = [SECRET_DIR, DATA_DIR];

/// A relative path that stays inside the deployment tree
///
/// Rejects absolute paths, `..` components and empty paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TreePath(PathBuf);

impl TreePath {
    pub fn new(raw: impl AsRef<Path>) -> Result<Self, String> {
        let raw = raw.as_ref();
        let mut clean = PathBuf::new();
        for component in raw.components() {
            match component {
                Component::Normal(part) => clean.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    return Err(format!("'{}' escapes the deployment tree", raw.display()))
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(format!("'{}' must be relative", raw.display()))
                }
            }
        }
        if clean.as_os_str().is_empty() {
            return Err("empty tree path".to_string());
        }
        Ok(Self(clean))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Resolve against a tree root
    pub fn under(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }
}

impl TryFrom<String> for TreePath {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TreePath> for String {
    fn from(value: TreePath) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

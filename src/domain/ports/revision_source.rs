//! RevisionSource port - obtains a tagged revision of a repository
//!
//! Implementations:
//! - `GitCliSource` - shells out to the `git` binary

use std::path::Path;

use crate::error::DeployResult;

/// Produces a working tree at exactly one tagged revision
pub trait RevisionSource {
    /// Short name for logs and events
    fn name(&self) -> &'static str;

    /// Write the content of `repository` at `tag` into `destination`
    ///
    /// `destination` must be empty or absent. Fails with `NoSuchTag` when the
    /// tag is not in the repository's tag set and `SourceUnavailable` on any
    /// transport or access failure. Partial content may remain on failure;
    /// the caller owns `destination` and removes it.
    fn materialize(&self, destination: &Path, repository: &str, tag: &str) -> DeployResult<()>;
}

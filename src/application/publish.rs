//! Publisher
//!
//! Moves a staged tree to `<destination>/<name>-<tag>-<timestamp>` with a
//! single rename. Nothing is ever written at the final path incrementally.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::DeploymentRequest;
use crate::domain::ports::{DeployEvent, DeployEventSink, NoopEventSink};
use crate::error::{DeployError, DeployResult};

use super::StagedTree;

/// Publishes staged trees into the destination base path
pub struct Publisher {
    events: Arc<dyn DeployEventSink>,
}

impl Default for Publisher {
    fn default() -> Self {
        Self::new()
    }
}

impl Publisher {
    pub fn new() -> Self {
        Self {
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn DeployEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Rename `staged` into place and return the absolute final path
    ///
    /// An occupied final path is a `PublishConflict`; no alternative name is
    /// tried. On any failure the staged tree is removed.
    pub fn publish(
        &self,
        staged: StagedTree,
        request: &DeploymentRequest,
    ) -> DeployResult<PathBuf> {
        let name = request.published_name();
        let conflict = |destination: PathBuf, message: String| DeployError::PublishConflict {
            destination,
            message,
        };

        let base = match fs::canonicalize(request.destination()) {
            Ok(base) => base,
            Err(e) => {
                let err = conflict(request.destination().join(name.as_str()), e.to_string());
                return Err(self.abandon(staged, err));
            }
        };
        let target = base.join(name.as_str());

        if target.symlink_metadata().is_ok() {
            let err = conflict(target, "destination already exists".to_string());
            return Err(self.abandon(staged, err));
        }

        if let Err(e) = fs::rename(staged.path(), &target) {
            let err = conflict(target, e.to_string());
            return Err(self.abandon(staged, err));
        }

        staged.release();
        tracing::info!(path = %target.display(), "deployment published");
        self.events.on_event(DeployEvent::Published {
            path: target.clone(),
        });
        Ok(target)
    }

    fn abandon(&self, staged: StagedTree, err: DeployError) -> DeployError {
        self.events.on_event(DeployEvent::StagingDiscarded {
            staging: staged.path().to_path_buf(),
            reason: err.to_string(),
        });
        staged.discard();
        err
    }
}

//! Staging Pipeline
//!
//! Builds a complete deployment tree in a private temporary directory:
//!
//! 1. Materialize the tagged revision
//! 2. Overlay the config file
//! 3. Overlay the data directory
//! 4. Create required empty files
//! 5. Normalize ownership and modes
//! 6. Write the manifest
//!
//! Any failure removes the temporary directory before the error is returned,
//! so a staged tree is either complete or gone.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::{DeploymentRequest, Manifest};
use crate::domain::ports::{
    DeployEvent, DeployEventSink, NoopEventSink, PipelineStep, RevisionSource,
};
use crate::error::DeployResult;
use crate::infrastructure::fs::{self as tree_fs, StagingDir};

use super::CancelFlag;

/// A fully populated, correctly permissioned tree awaiting publish
///
/// Dropping it removes the tree.
#[derive(Debug)]
pub struct StagedTree {
    dir: StagingDir,
}

impl StagedTree {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Remove the tree, logging cleanup failures
    pub fn discard(self) {
        self.dir.discard();
    }

    /// Stop managing the tree (after it was moved elsewhere)
    pub(crate) fn release(self) -> PathBuf {
        self.dir.release()
    }
}

/// Stage use case - runs the staging pipeline for one request
pub struct StageUseCase<RS>
where
    RS: RevisionSource,
{
    source: RS,
    events: Arc<dyn DeployEventSink>,
    cancel: CancelFlag,
}

impl<RS> StageUseCase<RS>
where
    RS: RevisionSource,
{
    pub fn new(source: RS) -> Self {
        Self {
            source,
            events: Arc::new(NoopEventSink),
            cancel: CancelFlag::new(),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn DeployEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Stage `request` into a fresh temporary directory
    pub fn stage(&self, request: &DeploymentRequest) -> DeployResult<StagedTree> {
        self.cancel.check()?;
        let staging = StagingDir::create(request.staging_parent())?;

        self.events.on_event(DeployEvent::Started {
            repository: request.source().to_string(),
            tag: request.tag().to_string(),
            staging: staging.path().to_path_buf(),
        });

        match self.populate(staging.path(), request) {
            Ok(()) => Ok(StagedTree { dir: staging }),
            Err(e) => {
                self.events.on_event(DeployEvent::StagingDiscarded {
                    staging: staging.path().to_path_buf(),
                    reason: e.to_string(),
                });
                staging.discard();
                Err(e)
            }
        }
    }

    fn populate(&self, root: &Path, request: &DeploymentRequest) -> DeployResult<()> {
        self.step(PipelineStep::Materialize, || {
            self.source.materialize(root, request.source(), request.tag())
        })?;
        self.step(PipelineStep::ApplyConfig, || {
            tree_fs::apply_config(root, request.config_file()).map(|_| ())
        })?;
        self.step(PipelineStep::ApplyData, || {
            tree_fs::apply_data(root, request.data_dir()).map(|_| ())
        })?;
        self.step(PipelineStep::EnsureFiles, || {
            tree_fs::ensure_files(root, request.ensure_files())
        })?;
        self.step(PipelineStep::Normalize, || {
            tree_fs::normalize(root, request.uid(), request.gid()).map(|_| ())
        })?;
        self.step(PipelineStep::WriteManifest, || {
            tree_fs::write_manifest(root, &Manifest::from_request(request)).map(|_| ())
        })?;
        Ok(())
    }

    fn step(
        &self,
        step: PipelineStep,
        run: impl FnOnce() -> DeployResult<()>,
    ) -> DeployResult<()> {
        self.cancel.check()?;
        tracing::debug!(step = step.as_str(), source = self.source.name(), "running step");
        run()?;
        self.events.on_event(DeployEvent::StepCompleted { step });
        Ok(())
    }
}

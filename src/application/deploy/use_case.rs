//! Deploy Use Case
//!
//! Orchestrates the full flow:
//! 1. Stage the request into a private temporary tree
//! 2. Bail out (removing the tree) if cancellation was requested
//! 3. Publish the tree with a single rename
//!
//! This use case is pure orchestration; the steps live in `StageUseCase`
//! and `Publisher`.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::DeploymentRequest;
use crate::domain::ports::{DeployEvent, DeployEventSink, NoopEventSink, RevisionSource};
use crate::error::{DeployError, DeployResult};

use crate::application::{CancelFlag, Publisher, StageUseCase};

/// Deploy use case - stage and publish one request
pub struct DeployUseCase<RS>
where
    RS: RevisionSource,
{
    stage: StageUseCase<RS>,
    publisher: Publisher,
    events: Arc<dyn DeployEventSink>,
    cancel: CancelFlag,
}

impl<RS> DeployUseCase<RS>
where
    RS: RevisionSource,
{
    pub fn new(source: RS) -> Self {
        Self::with_parts(source, Arc::new(NoopEventSink), CancelFlag::new())
    }

    pub fn with_parts(source: RS, events: Arc<dyn DeployEventSink>, cancel: CancelFlag) -> Self {
        Self {
            stage: StageUseCase::new(source)
                .with_events(events.clone())
                .with_cancel(cancel.clone()),
            publisher: Publisher::new().with_events(events.clone()),
            events,
            cancel,
        }
    }

    /// Run the deployment, returning the absolute published path
    pub fn execute(&self, request: &DeploymentRequest) -> DeployResult<PathBuf> {
        tracing::info!(
            repository = request.source(),
            tag = request.tag(),
            timestamp = %request.timestamp(),
            "deploying"
        );
        let staged = self.stage.stage(request)?;

        if self.cancel.is_cancelled() {
            let err = DeployError::Cancelled;
            self.events.on_event(DeployEvent::StagingDiscarded {
                staging: staged.path().to_path_buf(),
                reason: err.to_string(),
            });
            staged.discard();
            return Err(err);
        }

        self.publisher.publish(staged, request)
    }
}

//! Log Event Sink
//!
//! Forwards deploy events to `tracing` so they show up with `-v`.

use crate::domain::ports::{DeployEvent, DeployEventSink};

/// Event sink that logs through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEventSink;

impl DeployEventSink for LogEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                repository,
                tag,
                staging,
            } => tracing::info!(
                repository = repository.as_str(),
                tag = tag.as_str(),
                staging = %staging.display(),
                "staging started"
            ),
            DeployEvent::StepCompleted { step } => {
                tracing::info!(step = step.as_str(), "step completed")
            }
            DeployEvent::StagingDiscarded { staging, reason } => tracing::warn!(
                staging = %staging.display(),
                reason = reason.as_str(),
                "staging discarded"
            ),
            DeployEvent::Published { path } => {
                tracing::info!(path = %path.display(), "published")
            }
        }
    }
}

//! Deploy Event Port
//!
//! Provides an observable interface for the staging and publish pipeline.
//! Enables progress reporting, JSON event streams, and debugging.

use std::fmt;
use std::path::PathBuf;

/// One step of the staging pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    Materialize,
    ApplyConfig,
    ApplyData,
    EnsureFiles,
    Normalize,
    WriteManifest,
}

impl PipelineStep {
    pub const ALL: [PipelineStep; 6] = [
        PipelineStep::Materialize,
        PipelineStep::ApplyConfig,
        PipelineStep::ApplyData,
        PipelineStep::EnsureFiles,
        PipelineStep::Normalize,
        PipelineStep::WriteManifest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStep::Materialize => "materialize",
            PipelineStep::ApplyConfig => "apply_config",
            PipelineStep::ApplyData => "apply_data",
            PipelineStep::EnsureFiles => "ensure_files",
            PipelineStep::Normalize => "normalize",
            PipelineStep::WriteManifest => "write_manifest",
        }
    }
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event emitted during a deployment
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Staging started in a fresh temporary directory
    Started {
        repository: String,
        tag: String,
        staging: PathBuf,
    },

    /// A pipeline step finished successfully
    StepCompleted { step: PipelineStep },

    /// The staging tree was removed after a failure
    StagingDiscarded { staging: PathBuf, reason: String },

    /// The tree was renamed into place
    Published { path: PathBuf },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - `LogEventSink`: tracing output on stderr
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: Silent operation
pub trait DeployEventSink: Send + Sync {
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingEventSink;
    use super::*;

    #[test]
    fn recording_sink_captures_steps_in_order() {
        let sink = RecordingEventSink::default();
        for step in PipelineStep::ALL {
            sink.on_event(DeployEvent::StepCompleted { step });
        }
        assert_eq!(sink.steps(), PipelineStep::ALL.to_vec());
        assert!(!sink.discarded());
    }

    #[test]
    fn step_names_are_snake_case() {
        assert_eq!(PipelineStep::WriteManifest.to_string(), "write_manifest");
        assert_eq!(PipelineStep::ApplyConfig.as_str(), "apply_config");
    }

    #[test]
    fn noop_sink_accepts_everything() {
        NoopEventSink.on_event(DeployEvent::Published {
            path: PathBuf::from("/srv/x"),
        });
    }
}

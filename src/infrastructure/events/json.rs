//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON form of an event
pub fn event_to_json(event: &DeployEvent) -> serde_json::Value {
    match event {
        DeployEvent::Started {
            repository,
            tag,
            staging,
        } => serde_json::json!({
            "event": "start",
            "command": "deploy",
            "repository": repository,
            "tag": tag,
            "staging": staging.display().to_string(),
        }),

        DeployEvent::StepCompleted { step } => serde_json::json!({
            "event": "step_completed",
            "command": "deploy",
            "step": step.as_str(),
        }),

        DeployEvent::StagingDiscarded { staging, reason } => serde_json::json!({
            "event": "staging_discarded",
            "command": "deploy",
            "staging": staging.display().to_string(),
            "reason": reason,
        }),

        DeployEvent::Published { path } => serde_json::json!({
            "event": "published",
            "command": "deploy",
            "path": path.display().to_string(),
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.write_event(event_to_json(&event));
    }
}

//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::{CancelFlag, DeployUseCase};
use crate::domain::ports::DeployEventSink;
use crate::infrastructure::{GitCliSource, JsonEventSink, LogEventSink};

use super::OutputFormat;

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<GitCliSource>;

/// Event sink for an output format
///
/// JSON mode streams NDJSON events on stdout; text mode only logs them.
pub fn create_event_sink(format: OutputFormat) -> Arc<dyn DeployEventSink> {
    match format {
        OutputFormat::Json => Arc::new(JsonEventSink::stdout()),
        OutputFormat::Text => Arc::new(LogEventSink),
    }
}

/// Create a deploy use case with all dependencies wired up
pub fn create_deploy_use_case(
    git: &Path,
    format: OutputFormat,
    cancel: CancelFlag,
) -> ConcreteDeployUseCase {
    DeployUseCase::with_parts(GitCliSource::new(git), create_event_sink(format), cancel)
}

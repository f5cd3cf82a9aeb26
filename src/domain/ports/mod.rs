//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod identity_resolver;
pub mod revision_source;

pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink, PipelineStep};
pub use identity_resolver::IdentityResolver;
pub use revision_source::RevisionSource;

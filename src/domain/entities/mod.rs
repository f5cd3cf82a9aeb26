//! Domain Entities
//!
//! - `DeploymentRequest` - immutable inputs of one run
//! - `Manifest` - provenance record written into every tree

mod manifest;
mod request;

pub use manifest::Manifest;
pub use request::{DeploymentRequest, DeploymentRequestBuilder, DEFAULT_DEPLOYMENT_NAME};

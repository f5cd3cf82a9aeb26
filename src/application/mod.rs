//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `StageUseCase` - Builds a complete tree in a private temporary directory
//! - `Publisher` - Renames a staged tree into place
//! - `DeployUseCase` - Stage + publish
//! - `inspect` - Reads a published tree's manifest

mod cancel;
pub mod deploy;
mod inspect;
mod publish;
mod stage;

pub use cancel::CancelFlag;
pub use deploy::DeployUseCase;
pub use inspect::inspect;
pub use publish::Publisher;
pub use stage::{StageUseCase, StagedTree};

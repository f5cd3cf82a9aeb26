//! Domain Layer
//!
//! Pure types and interfaces of a deployment, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - `DeploymentRequest`, `Manifest`
//! - `value_objects/` - `Timestamp`, `IdentitySpec`, `PublishedName`, tree layout
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod value_objects;

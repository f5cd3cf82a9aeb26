//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Rendering of published paths, manifests and errors
//!
//! ## Usage
//!
//! ```ignore
//! use tagdeploy::presentation::{factory, OutputFormat};
//!
//! let use_case =
//!     factory::create_deploy_use_case(Path::new("git"), OutputFormat::Text, cancel);
//! let published = use_case.execute(&request)?;
//! ```

pub mod factory;
pub mod output;

pub use factory::create_deploy_use_case;
pub use output::OutputFormat;

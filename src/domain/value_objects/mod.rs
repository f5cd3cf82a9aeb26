//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod identity;
pub mod layout;
mod published_name;
mod settings_warning;
mod timestamp;

pub use identity::{IdentitySpec, IdentitySpecError};
pub use layout::TreePath;
pub use published_name::{validate_name_component, PublishedName};
pub use settings_warning::SettingsWarning;
pub use timestamp::Timestamp;

//! Settings module for tagdeploy
//!
//! Resolution order:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (TAGDEPLOY_*)
//! 3. Settings file ($XDG_CONFIG_HOME/tagdeploy/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::SettingsWarning;

pub use loader::{
    apply_env_overrides, default_settings_path, load_or_default, load_with_warnings,
    with_env_overrides, SETTINGS_PATH_VAR,
};
pub use types::{DeploySettings, IdentitySettings, Settings, SourceSettings};

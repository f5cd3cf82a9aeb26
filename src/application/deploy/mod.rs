//! Deploy Module
//!
//! Stage then publish, as one call.
//!
//! ## Usage
//!
//! ```ignore
//! use tagdeploy::application::DeployUseCase;
//! use tagdeploy::infrastructure::GitCliSource;
//!
//! let use_case = DeployUseCase::new(GitCliSource::default());
//! let published = use_case.execute(&request)?;
//! ```

mod use_case;

pub use use_case::DeployUseCase;

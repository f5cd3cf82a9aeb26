//! Common test utilities for tagdeploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment with a tagged git fixture repository
//! - Assertion helpers for published trees
//! - Fixtures: Reusable content constants

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;

//! Command handlers for the tagdeploy binary

pub mod deploy;
pub mod inspect;

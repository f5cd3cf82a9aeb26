//! Deploy event sinks

mod json;
mod log;

pub use json::{event_to_json, JsonEventSink};
pub use log::LogEventSink;

//! Event Sink Implementations
//!
//! Provides concrete implementations of StagingEventSink:
//! - ConsoleEventSink: Human-readable progress
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::{render, ConsoleEventSink};
pub use json::JsonEventSink;

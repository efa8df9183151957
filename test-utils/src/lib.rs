//! Helpers shared by the integration tests of the workspace crates.

pub mod fixtures;
pub mod sink_mock;

pub use sink_mock::EventSink;

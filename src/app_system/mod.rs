//! Application wiring: tracing setup and the demo run.

pub mod demo;
pub mod telemetry;

pub use demo::*;
pub use telemetry::*;

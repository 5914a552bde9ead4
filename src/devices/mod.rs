//! Device interfaces driven by the mode controller
//!
//! The mode state machine only ever talks to the display and the telemetry
//! aggregator through these traits; the concrete drivers live behind them
//! and can be swapped for mocks in host tests.

pub mod display;
pub mod telemetry;

pub use display::{DisplayInterface, DisplayLayout};
pub use telemetry::TelemetrySource;

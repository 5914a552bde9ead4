//! Wrist unit device layer
//!
//! Device-level orchestration for the race timer: the operating-mode
//! enumeration and the mode state machine that ties display, telemetry and
//! the GPS/race sub-machines together.
//!
//! ## Modules
//!
//! - `mode`: Operating modes, per-mode state and timing constants
//! - `mode_manager`: Event dispatch, transition engine and mode handlers

pub mod mode;
pub mod mode_manager;

// Re-export commonly used types
pub use mode::OperatingMode;
pub use mode_manager::ModeManager;

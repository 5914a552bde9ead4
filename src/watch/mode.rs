//! Operating modes and per-mode state
//!
//! The unit is always in exactly one of four top-level modes:
//!
//! - **NoSignal**: searching for a GPS fix
//! - **Ready**: fix held, waiting for the start button
//! - **Race**: actively timing a race
//! - **Review**: showing the results of the last race
//!
//! Each mode owns a small amount of local state, grouped into a struct here
//! and reset explicitly when the mode is entered.

/// Minutes without a GPS solution before the timeout event fires
pub const NO_SIGNAL_TIMEOUT_MINUTES: u16 = 20;

/// Timeout expressed in whole seconds (one `Blink` per second)
pub const NO_SIGNAL_TIMEOUT_SECONDS: u16 = NO_SIGNAL_TIMEOUT_MINUTES * 60;

/// Slow blinks between average/max speed toggles in Review
pub const BLINKS_PER_MAX_AVG_TOGGLE: u8 = 2;

/// Top-level operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Searching for a GPS fix
    NoSignal,
    /// Fix held, waiting for the start button
    Ready,
    /// Actively timing a race
    Race,
    /// Reviewing the last race
    Review,
}

impl OperatingMode {
    /// Mode name for logging and telemetry
    pub fn name(&self) -> &'static str {
        match self {
            OperatingMode::NoSignal => "NoSignal",
            OperatingMode::Ready => "Ready",
            OperatingMode::Race => "Race",
            OperatingMode::Review => "Review",
        }
    }
}

/// NoSignal-local state, reset on mode entry
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSignalState {
    /// Whole seconds spent without a solution since entering NoSignal
    pub seconds_without_signal: u16,
}

/// Review-local state, reset on mode entry
#[derive(Debug, Clone, Copy)]
pub struct ReviewState {
    /// Average speed snapshotted on entry (knots)
    pub average_speed: f32,
    /// Maximum speed snapshotted on entry (knots)
    pub max_speed: f32,
    /// True while the average (not the max) speed is displayed
    pub show_average: bool,
    /// Slow blinks since the last average/max toggle
    pub blink_count: u8,
}

impl Default for ReviewState {
    fn default() -> Self {
        // Review always starts on the average speed
        Self {
            average_speed: 0.0,
            max_speed: 0.0,
            show_average: true,
            blink_count: 0,
        }
    }
}

//! GPS acquisition contract
//!
//! The acquisition machine tracks satellite lock on its own; the mode state
//! machine only ever asks it one question, and asks it at the moment the
//! answer is needed.

/// GPS acquisition status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpsStatus {
    /// A position solution is currently held
    Available,
    /// No position solution
    Unavailable,
}

/// Synchronous status query into the GPS acquisition machine
pub trait GpsAcquisition {
    /// Current acquisition status, sampled at call time (never cached)
    fn status(&self) -> GpsStatus;
}

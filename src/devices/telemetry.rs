//! Telemetry aggregation contract
//!
//! Speed, distance and elapsed-time aggregates accumulated from the GPS
//! stream. The mode state machine reads them for display and clears them
//! when a race starts; the accumulation itself happens elsewhere.

/// Race telemetry queries and aggregate resets
pub trait TelemetrySource {
    /// Current speed over ground in knots
    fn current_speed(&self) -> f32;

    /// Distance covered since the last reset, in nautical miles
    fn current_distance(&self) -> f32;

    /// Average speed since the last reset, in knots
    fn current_average_speed(&self) -> f32;

    /// Maximum speed since the last reset, in knots
    fn current_max_speed(&self) -> f32;

    /// Clear the accumulated distance
    fn reset_distance(&mut self);

    /// Clear the running average speed
    fn reset_average_speed(&mut self);

    /// Clear the recorded maximum speeds
    fn reset_max_speeds(&mut self);

    /// Restart elapsed-time tracking
    fn reset_elapsed_time(&mut self);
}

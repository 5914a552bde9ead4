//! Display contract
//!
//! Segment-display abstraction for the wrist unit. The mode state machine
//! drives the display exclusively through this trait; digit rendering, icon
//! placement and the display bus are driver concerns behind it.
//!
//! Methods are infallible by contract: a display driver absorbs or logs its
//! own transport errors rather than surfacing them into mode logic.

use crate::core::events::Event;

/// Top-level display layout
///
/// Selects which mode annunciator and field arrangement the display shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayLayout {
    /// Ready-to-race layout: live speed, zero distance, zero elapsed time
    Ready,
    /// Race results layout: distance, average/max speed, elapsed time
    Results,
    /// No layout; mode annunciators off
    Clear,
}

/// Display operations the mode state machine drives
pub trait DisplayInterface {
    /// Select the top-level layout and its mode annunciator
    fn set_layout(&mut self, layout: DisplayLayout);

    /// Blank the main content area
    fn clear_content_area(&mut self);

    /// Show a distance value in nautical miles
    fn show_distance(&mut self, nautical_miles: f32);

    /// Show the zero-distance placeholder
    fn show_zero_distance(&mut self);

    /// Show a speed value in knots
    fn show_speed(&mut self, knots: f32);

    /// Show the zero elapsed-time placeholder
    fn show_zero_elapsed_time(&mut self);

    /// Show the elapsed time held by the race timer
    fn show_elapsed_time(&mut self);

    /// Show an average speed value in knots
    fn show_average_speed(&mut self, knots: f32);

    /// Show a maximum speed value in knots
    fn show_max_speed(&mut self, knots: f32);

    /// Turn on the satellite-search indicator
    fn activate_searching_indicator(&mut self);

    /// Turn off the satellite-search indicator
    fn deactivate_searching_indicator(&mut self);

    /// Advance the search animation one step, keyed by the event identity
    fn animate_searching(&mut self, event: Event);
}

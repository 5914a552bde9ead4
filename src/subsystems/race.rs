//! Race timing contract
//!
//! The race machine owns the race timer and its own internal states; while
//! the unit is in Race mode the mode state machine acts as a thin shell,
//! forwarding every event into it unchanged.

use crate::core::events::Event;

/// Race timing sub-state-machine driven by the Race operating mode
pub trait RaceStateMachine {
    /// Reset and start the race machine (fired on Race mode entry)
    fn start(&mut self);

    /// Feed one event through the race machine
    fn run(&mut self, event: Event);

    /// Stop the race timer
    ///
    /// Distinct from `run(Event::Exit)`: stopping the timer freezes the
    /// elapsed time, while the forwarded Exit lets the machine release its
    /// own resources.
    fn stop(&mut self);
}

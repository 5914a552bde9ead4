//! Event codes and the software event queue
//!
//! Events are discrete occurrences delivered to the mode state machine one
//! per invocation by an external, single-threaded pump. Handlers may
//! synthesize events of their own (see [`Event::NoSignalTimeout`]); those
//! are appended to a fixed-capacity FIFO and re-injected by the pump on a
//! later cycle, so delivery stays strictly serial and the machine is never
//! invoked reentrantly.

use heapless::Deque;

/// Capacity of the software event queue
const SOFT_EVENT_QUEUE_SIZE: usize = 8;

/// Discrete event delivered to the mode state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Nothing pending; handlers treat this as an idle housekeeping tick
    NoEvent,
    /// Lifecycle marker: the mode is being entered
    Entry,
    /// Lifecycle marker: the mode is being left
    Exit,
    /// Slow periodic tick (1 Hz)
    Blink,
    /// Fast periodic tick
    FastBlink,
    /// GPS subsystem acquired a position solution
    GpsSolutionFound,
    /// GPS subsystem lost its position solution
    GpsSolutionLost,
    /// Power/mode button pressed
    ButtonPressed,
    /// Software-generated: no GPS solution for the full timeout window
    NoSignalTimeout,
}

/// Fixed-capacity FIFO for software-generated events
///
/// Pushing onto a full queue drops the event with a warning instead of
/// blocking; the pump drains the queue between hardware events.
pub struct EventQueue {
    queue: Deque<Event, SOFT_EVENT_QUEUE_SIZE>,
}

impl EventQueue {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            queue: Deque::new(),
        }
    }

    /// Append an event, dropping it if the queue is full
    pub fn push(&mut self, event: Event) {
        if self.queue.push_back(event).is_err() {
            crate::log_warn!("Software event queue full, dropping {:?}", event);
        }
    }

    /// Remove and return the oldest queued event
    pub fn pop(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True if no events are queued
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

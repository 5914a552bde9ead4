//! Mode state machine
//!
//! Owns the current operating mode and routes every incoming event through
//! the active mode's handler before consulting that mode's transition
//! edges. A transition runs exit → mode switch → entry with nothing in
//! between; the machine is synchronous and never re-entered.
//!
//! ## Responsibilities
//!
//! - Dispatch each event to the active mode handler, `NoEvent` included
//! - Resolve transition edges and sequence Exit/Entry pairs
//! - Hold per-mode local state, reset on mode entry
//! - Queue software-generated events for later pump cycles
//!
//! ## Event flow
//!
//! An external pump delivers one event per call to [`ModeManager::run_event`].
//! Handlers never call back into the machine; the one self-generated event
//! (the NoSignal timeout) goes through the software event queue and is
//! re-injected by the pump on a later cycle.

use crate::core::events::{Event, EventQueue};
use crate::devices::display::{DisplayInterface, DisplayLayout};
use crate::devices::telemetry::TelemetrySource;
use crate::subsystems::gps::{GpsAcquisition, GpsStatus};
use crate::subsystems::race::RaceStateMachine;

use super::mode::{
    NoSignalState, OperatingMode, ReviewState, BLINKS_PER_MAX_AVG_TOGGLE,
    NO_SIGNAL_TIMEOUT_SECONDS,
};

/// Mode state machine for the race timer
///
/// Instantiated once per device. Owns the mode variable, the per-mode local
/// state and the collaborator handles; everything is touched from the single
/// pump call path, so no locking is involved.
pub struct ModeManager<D, T, G, R>
where
    D: DisplayInterface,
    T: TelemetrySource,
    G: GpsAcquisition,
    R: RaceStateMachine,
{
    /// Current operating mode, mutated only by the transition engine
    mode: OperatingMode,
    display: D,
    telemetry: T,
    gps: G,
    race: R,
    /// NoSignal-local state
    no_signal: NoSignalState,
    /// Review-local state
    review: ReviewState,
    /// Software-generated events awaiting re-injection by the pump
    soft_events: EventQueue,
}

impl<D, T, G, R> ModeManager<D, T, G, R>
where
    D: DisplayInterface,
    T: TelemetrySource,
    G: GpsAcquisition,
    R: RaceStateMachine,
{
    /// Create the machine in `NoSignal` without firing entry side effects
    ///
    /// Call [`start`](Self::start) once at boot to fire them.
    pub fn new(display: D, telemetry: T, gps: G, race: R) -> Self {
        Self {
            mode: OperatingMode::NoSignal,
            display,
            telemetry,
            gps,
            race,
            no_signal: NoSignalState::default(),
            review: ReviewState::default(),
            soft_events: EventQueue::new(),
        }
    }

    /// Force the mode to `NoSignal` and run one Entry dispatch
    ///
    /// Ensures the initial mode's entry side effects fire exactly once at
    /// boot, symmetric with any later entry.
    pub fn start(&mut self) {
        self.mode = OperatingMode::NoSignal;
        self.run_event(Event::Entry);
    }

    /// Current operating mode
    pub fn current_mode(&self) -> OperatingMode {
        self.mode
    }

    /// Drain one queued software event, if any
    ///
    /// The pump feeds drained events back through
    /// [`run_event`](Self::run_event) on a later cycle, never synchronously.
    pub fn next_software_event(&mut self) -> Option<Event> {
        self.soft_events.pop()
    }

    /// Feed one event through the machine
    ///
    /// The active mode's handler always sees the event, `NoEvent` included
    /// (idle housekeeping such as the search animation). `NoEvent` skips the
    /// transition lookup; every other event is checked against the current
    /// mode's edges and unlisted events are silently ignored.
    ///
    /// Returns the event unchanged for caller-side chaining.
    pub fn run_event(&mut self, event: Event) -> Event {
        self.dispatch(self.mode, event);

        if event != Event::NoEvent {
            if let Some(next) = self.next_mode(event) {
                self.transition(next);
            }
        }

        event
    }

    /// Transition edge lookup for the current mode
    fn next_mode(&self, event: Event) -> Option<OperatingMode> {
        match (self.mode, event) {
            (OperatingMode::NoSignal, Event::GpsSolutionFound) => Some(OperatingMode::Ready),
            (OperatingMode::Ready, Event::GpsSolutionLost) => Some(OperatingMode::NoSignal),
            (OperatingMode::Ready, Event::ButtonPressed) => Some(OperatingMode::Race),
            (OperatingMode::Race, Event::ButtonPressed) => Some(OperatingMode::Review),
            (OperatingMode::Review, Event::ButtonPressed) => {
                // Destination depends on the live GPS status at the moment
                // of the button press, never on a cached value.
                if self.gps.status() == GpsStatus::Available {
                    Some(OperatingMode::Ready)
                } else {
                    Some(OperatingMode::NoSignal)
                }
            }
            _ => None,
        }
    }

    /// Exit the old mode, switch, enter the new one
    ///
    /// Nothing else runs between the Exit and Entry dispatches.
    fn transition(&mut self, next: OperatingMode) {
        crate::log_info!("Mode transition: {} -> {}", self.mode.name(), next.name());

        self.dispatch(self.mode, Event::Exit);
        self.mode = next;
        self.dispatch(self.mode, Event::Entry);
    }

    /// Route an event to the given mode's handler
    fn dispatch(&mut self, mode: OperatingMode, event: Event) {
        match mode {
            OperatingMode::NoSignal => self.during_no_signal(event),
            OperatingMode::Ready => self.during_ready(event),
            OperatingMode::Race => self.during_race(event),
            OperatingMode::Review => self.during_review(event),
        }
    }

    /// NoSignal: search animation plus the signal-loss timeout counter
    fn during_no_signal(&mut self, event: Event) {
        match event {
            Event::Entry => {
                self.no_signal = NoSignalState::default();
                self.display.activate_searching_indicator();
            }
            Event::Exit => {
                self.display.deactivate_searching_indicator();
            }
            _ => {
                self.display.animate_searching(event);
                if event == Event::Blink {
                    self.no_signal.seconds_without_signal += 1;
                    if self.no_signal.seconds_without_signal == NO_SIGNAL_TIMEOUT_SECONDS {
                        crate::log_warn!(
                            "No GPS solution for {} seconds",
                            NO_SIGNAL_TIMEOUT_SECONDS
                        );
                        self.soft_events.push(Event::NoSignalTimeout);
                    }
                }
            }
        }
    }

    /// Ready: live speed display while waiting for the start button
    fn during_ready(&mut self, event: Event) {
        match event {
            Event::Entry => {
                self.display.set_layout(DisplayLayout::Ready);
                self.display.show_zero_distance();
                self.display.show_speed(self.telemetry.current_speed());
                self.display.show_zero_elapsed_time();
            }
            Event::Exit => {
                self.display.set_layout(DisplayLayout::Clear);
                self.display.clear_content_area();
            }
            Event::FastBlink => {
                self.display.show_speed(self.telemetry.current_speed());
            }
            _ => {}
        }
    }

    /// Race: thin shell around the race timing machine
    fn during_race(&mut self, event: Event) {
        match event {
            Event::Entry => {
                self.telemetry.reset_max_speeds();
                self.telemetry.reset_distance();
                self.telemetry.reset_average_speed();
                self.telemetry.reset_elapsed_time();
                self.race.start();
            }
            Event::Exit => {
                self.race.stop();
                self.display.clear_content_area();
                self.race.run(event);
            }
            _ => {
                self.race.run(event);
            }
        }
    }

    /// Review: race results snapshot, blinking between average and max speed
    fn during_review(&mut self, event: Event) {
        match event {
            Event::Entry => {
                // Snapshot once; the displayed values stay frozen even if
                // the aggregates keep moving underneath.
                self.review = ReviewState {
                    average_speed: self.telemetry.current_average_speed(),
                    max_speed: self.telemetry.current_max_speed(),
                    ..ReviewState::default()
                };
                self.display.set_layout(DisplayLayout::Results);
                self.display.show_distance(self.telemetry.current_distance());
                self.display.show_average_speed(self.review.average_speed);
                self.display.show_elapsed_time();
            }
            Event::Exit => {
                self.display.set_layout(DisplayLayout::Clear);
                self.display.clear_content_area();
            }
            Event::Blink => {
                self.review.blink_count += 1;
                if self.review.blink_count == BLINKS_PER_MAX_AVG_TOGGLE {
                    self.review.show_average = !self.review.show_average;
                    self.review.blink_count = 0;

                    if self.review.show_average {
                        self.display.show_average_speed(self.review.average_speed);
                    } else {
                        self.display.show_max_speed(self.review.max_speed);
                    }
                }
            }
            _ => {}
        }
    }

    /// Display handle (host tests)
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Telemetry handle (host tests)
    pub fn telemetry(&self) -> &T {
        &self.telemetry
    }

    /// Race machine handle (host tests)
    pub fn race(&self) -> &R {
        &self.race
    }

    /// Mutable GPS handle (host tests)
    pub fn gps_mut(&mut self) -> &mut G {
        &mut self.gps
    }
}

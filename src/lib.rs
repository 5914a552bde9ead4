#![cfg_attr(not(test), no_std)]

//! regatta - Operating-mode controller for GPS sailing race timers
//!
//! This library provides the top-level mode state machine for a GPS race
//! timing wrist unit, together with the contracts it drives: the segment
//! display, the speed/distance telemetry aggregator, and the GPS-acquisition
//! and race-timing sub-machines.

// Crate infrastructure (events, logging)
pub mod core;

// Device interfaces driven by the mode controller
pub mod devices;

// Peer sub-state-machine contracts
pub mod subsystems;

// Device layer: operating modes and the mode state machine
pub mod watch;

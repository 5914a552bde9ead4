//! Peer sub-state-machine contracts
//!
//! The GPS-acquisition and race-timing machines keep their own internal
//! state; the mode state machine drives them only through the contracts
//! defined here.

pub mod gps;
pub mod race;

pub use gps::{GpsAcquisition, GpsStatus};
pub use race::RaceStateMachine;

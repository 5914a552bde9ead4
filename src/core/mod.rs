//! Core infrastructure
//!
//! This module contains crate infrastructure shared by the device layer:
//! event codes, the software event queue, and the logging macros.

pub mod events;
pub mod logging;

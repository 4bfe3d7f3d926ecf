//! Pulse scheduling for Morse emission

pub mod scheduler;

pub use scheduler::{PulseEvent, PulseScheduler, MAX_PULSE_EVENTS};

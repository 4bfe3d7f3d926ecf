//! Symbol-to-pulse scheduling
//!
//! Expands a Morse symbol into timed on/off events and dispatches them
//! through the output seams. Every mark is followed by the intra-symbol
//! gap; the pause after the whole character belongs to the converter
//! loop, not to the scheduler.

use heapless::Vec;

use crate::config::ConverterConfig;
use crate::morse::{Mark, Symbol, MAX_SYMBOL_MARKS};
use crate::traits::{Clock, IntensityOutput, ToneOutput};

/// Upper bound on events per symbol (one active + one off per mark)
pub const MAX_PULSE_EVENTS: usize = 2 * MAX_SYMBOL_MARKS;

/// One timed output step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseEvent {
    /// Lamp level for the step (0 = off)
    pub level: u8,
    /// Step duration in milliseconds
    pub duration_ms: u32,
}

/// Pulse scheduler
///
/// Holds a copy of the converter configuration and turns symbols into
/// pulse trains.
#[derive(Debug, Clone, Copy)]
pub struct PulseScheduler {
    config: ConverterConfig,
}

impl PulseScheduler {
    /// Create a scheduler for the given configuration
    pub const fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Expand a symbol into its pulse events
    ///
    /// For each mark: an active event at the configured brightness (dot
    /// or dash duration), then an off event for the gap duration.
    pub fn steps(&self, symbol: Symbol) -> Vec<PulseEvent, MAX_PULSE_EVENTS> {
        let mut events = Vec::new();
        for mark in symbol.marks() {
            let active_ms = match mark {
                Mark::Dot => self.config.timings.dot_ms,
                Mark::Dash => self.config.timings.dash_ms,
            };
            let _ = events.push(PulseEvent {
                level: self.config.brightness,
                duration_ms: active_ms,
            });
            let _ = events.push(PulseEvent {
                level: 0,
                duration_ms: self.config.timings.gap_ms,
            });
        }
        events
    }

    /// Emit a symbol on the output channels
    ///
    /// Dispatches the schedule in order. The lamp follows every event;
    /// when the audible flag is set, the tone starts with each active
    /// event (carrying the mark duration as a hint) and stops with each
    /// off event. The clock wait runs after the outputs are set, so the
    /// channels hold their state for the full event duration.
    pub fn emit<C, L, T>(&self, symbol: Symbol, clock: &mut C, lamp: &mut L, tone: &mut T)
    where
        C: Clock,
        L: IntensityOutput,
        T: ToneOutput,
    {
        for event in self.steps(symbol) {
            lamp.set_intensity(event.level);
            if self.config.audible {
                if event.level > 0 {
                    tone.start_tone(self.config.tone_hz, event.duration_ms);
                } else {
                    tone.stop_tone();
                }
            }
            clock.wait_ms(event.duration_ms);
        }
    }
}

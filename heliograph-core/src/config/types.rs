//! Converter behavior configuration
//!
//! These values reproduce the reference device: 300/1000 ms marks with a
//! 200 ms gap, 750 ms between letters, 2 s after a completed line, and a
//! five-blink error signal.

/// Mark and pause durations, all wall-clock milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseTimings {
    /// Active time for a dot
    pub dot_ms: u32,
    /// Active time for a dash
    pub dash_ms: u32,
    /// Off time between marks within one symbol
    pub gap_ms: u32,
    /// Pause after a completed character (and after a space)
    pub letter_pause_ms: u32,
    /// Pause after a completed line, before the display resets
    pub line_pause_ms: u32,
}

impl PulseTimings {
    /// Reference device timings
    pub const fn new() -> Self {
        Self {
            dot_ms: 300,
            dash_ms: 1000,
            gap_ms: 200,
            letter_pause_ms: 750,
            line_pause_ms: 2000,
        }
    }
}

impl Default for PulseTimings {
    fn default() -> Self {
        Self::new()
    }
}

/// Error indicator blink pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ErrorBlink {
    /// Number of on/off cycles
    pub count: u8,
    /// On time per cycle (ms)
    pub on_ms: u32,
    /// Off time per cycle (ms)
    pub off_ms: u32,
}

impl ErrorBlink {
    /// Reference device pattern: five short blinks
    pub const fn new() -> Self {
        Self {
            count: 5,
            on_ms: 100,
            off_ms: 25,
        }
    }
}

impl Default for ErrorBlink {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete converter configuration
///
/// Built once at startup and owned by the converter for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConverterConfig {
    /// Lamp level while a mark is active (0-255)
    pub brightness: u8,
    /// Mark and pause durations
    pub timings: PulseTimings,
    /// Error indicator pattern
    pub blink: ErrorBlink,
    /// Tone frequency for the audible channel
    pub tone_hz: u16,
    /// Drive the audible channel alongside the lamp
    ///
    /// The tone output is always wired; this flag selects between the
    /// silent and buzzer-equipped hardware variants.
    pub audible: bool,
}

impl ConverterConfig {
    /// Reference device configuration
    pub const fn new() -> Self {
        Self {
            brightness: 100,
            timings: PulseTimings::new(),
            blink: ErrorBlink::new(),
            tone_hz: 1000,
            audible: true,
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let t = PulseTimings::default();
        assert_eq!(t.dot_ms, 300);
        assert_eq!(t.dash_ms, 1000);
        assert_eq!(t.gap_ms, 200);
        assert_eq!(t.letter_pause_ms, 750);
        assert_eq!(t.line_pause_ms, 2000);
    }

    #[test]
    fn test_default_config() {
        let c = ConverterConfig::default();
        assert_eq!(c.brightness, 100);
        assert_eq!(c.tone_hz, 1000);
        assert_eq!(c.blink.count, 5);
        assert!(c.audible);
    }
}

//! Signal output traits
//!
//! Two output channels: a dimmable lamp (the Morse signal itself, plus
//! a separate error indicator) and an optional audible tone driven in
//! lockstep with the lamp.

/// Trait for dimmable lamp outputs
pub trait IntensityOutput {
    /// Set the output level: 0 is off, 255 is fully on
    ///
    /// On/off implementations treat any nonzero level as on.
    fn set_intensity(&mut self, level: u8);
}

/// Trait for the audible tone channel
pub trait ToneOutput {
    /// Start a tone at `freq_hz`
    ///
    /// `duration_hint_ms` carries the expected mark length. It is
    /// advisory only: the converter always calls [`stop_tone`] at the
    /// end of the mark, and implementations may ignore the hint.
    ///
    /// [`stop_tone`]: ToneOutput::stop_tone
    fn start_tone(&mut self, freq_hz: u16, duration_hint_ms: u32);

    /// Stop the tone immediately
    fn stop_tone(&mut self);
}

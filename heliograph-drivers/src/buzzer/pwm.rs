//! PWM buzzer output
//!
//! Drives a passive buzzer from a PWM channel whose carrier frequency is
//! fixed by the board setup. Tones are gated purely through the duty
//! cycle: 50% while sounding, zero while silent. The per-call frequency
//! request cannot retune the slice and is ignored.

use embedded_hal::pwm::SetDutyCycle;

use heliograph_core::traits::ToneOutput;

/// Buzzer on a fixed-frequency PWM channel
pub struct PwmBuzzer<P> {
    pwm: P,
    sounding: bool,
}

impl<P: SetDutyCycle> PwmBuzzer<P> {
    /// Create a buzzer output, forcing the channel silent
    pub fn new(pwm: P) -> Self {
        let mut buzzer = Self {
            pwm,
            sounding: false,
        };
        buzzer.stop_tone();
        buzzer
    }

    /// Whether the buzzer is currently sounding
    pub fn is_sounding(&self) -> bool {
        self.sounding
    }
}

impl<P: SetDutyCycle> ToneOutput for PwmBuzzer<P> {
    fn start_tone(&mut self, _freq_hz: u16, _duration_hint_ms: u32) {
        self.sounding = true;
        let _ = self.pwm.set_duty_cycle_fraction(1, 2);
    }

    fn stop_tone(&mut self) {
        self.sounding = false;
        let _ = self.pwm.set_duty_cycle_fully_off();
    }
}

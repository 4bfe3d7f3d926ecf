//! PWM lamp output
//!
//! Maps the 0-255 intensity scale onto a PWM duty cycle, giving real
//! brightness control on channels that support it.

use embedded_hal::pwm::SetDutyCycle;

use heliograph_core::traits::IntensityOutput;

/// Lamp on a PWM channel
pub struct PwmLamp<P> {
    pwm: P,
    level: u8,
}

impl<P: SetDutyCycle> PwmLamp<P> {
    /// Create a lamp output, forcing the channel to zero duty
    pub fn new(pwm: P) -> Self {
        let mut lamp = Self { pwm, level: 0 };
        lamp.set_intensity(0);
        lamp
    }

    /// Last requested level
    pub fn level(&self) -> u8 {
        self.level
    }
}

impl<P: SetDutyCycle> IntensityOutput for PwmLamp<P> {
    fn set_intensity(&mut self, level: u8) {
        self.level = level;
        // level/255 of the channel's max duty, so 255 is fully on.
        let _ = self.pwm.set_duty_cycle_fraction(level as u16, 255);
    }
}

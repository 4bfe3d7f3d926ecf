//! GPIO lamp output
//!
//! On/off lamp control through a single pin (directly or via a
//! transistor stage). Intensity collapses to a threshold: zero is off,
//! anything else is on.

use embedded_hal::digital::OutputPin;

use heliograph_core::traits::IntensityOutput;

/// Lamp behind a plain GPIO pin
///
/// The pin can be wired active-high (default) or active-low.
pub struct GpioLamp<P> {
    pin: P,
    /// If true, lamp ON = pin LOW
    inverted: bool,
    /// Last requested level
    level: u8,
}

impl<P: OutputPin> GpioLamp<P> {
    /// Create a lamp output, forcing the pin to the off state
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut lamp = Self {
            pin,
            inverted,
            level: 0,
        };
        lamp.set_intensity(0);
        lamp
    }

    /// Lamp on an active-high pin
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Lamp on an active-low pin
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Last requested level
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Whether the lamp is logically on
    pub fn is_on(&self) -> bool {
        self.level > 0
    }
}

impl<P: OutputPin> IntensityOutput for GpioLamp<P> {
    fn set_intensity(&mut self, level: u8) {
        self.level = level;

        let on = level > 0;
        let result = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        // Pin errors have nowhere to go on this seam.
        let _ = result;
    }
}

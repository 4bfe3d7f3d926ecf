//! Hardware wiring configuration
//!
//! Pin assignments and serial parameters for the board. Defaults match
//! the Pico reference wiring; the firmware's config file can remap them.

use super::types::ConverterConfig;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }
}

/// Character LCD pin assignments (4-bit parallel interface)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LcdPins {
    /// Register select
    pub rs: PinConfig,
    /// Enable strobe
    pub en: PinConfig,
    /// Data bit 4
    pub d4: PinConfig,
    /// Data bit 5
    pub d5: PinConfig,
    /// Data bit 6
    pub d6: PinConfig,
    /// Data bit 7
    pub d7: PinConfig,
}

impl LcdPins {
    /// Pico reference wiring: RS=GP8, EN=GP9, D4..D7=GP10..GP13
    pub const fn new() -> Self {
        Self {
            rs: PinConfig::new(8),
            en: PinConfig::new(9),
            d4: PinConfig::new(10),
            d5: PinConfig::new(11),
            d6: PinConfig::new(12),
            d7: PinConfig::new(13),
        }
    }
}

impl Default for LcdPins {
    fn default() -> Self {
        Self::new()
    }
}

/// All output pin assignments for the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DevicePins {
    /// Morse signal lamp (PWM-capable)
    pub lamp: PinConfig,
    /// Error indicator lamp (PWM-capable)
    pub error_lamp: PinConfig,
    /// Buzzer output (PWM-capable)
    pub buzzer: PinConfig,
    /// Character LCD interface
    pub lcd: LcdPins,
}

impl DevicePins {
    /// Pico reference wiring: lamp=GP2, error=GP4, buzzer=GP6
    pub const fn new() -> Self {
        Self {
            lamp: PinConfig::new(2),
            error_lamp: PinConfig::new(4),
            buzzer: PinConfig::new(6),
            lcd: LcdPins::new(),
        }
    }
}

impl Default for DevicePins {
    fn default() -> Self {
        Self::new()
    }
}

/// Serial input parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialConfig {
    /// Baud rate
    pub baud: u32,
}

impl SerialConfig {
    /// Reference device rate
    pub const fn new() -> Self {
        Self { baud: 9600 }
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete device configuration
///
/// This is the top-level structure the firmware builds from its embedded
/// config file, or from these defaults when parsing fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
    /// Output pin assignments
    pub pins: DevicePins,
    /// Serial input parameters
    pub serial: SerialConfig,
    /// Converter behavior
    pub converter: ConverterConfig,
}

impl DeviceConfig {
    /// Reference device configuration
    pub const fn new() -> Self {
        Self {
            pins: DevicePins::new(),
            serial: SerialConfig::new(),
            converter: ConverterConfig::new(),
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_config() {
        let pin = PinConfig::new(10);
        assert_eq!(pin.pin, 10);
        assert!(!pin.inverted);

        let inverted = PinConfig::inverted(12);
        assert!(inverted.inverted);
    }

    #[test]
    fn test_default_wiring() {
        let config = DeviceConfig::default();
        assert_eq!(config.pins.lamp.pin, 2);
        assert_eq!(config.pins.error_lamp.pin, 4);
        assert_eq!(config.pins.buzzer.pin, 6);
        assert_eq!(config.pins.lcd.rs.pin, 8);
        assert_eq!(config.pins.lcd.d7.pin, 13);
        assert_eq!(config.serial.baud, 9600);
    }
}

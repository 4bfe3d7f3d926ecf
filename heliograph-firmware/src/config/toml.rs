//! Simple TOML parser for device configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! Heliograph configuration. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - [section] headers
//! - [section.subsection] headers
//! - Comments (# ...)
//!
//! NOT supported:
//! - Arrays and inline tables
//! - Multi-line strings
//! - Datetime values
//!
//! Every key is an overlay on [`DeviceConfig::default`]: missing keys
//! keep their defaults, unknown keys are ignored.

use heliograph_core::config::{DeviceConfig, PinConfig};

/// Parse error
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid section header
    InvalidSection,
    /// Invalid value type
    InvalidValue,
    /// Invalid pin string
    InvalidPin,
}

/// Current parsing context
#[derive(Debug, Clone, Copy)]
enum Section {
    Root,
    Serial,
    Pins,
    PinsLcd,
    Converter,
    ConverterTimings,
    ConverterBlink,
}

/// Parse TOML configuration into DeviceConfig
pub fn parse_config(input: &str) -> Result<DeviceConfig, ParseError> {
    let mut config = DeviceConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Check for section header
        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        // Parse key = value
        if let Some((key, value)) = parse_key_value(line) {
            apply_key(&mut config, section, key, value)?;
        }
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "serial" => Ok(Section::Serial),
        "pins" => Ok(Section::Pins),
        "pins.lcd" => Ok(Section::PinsLcd),
        "converter" => Ok(Section::Converter),
        "converter.timings" => Ok(Section::ConverterTimings),
        "converter.blink" => Ok(Section::ConverterBlink),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Apply one key to the section it appeared in
fn apply_key(
    config: &mut DeviceConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseError> {
    match section {
        Section::Serial => {
            if key == "baud" {
                config.serial.baud = parse_int(value)?;
            }
        }
        Section::Pins => match key {
            "lamp" => config.pins.lamp = parse_pin(value)?,
            "error_lamp" => config.pins.error_lamp = parse_pin(value)?,
            "buzzer" => config.pins.buzzer = parse_pin(value)?,
            _ => {}
        },
        Section::PinsLcd => {
            let lcd = &mut config.pins.lcd;
            match key {
                "rs" => lcd.rs = parse_pin(value)?,
                "en" => lcd.en = parse_pin(value)?,
                "d4" => lcd.d4 = parse_pin(value)?,
                "d5" => lcd.d5 = parse_pin(value)?,
                "d6" => lcd.d6 = parse_pin(value)?,
                "d7" => lcd.d7 = parse_pin(value)?,
                _ => {}
            }
        }
        Section::Converter => match key {
            "brightness" => config.converter.brightness = parse_int(value)?,
            "tone_hz" => config.converter.tone_hz = parse_int(value)?,
            "audible" => config.converter.audible = parse_bool(value)?,
            _ => {}
        },
        Section::ConverterTimings => {
            let t = &mut config.converter.timings;
            match key {
                "dot_ms" => t.dot_ms = parse_int(value)?,
                "dash_ms" => t.dash_ms = parse_int(value)?,
                "gap_ms" => t.gap_ms = parse_int(value)?,
                "letter_pause_ms" => t.letter_pause_ms = parse_int(value)?,
                "line_pause_ms" => t.line_pause_ms = parse_int(value)?,
                _ => {}
            }
        }
        Section::ConverterBlink => {
            let b = &mut config.converter.blink;
            match key {
                "count" => b.count = parse_int(value)?,
                "on_ms" => b.on_ms = parse_int(value)?,
                "off_ms" => b.off_ms = parse_int(value)?,
                _ => {}
            }
        }
        Section::Root => {
            // No root-level keys
        }
    }

    Ok(())
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        Ok(&value[1..value.len() - 1])
    } else {
        // Allow unquoted strings for simple values
        Ok(value)
    }
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a pin string like "gpio2" or "!gpio4"
fn parse_pin(value: &str) -> Result<PinConfig, ParseError> {
    let value = parse_string(value)?;
    let mut inverted = false;
    let mut s = value;

    if let Some(rest) = s.strip_prefix('!') {
        inverted = true;
        s = rest;
    }

    // Parse "gpioNN"
    if !s.starts_with("gpio") {
        return Err(ParseError::InvalidPin);
    }

    let pin: u8 = s[4..].parse().map_err(|_| ParseError::InvalidPin)?;

    Ok(PinConfig { pin, inverted })
}

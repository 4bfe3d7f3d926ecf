//! Build script for heliograph-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates device.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate device.toml configuration at compile time
fn validate_config() {
    // Re-run if device.toml changes
    println!("cargo:rerun-if-changed=device.toml");

    let config_path = Path::new("device.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: device.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a device.toml configuration file.         ║\n\
            ║  Please create one in the heliograph-firmware directory.         ║\n\
            ║                                                                  ║\n\
            ║  All keys are optional; an empty file selects the defaults.      ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read device.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in device.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    // Validate section contents
    validate_pins(&config);
    validate_serial(&config);
    validate_converter(&config);

    println!("cargo:warning=device.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a pin string like "gpio11" or "!gpio12", returning the pin number
fn pin_number(value: &str) -> Option<u8> {
    let s = value.strip_prefix('!').unwrap_or(value);
    s.strip_prefix("gpio")?.parse().ok()
}

/// Check the pin entries of one table, recording valid assignments
fn check_pin_table(
    section: &str,
    table: Option<&toml::value::Table>,
    keys: &[&str],
    assigned: &mut Vec<(String, u8)>,
    errors: &mut Vec<String>,
) {
    let table = match table {
        Some(t) => t,
        None => return,
    };

    for key in keys {
        match table.get(*key) {
            Some(toml::Value::String(s)) => match pin_number(s) {
                Some(pin) if pin <= 29 => {
                    assigned.push((format!("[{}] {}", section, key), pin));
                }
                Some(_) => {
                    errors.push(format!("[{}] {} must be gpio0-gpio29", section, key));
                }
                None => {
                    errors.push(format!(
                        "[{}] {} must be a pin string like \"gpio2\"",
                        section, key
                    ));
                }
            },
            Some(_) => {
                errors.push(format!(
                    "[{}] {} must be a pin string like \"gpio2\"",
                    section, key
                ));
            }
            None => {}
        }
    }
}

/// Validate pin assignments
fn validate_pins(config: &toml::Value) {
    let mut errors = Vec::new();
    let mut assigned: Vec<(String, u8)> = Vec::new();

    let pins = config.get("pins").and_then(|p| p.as_table());
    let lcd = pins
        .and_then(|p| p.get("lcd"))
        .and_then(|l| l.as_table());

    check_pin_table(
        "pins",
        pins,
        &["lamp", "error_lamp", "buzzer"],
        &mut assigned,
        &mut errors,
    );
    check_pin_table(
        "pins.lcd",
        lcd,
        &["rs", "en", "d4", "d5", "d6", "d7"],
        &mut assigned,
        &mut errors,
    );

    // Two outputs on one GPIO is a wiring mistake
    for (i, (name_a, pin_a)) in assigned.iter().enumerate() {
        for (name_b, pin_b) in &assigned[i + 1..] {
            if pin_a == pin_b {
                errors.push(format!(
                    "{} and {} both assigned to gpio{}",
                    name_a, name_b, pin_a
                ));
            }
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid pin configuration                                ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}

/// Validate serial configuration
fn validate_serial(config: &toml::Value) {
    let serial = match config.get("serial") {
        Some(toml::Value::Table(t)) => t,
        _ => return,
    };

    let mut errors = Vec::new();

    if let Some(toml::Value::Integer(baud)) = serial.get("baud") {
        if *baud < 110 || *baud > 921_600 {
            errors.push("[serial] baud must be 110-921600".to_string());
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid serial configuration                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}

/// Validate converter configuration
fn validate_converter(config: &toml::Value) {
    let converter = match config.get("converter") {
        Some(toml::Value::Table(t)) => t,
        _ => return,
    };

    let mut errors = Vec::new();

    if let Some(toml::Value::Integer(b)) = converter.get("brightness") {
        if *b < 0 || *b > 255 {
            errors.push("[converter] brightness must be 0-255".to_string());
        }
    }

    if let Some(toml::Value::Integer(hz)) = converter.get("tone_hz") {
        if *hz < 20 || *hz > 20_000 {
            errors.push("[converter] tone_hz must be 20-20000".to_string());
        }
    }

    if let Some(toml::Value::Table(timings)) = converter.get("timings") {
        for key in ["dot_ms", "dash_ms", "gap_ms", "letter_pause_ms", "line_pause_ms"] {
            if let Some(toml::Value::Integer(ms)) = timings.get(key) {
                if *ms <= 0 {
                    errors.push(format!("[converter.timings] {} must be positive", key));
                }
            }
        }
    }

    if let Some(toml::Value::Table(blink)) = converter.get("blink") {
        if let Some(toml::Value::Integer(count)) = blink.get("count") {
            if *count < 1 || *count > 255 {
                errors.push("[converter.blink] count must be 1-255".to_string());
            }
        }
        for key in ["on_ms", "off_ms"] {
            if let Some(toml::Value::Integer(ms)) = blink.get(key) {
                if *ms < 0 {
                    errors.push(format!("[converter.blink] {} must not be negative", key));
                }
            }
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid converter configuration                          ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}

//! Device configuration loading
//!
//! The configuration is embedded at build time and parsed on boot by a
//! custom no_std parser. There is no runtime persistence; edit
//! device.toml and rebuild to change the device.

pub mod toml;

pub use toml::{parse_config, ParseError};

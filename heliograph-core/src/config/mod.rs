//! Configuration type definitions
//!
//! Split into converter behavior ([`types`]) and board wiring
//! ([`hardware`]). Everything is plain data with compiled-in defaults;
//! the firmware overlays values from its embedded config file.

pub mod hardware;
pub mod types;

pub use hardware::{DeviceConfig, DevicePins, LcdPins, PinConfig, SerialConfig};
pub use types::{ConverterConfig, ErrorBlink, PulseTimings};

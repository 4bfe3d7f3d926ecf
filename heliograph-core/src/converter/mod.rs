//! Conversion engine wiring input bytes to echo and emission

pub mod engine;

pub use engine::{Converter, INVALID_CHAR_MSG, INVALID_CHAR_NOTICE, PROMPT};

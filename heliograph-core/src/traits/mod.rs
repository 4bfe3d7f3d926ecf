//! Hardware abstraction traits
//!
//! These traits define the interface between the converter logic
//! and hardware-specific implementations.

pub mod display;
pub mod io;
pub mod output;
pub mod time;

pub use display::{DisplayError, TextDisplay, DISPLAY_COLS, DISPLAY_ROWS};
pub use io::{InputTransport, NoticeSink};
pub use output::{IntensityOutput, ToneOutput};
pub use time::Clock;

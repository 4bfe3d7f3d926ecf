//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod converter;
pub mod serial_rx;

pub use converter::converter_task;
pub use serial_rx::serial_rx_task;

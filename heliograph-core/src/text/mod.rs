//! Display text handling

pub mod window;

pub use window::{LineWindow, WINDOW_WIDTH};

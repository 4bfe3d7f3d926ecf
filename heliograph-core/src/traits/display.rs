//! Character display trait
//!
//! The converter echoes input on a small character display. The trait
//! models the minimal surface the device needs: clear, position the
//! cursor, print a span.

/// Display width in characters
pub const DISPLAY_COLS: u8 = 16;

/// Display height in rows
pub const DISPLAY_ROWS: u8 = 2;

/// Errors that can occur when driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Fault on the interface bus (pin or transfer level)
    Bus,
    /// Cursor position outside the display geometry
    OutOfBounds,
}

/// Trait for character displays
///
/// Implementations drive a fixed-geometry character display (16x2 for
/// the reference hardware). Text wider than the remaining row is
/// truncated by the hardware; callers keep spans within
/// [`DISPLAY_COLS`].
pub trait TextDisplay {
    /// Clear the display and return the cursor to the top-left
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor to (col, row), both zero-based
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Print ASCII text at the current cursor position
    ///
    /// The cursor advances past the printed span.
    fn print(&mut self, text: &str) -> Result<(), DisplayError>;
}

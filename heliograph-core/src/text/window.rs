//! Trailing display window for echoed input
//!
//! The device echoes everything typed since the last line reset on the
//! bottom display row. Once the text outgrows the row, only the last 16
//! characters stay visible (hard cut, no ellipsis). Only that visible
//! suffix and a total-length counter are observable, so only they are
//! stored; the full record is not kept.

use heapless::Vec;

use crate::traits::DISPLAY_COLS;

/// Window width in characters, matching the display row
pub const WINDOW_WIDTH: usize = DISPLAY_COLS as usize;

/// The rendered trailing slice of the current input line
#[derive(Debug, Clone, Default)]
pub struct LineWindow {
    /// Visible suffix, printable ASCII only
    buf: Vec<u8, WINDOW_WIDTH>,
    /// Characters accepted since the last reset (saturating)
    total: u32,
}

impl LineWindow {
    /// Create an empty window
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            total: 0,
        }
    }

    /// Append one input byte
    ///
    /// Bytes outside printable ASCII are stored as `?`; the caller keeps
    /// the raw byte for classification. When the window is full the
    /// oldest character scrolls out.
    pub fn append(&mut self, byte: u8) {
        let shown = if byte.is_ascii_graphic() || byte == b' ' {
            byte
        } else {
            b'?'
        };

        if self.buf.is_full() {
            let len = self.buf.len();
            self.buf.copy_within(1..len, 0);
            self.buf[len - 1] = shown;
        } else {
            let _ = self.buf.push(shown);
        }
        self.total = self.total.saturating_add(1);
    }

    /// The visible text
    pub fn window(&self) -> &str {
        // Printable ASCII only, so the conversion never fails.
        core::str::from_utf8(&self.buf).unwrap_or("")
    }

    /// Total characters accepted since the last reset
    pub fn total_len(&self) -> u32 {
        self.total
    }

    /// Whether nothing has been accepted since the last reset
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Clear the window and the length counter
    ///
    /// Idempotent: resetting an empty window is a no-op.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.total = 0;
    }
}

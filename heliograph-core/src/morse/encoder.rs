//! Input byte encoder
//!
//! Thin classification layer over the symbol table: terminators are
//! recognized before the lookup so CR/LF never count as unsupported
//! input. Spaces never reach the encoder; the converter loop handles
//! them before encoding.

use super::table::{lookup, Symbol};

/// Outcome of encoding one input byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeResult {
    /// Supported character with its Morse symbol
    Symbol(Symbol),
    /// Line terminator (CR or LF), handled by the line logic
    Ignored,
    /// Character with no table entry
    Unsupported,
}

/// Encode one input byte
pub fn encode(byte: u8) -> EncodeResult {
    match byte {
        b'\n' | b'\r' => EncodeResult::Ignored,
        _ => match lookup(byte) {
            Some(symbol) => EncodeResult::Symbol(symbol),
            None => EncodeResult::Unsupported,
        },
    }
}

//! Character classification and Morse symbol lookup

pub mod encoder;
pub mod table;

pub use encoder::{encode, EncodeResult};
pub use table::{classify, lookup, CharClass, Mark, Symbol, MAX_SYMBOL_MARKS};

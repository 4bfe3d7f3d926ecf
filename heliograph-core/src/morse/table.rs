//! Morse symbol table
//!
//! Static mapping from supported characters to Morse symbols: 26
//! letters, 10 digits and 7 punctuation marks. Classification is typed
//! ([`CharClass`] carries the in-class index), so there is no flat-table
//! index arithmetic at the call sites.
//!
//! The entries reproduce the reference device table verbatim, including
//! its five-mark semicolon.

/// Longest symbol in the table, in marks
pub const MAX_SYMBOL_MARKS: usize = 6;

/// One element of a Morse symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mark {
    Dot,
    Dash,
}

impl Mark {
    /// Map a pattern byte to a mark
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'.' => Some(Mark::Dot),
            b'-' => Some(Mark::Dash),
            _ => None,
        }
    }
}

/// A complete Morse symbol for one character
///
/// Backed by a static pattern string over `{'.', '-'}`. Every table
/// entry is non-empty and at most [`MAX_SYMBOL_MARKS`] marks long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Symbol(&'static str);

impl Symbol {
    /// Wrap a pattern string
    ///
    /// The pattern must contain only `.` and `-`.
    pub const fn new(pattern: &'static str) -> Self {
        Self(pattern)
    }

    /// The raw dot/dash pattern
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Number of marks in the symbol
    pub const fn mark_count(self) -> usize {
        self.0.len()
    }

    /// Iterate over the marks in order
    pub fn marks(self) -> impl Iterator<Item = Mark> {
        self.0.bytes().filter_map(Mark::from_byte)
    }
}

/// Letters a-z
const LETTERS: [Symbol; 26] = [
    Symbol::new(".-"),
    Symbol::new("-..."),
    Symbol::new("-.-."),
    Symbol::new("-.."),
    Symbol::new("."),
    Symbol::new("..-."),
    Symbol::new("--."),
    Symbol::new("...."),
    Symbol::new(".."),
    Symbol::new(".---"),
    Symbol::new("-.-"),
    Symbol::new(".-.."),
    Symbol::new("--"),
    Symbol::new("-."),
    Symbol::new("---"),
    Symbol::new(".--."),
    Symbol::new("--.-"),
    Symbol::new(".-."),
    Symbol::new("..."),
    Symbol::new("-"),
    Symbol::new("..-"),
    Symbol::new("...-"),
    Symbol::new(".--"),
    Symbol::new("-..-"),
    Symbol::new("-.--"),
    Symbol::new("--.."),
];

/// Digits 0-9
const DIGITS: [Symbol; 10] = [
    Symbol::new("-----"),
    Symbol::new(".----"),
    Symbol::new("..---"),
    Symbol::new("...--"),
    Symbol::new("....-"),
    Symbol::new("....."),
    Symbol::new("-...."),
    Symbol::new("--..."),
    Symbol::new("---.."),
    Symbol::new("----."),
];

/// Punctuation, in the device's lookup order: `, . ; : ' " -`
const PUNCTUATION: [Symbol; 7] = [
    Symbol::new("--..--"),
    Symbol::new(".-.-.-"),
    Symbol::new("-.-.-"),
    Symbol::new("---..."),
    Symbol::new(".----."),
    Symbol::new(".-..-."),
    Symbol::new("-....-"),
];

/// Character class of a supported input byte
///
/// Each variant carries the index within its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CharClass {
    /// ASCII letter, folded to lowercase (0 = 'a')
    Letter(u8),
    /// ASCII digit (0 = '0')
    Digit(u8),
    /// Supported punctuation, in table order
    Punctuation(u8),
}

/// Classify an input byte
///
/// Priority order: lowercase letter, uppercase letter (same entries),
/// digit, punctuation. Anything else is unsupported.
pub const fn classify(byte: u8) -> Option<CharClass> {
    match byte {
        b'a'..=b'z' => Some(CharClass::Letter(byte - b'a')),
        b'A'..=b'Z' => Some(CharClass::Letter(byte - b'A')),
        b'0'..=b'9' => Some(CharClass::Digit(byte - b'0')),
        b',' => Some(CharClass::Punctuation(0)),
        b'.' => Some(CharClass::Punctuation(1)),
        b';' => Some(CharClass::Punctuation(2)),
        b':' => Some(CharClass::Punctuation(3)),
        b'\'' => Some(CharClass::Punctuation(4)),
        b'"' => Some(CharClass::Punctuation(5)),
        b'-' => Some(CharClass::Punctuation(6)),
        _ => None,
    }
}

/// Look up the Morse symbol for an input byte
pub fn lookup(byte: u8) -> Option<Symbol> {
    // Indices from classify are always in range for their table.
    match classify(byte)? {
        CharClass::Letter(i) => Some(LETTERS[i as usize]),
        CharClass::Digit(i) => Some(DIGITS[i as usize]),
        CharClass::Punctuation(i) => Some(PUNCTUATION[i as usize]),
    }
}

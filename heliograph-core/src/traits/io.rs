//! Input transport and notice sink traits

/// Trait for the byte input stream
///
/// Merges the original availability check and read into one call: the
/// transport hands out at most one byte per poll and never blocks.
/// Bytes that arrive while the converter is busy stay queued inside the
/// transport (ring buffer, channel) until the next poll.
pub trait InputTransport {
    /// Take the next pending input byte, if any
    fn read_byte(&mut self) -> Option<u8>;
}

/// Trait for operator-facing text notices
///
/// The converter writes its prompt and error notices here. Delivery is
/// fire-and-forget: a lost notice must not disturb the conversion loop,
/// so there is no error path.
pub trait NoticeSink {
    /// Write one line, terminated by the sink's line ending
    fn println(&mut self, line: &str);
}

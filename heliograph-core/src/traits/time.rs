//! Pacing clock trait

/// Trait for the blocking wait capability
///
/// All mark, gap and pause durations go through this single seam, so
/// tests can record the requested waits instead of sleeping.
pub trait Clock {
    /// Block for `ms` milliseconds of wall-clock time
    fn wait_ms(&mut self, ms: u32);
}

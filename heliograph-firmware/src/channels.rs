//! Inter-task communication channels
//!
//! Defines the static channel between the serial receive task and the
//! converter task. Uses embassy-sync primitives for safe async
//! communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

/// Channel capacity for received input bytes
///
/// Sized for a full line of typing ahead while the converter is busy
/// pulsing. The receive task drops bytes when the queue is full.
const RX_QUEUE_SIZE: usize = 64;

/// Input bytes from the operator's serial terminal
pub static RX_BYTES: Channel<CriticalSectionRawMutex, u8, RX_QUEUE_SIZE> = Channel::new();

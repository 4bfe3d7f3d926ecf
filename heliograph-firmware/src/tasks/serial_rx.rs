//! Serial receive task
//!
//! Receives bytes from the operator's terminal and forwards them to the
//! converter task.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use crate::channels::RX_BYTES;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

/// Serial RX task - forwards terminal input to the converter
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx<'static>) {
    info!("Serial RX task started");

    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        // Read available bytes
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    // The converter can lag by seconds while pulsing;
                    // excess typing is dropped rather than awaited so
                    // reception never stalls the UART buffer.
                    if RX_BYTES.try_send(byte).is_err() {
                        warn!("Input queue full, dropping byte");
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

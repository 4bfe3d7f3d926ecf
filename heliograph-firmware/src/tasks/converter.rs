//! Character conversion task
//!
//! Owns the display, lamps, buzzer and notice writer, and runs the
//! conversion loop over bytes from the receive task.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::pwm::PwmOutput;
use embassy_rp::uart::BufferedUartTx;
use embassy_time::{block_for, Delay, Duration};

use heliograph_core::config::ConverterConfig;
use heliograph_core::converter::Converter;
use heliograph_core::traits::{Clock, InputTransport};

use heliograph_drivers::buzzer::PwmBuzzer;
use heliograph_drivers::lamp::{GpioLamp, PwmLamp};
use heliograph_drivers::lcd::Hd44780;
use heliograph_drivers::serial::NoticeWriter;

use crate::channels::RX_BYTES;

/// Pacing clock over the embassy time driver
///
/// Mark and pause waits block the whole task; reception keeps running
/// in the RX task and queues up to the channel capacity.
pub struct BlockingClock;

impl Clock for BlockingClock {
    fn wait_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}

/// Non-blocking view of the input queue, for draining a backlog
struct QueuedBytes;

impl InputTransport for QueuedBytes {
    fn read_byte(&mut self) -> Option<u8> {
        RX_BYTES.try_receive().ok()
    }
}

/// The character LCD wired to board GPIO
pub type BoardDisplay = Hd44780<Output<'static>, Delay>;

/// The fully wired converter for this board
pub type BoardConverter = Converter<
    BoardDisplay,
    NoticeWriter<BufferedUartTx<'static>>,
    PwmLamp<PwmOutput<'static>>,
    GpioLamp<Output<'static>>,
    PwmBuzzer<PwmOutput<'static>>,
    BlockingClock,
>;

/// Converter task - echoes, pulses and paces one byte at a time
#[embassy_executor::task]
pub async fn converter_task(
    mut display: BoardDisplay,
    notices: NoticeWriter<BufferedUartTx<'static>>,
    lamp: PwmLamp<PwmOutput<'static>>,
    error_lamp: GpioLamp<Output<'static>>,
    buzzer: PwmBuzzer<PwmOutput<'static>>,
    config: ConverterConfig,
) {
    info!("Converter task started");

    // A wedged display must not take down the signalling path
    if display.init().is_err() {
        error!("LCD init failed");
    }

    let mut converter: BoardConverter = Converter::new(
        config,
        display,
        notices,
        lamp,
        error_lamp,
        buzzer,
        BlockingClock,
    );

    if converter.start().is_err() {
        error!("Display unavailable at startup");
    }

    loop {
        let byte = RX_BYTES.receive().await;
        if let Err(e) = converter.process_byte(byte) {
            warn!("Display write failed: {:?}", e);
        }
        if let Err(e) = converter.drain(&mut QueuedBytes) {
            warn!("Display write failed: {:?}", e);
        }
    }
}

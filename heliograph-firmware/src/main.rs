//! Heliograph - Morse code signaller firmware
//!
//! Main firmware binary for RP2040-based boards. Characters typed on a
//! serial terminal are echoed on a 16x2 character LCD and keyed out as
//! timed lamp and buzzer pulses, with a blink sequence on the error
//! indicator for characters outside the code table.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use heliograph_core::config::DeviceConfig;
use heliograph_drivers::buzzer::PwmBuzzer;
use heliograph_drivers::lamp::{GpioLamp, PwmLamp};
use heliograph_drivers::lcd::Hd44780;
use heliograph_drivers::serial::NoticeWriter;

use crate::config::parse_config;

/// Embedded default configuration (compiled into firmware)
/// Edit device.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../device.toml");

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// System clock frequency, as configured by embassy_rp::init defaults
const SYS_CLOCK_HZ: u32 = 125_000_000;

/// PWM top for the lamp slice
///
/// 12.5 kHz carrier: flicker-free and above the audible range should
/// the lamp wiring whine.
const LAMP_PWM_TOP: u16 = 9_999;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Heliograph firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Parse the embedded configuration
    let config = load_device_config();
    info!(
        "Config: {} baud, brightness {}, tone {} Hz, audible {}",
        config.serial.baud,
        config.converter.brightness,
        config.converter.tone_hz,
        config.converter.audible
    );

    // Setup UART for terminal communication
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = config.serial.baud;
        cfg
    };

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized for terminal communication");

    // Setup the signal lamp PWM
    // Pin assignments are board-specific (Pico reference wiring:
    // lamp=GPIO2, error lamp=GPIO4, buzzer=GPIO6, LCD on GPIO8-13).
    // The config file supplies inversion flags and timing parameters.
    let lamp_pwm_config = {
        let mut cfg = PwmConfig::default();
        cfg.top = LAMP_PWM_TOP;
        cfg
    };
    let (lamp_out, _) = Pwm::new_output_a(p.PWM_SLICE1, p.PIN_2, lamp_pwm_config).split();
    let lamp = PwmLamp::new(lamp_out.unwrap());

    // Setup the error indicator
    // Idle level keeps an active-low indicator dark from the first edge
    let error_idle = if config.pins.error_lamp.inverted {
        Level::High
    } else {
        Level::Low
    };
    let error_lamp = GpioLamp::new(
        Output::new(p.PIN_4, error_idle),
        config.pins.error_lamp.inverted,
    );

    // Setup the buzzer carrier
    let (buzzer_out, _) = Pwm::new_output_a(
        p.PWM_SLICE3,
        p.PIN_6,
        buzzer_pwm_config(config.converter.tone_hz),
    )
    .split();
    let buzzer = PwmBuzzer::new(buzzer_out.unwrap());

    // Hold the onboard LED dark
    let _onboard_led = Output::new(p.PIN_25, Level::Low);

    info!("Outputs initialized");

    // Setup the character LCD (4-bit interface)
    let display = Hd44780::new(
        Output::new(p.PIN_8, Level::Low),  // RS
        Output::new(p.PIN_9, Level::Low),  // EN
        Output::new(p.PIN_10, Level::Low), // D4
        Output::new(p.PIN_11, Level::Low), // D5
        Output::new(p.PIN_12, Level::Low), // D6
        Output::new(p.PIN_13, Level::Low), // D7
        Delay,
    );

    let notices = NoticeWriter::new(tx);

    // Spawn tasks
    spawner.spawn(tasks::serial_rx_task(rx)).unwrap();
    spawner
        .spawn(tasks::converter_task(
            display,
            notices,
            lamp,
            error_lamp,
            buzzer,
            config.converter,
        ))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Parse the embedded device.toml, falling back to compiled defaults
fn load_device_config() -> DeviceConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            // Build-time validation makes this unreachable in practice
            warn!("Failed to parse embedded config: {:?}", e);
            warn!("Using compiled-in defaults");
            DeviceConfig::default()
        }
    }
}

/// PWM configuration for the buzzer carrier
///
/// Phase-correct counting halves the slice rate, which brings audio
/// frequencies within reach of the 16-bit top at 125 MHz. Requests
/// below the reachable band clamp to the slowest carrier.
fn buzzer_pwm_config(tone_hz: u16) -> PwmConfig {
    let mut cfg = PwmConfig::default();
    cfg.phase_correct = true;

    let ticks = SYS_CLOCK_HZ / 2 / u32::from(tone_hz.max(1));
    cfg.top = (ticks.clamp(2, 65_536) - 1) as u16;
    cfg
}

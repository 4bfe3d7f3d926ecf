//! HD44780 character display driver (4-bit parallel mode)
//!
//! Drives the classic 16x2 module through six GPIO lines: register
//! select, enable, and the high data nibble D4-D7. Each byte crosses the
//! bus as two nibbles latched on the falling edge of enable.
//!
//! # Bring-up
//!
//! The controller wakes in 8-bit mode. [`Hd44780::init`] walks the
//! standard forced reset (three `0x3` nibbles with the datasheet waits),
//! switches the bus to 4-bit mode, then configures two lines, display
//! on with cursor off, left-to-right entry, and wipes the screen.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use heliograph_core::traits::{DisplayError, TextDisplay, DISPLAY_COLS, DISPLAY_ROWS};

/// HD44780 command bytes
pub mod cmd {
    /// Wipe the display and home the cursor
    pub const CLEAR: u8 = 0x01;
    /// 4-bit bus, two lines, 5x8 font
    pub const FUNCTION_SET: u8 = 0x28;
    /// Display on, cursor and blink off
    pub const DISPLAY_ON: u8 = 0x0C;
    /// Cursor advances right, no display shift
    pub const ENTRY_MODE: u8 = 0x06;
    /// Set DDRAM address (or the address into the low bits)
    pub const SET_DDRAM: u8 = 0x80;
}

/// DDRAM address of the first cell of each row
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// HD44780 over six output pins and a blocking delay
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    d4: P,
    d5: P,
    d6: P,
    d7: P,
    delay: D,
}

impl<P, D> Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Take ownership of the bus pins. Call [`init`](Self::init) before
    /// the first write.
    pub fn new(rs: P, en: P, d4: P, d5: P, d6: P, d7: P, delay: D) -> Self {
        Self {
            rs,
            en,
            d4,
            d5,
            d6,
            d7,
            delay,
        }
    }

    /// Run the power-on reset and mode configuration
    pub fn init(&mut self) -> Result<(), DisplayError> {
        // Controller needs >40 ms after VCC rise before it listens.
        self.delay.delay_ms(50);
        set_level(&mut self.rs, false)?;
        set_level(&mut self.en, false)?;

        // Forced reset: the controller may be in 8-bit or a half-written
        // 4-bit state, three 0x3 nibbles land it in 8-bit mode for sure.
        self.write_nibble(0x03)?;
        self.delay.delay_ms(5);
        self.write_nibble(0x03)?;
        self.delay.delay_us(150);
        self.write_nibble(0x03)?;
        self.delay.delay_us(150);

        // Switch to 4-bit bus, then configure through full commands.
        self.write_nibble(0x02)?;
        self.delay.delay_us(150);

        self.command(cmd::FUNCTION_SET)?;
        self.command(cmd::DISPLAY_ON)?;
        self.command(cmd::ENTRY_MODE)?;
        self.clear()
    }

    fn command(&mut self, byte: u8) -> Result<(), DisplayError> {
        set_level(&mut self.rs, false)?;
        self.write_byte(byte)
    }

    fn write_data(&mut self, byte: u8) -> Result<(), DisplayError> {
        set_level(&mut self.rs, true)?;
        self.write_byte(byte)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.write_nibble(byte >> 4)?;
        self.write_nibble(byte & 0x0F)
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), DisplayError> {
        set_level(&mut self.d4, nibble & 0x01 != 0)?;
        set_level(&mut self.d5, nibble & 0x02 != 0)?;
        set_level(&mut self.d6, nibble & 0x04 != 0)?;
        set_level(&mut self.d7, nibble & 0x08 != 0)?;
        self.pulse_enable()
    }

    /// Latch the data lines on the falling edge of enable
    fn pulse_enable(&mut self) -> Result<(), DisplayError> {
        set_level(&mut self.en, true)?;
        self.delay.delay_us(1);
        set_level(&mut self.en, false)?;
        // Ordinary commands finish within 37 us; leave margin.
        self.delay.delay_us(50);
        Ok(())
    }
}

fn set_level<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), DisplayError> {
    let result = if high { pin.set_high() } else { pin.set_low() };
    result.map_err(|_| DisplayError::Bus)
}

impl<P, D> TextDisplay for Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::CLEAR)?;
        // Clear is the one slow command, 1.52 ms on the datasheet.
        self.delay.delay_ms(2);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        if col >= DISPLAY_COLS || row >= DISPLAY_ROWS {
            return Err(DisplayError::OutOfBounds);
        }
        self.command(cmd::SET_DDRAM | (ROW_OFFSETS[row as usize] + col))
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        for byte in text.bytes() {
            self.write_data(byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use heapless::Vec;

    use super::*;

    #[derive(Default)]
    struct MockPin {
        history: Vec<bool, 64>,
    }

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            let _ = self.history.push(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            let _ = self.history.push(true);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockDelay {
        total_ns: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    fn make_display() -> Hd44780<MockPin, MockDelay> {
        Hd44780::new(
            MockPin::default(),
            MockPin::default(),
            MockPin::default(),
            MockPin::default(),
            MockPin::default(),
            MockPin::default(),
            MockDelay::default(),
        )
    }

    fn enable_pulses(pin: &MockPin) -> usize {
        pin.history
            .windows(2)
            .filter(|pair| pair[0] && !pair[1])
            .count()
    }

    #[test]
    fn test_init_sends_twelve_enable_pulses() {
        let mut display = make_display();
        display.init().unwrap();

        // 4 raw reset nibbles plus 4 commands of 2 nibbles each.
        assert_eq!(enable_pulses(&display.en), 12);
        // Register select stays in command mode throughout.
        assert!(display.rs.history.iter().all(|high| !high));
    }

    #[test]
    fn test_print_raises_register_select() {
        let mut display = make_display();
        display.print("A").unwrap();

        assert_eq!(display.rs.history.as_slice(), &[true]);
        assert_eq!(enable_pulses(&display.en), 2);
    }

    #[test]
    fn test_print_splits_bytes_into_nibbles() {
        let mut display = make_display();
        display.print("A").unwrap();

        // 'A' = 0x41: high nibble 0b0100, then low nibble 0b0001.
        assert_eq!(display.d7.history.as_slice(), &[false, false]);
        assert_eq!(display.d6.history.as_slice(), &[true, false]);
        assert_eq!(display.d5.history.as_slice(), &[false, false]);
        assert_eq!(display.d4.history.as_slice(), &[false, true]);
    }

    #[test]
    fn test_set_cursor_addresses_second_row() {
        let mut display = make_display();
        display.set_cursor(3, 1).unwrap();

        // 0x80 | (0x40 + 3) = 0xC3.
        assert_eq!(display.rs.history.as_slice(), &[false]);
        assert_eq!(display.d7.history.as_slice(), &[true, false]);
        assert_eq!(display.d6.history.as_slice(), &[true, false]);
        assert_eq!(display.d5.history.as_slice(), &[false, true]);
        assert_eq!(display.d4.history.as_slice(), &[false, true]);
    }

    #[test]
    fn test_set_cursor_rejects_out_of_range() {
        let mut display = make_display();

        assert_eq!(display.set_cursor(16, 0), Err(DisplayError::OutOfBounds));
        assert_eq!(display.set_cursor(0, 2), Err(DisplayError::OutOfBounds));
        // Nothing reached the bus.
        assert!(display.en.history.is_empty());
    }

    #[test]
    fn test_clear_waits_for_the_slow_command() {
        let mut display = make_display();
        display.clear().unwrap();

        assert!(display.delay.total_ns >= 2_000_000);
    }
}

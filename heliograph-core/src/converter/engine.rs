//! The per-byte conversion loop
//!
//! One byte is taken from the transport, echoed on the display, and then
//! fully acted on (pulse emission, word gap, line reset or error sequence)
//! before the next byte is examined. All pacing goes through the [`Clock`]
//! capability so the loop itself stays free of time sources.

use crate::config::ConverterConfig;
use crate::morse::{encode, EncodeResult};
use crate::pulse::PulseScheduler;
use crate::text::LineWindow;
use crate::traits::{
    Clock, DisplayError, InputTransport, IntensityOutput, NoticeSink, TextDisplay, ToneOutput,
};

/// Greeting shown on the top row and sent over the notice sink
pub const PROMPT: &str = "Enter a word:";

/// Display message for a character with no code table entry
pub const INVALID_CHAR_MSG: &str = "Err Invalid Char";

/// Notice line for a character with no code table entry
pub const INVALID_CHAR_NOTICE: &str = "Non-standard character detected, please try again";

/// Character-to-pulse conversion engine
///
/// Owns its collaborators and the current line state. The display row
/// layout is fixed: prompt and error text on row 0, the echoed input
/// window on row 1.
pub struct Converter<D, N, L, E, T, C> {
    display: D,
    notices: N,
    lamp: L,
    error_lamp: E,
    tone: T,
    clock: C,
    config: ConverterConfig,
    scheduler: PulseScheduler,
    line: LineWindow,
}

impl<D, N, L, E, T, C> Converter<D, N, L, E, T, C>
where
    D: TextDisplay,
    N: NoticeSink,
    L: IntensityOutput,
    E: IntensityOutput,
    T: ToneOutput,
    C: Clock,
{
    pub fn new(
        config: ConverterConfig,
        display: D,
        notices: N,
        lamp: L,
        error_lamp: E,
        tone: T,
        clock: C,
    ) -> Self {
        Self {
            display,
            notices,
            lamp,
            error_lamp,
            tone,
            clock,
            config,
            scheduler: PulseScheduler::new(config),
            line: LineWindow::new(),
        }
    }

    /// Bring the device to its idle state and show the prompt
    ///
    /// All output channels are forced off first so a warm restart never
    /// leaves a lamp lit or the tone running.
    pub fn start(&mut self) -> Result<(), DisplayError> {
        self.lamp.set_intensity(0);
        self.error_lamp.set_intensity(0);
        self.tone.stop_tone();
        self.notices.println(PROMPT);
        self.display.clear()?;
        self.display.print(PROMPT)
    }

    /// Process every byte the transport currently has
    pub fn drain<I: InputTransport>(&mut self, transport: &mut I) -> Result<(), DisplayError> {
        while let Some(byte) = transport.read_byte() {
            self.process_byte(byte)?;
        }
        Ok(())
    }

    /// Handle one input byte to completion
    ///
    /// The byte is echoed before it is classified, so line terminators
    /// briefly show up as `?` on the display. That matches the device's
    /// long-standing behavior and keeps the echo path unconditional.
    pub fn process_byte(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.line.append(byte);
        self.render()?;

        if byte == b' ' {
            // Word gap: pacing only, nothing to emit.
            self.clock.wait_ms(self.config.timings.letter_pause_ms);
            return Ok(());
        }

        match encode(byte) {
            EncodeResult::Ignored => self.finish_line(),
            EncodeResult::Symbol(symbol) => {
                self.scheduler
                    .emit(symbol, &mut self.clock, &mut self.lamp, &mut self.tone);
                self.clock.wait_ms(self.config.timings.letter_pause_ms);
                Ok(())
            }
            EncodeResult::Unsupported => self.handle_unsupported(),
        }
    }

    /// The visible portion of the current input line
    pub fn window(&self) -> &str {
        self.line.window()
    }

    /// Redraw the input window on the bottom row
    ///
    /// The window never shrinks between resets, so printing in place
    /// always covers the previous render.
    fn render(&mut self) -> Result<(), DisplayError> {
        self.display.set_cursor(0, 1)?;
        self.display.print(self.line.window())
    }

    /// Line terminator: hold the finished line, then reset to the prompt
    fn finish_line(&mut self) -> Result<(), DisplayError> {
        self.clock.wait_ms(self.config.timings.line_pause_ms);
        self.display.clear()?;
        self.line.reset();
        self.display.print(PROMPT)
    }

    /// Error sequence for a byte with no code table entry
    ///
    /// Notice line, error text on the top row, the configured blink burst
    /// on the error channel, then a full line reset. The display is left
    /// blank until the next byte arrives.
    fn handle_unsupported(&mut self) -> Result<(), DisplayError> {
        self.notices.println(INVALID_CHAR_NOTICE);
        self.display.clear()?;
        self.display.print(INVALID_CHAR_MSG)?;

        let blink = self.config.blink;
        for _ in 0..blink.count {
            self.error_lamp.set_intensity(self.config.brightness);
            self.clock.wait_ms(blink.on_ms);
            self.error_lamp.set_intensity(0);
            self.clock.wait_ms(blink.off_ms);
        }

        self.clock.wait_ms(self.config.timings.letter_pause_ms);
        self.display.clear()?;
        self.line.reset();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;

    use heapless::String;
    use heapless::Vec;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Clear,
        SetCursor(u8, u8),
        Print(String<32>),
        Notice(String<64>),
        Lamp(u8),
        ErrorLamp(u8),
        ToneOn(u16, u32),
        ToneOff,
        Wait(u32),
    }

    type Log = RefCell<Vec<Op, 512>>;

    struct LogDisplay<'a>(&'a Log);

    impl TextDisplay for LogDisplay<'_> {
        fn clear(&mut self) -> Result<(), DisplayError> {
            let _ = self.0.borrow_mut().push(Op::Clear);
            Ok(())
        }

        fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
            let _ = self.0.borrow_mut().push(Op::SetCursor(col, row));
            Ok(())
        }

        fn print(&mut self, text: &str) -> Result<(), DisplayError> {
            let mut owned = String::new();
            let _ = owned.push_str(text);
            let _ = self.0.borrow_mut().push(Op::Print(owned));
            Ok(())
        }
    }

    struct LogNotices<'a>(&'a Log);

    impl NoticeSink for LogNotices<'_> {
        fn println(&mut self, line: &str) {
            let mut owned = String::new();
            let _ = owned.push_str(line);
            let _ = self.0.borrow_mut().push(Op::Notice(owned));
        }
    }

    struct LogLamp<'a>(&'a Log);

    impl IntensityOutput for LogLamp<'_> {
        fn set_intensity(&mut self, level: u8) {
            let _ = self.0.borrow_mut().push(Op::Lamp(level));
        }
    }

    struct LogErrorLamp<'a>(&'a Log);

    impl IntensityOutput for LogErrorLamp<'_> {
        fn set_intensity(&mut self, level: u8) {
            let _ = self.0.borrow_mut().push(Op::ErrorLamp(level));
        }
    }

    struct LogTone<'a>(&'a Log);

    impl ToneOutput for LogTone<'_> {
        fn start_tone(&mut self, freq_hz: u16, duration_hint_ms: u32) {
            let _ = self.0.borrow_mut().push(Op::ToneOn(freq_hz, duration_hint_ms));
        }

        fn stop_tone(&mut self) {
            let _ = self.0.borrow_mut().push(Op::ToneOff);
        }
    }

    struct LogClock<'a>(&'a Log);

    impl Clock for LogClock<'_> {
        fn wait_ms(&mut self, ms: u32) {
            let _ = self.0.borrow_mut().push(Op::Wait(ms));
        }
    }

    fn make_converter(
        log: &Log,
    ) -> Converter<LogDisplay<'_>, LogNotices<'_>, LogLamp<'_>, LogErrorLamp<'_>, LogTone<'_>, LogClock<'_>>
    {
        Converter::new(
            ConverterConfig::default(),
            LogDisplay(log),
            LogNotices(log),
            LogLamp(log),
            LogErrorLamp(log),
            LogTone(log),
            LogClock(log),
        )
    }

    fn print_op(text: &str) -> Op {
        let mut owned = String::new();
        let _ = owned.push_str(text);
        Op::Print(owned)
    }

    fn notice_op(text: &str) -> Op {
        let mut owned = String::new();
        let _ = owned.push_str(text);
        Op::Notice(owned)
    }

    #[test]
    fn test_start_quiesces_outputs_and_prompts() {
        let log = Log::default();
        let mut converter = make_converter(&log);
        converter.start().unwrap();

        assert_eq!(
            log.borrow().as_slice(),
            &[
                Op::Lamp(0),
                Op::ErrorLamp(0),
                Op::ToneOff,
                notice_op(PROMPT),
                Op::Clear,
                print_op(PROMPT),
            ]
        );
    }

    #[test]
    fn test_space_paces_without_emission() {
        let log = Log::default();
        let mut converter = make_converter(&log);
        converter.process_byte(b' ').unwrap();

        assert_eq!(
            log.borrow().as_slice(),
            &[Op::SetCursor(0, 1), print_op(" "), Op::Wait(750)]
        );
    }

    #[test]
    fn test_letter_emits_then_pauses() {
        let log = Log::default();
        let mut converter = make_converter(&log);
        converter.process_byte(b'e').unwrap();

        // "e" is a single dot: echo, one pulse cycle, letter pause.
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Op::SetCursor(0, 1),
                print_op("e"),
                Op::Lamp(100),
                Op::ToneOn(1000, 300),
                Op::Wait(300),
                Op::Lamp(0),
                Op::ToneOff,
                Op::Wait(200),
                Op::Wait(750),
            ]
        );
    }

    #[test]
    fn test_terminator_restores_prompt() {
        let log = Log::default();
        let mut converter = make_converter(&log);
        converter.process_byte(b'\n').unwrap();

        // The raw terminator echoes as a placeholder before the reset.
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Op::SetCursor(0, 1),
                print_op("?"),
                Op::Wait(2000),
                Op::Clear,
                print_op(PROMPT),
            ]
        );
        assert_eq!(converter.window(), "");
    }

    #[test]
    fn test_unsupported_runs_error_sequence_and_resets_line() {
        let log = Log::default();
        let mut converter = make_converter(&log);
        converter.process_byte(b'a').unwrap();
        log.borrow_mut().clear();

        converter.process_byte(b'#').unwrap();

        let ops = log.borrow();
        assert_eq!(ops[0], Op::SetCursor(0, 1));
        assert_eq!(ops[1], print_op("a#"));
        assert_eq!(ops[2], notice_op(INVALID_CHAR_NOTICE));
        assert_eq!(ops[3], Op::Clear);
        assert_eq!(ops[4], print_op(INVALID_CHAR_MSG));
        for cycle in 0..5 {
            let base = 5 + cycle * 4;
            assert_eq!(ops[base], Op::ErrorLamp(100));
            assert_eq!(ops[base + 1], Op::Wait(100));
            assert_eq!(ops[base + 2], Op::ErrorLamp(0));
            assert_eq!(ops[base + 3], Op::Wait(25));
        }
        assert_eq!(ops[25], Op::Wait(750));
        assert_eq!(ops[26], Op::Clear);
        assert_eq!(ops.len(), 27);
        drop(ops);

        // The whole line restarts, not just the visible window.
        assert_eq!(converter.window(), "");
    }

    #[test]
    fn test_window_scrolls_during_echo() {
        let log = Log::default();
        let mut converter = make_converter(&log);
        for byte in "abcdefghijklmnopqrst".bytes() {
            converter.process_byte(byte).unwrap();
        }
        assert_eq!(converter.window(), "efghijklmnopqrst");

        let ops = log.borrow();
        let last_print = ops
            .iter()
            .rev()
            .find_map(|op| match op {
                Op::Print(text) => Some(text.as_str()),
                _ => None,
            })
            .unwrap();
        assert_eq!(last_print, "efghijklmnopqrst");
    }

    #[test]
    fn test_drain_consumes_transport() {
        struct ScriptedInput {
            bytes: &'static [u8],
            pos: usize,
        }

        impl InputTransport for ScriptedInput {
            fn read_byte(&mut self) -> Option<u8> {
                let byte = self.bytes.get(self.pos).copied();
                if byte.is_some() {
                    self.pos += 1;
                }
                byte
            }
        }

        let log = Log::default();
        let mut converter = make_converter(&log);
        let mut input = ScriptedInput {
            bytes: b"hi",
            pos: 0,
        };
        converter.drain(&mut input).unwrap();

        assert_eq!(converter.window(), "hi");
        assert!(input.read_byte().is_none());
    }
}

//! Mock collaborators recording every output-side call in one shared log

use std::cell::RefCell;
use std::rc::Rc;

use heliograph_core::config::ConverterConfig;
use heliograph_core::converter::Converter;
use heliograph_core::traits::{
    Clock, DisplayError, InputTransport, IntensityOutput, NoticeSink, TextDisplay, ToneOutput,
};

/// Everything the device can do to the outside world, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Clear,
    SetCursor(u8, u8),
    Print(String),
    Notice(String),
    Lamp(u8),
    ErrorLamp(u8),
    ToneStart(u16, u32),
    ToneStop,
    Wait(u32),
}

pub type SharedLog = Rc<RefCell<Vec<Op>>>;

pub struct MockDisplay(pub SharedLog);

impl TextDisplay for MockDisplay {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.0.borrow_mut().push(Op::Clear);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        self.0.borrow_mut().push(Op::SetCursor(col, row));
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        self.0.borrow_mut().push(Op::Print(text.to_owned()));
        Ok(())
    }
}

pub struct MockNotices(pub SharedLog);

impl NoticeSink for MockNotices {
    fn println(&mut self, line: &str) {
        self.0.borrow_mut().push(Op::Notice(line.to_owned()));
    }
}

pub struct MockLamp(pub SharedLog);

impl IntensityOutput for MockLamp {
    fn set_intensity(&mut self, level: u8) {
        self.0.borrow_mut().push(Op::Lamp(level));
    }
}

pub struct MockErrorLamp(pub SharedLog);

impl IntensityOutput for MockErrorLamp {
    fn set_intensity(&mut self, level: u8) {
        self.0.borrow_mut().push(Op::ErrorLamp(level));
    }
}

pub struct MockTone(pub SharedLog);

impl ToneOutput for MockTone {
    fn start_tone(&mut self, freq_hz: u16, duration_hint_ms: u32) {
        self.0
            .borrow_mut()
            .push(Op::ToneStart(freq_hz, duration_hint_ms));
    }

    fn stop_tone(&mut self) {
        self.0.borrow_mut().push(Op::ToneStop);
    }
}

pub struct MockClock(pub SharedLog);

impl Clock for MockClock {
    fn wait_ms(&mut self, ms: u32) {
        self.0.borrow_mut().push(Op::Wait(ms));
    }
}

/// Scripted input feed, exhausted once
pub struct MockTransport {
    bytes: Vec<u8>,
    pos: usize,
}

impl MockTransport {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            pos: 0,
        }
    }
}

impl InputTransport for MockTransport {
    fn read_byte(&mut self) -> Option<u8> {
        let byte = self.bytes.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }
}

pub type TestConverter =
    Converter<MockDisplay, MockNotices, MockLamp, MockErrorLamp, MockTone, MockClock>;

/// A converter over mock collaborators, plus the log they all share
pub fn rig() -> (TestConverter, SharedLog) {
    rig_with(ConverterConfig::default())
}

pub fn rig_with(config: ConverterConfig) -> (TestConverter, SharedLog) {
    let log: SharedLog = Rc::new(RefCell::new(Vec::new()));
    let converter = Converter::new(
        config,
        MockDisplay(log.clone()),
        MockNotices(log.clone()),
        MockLamp(log.clone()),
        MockErrorLamp(log.clone()),
        MockTone(log.clone()),
        MockClock(log.clone()),
    );
    (converter, log)
}

//! Serial notice writer
//!
//! Adapts any blocking byte writer into the fire-and-forget notice sink.
//! Lines go out with a CRLF terminator so plain terminal emulators
//! render them correctly.

use embedded_io::Write;

use heliograph_core::traits::NoticeSink;

/// Notice sink over a serial transmit handle
pub struct NoticeWriter<W> {
    tx: W,
}

impl<W: Write> NoticeWriter<W> {
    pub fn new(tx: W) -> Self {
        Self { tx }
    }
}

impl<W: Write> NoticeSink for NoticeWriter<W> {
    fn println(&mut self, line: &str) {
        // Notices are best-effort; a stalled port must not wedge the
        // conversion loop.
        let _ = self.tx.write_all(line.as_bytes());
        let _ = self.tx.write_all(b"\r\n");
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use heapless::Vec;

    use super::*;

    #[derive(Default)]
    struct MockSerial {
        written: Vec<u8, 128>,
    }

    impl embedded_io::ErrorType for MockSerial {
        type Error = Infallible;
    }

    impl Write for MockSerial {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            let _ = self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_println_appends_crlf() {
        let mut notices = NoticeWriter::new(MockSerial::default());

        notices.println("Enter a word:");

        assert_eq!(notices.tx.written.as_slice(), b"Enter a word:\r\n");
    }

    #[test]
    fn test_empty_line_still_terminates() {
        let mut notices = NoticeWriter::new(MockSerial::default());

        notices.println("");

        assert_eq!(notices.tx.written.as_slice(), b"\r\n");
    }
}

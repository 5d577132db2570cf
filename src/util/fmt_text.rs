use core::fmt;
use crate::TextWrite;
use crate::error::{char_range, FmtWriteError};

/// Wrapper providing `TextWrite` trait for `core::fmt::Write` types.
///
/// `fmt::Write` can't be flushed or closed so `flush()` and `close()` do nothing.
#[derive(Debug)]
pub struct FmtText<W>(W);

impl<W: fmt::Write> FmtText<W> {
    /// Wraps `fmt` writer into text writer.
    pub fn new(writer: W) -> Self {
        FmtText(writer)
    }

    /// Unwraps inner writer.
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: fmt::Write> TextWrite for FmtText<W> {
    type WriteError = FmtWriteError<fmt::Error>;
    type FlushError = void::Void;
    type CloseError = void::Void;

    fn write_str(&mut self, text: &str) -> Result<(), Self::WriteError> {
        self.0.write_str(text).map_err(FmtWriteError::Write)
    }

    fn write_chars(&mut self, chars: &[char], offset: usize, len: usize) -> Result<(), Self::WriteError> {
        for c in char_range(chars, offset, len)? {
            self.0.write_char(*c).map_err(FmtWriteError::Write)?;
        }
        Ok(())
    }

    fn new_line(&mut self) -> Result<(), Self::WriteError> {
        self.write_str("\n")
    }

    fn flush(&mut self) -> Result<(), Self::FlushError> {
        Ok(())
    }

    fn close(&mut self) -> Result<(), Self::CloseError> {
        Ok(())
    }

    fn write_char(&mut self, c: char) -> Result<(), Self::WriteError> {
        self.0.write_char(c).map_err(FmtWriteError::Write)
    }
}

/// Wrapper providing `core::fmt::Write` trait for `TextWrite` types.
///
/// Since `fmt::Error` carries no information, the error returned by the text writer is stored and
/// can be retrieved using `take_error()`.
pub struct StdFmt<W: TextWrite> {
    writer: W,
    error: Option<W::WriteError>,
}

impl<W: TextWrite> StdFmt<W> {
    /// Wraps text writer into `fmt` writer.
    pub fn new(writer: W) -> Self {
        StdFmt {
            writer,
            error: None,
        }
    }

    /// Returns the error that caused the last `fmt::Error`, if the writer failed.
    ///
    /// `None` after a `fmt::Error` means the formatting implementation failed instead.
    pub fn take_error(&mut self) -> Option<W::WriteError> {
        self.error.take()
    }

    /// Unwraps inner writer.
    ///
    /// The stored error, if any, is lost.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn store<T>(&mut self, result: Result<T, W::WriteError>) -> fmt::Result {
        match result {
            Ok(_) => Ok(()),
            Err(error) => {
                self.error = Some(error);
                Err(fmt::Error)
            },
        }
    }
}

impl<W: TextWrite> fmt::Write for StdFmt<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let result = self.writer.write_str(s);
        self.store(result)
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        let result = self.writer.write_char(c);
        self.store(result)
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;
    use super::{FmtText, StdFmt};
    use crate::TextWrite;
    use crate::error::{CharRangeError, FmtWriteError};
    use crate::util::Sink;

    struct Counter(usize);

    impl Write for Counter {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            self.0 += s.chars().count();
            Ok(())
        }
    }

    #[test]
    fn chars_and_lines() {
        let mut writer = FmtText::new(Counter(0));
        TextWrite::write_chars(&mut writer, &['a', 'b', 'c'], 1, 2).unwrap();
        TextWrite::new_line(&mut writer).unwrap();
        assert_eq!(writer.into_inner().0, 3);
    }

    #[test]
    fn invalid_range() {
        let mut writer = FmtText::new(Counter(0));
        let error = TextWrite::write_chars(&mut writer, &['a'], 0, 2).unwrap_err();
        assert_eq!(error, FmtWriteError::Range(CharRangeError { offset: 0, len: 2, available: 1 }));
        assert_eq!(writer.into_inner().0, 0);
    }

    #[test]
    fn std_fmt_into_sink() {
        let mut writer = StdFmt::new(Sink);
        write!(writer, "{}", 42).unwrap();
        assert!(writer.take_error().is_none());
    }
}

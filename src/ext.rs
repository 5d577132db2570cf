//! This module contains various extension traits.

use core::fmt;
use crate::TextWrite;
use crate::error::FmtWriteError;
use crate::util::StdFmt;

/// Convenience methods available on every `TextWrite`.
///
/// Thanks to `write_fmt` the standard `write!` and `writeln!` macros work with any text writer as
/// long as this trait is in scope:
///
/// ```
/// use textsink::TextWriteExt;
/// use textsink::util::CaptureSink;
///
/// let mut sink = CaptureSink::new();
/// write!(sink, "{} + {} = {}", 1, 2, 1 + 2).unwrap();
/// assert_eq!(sink.content(), "1 + 2 = 3");
/// ```
pub trait TextWriteExt: TextWrite {
    /// Writes `text` followed by the line separator.
    fn write_line(&mut self, text: &str) -> Result<(), Self::WriteError> {
        self.write_str(text)?;
        self.new_line()
    }

    /// Writes each item of `lines` with `write_line()`.
    fn write_lines<'a, I: IntoIterator<Item = &'a str>>(&mut self, lines: I) -> Result<(), Self::WriteError> {
        for line in lines {
            self.write_line(line)?;
        }
        Ok(())
    }

    /// Writes formatted arguments.
    ///
    /// If a formatting implementation fails on its own `FmtWriteError::Formatter` is returned.
    fn write_fmt(&mut self, args: fmt::Arguments) -> Result<(), FmtWriteError<Self::WriteError>> {
        let mut adapter = StdFmt::new(&mut *self);
        match fmt::Write::write_fmt(&mut adapter, args) {
            Ok(()) => Ok(()),
            Err(fmt::Error) => match adapter.take_error() {
                Some(error) => Err(FmtWriteError::Write(error)),
                None => Err(FmtWriteError::Formatter),
            },
        }
    }
}

impl<W: TextWrite + ?Sized> TextWriteExt for W {}

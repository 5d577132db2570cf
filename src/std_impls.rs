//! This module contains glue for `std::io` types.

use std::fmt;
use std::io;
use crate::TextWrite;
use crate::error::{char_range, CharRangeError};
use void::Void;

/// Error returned by `IoText`.
#[derive(Debug)]
pub enum TextIoError {
    /// The underlying writer failed.
    Io(io::Error),
    /// Range passed to `write_chars()` was invalid.
    Range(CharRangeError),
    /// The writer was already closed.
    Closed,
}

impl fmt::Display for TextIoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TextIoError::Io(e) => write!(f, "I/O error: {}", e),
            TextIoError::Range(e) => fmt::Display::fmt(e, f),
            TextIoError::Closed => write!(f, "the writer is closed"),
        }
    }
}

impl std::error::Error for TextIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextIoError::Io(e) => Some(e),
            TextIoError::Range(e) => Some(e),
            TextIoError::Closed => None,
        }
    }
}

impl From<io::Error> for TextIoError {
    fn from(e: io::Error) -> Self {
        TextIoError::Io(e)
    }
}

impl From<CharRangeError> for TextIoError {
    fn from(e: CharRangeError) -> Self {
        TextIoError::Range(e)
    }
}

impl From<TextIoError> for io::Error {
    fn from(e: TextIoError) -> Self {
        match e {
            TextIoError::Io(e) => e,
            TextIoError::Range(e) => io::Error::new(io::ErrorKind::InvalidInput, e),
            TextIoError::Closed => io::Error::new(io::ErrorKind::BrokenPipe, TextIoError::Closed),
        }
    }
}

/// Wrapper providing `TextWrite` trait for `std::io::Write` types.
///
/// Text is encoded as UTF-8. After `close()` the inner writer is flushed and all further writes
/// fail with `TextIoError::Closed`; closing again is a no-op.
#[derive(Debug)]
pub struct IoText<W> {
    writer: W,
    closed: bool,
}

impl<W: io::Write> IoText<W> {
    /// Wraps `std` writer into text writer.
    pub fn new(writer: W) -> Self {
        IoText {
            writer,
            closed: false,
        }
    }

    /// Returns `true` if `close()` succeeded.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Unwraps inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), TextIoError> {
        if self.closed {
            return Err(TextIoError::Closed);
        }
        self.writer.write_all(bytes)?;
        Ok(())
    }
}

impl<W: io::Write> TextWrite for IoText<W> {
    type WriteError = TextIoError;
    type FlushError = TextIoError;
    type CloseError = io::Error;

    fn write_str(&mut self, text: &str) -> Result<(), Self::WriteError> {
        self.write_bytes(text.as_bytes())
    }

    fn write_chars(&mut self, chars: &[char], offset: usize, len: usize) -> Result<(), Self::WriteError> {
        let chars = char_range(chars, offset, len)?;
        let mut buf = [0; 4];
        for c in chars {
            self.write_bytes(c.encode_utf8(&mut buf).as_bytes())?;
        }
        Ok(())
    }

    fn new_line(&mut self) -> Result<(), Self::WriteError> {
        self.write_bytes(b"\n")
    }

    fn flush(&mut self) -> Result<(), Self::FlushError> {
        if self.closed {
            return Err(TextIoError::Closed);
        }
        self.writer.flush().map_err(|error| {
            tracing::debug!(%error, "flushing text writer failed");
            TextIoError::Io(error)
        })
    }

    fn close(&mut self) -> Result<(), Self::CloseError> {
        if self.closed {
            return Ok(());
        }
        self.writer.flush()?;
        self.closed = true;
        tracing::debug!("text writer closed");
        Ok(())
    }
}

// Same as our Sink.
impl TextWrite for io::Sink {
    type WriteError = Void;
    type FlushError = Void;
    type CloseError = Void;

    fn write_str(&mut self, _text: &str) -> Result<(), Self::WriteError> {
        Ok(())
    }

    fn write_chars(&mut self, _chars: &[char], _offset: usize, _len: usize) -> Result<(), Self::WriteError> {
        Ok(())
    }

    fn new_line(&mut self) -> Result<(), Self::WriteError> {
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::FlushError> {
        Ok(())
    }

    fn close(&mut self) -> Result<(), Self::CloseError> {
        Ok(())
    }
}

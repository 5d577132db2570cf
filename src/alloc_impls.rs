use alloc::string::String;
use crate::TextWrite;
use crate::error::{char_range, CharRangeError};
use void::Void;

/// `String` is a real in-memory sink: unlike `util::CaptureSink` it records char ranges and line
/// separators too.
impl TextWrite for String {
    type WriteError = CharRangeError;
    type FlushError = Void;
    type CloseError = Void;

    #[inline]
    fn write_str(&mut self, text: &str) -> Result<(), Self::WriteError> {
        self.push_str(text);
        Ok(())
    }

    fn write_chars(&mut self, chars: &[char], offset: usize, len: usize) -> Result<(), Self::WriteError> {
        let chars = char_range(chars, offset, len)?;
        self.extend(chars);
        Ok(())
    }

    fn new_line(&mut self) -> Result<(), Self::WriteError> {
        self.push('\n');
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::FlushError> {
        Ok(())
    }

    fn close(&mut self) -> Result<(), Self::CloseError> {
        Ok(())
    }

    #[inline]
    fn write_char(&mut self, c: char) -> Result<(), Self::WriteError> {
        self.push(c);
        Ok(())
    }

    fn size_hint(&mut self, chars: usize) {
        self.reserve(chars);
    }

    fn uses_size_hint(&self) -> bool {
        true
    }
}

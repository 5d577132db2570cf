use crate::TextWrite;
use void::Void;

/// Silently drops everything that is written to it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sink;

impl TextWrite for Sink {
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

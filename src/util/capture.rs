use alloc::string::String;
use core::fmt;
use crate::TextWrite;
use void::Void;

/// Captures text written to it in memory so that tests can inspect it later.
///
/// Hand this to code that writes through a generic `TextWrite` instead of a real destination
/// (console, file, socket) and assert on `content()` afterwards.
///
/// The captured content only ever grows. Nothing can fail and nothing is ever released, so
/// `flush()` and `close()` do nothing and the sink keeps capturing after being closed.
///
/// # Known divergence
///
/// Only `write_str()` captures anything. Single chars (`write_char()`, including chars and padding
/// produced by `TextWriteExt::write_fmt`), char slices (`write_chars()`) and `new_line()` are
/// **ignored**: they don't change the captured content. Existing tests rely on this so it's kept
/// as is. Use `String` as a sink if you need those to be recorded too.
///
/// The sink doesn't implement `core::fmt::Write` since its `write_str` and `write_char` would clash
/// with the `TextWrite` ones. `write!` works through `TextWriteExt` instead.
///
/// ```
/// use textsink::TextWrite;
/// use textsink::util::CaptureSink;
///
/// let mut sink = CaptureSink::new();
/// sink.close().unwrap();
/// sink.write_str("x").unwrap();
/// sink.write_chars(&['y'], 0, 1).unwrap();
/// sink.write_char('z').unwrap();
/// assert_eq!(sink.content(), "x");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CaptureSink {
    content: String,
}

impl CaptureSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        CaptureSink {
            content: String::new(),
        }
    }

    /// Creates an empty sink with preallocated space for at least `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        CaptureSink {
            content: String::with_capacity(capacity),
        }
    }

    /// Returns everything captured so far.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Unwraps the captured text.
    pub fn into_content(self) -> String {
        self.content
    }

    /// Length of captured content in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if nothing was captured yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl TextWrite for CaptureSink {
    type WriteError = Void;
    type FlushError = Void;
    type CloseError = Void;

    #[inline]
    fn write_str(&mut self, text: &str) -> Result<(), Self::WriteError> {
        self.content.push_str(text);
        Ok(())
    }

    // Ignored, see "Known divergence".
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
        tracing::trace!(captured = self.content.len(), "capture sink closed, it keeps capturing");
        Ok(())
    }

    // Ignored, see "Known divergence".
    fn write_char(&mut self, _c: char) -> Result<(), Self::WriteError> {
        Ok(())
    }

    fn size_hint(&mut self, chars: usize) {
        self.content.reserve(chars);
    }

    fn uses_size_hint(&self) -> bool {
        true
    }
}

impl fmt::Display for CaptureSink {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl AsRef<str> for CaptureSink {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

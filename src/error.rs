//! Error types and various operations on them.

use core::fmt;
use void::Void;

/// Error indicating that `offset` and `len` passed to `write_chars()` don't describe a range
/// inside the provided slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRangeError {
    /// Requested start of the range.
    pub offset: usize,
    /// Requested number of chars.
    pub len: usize,
    /// Number of chars actually available.
    pub available: usize,
}

impl fmt::Display for CharRangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "char range {} + {} is out of bounds of slice with {} chars", self.offset, self.len, self.available)
    }
}

#[cfg(feature = "use_std")]
impl std::error::Error for CharRangeError {}

impl From<Void> for CharRangeError {
    fn from(e: Void) -> Self {
        void::unreachable(e)
    }
}

/// Returns `chars[offset..offset + len]` or an error if the range is out of bounds.
///
/// Overflow of `offset + len` is reported as an error too.
pub fn char_range(chars: &[char], offset: usize, len: usize) -> Result<&[char], CharRangeError> {
    offset
        .checked_add(len)
        .and_then(|end| chars.get(offset..end))
        .ok_or(CharRangeError {
            offset,
            len,
            available: chars.len(),
        })
}

/// Error returned by sinks backed by `core::fmt::Write` or when formatting into a `TextWrite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FmtWriteError<E> {
    /// The underlying writer failed.
    Write(E),
    /// Range passed to `write_chars()` was invalid.
    Range(CharRangeError),
    /// A `Display` or `Debug` implementation returned an error without the writer failing.
    Formatter,
}

impl<E> FmtWriteError<E> {
    /// Converts the error of the underlying writer, keeping other variants.
    pub fn map_write<F, G: FnOnce(E) -> F>(self, f: G) -> FmtWriteError<F> {
        match self {
            FmtWriteError::Write(e) => FmtWriteError::Write(f(e)),
            FmtWriteError::Range(e) => FmtWriteError::Range(e),
            FmtWriteError::Formatter => FmtWriteError::Formatter,
        }
    }
}

impl<E> From<CharRangeError> for FmtWriteError<E> {
    fn from(e: CharRangeError) -> Self {
        FmtWriteError::Range(e)
    }
}

impl<E: fmt::Display> fmt::Display for FmtWriteError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FmtWriteError::Write(e) => write!(f, "writing failed: {}", e),
            FmtWriteError::Range(e) => fmt::Display::fmt(e, f),
            FmtWriteError::Formatter => write!(f, "formatter error"),
        }
    }
}

#[cfg(feature = "use_std")]
impl<E: std::error::Error + 'static> std::error::Error for FmtWriteError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FmtWriteError::Write(e) => Some(e),
            FmtWriteError::Range(e) => Some(e),
            FmtWriteError::Formatter => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{char_range, CharRangeError, FmtWriteError};

    #[test]
    fn range_inside() {
        let chars = ['a', 'b', 'c', 'd'];
        assert_eq!(char_range(&chars, 1, 2), Ok(&chars[1..3]));
        assert_eq!(char_range(&chars, 4, 0), Ok(&chars[4..]));
    }

    #[test]
    fn range_outside() {
        let chars = ['a', 'b'];
        let expected = CharRangeError { offset: 1, len: 2, available: 2 };
        assert_eq!(char_range(&chars, 1, 2), Err(expected));
        assert!(char_range(&chars, 3, 0).is_err());
    }

    #[test]
    fn range_overflow() {
        let chars = ['a'];
        assert!(char_range(&chars, usize::MAX, 2).is_err());
    }

    #[test]
    fn map_write_converts_only_writer_errors() {
        let range = CharRangeError { offset: 2, len: 1, available: 0 };
        assert_eq!(FmtWriteError::Write(3u8).map_write(u32::from), FmtWriteError::Write(3u32));
        assert_eq!(FmtWriteError::<u8>::Range(range).map_write(u32::from), FmtWriteError::Range(range));
        assert_eq!(FmtWriteError::<u8>::Formatter.map_write(u32::from), FmtWriteError::Formatter);
    }

    #[test]
    fn void_converts_into_range_error() {
        fn flush_then_write<E: Into<CharRangeError>>(flushed: Result<(), E>) -> Result<(), CharRangeError> {
            flushed.map_err(Into::into)
        }

        assert_eq!(flush_then_write(Ok::<(), void::Void>(())), Ok(()));
    }
}

//! This crate provides a generic alternative to writing text through `core::fmt::Write` or
//! `std::io::Write`. `fmt::Write` can't report what went wrong and `io::Write` forces every sink
//! to pretend it's doing I/O with `std::io::Error`, which is useless for in-memory sinks and
//! unavailable in `no_std` environments.
//!
//! To solve these problems, `textsink::TextWrite` allows each implementor to define its own error
//! types. Sinks that can't fail use `Void` from the `void` crate, so callers can see statically
//! that the error branch is unreachable.
//!
//! The most common use is capturing output in tests: code under test writes through a generic
//! `W: TextWrite` and the test hands it a `util::CaptureSink`, then inspects the captured text.
//!
//! ```
//! use textsink::TextWrite;
//! use textsink::util::CaptureSink;
//!
//! let mut sink = CaptureSink::new();
//! sink.write_str("hello, ").unwrap();
//! sink.write_str("world").unwrap();
//! assert_eq!(sink.content(), "hello, world");
//! ```

#![no_std]
#![deny(missing_docs)]

#[cfg(feature = "use_std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "use_std")]
pub mod std_impls;

#[cfg(feature = "alloc")]
mod alloc_impls;

pub mod error;
pub mod ext;
pub mod util;

pub use ext::TextWriteExt;

/// A trait for objects which are character-oriented sinks.
///
/// Implementors of the `TextWrite` trait are sometimes called 'text writers'.
///
/// Text writers are defined by three required error types, `WriteError`, `FlushError` and
/// `CloseError`, and five required methods: `write_str()`, `write_chars()`, `new_line()`,
/// `flush()` and `close()`.
///
/// Unlike byte writers, text writers always accept the whole input or fail. There are no partial
/// writes.
///
/// Text writers are intended to be composable with one another. Many implementors throughout
/// `textsink` take and provide types which implement the `TextWrite` trait.
pub trait TextWrite {
    /// Value of this type is returned when a write operation fails.
    ///
    /// It's highly recommended to use `Void` from `void` crate if writing can never fail.
    type WriteError;

    /// Value of this type is returned when `flush()` fails.
    ///
    /// In case of in-memory writers flush does nothing and therefore this type is usually `Void`.
    type FlushError;

    /// Value of this type is returned when `close()` fails.
    type CloseError;

    /// Writes the whole `text` into this object.
    ///
    /// # Errors
    ///
    /// If an error is returned then it's unspecified how much of `text` was written.
    fn write_str(&mut self, text: &str) -> Result<(), Self::WriteError>;

    /// Writes `len` chars from `chars` starting at `offset`.
    ///
    /// Real sinks write `chars[offset..offset + len]` and fail with their `WriteError` if the range
    /// is out of bounds, see `error::char_range`. Some special-purpose sinks document a different
    /// behavior, most notably `util::CaptureSink` which ignores this call entirely.
    fn write_chars(&mut self, chars: &[char], offset: usize, len: usize) -> Result<(), Self::WriteError>;

    /// Writes the line separator.
    ///
    /// Sinks in this crate use `"\n"`.
    fn new_line(&mut self) -> Result<(), Self::WriteError>;

    /// Flushes this sink, ensuring that all intermediately buffered contents reach their
    /// destination.
    fn flush(&mut self) -> Result<(), Self::FlushError>;

    /// Closes this sink, flushing it first if applicable.
    ///
    /// Whether the sink may be used after closing is implementation-defined.
    fn close(&mut self) -> Result<(), Self::CloseError>;

    /// Writes a single char.
    fn write_char(&mut self, c: char) -> Result<(), Self::WriteError> {
        let mut buf = [0; 4];
        self.write_str(c.encode_utf8(&mut buf))
    }

    /// Hints the writer how many chars will be written after call to this function.
    ///
    /// Call to this function might enable some optimizations (e.g. pre-allocating buffer of
    /// appropriate size). The implementors must not rely on this call to provide correct values or
    /// on this function being called at all.
    fn size_hint(&mut self, _chars: usize) {}

    /// Reports to the caller whether size hint is actually used. This can prevent costly
    /// computation of size hint that would be thrown away.
    fn uses_size_hint(&self) -> bool {
        false
    }

    /// Creates a "by reference" adaptor for this instance of `TextWrite`.
    fn by_ref(&mut self) -> &mut Self where Self: Sized {
        self
    }
}

impl<'a, W: TextWrite + ?Sized> TextWrite for &'a mut W {
    type WriteError = W::WriteError;
    type FlushError = W::FlushError;
    type CloseError = W::CloseError;

    fn write_str(&mut self, text: &str) -> Result<(), Self::WriteError> {
        (*self).write_str(text)
    }

    fn write_chars(&mut self, chars: &[char], offset: usize, len: usize) -> Result<(), Self::WriteError> {
        (*self).write_chars(chars, offset, len)
    }

    fn new_line(&mut self) -> Result<(), Self::WriteError> {
        (*self).new_line()
    }

    fn flush(&mut self) -> Result<(), Self::FlushError> {
        (*self).flush()
    }

    fn close(&mut self) -> Result<(), Self::CloseError> {
        (*self).close()
    }

    fn write_char(&mut self, c: char) -> Result<(), Self::WriteError> {
        (*self).write_char(c)
    }

    fn size_hint(&mut self, chars: usize) {
        (*self).size_hint(chars)
    }

    fn uses_size_hint(&self) -> bool {
        (**self).uses_size_hint()
    }
}

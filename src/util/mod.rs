//! This module contains various generic utilities related to writing text.

mod sink;
mod fmt_text;
#[cfg(feature = "alloc")]
mod capture;

pub use self::sink::Sink;
pub use self::fmt_text::{FmtText, StdFmt};
#[cfg(feature = "alloc")]
pub use self::capture::CaptureSink;

use crate::TextWrite;
use crate::error::FmtWriteError;

/// Writes `items` into `writer`, separated by `separator`.
///
/// Nothing is written if `items` is empty. The size hint is computed only if the writer uses it.
///
/// # Errors
///
/// This function returns an error immediately if any call to `write_str` returns an error.
pub fn join<'a, W, I>(writer: &mut W, items: I, separator: &str) -> Result<(), W::WriteError>
where
    W: TextWrite + ?Sized,
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: Clone,
{
    let items = items.into_iter();
    if writer.uses_size_hint() {
        let (count, chars) = items
            .clone()
            .fold((0usize, 0usize), |(count, chars), item| (count + 1, chars + item.chars().count()));
        let separators = count.saturating_sub(1) * separator.chars().count();
        writer.size_hint(chars + separators);
    }

    let mut first = true;
    for item in items {
        if !first {
            writer.write_str(separator)?;
        }
        first = false;
        writer.write_str(item)?;
    }
    Ok(())
}

/// Writes formatted value into `writer` followed by the line separator.
///
/// Same as `writeln!` but uses the line separator of the writer.
pub fn write_display_line<W, T>(writer: &mut W, value: &T) -> Result<(), FmtWriteError<W::WriteError>>
where
    W: TextWrite + ?Sized,
    T: core::fmt::Display + ?Sized,
{
    use crate::TextWriteExt;

    writer.write_fmt(format_args!("{}", value))?;
    writer.new_line().map_err(FmtWriteError::Write)
}

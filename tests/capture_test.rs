//! Capturing output of code that writes through a generic text writer.

#![cfg(feature = "alloc")]

use textsink::util::{self, CaptureSink, Sink};
use textsink::{TextWrite, TextWriteExt};
use void::ResultVoidExt;

/// Stand-in for production code that only knows about the abstract sink.
fn greet<W>(out: &mut W, names: &[&str]) -> Result<(), W::WriteError>
where
    W: TextWrite,
    W::FlushError: Into<W::WriteError>,
{
    out.write_str("hello, ")?;
    util::join(out, names.iter().copied(), " and ")?;
    out.new_line()?;
    if let Err(error) = out.flush() {
        return Err(error.into());
    }
    Ok(())
}

#[test]
fn hello_world() {
    let mut sink = CaptureSink::new();
    sink.write_str("hello, ").void_unwrap();
    sink.write_str("world").void_unwrap();
    assert_eq!(sink.content(), "hello, world");
}

#[test]
fn close_does_not_disable_writes() {
    let mut sink = CaptureSink::new();
    sink.close().void_unwrap();
    sink.write_str("x").void_unwrap();
    assert_eq!(sink.content(), "x");
}

#[test]
fn captures_generic_code() {
    let mut sink = CaptureSink::new();
    greet(&mut sink, &["Alice", "Bob"]).void_unwrap();
    // new_line is not recorded by the capturing sink
    assert_eq!(sink.content(), "hello, Alice and Bob");
}

#[test]
fn string_records_line_separators() {
    let mut out = String::new();
    greet(&mut out, &["world"]).unwrap();
    assert_eq!(out, "hello, world\n");
}

#[test]
fn discarding_sink() {
    greet(&mut Sink, &["nobody"]).void_unwrap();
}

#[test]
fn formatted_chars_are_not_captured() {
    let mut sink = CaptureSink::new();
    write!(sink, "{}{}", 'a', "b").unwrap();
    sink.write_char('c').void_unwrap();
    assert_eq!(sink.content(), "b");
}

#[test]
fn formatting() {
    let mut sink = CaptureSink::new();
    write!(sink, "{}-{}", "id", 42).unwrap();
    util::write_display_line(&mut sink, &3.5).unwrap();
    assert_eq!(sink.content(), "id-423.5");
    assert_eq!(sink.to_string(), "id-423.5");
}

#[test]
fn write_line_over_string() {
    let mut out = String::new();
    out.write_lines(["a", "b"].iter().copied()).unwrap();
    out.write_line("c").unwrap();
    assert_eq!(out, "a\nb\nc\n");
}

#[test]
fn join_reserves_when_hinted() {
    let mut sink = CaptureSink::new();
    util::join(&mut sink, Vec::<&str>::new(), ", ").void_unwrap();
    assert!(sink.is_empty());
    util::join(&mut sink, vec!["a", "bc", "d"], ", ").void_unwrap();
    assert_eq!(sink.content(), "a, bc, d");
}

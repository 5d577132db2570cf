//! `IoText` writing into a real file.

#![cfg(feature = "use_std")]

use std::fs;
use std::io::ErrorKind;
use textsink::std_impls::{IoText, TextIoError};
use textsink::{TextWrite, TextWriteExt};

#[test]
fn writes_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut writer = IoText::new(file.reopen().unwrap());
    writer.write_line("first").unwrap();
    writer.write_chars(&['s', 'e', 'c', 'o', 'n', 'd'], 0, 6).unwrap();
    writer.new_line().unwrap();
    writer.close().unwrap();

    let content = fs::read_to_string(file.path()).unwrap();
    assert_eq!(content, "first\nsecond\n");
}

#[test]
fn rejects_bad_range_without_writing() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut writer = IoText::new(file.reopen().unwrap());
    match writer.write_chars(&['a'], 0, 5) {
        Err(TextIoError::Range(error)) => assert_eq!(error.available, 1),
        other => panic!("unexpected result: {:?}", other),
    }
    writer.close().unwrap();
    assert_eq!(fs::read_to_string(file.path()).unwrap(), "");
}

#[test]
fn closed_writer_maps_to_io_error() {
    let mut writer = IoText::new(Vec::new());
    writer.close().unwrap();
    let error: std::io::Error = writer.write_str("late").unwrap_err().into();
    assert_eq!(error.kind(), ErrorKind::BrokenPipe);
}

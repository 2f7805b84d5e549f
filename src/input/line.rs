//! Low-level line collection from the console.

use crate::error::Result;
use std::io::{self, BufRead};

/// Source of submitted input lines.
///
/// `read_line` blocks until a full line is available. It is the only
/// suspension point of the session loop and is not interrupted by
/// cancellation.
pub trait LineSource {
    /// Next line without its terminator, or `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Line reader over any buffered input.
#[derive(Debug)]
pub struct BufReadLines<R> {
    reader: R,
    buffer: Vec<u8>,
}

impl<R: BufRead> BufReadLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for BufReadLines<R> {
    fn read_line(&mut self) -> Result<Option<String>> {
        read_trimmed_line(&mut self.reader, &mut self.buffer)
    }
}

/// Line reader over the process's standard input.
///
/// Stdin is locked only for the duration of each read, so the reader can be
/// moved onto the session thread.
#[derive(Debug, Default)]
pub struct StdinLines {
    buffer: Vec<u8>,
}

impl StdinLines {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineSource for StdinLines {
    fn read_line(&mut self) -> Result<Option<String>> {
        read_trimmed_line(&mut io::stdin().lock(), &mut self.buffer)
    }
}

/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// stray byte is just unrecognized input.
fn read_trimmed_line<R: BufRead>(reader: &mut R, buffer: &mut Vec<u8>) -> Result<Option<String>> {
    buffer.clear();
    if reader.read_until(b'\n', buffer)? == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(buffer);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

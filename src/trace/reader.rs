//! Line-oriented trace loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::Result;

use super::Trace;

/// Read a trace from any buffered reader, one page identifier per line.
///
/// Lines are taken verbatim (minus the line terminator): order-preserving,
/// no deduplication, no trimming.
///
/// # Errors
/// Returns `Error::Io` if reading fails.
pub fn read_trace<R: BufRead>(reader: R) -> Result<Trace> {
    let mut trace = Trace::new();
    for line in reader.lines() {
        trace.push(line?);
    }
    Ok(trace)
}

/// Read a trace from a file.
///
/// # Errors
/// Returns `Error::Io` if the file cannot be opened or read.
pub fn read_trace_file<P: AsRef<Path>>(path: P) -> Result<Trace> {
    let file = File::open(path)?;
    read_trace(BufReader::new(file))
}

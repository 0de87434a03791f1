//! Sample count input.

use std::io::{BufRead, ErrorKind};

use crate::errors::BenchError;

/// Parse a sample count from text. Surrounding whitespace is ignored.
///
/// # Errors
/// Returns `InvalidSampleCount` unless the text is a non-negative integer.
pub fn parse_sample_count(s: &str) -> Result<usize, BenchError> {
    let t = s.trim();
    // usize::from_str accepts a leading '+', the count must be plain digits
    if t.is_empty() || !t.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BenchError::InvalidSampleCount(s.to_string()));
    }
    t.parse::<usize>().map_err(|_| BenchError::InvalidSampleCount(s.to_string()))
}

/// Read the sample count from the first line of `reader` (typically stdin).
///
/// # Errors
/// Returns `InvalidSampleCount` when the line is missing, not UTF-8 or not a
/// non-negative integer, and `Io` if the reader fails.
pub fn load_sample_count<R: BufRead>(mut reader: R) -> Result<usize, BenchError> {
    let mut line = String::new();
    reader.read_line(&mut line).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => BenchError::InvalidSampleCount(e.to_string()),
        _ => BenchError::Io(e),
    })?;
    let n = parse_sample_count(&line)?;
    log::debug!("sample count: {n}");
    Ok(n)
}

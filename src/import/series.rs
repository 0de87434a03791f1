use std::io::BufRead;
use std::path::Path;

use crate::errors::BenchError;
use crate::types::{Operation, SeriesSet};

/// Parse one benchmark file body: insert, delete and find timings on lines 1-3.
///
/// `origin` names the source in errors. Missing lines count as empty and lines
/// after the third are not read.
///
/// # Errors
/// `MalformedLine` on a non-integer token, `LengthMismatch` when a line does not
/// hold exactly `samples` values, `ResourceNotFound` if the reader fails.
pub fn parse_series_set<R: BufRead>(
    mut reader: R,
    samples: usize,
    origin: &Path,
) -> Result<SeriesSet, BenchError> {
    let mut buf = String::new();
    let mut next = |op: Operation| -> Result<Vec<i64>, BenchError> {
        buf.clear();
        reader
            .read_line(&mut buf)
            .map_err(|e| BenchError::ResourceNotFound { path: origin.to_path_buf(), source: e })?;
        parse_line(&buf, op, samples, origin)
    };
    let insert = next(Operation::Insert)?;
    let delete = next(Operation::Delete)?;
    let find = next(Operation::Find)?;
    Ok(SeriesSet::aligned(insert, delete, find))
}

fn parse_line(
    line: &str,
    op: Operation,
    samples: usize,
    origin: &Path,
) -> Result<Vec<i64>, BenchError> {
    let mut values = Vec::new();
    for token in line.split_whitespace() {
        let v = token.parse::<i64>().map_err(|_| BenchError::MalformedLine {
            path: origin.to_path_buf(),
            operation: op,
            token: token.to_string(),
        })?;
        values.push(v);
    }
    if values.len() != samples {
        return Err(BenchError::LengthMismatch {
            path: origin.to_path_buf(),
            operation: op,
            expected: samples,
            actual: values.len(),
        });
    }
    log::debug!("{}: {op} series, {} values", origin.display(), values.len());
    Ok(values)
}

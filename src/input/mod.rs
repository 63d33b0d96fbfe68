use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

use crate::errors::AppError;

pub const STDIN_MARKER: &str = "-";

/// Read path records from `input` ('-' means stdin, anything else is a file
/// path). Records are newline-delimited unless `null_delimited` is set, in
/// which case the stream is split on NUL bytes. Blank records are skipped;
/// everything else is kept verbatim, whitespace included, since segment
/// names are unconstrained strings.
pub fn read_records(input: &str, null_delimited: bool) -> Result<Vec<String>, AppError> {
    if input == STDIN_MARKER {
        let stdin = io::stdin();
        let reader = BufReader::new(stdin.lock());
        read_from(reader, null_delimited).map_err(AppError::Io)
    } else {
        let file = File::open(input).map_err(|e| AppError::InputFile(input.to_string(), e))?;
        let reader = BufReader::new(file);
        read_from(reader, null_delimited).map_err(|e| AppError::InputFile(input.to_string(), e))
    }
}

fn read_from<R: BufRead>(reader: R, null_delimited: bool) -> io::Result<Vec<String>> {
    if null_delimited {
        read_null_delimited(reader)
    } else {
        read_line_delimited(reader)
    }
}

fn read_line_delimited<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            records.push(line);
        }
    }

    Ok(records)
}

fn read_null_delimited<R: Read>(mut reader: R) -> io::Result<Vec<String>> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    let records = buffer
        .split(|&b| b == 0)
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .filter(|s| !s.trim().is_empty())
        .collect();

    Ok(records)
}

//! Process set loading.
//!
//! Reads process records from comma-separated text:
//!
//! ```text
//! id,arrival_time,burst_time,priority
//! P1,0,5,2
//! P2,1,3,1
//! ```
//!
//! The first line is a header and is always skipped. Blank lines are
//! ignored, fields are trimmed, and a missing `priority` column defaults
//! to 0. The parsed set is validated before it is returned.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::LoadError;
use crate::models::{Process, ProcessRecord};
use crate::validation::validate_processes;

/// Default input location, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "data/processes.csv";

/// Loads and validates a process set from a CSV file.
pub fn load_processes(path: impl AsRef<Path>) -> Result<Vec<Process>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let processes = parse_processes(&text)?;
    debug!("loaded {} processes from {}", processes.len(), path.display());
    Ok(processes)
}

/// Parses and validates a process set from CSV text.
pub fn parse_processes(text: &str) -> Result<Vec<Process>, LoadError> {
    let mut processes = Vec::new();

    // Line numbers are 1-based and count the header
    for (index, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_record(line, index + 1)?;
        processes.push(Process::from(record));
    }

    if processes.is_empty() {
        return Err(LoadError::NoProcesses);
    }
    validate_processes(&processes).map_err(LoadError::Invalid)?;
    Ok(processes)
}

fn parse_record(line: &str, line_no: usize) -> Result<ProcessRecord, LoadError> {
    let mut fields = line.split(',').map(str::trim);

    let id = match fields.next() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            return Err(LoadError::MissingField {
                line: line_no,
                field: "id",
            })
        }
    };
    let arrival_time = parse_field(fields.next(), line_no, "arrival_time")?;
    let burst_time = parse_field(fields.next(), line_no, "burst_time")?;
    let priority = match fields.next() {
        Some(raw) if !raw.is_empty() => parse_field(Some(raw), line_no, "priority")?,
        _ => 0,
    };

    Ok(ProcessRecord {
        id,
        arrival_time,
        burst_time,
        priority,
    })
}

fn parse_field<T: std::str::FromStr>(
    raw: Option<&str>,
    line: usize,
    field: &'static str,
) -> Result<T, LoadError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(LoadError::MissingField { line, field }),
    };
    raw.parse().map_err(|_| LoadError::InvalidNumber {
        line,
        field,
        value: raw.to_string(),
    })
}

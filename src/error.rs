//! Error types.
//!
//! Scheduling errors are raised before any process is mutated, so a failed
//! run never leaves a half-scheduled set behind.

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by schedulers, the metrics calculator, and the driver.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The process set has no processes.
    #[error("process set is empty")]
    EmptyInput,
    /// Round Robin quantum is zero or negative.
    #[error("time quantum must be positive, got {0}")]
    InvalidQuantum(i64),
    /// The process set failed validation.
    #[error("invalid process set: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    /// Metrics were requested for a process that never completed.
    #[error("process '{0}' has not completed")]
    IncompleteProcess(String),
    /// Copying a process set failed to allocate.
    #[error("failed to allocate process set copy")]
    AllocationFailure(#[from] TryReserveError),
}

/// Errors raised while loading process records.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A row is missing a required column.
    #[error("line {line}: missing field '{field}'")]
    MissingField { line: usize, field: &'static str },
    /// A numeric column could not be parsed.
    #[error("line {line}: invalid {field} '{value}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
    /// The input has a header but no process rows.
    #[error("no processes found")]
    NoProcesses,
    /// Parsed rows failed validation.
    #[error("invalid process set: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_input_message_joins_errors() {
        let err = ScheduleError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: P1"),
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, "P2 has burst 0"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid process set: Duplicate process ID: P1; P2 has burst 0"
        );
    }

    #[test]
    fn test_quantum_message() {
        assert_eq!(
            ScheduleError::InvalidQuantum(0).to_string(),
            "time quantum must be positive, got 0"
        );
    }
}

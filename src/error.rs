//! Error taxonomy for a projection run.
//!
//! Every variant is fatal: the run stops at the first one and `main` maps it to
//! the shared failure exit code.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code used for every failure path.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Result type alias for projection operations.
pub type ProjectResult<T> = Result<T, ProjectError>;

/// Which side of the projection a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Input,
    Output,
}

impl std::fmt::Display for FileRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}

/// Errors that abort a projection run.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// Wrong argument count or non-integer index arguments.
    #[error("{0}")]
    Argument(String),

    /// Input unreadable or output unwritable.
    #[error("cannot open {role} file '{}': {source}", .path.display())]
    IoOpen {
        role: FileRole,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Line 1 is not exactly three non-negative integers.
    #[error("header line 1 must hold exactly 3 non-negative integers (npar ndump nfit), got '{found}'")]
    HeaderFormat { found: String },

    /// Line 2 does not hold `npar * nfit` values.
    #[error("unexpected length {actual} of header line 2 (expected npar*nfit = {expected})")]
    ErrorRowLength { expected: usize, actual: usize },

    /// Line 3 or a scan line does not hold `1 + npar + 3*ndump` values.
    #[error("unexpected length {actual} of line {line} (expected 1+npar+3*ndump = {expected})")]
    RowLength {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// A token could not be parsed as a floating-point value.
    #[error("invalid number '{token}' on line {line}")]
    ValueFormat { line: usize, token: String },

    /// A requested projection index does not address a field of the row.
    #[error("projection index {index} is out of range for rows of width {width}")]
    IndexRange { index: i64, width: usize },

    /// Reading a line from the input failed.
    #[error("failed to read line {line} of input: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// Writing the projected output or stdout text failed.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),

    /// The JSON run summary could not be encoded.
    #[error("failed to encode run summary: {0}")]
    Summary(#[from] serde_json::Error),
}

impl ProjectError {
    /// Create an argument error.
    #[must_use]
    pub fn argument(details: impl Into<String>) -> Self {
        Self::Argument(details.into())
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }

    /// The 1-based input line this error points at, if any.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::HeaderFormat { .. } => Some(1),
            Self::ErrorRowLength { .. } => Some(2),
            Self::RowLength { line, .. } | Self::ValueFormat { line, .. } | Self::Read { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_length_names_line_and_widths() {
        let err = ProjectError::RowLength {
            line: 10,
            expected: 6,
            actual: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("line 10"));
        assert!(msg.contains("length 5"));
        assert!(msg.contains("= 6"));
        assert_eq!(err.line(), Some(10));
    }

    #[test]
    fn error_row_length_points_at_line_two() {
        let err = ProjectError::ErrorRowLength { expected: 4, actual: 3 };
        assert_eq!(err.line(), Some(2));
        assert!(err.to_string().contains("header line 2"));
    }

    #[test]
    fn io_open_names_role_and_path() {
        let err = ProjectError::IoOpen {
            role: FileRole::Input,
            path: PathBuf::from("missing.dat"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("input"));
        assert!(msg.contains("missing.dat"));
        assert_eq!(err.line(), None);
    }

    #[test]
    fn every_error_shares_the_failure_code() {
        let errors = [
            ProjectError::argument("indices should be integer"),
            ProjectError::HeaderFormat { found: String::new() },
            ProjectError::IndexRange { index: -1, width: 6 },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), FAILURE_EXIT_CODE);
            assert_ne!(err.exit_code(), 0);
        }
    }
}

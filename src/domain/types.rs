//! Shared domain types.
//!
//! A scan file is positional: the three integers on line 1 fix the width of
//! every later line. The row types below are only constructed after that width
//! has been checked, so downstream code can index them without re-validating.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{ProjectError, ProjectResult};

/// Number of lines consumed before the first scan point (header, errors, best fit).
pub const HEADER_LINES: usize = 3;

/// Values written per multipole-dump radius (ell = 0, 2, 4).
pub const VALUES_PER_DUMP: usize = 3;

/// Shape declared on line 1: `npar ndump nfit`.
///
/// Construction computes both derived widths with checked arithmetic, so a
/// header whose widths do not fit in `usize` is rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanHeader {
    /// Total number of floating + fixed parameters.
    npar: usize,
    /// Number of radii at which the multipoles were dumped.
    ndump: usize,
    /// Number of independent fits (1 = no refit, 2 = with refit).
    nfit: usize,
    #[serde(skip)]
    error_row_len: usize,
    #[serde(skip)]
    row_width: usize,
}

impl ScanHeader {
    /// Returns `None` when `npar*nfit` or `1+npar+3*ndump` overflows.
    pub fn new(npar: usize, ndump: usize, nfit: usize) -> Option<Self> {
        let error_row_len = npar.checked_mul(nfit)?;
        let row_width = VALUES_PER_DUMP
            .checked_mul(ndump)?
            .checked_add(npar)?
            .checked_add(1)?;
        Some(Self {
            npar,
            ndump,
            nfit,
            error_row_len,
            row_width,
        })
    }

    pub const fn npar(&self) -> usize {
        self.npar
    }

    pub const fn ndump(&self) -> usize {
        self.ndump
    }

    pub const fn nfit(&self) -> usize {
        self.nfit
    }

    /// Expected token count of line 2.
    pub const fn error_row_len(&self) -> usize {
        self.error_row_len
    }

    /// Expected token count of line 3 and every scan line.
    pub const fn row_width(&self) -> usize {
        self.row_width
    }

    /// Position of the chi-square statistic within a row.
    pub const fn chi_square_index(&self) -> usize {
        self.npar
    }
}

/// Per-parameter fit uncertainties from line 2.
///
/// Nothing downstream reads these values; the length check is what matters.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRow {
    values: Vec<f64>,
}

impl ErrorRow {
    pub fn new(header: &ScanHeader, values: Vec<f64>) -> ProjectResult<Self> {
        let expected = header.error_row_len();
        if values.len() != expected {
            return Err(ProjectError::ErrorRowLength {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// One numeric line whose width matched the header.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRow {
    line: usize,
    chi_square_index: usize,
    values: Box<[f64]>,
}

impl ScanRow {
    /// Validate `values` against the header-derived width.
    pub fn new(header: &ScanHeader, line: usize, values: Vec<f64>) -> ProjectResult<Self> {
        let expected = header.row_width();
        if values.len() != expected {
            return Err(ProjectError::RowLength {
                line,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            line,
            chi_square_index: header.chi_square_index(),
            values: values.into_boxed_slice(),
        })
    }

    /// 1-based line number in the input file.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn chi_square(&self) -> f64 {
        self.values[self.chi_square_index]
    }
}

/// The reference row on line 3.
#[derive(Debug, Clone, PartialEq)]
pub struct BestFit {
    row: ScanRow,
}

impl BestFit {
    pub fn new(row: ScanRow) -> Self {
        Self { row }
    }

    /// Baseline every scan row's chi-square is differenced against.
    pub fn chi_square(&self) -> f64 {
        self.row.chi_square()
    }
}

/// Two validated, zero-based field offsets to emit for every scan row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    index1: usize,
    index2: usize,
}

impl Projection {
    /// Resolve raw index arguments against the header's row width.
    ///
    /// Both indices must address a field of the full row (including the leading
    /// scalar and any dump values).
    pub fn resolve(index1: i64, index2: i64, header: &ScanHeader) -> ProjectResult<Self> {
        let width = header.row_width();
        Ok(Self {
            index1: checked_index(index1, width)?,
            index2: checked_index(index2, width)?,
        })
    }

    /// Project one scan row relative to the best fit.
    pub fn apply(&self, row: &ScanRow, best: &BestFit) -> ProjectedPoint {
        let values = row.values();
        ProjectedPoint {
            first: values[self.index1],
            second: values[self.index2],
            delta_chi_square: row.chi_square() - best.chi_square(),
        }
    }
}

fn checked_index(index: i64, width: usize) -> ProjectResult<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < width)
        .ok_or(ProjectError::IndexRange { index, width })
}

/// One output record: the two selected fields and the delta chi-square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub first: f64,
    pub second: f64,
    pub delta_chi_square: f64,
}

/// Resolved run configuration (built from CLI args).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub index1: i64,
    pub index2: i64,
    pub json_summary: bool,
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(flatten)]
    pub header: ScanHeader,
    pub row_width: usize,
    pub scan_points: usize,
}

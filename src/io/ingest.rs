//! Scan file ingest and validation.
//!
//! This module turns the positional text produced by a sampling/scan run into
//! width-checked rows:
//!
//! ```text
//! line 1   : npar ndump nfit
//! line 2   : npar*nfit fit errors
//! line 3   : best fit, 1+npar+3*ndump values
//! line 4..N: one scan point per line, same width as line 3
//! ```
//!
//! Design goals:
//! - **Strict shape**: every line is checked against the header before use
//! - **Fail fast**: the first bad line aborts the run, with its line number
//! - **Streaming**: scan rows are yielded one at a time, never retained

use std::io::{BufRead, Lines};

use crate::domain::{BestFit, ErrorRow, HEADER_LINES, ScanHeader, ScanRow};
use crate::error::{ProjectError, ProjectResult};

/// Reader over a scan file whose three header lines have already been validated.
///
/// Iterating yields the remaining lines as `ScanRow`s. After the first error the
/// iterator is fused and yields nothing more.
pub struct ScanReader<R> {
    lines: Lines<R>,
    header: ScanHeader,
    best_fit: BestFit,
    line: usize,
    failed: bool,
}

impl<R: BufRead> ScanReader<R> {
    /// Consume and validate lines 1-3.
    ///
    /// Missing lines are treated as empty, so a truncated file fails the
    /// length check of the first line it lacks.
    pub fn new(reader: R) -> ProjectResult<Self> {
        let mut lines = reader.lines();

        let header = parse_header(&read_line(&mut lines, 1)?.unwrap_or_default())?;
        tracing::debug!(
            npar = header.npar(),
            ndump = header.ndump(),
            nfit = header.nfit(),
            row_width = header.row_width(),
            "parsed scan header"
        );
        if !(1..=2).contains(&header.nfit()) {
            tracing::warn!(nfit = header.nfit(), "unusual number of fits (expected 1 or 2)");
        }

        let errors = ErrorRow::new(&header, parse_values(&read_line(&mut lines, 2)?.unwrap_or_default(), 2)?)?;
        tracing::debug!(errors = ?errors.values(), "parsed fit errors");

        let best_fit = BestFit::new(parse_row(
            &header,
            &read_line(&mut lines, HEADER_LINES)?.unwrap_or_default(),
            HEADER_LINES,
        )?);
        tracing::debug!(chi_square = best_fit.chi_square(), "parsed best fit");

        Ok(Self {
            lines,
            header,
            best_fit,
            line: HEADER_LINES,
            failed: false,
        })
    }

    pub fn header(&self) -> &ScanHeader {
        &self.header
    }

    pub fn best_fit(&self) -> &BestFit {
        &self.best_fit
    }
}

impl<R: BufRead> Iterator for ScanReader<R> {
    type Item = ProjectResult<ScanRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let line_no = self.line + 1;
        let result = match read_line(&mut self.lines, line_no) {
            Ok(Some(text)) => {
                self.line = line_no;
                parse_row(&self.header, &text, line_no)
            }
            Ok(None) => return None,
            Err(e) => Err(e),
        };
        self.failed = result.is_err();
        Some(result)
    }
}

fn read_line<R: BufRead>(lines: &mut Lines<R>, line: usize) -> ProjectResult<Option<String>> {
    lines
        .next()
        .transpose()
        .map_err(|source| ProjectError::Read { line, source })
}

/// Parse line 1 as exactly three non-negative integers.
pub fn parse_header(text: &str) -> ProjectResult<ScanHeader> {
    let bad = || ProjectError::HeaderFormat {
        found: text.trim().to_string(),
    };

    let fields = text
        .split_whitespace()
        .map(|tok| tok.parse::<usize>().map_err(|_| bad()))
        .collect::<ProjectResult<Vec<_>>>()?;

    match fields.as_slice() {
        // Widths that do not fit in usize cannot describe a real file.
        &[npar, ndump, nfit] => ScanHeader::new(npar, ndump, nfit).ok_or_else(bad),
        _ => Err(bad()),
    }
}

/// Parse a whitespace-separated line of floats.
pub fn parse_values(text: &str, line: usize) -> ProjectResult<Vec<f64>> {
    text.split_whitespace()
        .map(|tok| {
            tok.parse::<f64>().map_err(|_| ProjectError::ValueFormat {
                line,
                token: tok.to_string(),
            })
        })
        .collect()
}

/// Parse and width-check a best-fit or scan line.
pub fn parse_row(header: &ScanHeader, text: &str, line: usize) -> ProjectResult<ScanRow> {
    // Check the width before parsing so a short row with a bad token still
    // reports the length mismatch.
    let expected = header.row_width();
    let actual = text.split_whitespace().count();
    if actual != expected {
        return Err(ProjectError::RowLength { line, expected, actual });
    }
    ScanRow::new(header, line, parse_values(text, line)?)
}

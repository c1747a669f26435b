//! Scan row stream processing.
//!
//! `project_stream` walks every scan row after the best fit, emits one
//! projected record per row, and stops at the first invalid line.

use std::io::{BufRead, Write};

use crate::domain::{Projection, ScanHeader};
use crate::error::ProjectResult;
use crate::io::export::write_point;
use crate::io::ingest::ScanReader;

/// Counts from a completed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamStats {
    pub header: ScanHeader,
    pub scan_points: usize,
}

/// Project every scan row of `input` into `output`.
///
/// Indices are validated against the header before any record is written.
/// On error, records for earlier rows may already be in `output`; callers that
/// need all-or-nothing output should stage it (see `io::export::StagedOutput`).
pub fn project_stream<R, W>(input: R, output: &mut W, index1: i64, index2: i64) -> ProjectResult<StreamStats>
where
    R: BufRead,
    W: Write,
{
    let mut reader = ScanReader::new(input)?;
    let header = *reader.header();
    let projection = Projection::resolve(index1, index2, &header)?;
    let best = reader.best_fit().clone();

    let mut scan_points = 0usize;
    for row in &mut reader {
        let row = row?;
        let point = projection.apply(&row, &best);
        tracing::trace!(
            line = row.line(),
            delta_chi_square = point.delta_chi_square,
            "projected scan point"
        );
        write_point(output, &point)?;
        scan_points += 1;
    }

    Ok(StreamStats { header, scan_points })
}

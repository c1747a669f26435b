//! Write projected scan points.
//!
//! One record per line: `<field1> <field2> <delta_chi_square>`. Values use the
//! shortest `f64` representation that parses back to the same number.
//!
//! `StagedOutput` writes into a temporary file beside the destination and only
//! renames it into place on `commit`, so an aborted run leaves no partial file.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::ProjectedPoint;
use crate::error::{FileRole, ProjectError, ProjectResult};

/// Write a single output record.
pub fn write_point<W: Write>(out: &mut W, point: &ProjectedPoint) -> ProjectResult<()> {
    writeln!(out, "{} {} {}", point.first, point.second, point.delta_chi_square).map_err(ProjectError::Write)
}

/// Output file that only appears at its destination after a successful run.
///
/// Dropping it without calling `commit` closes and removes the staging file.
pub struct StagedOutput {
    path: PathBuf,
    writer: BufWriter<NamedTempFile>,
}

impl StagedOutput {
    /// Create the staging file in the destination's directory.
    ///
    /// An existing read-only destination is refused rather than replaced.
    pub fn create(path: &Path) -> ProjectResult<Self> {
        let open_error = |source| ProjectError::IoOpen {
            role: FileRole::Output,
            path: path.to_path_buf(),
            source,
        };
        if fs::metadata(path).is_ok_and(|meta| meta.permissions().readonly()) {
            return Err(open_error(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "destination is read-only",
            )));
        }

        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let staged = NamedTempFile::new_in(dir).map_err(open_error)?;
        tracing::debug!(staging = %staged.path().display(), "staging output");
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(staged),
        })
    }

    /// Flush and move the staged file over the destination path.
    pub fn commit(self) -> ProjectResult<File> {
        let staged = self
            .writer
            .into_inner()
            .map_err(|e| ProjectError::Write(e.into_error()))?;
        staged.persist(&self.path).map_err(|e| ProjectError::IoOpen {
            role: FileRole::Output,
            path: self.path.clone(),
            source: e.error,
        })
    }
}

impl Write for StagedOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

//! File-level projection pipeline.
//!
//! open input -> stage output -> validate header -> project rows -> commit
//!
//! Both handles are owned by this function's scope, so every early return
//! closes them. The staged output is discarded unless every row validated.

use std::fs::File;
use std::io::BufReader;

use crate::domain::{ProjectConfig, ProjectionSummary};
use crate::error::{FileRole, ProjectError, ProjectResult};
use crate::io::export::StagedOutput;
use crate::projection::project_stream;

/// Execute one projection run described by `config`.
pub fn run_projection(config: &ProjectConfig) -> ProjectResult<ProjectionSummary> {
    let input = File::open(&config.input).map_err(|source| ProjectError::IoOpen {
        role: FileRole::Input,
        path: config.input.clone(),
        source,
    })?;
    let mut output = StagedOutput::create(&config.output)?;

    let stats = project_stream(BufReader::new(input), &mut output, config.index1, config.index2)?;
    output.commit()?;

    tracing::info!(
        scan_points = stats.scan_points,
        output = %config.output.display(),
        "projection complete"
    );

    Ok(ProjectionSummary {
        input: config.input.clone(),
        output: config.output.clone(),
        header: stats.header,
        row_width: stats.header.row_width(),
        scan_points: stats.scan_points,
    })
}

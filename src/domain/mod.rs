//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the header-declared shape (`ScanHeader`)
//! - width-validated rows (`ErrorRow`, `ScanRow`, `BestFit`)
//! - the projection and its output record (`Projection`, `ProjectedPoint`)
//! - run configuration and summary (`ProjectConfig`, `ProjectionSummary`)

pub mod types;

pub use types::*;

//! Input/output helpers.
//!
//! - scan file ingest + validation (`ingest`)
//! - projected record output (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;

//! `scan-projector` library crate.
//!
//! Reads the fixed-layout results file written by a fit/scan run and projects
//! two chosen columns plus the delta chi-square against the best fit into a
//! plain text file.
//!
//! The binary (`parsescan`) is a thin wrapper around this library so that the
//! parsing and projection logic is testable without spawning processes.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod projection;
pub mod report;

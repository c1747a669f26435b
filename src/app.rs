//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - initialises logging
//! - runs the projection pipeline
//! - prints the run summary

use clap::Parser;

use crate::cli::Cli;
use crate::domain::ProjectConfig;
use crate::error::{ProjectError, ProjectResult};

pub mod pipeline;

/// Entry point for the `parsescan` binary.
pub fn run() -> ProjectResult<()> {
    run_from(std::env::args())
}

/// Run with an explicit argv (first item is the program name).
///
/// Argument errors are returned before any file is opened.
pub fn run_from<I, T>(argv: I) -> ProjectResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        // --help / --version
        Err(err) if !err.use_stderr() => {
            err.print().map_err(ProjectError::Write)?;
            return Ok(());
        }
        Err(err) => return Err(ProjectError::argument(err.render().to_string().trim_end())),
    };

    // A subscriber may already be installed when called more than once in-process.
    let _ = tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    let config = config_from_args(&cli);
    let summary = pipeline::run_projection(&config).inspect_err(|err| {
        tracing::debug!(error = %err, "projection aborted");
    })?;

    if config.json_summary {
        println!("{}", crate::report::format_summary_json(&summary)?);
    } else {
        println!("{}", crate::report::format_summary(&summary));
    }

    Ok(())
}

pub fn config_from_args(cli: &Cli) -> ProjectConfig {
    ProjectConfig {
        input: cli.infile.clone(),
        output: cli.outfile.clone(),
        index1: cli.index1,
        index2: cli.index2,
        json_summary: cli.json,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_integer_index_fails_before_file_io() {
        // The input does not exist, so reaching the pipeline would give IoOpen.
        let err = run_from(["parsescan", "/nonexistent/in.dat", "/nonexistent/out.scan", "ten", "11"])
            .unwrap_err();
        assert!(matches!(err, ProjectError::Argument(_)));
        assert!(err.to_string().contains("indices should be integer"));
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn missing_arguments_are_argument_errors() {
        let err = run_from(["parsescan", "in.dat"]).unwrap_err();
        assert!(matches!(err, ProjectError::Argument(_)));
    }

    #[test]
    fn help_and_version_are_not_errors() {
        assert!(run_from(["parsescan", "--help"]).is_ok());
        assert!(run_from(["parsescan", "--version"]).is_ok());
    }

    #[test]
    fn config_mirrors_arguments() {
        let cli = Cli::try_parse_from(["parsescan", "--json", "a.dat", "b.scan", "3", "4"]).unwrap();
        let config = config_from_args(&cli);
        assert_eq!(config.input, std::path::PathBuf::from("a.dat"));
        assert_eq!(config.output, std::path::PathBuf::from("b.scan"));
        assert_eq!((config.index1, config.index2), (3, 4));
        assert!(config.json_summary);
    }
}

//! Command-line parsing for the scan projector.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! parsing/projection code. Argument errors surface here, before any file is
//! opened.

use std::path::PathBuf;

use clap::Parser;

/// Environment variable that sets the default log level.
pub const LOG_LEVEL_ENV: &str = "PARSESCAN_LOG";

/// Top-level CLI.
///
/// Example: `parsescan BOSSDR11QSOLyaF_scan.dat BOSSDR11QSOLyaF.scan 10 11`
#[derive(Debug, Parser)]
#[command(
    name = "parsescan",
    version,
    about = "Project two parameter columns and delta chi-square out of a scan results file",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Scan results file (header, fit errors, best fit, then one scan point per line).
    #[arg(value_name = "INFILE")]
    pub infile: PathBuf,

    /// Destination for `<value1> <value2> <delta_chi_square>` lines.
    #[arg(value_name = "OUTFILE")]
    pub outfile: PathBuf,

    /// Zero-based offset of the first field to emit.
    #[arg(value_name = "INDEX1", value_parser = parse_index)]
    pub index1: i64,

    /// Zero-based offset of the second field to emit.
    #[arg(value_name = "INDEX2", value_parser = parse_index)]
    pub index2: i64,

    /// Log verbosity level (trace, debug, info, warn, error).
    #[arg(long, env = LOG_LEVEL_ENV, default_value = "warn")]
    pub log_level: tracing::Level,

    /// Print the run summary as JSON instead of a single line.
    #[arg(long)]
    pub json: bool,
}

fn parse_index(s: &str) -> Result<i64, String> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| format!("indices should be integer, got '{s}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_positional_arguments() {
        let cli = Cli::try_parse_from(["parsescan", "in.dat", "out.scan", "10", "11"]).unwrap();
        assert_eq!(cli.infile, PathBuf::from("in.dat"));
        assert_eq!(cli.outfile, PathBuf::from("out.scan"));
        assert_eq!((cli.index1, cli.index2), (10, 11));
        assert!(!cli.json);
    }

    #[test]
    fn accepts_negative_indices_as_integers() {
        let cli = Cli::try_parse_from(["parsescan", "in.dat", "out.scan", "-1", "2"]).unwrap();
        assert_eq!(cli.index1, -1);
    }

    #[test]
    fn rejects_non_integer_indices() {
        for (i1, i2) in [("x", "1"), ("1", "2.5")] {
            let err = Cli::try_parse_from(["parsescan", "in.dat", "out.scan", i1, i2]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation);
            assert!(err.to_string().contains("indices should be integer"));
        }
    }

    #[test]
    fn rejects_wrong_argument_count() {
        assert!(Cli::try_parse_from(["parsescan", "in.dat", "out.scan", "1"]).is_err());
        assert!(Cli::try_parse_from(["parsescan", "in.dat", "out.scan", "1", "2", "3"]).is_err());
    }

    #[test]
    fn log_level_and_json_flags() {
        let cli = Cli::try_parse_from([
            "parsescan",
            "--log-level",
            "debug",
            "--json",
            "in.dat",
            "out.scan",
            "0",
            "1",
        ])
        .unwrap();
        assert_eq!(cli.log_level, tracing::Level::DEBUG);
        assert!(cli.json);
    }
}

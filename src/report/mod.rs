//! User-facing run summary.

use crate::domain::ProjectionSummary;
use crate::error::ProjectResult;

/// One-line summary printed after a successful run.
pub fn format_summary(summary: &ProjectionSummary) -> String {
    format!("parsed {} scan points", summary.scan_points)
}

/// Pretty JSON form of the summary, for scripting.
pub fn format_summary_json(summary: &ProjectionSummary) -> ProjectResult<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScanHeader;
    use std::path::PathBuf;

    fn summary() -> ProjectionSummary {
        let header = ScanHeader::new(12, 5, 2).unwrap();
        ProjectionSummary {
            input: PathBuf::from("BOSSDR11QSOLyaF_scan.dat"),
            output: PathBuf::from("BOSSDR11QSOLyaF.scan"),
            header,
            row_width: header.row_width(),
            scan_points: 441,
        }
    }

    #[test]
    fn text_summary_counts_scan_points() {
        assert_eq!(format_summary(&summary()), "parsed 441 scan points");
    }

    #[test]
    fn json_summary_flattens_header() {
        let json = format_summary_json(&summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["npar"], 12);
        assert_eq!(value["ndump"], 5);
        assert_eq!(value["nfit"], 2);
        assert_eq!(value["row_width"], 28);
        assert_eq!(value["scan_points"], 441);
        assert_eq!(value["output"], "BOSSDR11QSOLyaF.scan");
    }
}

use std::fs;
use std::path::Path;

use crate::error::{Result, StewardError};
use crate::types::Report;

/// Outputs the report as JSON. Writes to a file if given, otherwise stdout.
pub fn report_json(report: &Report, output_file: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;

    if let Some(path) = output_file {
        fs::write(path, &json).map_err(|source| StewardError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        eprintln!("✓ JSON report written to {}", path.display());
    } else {
        println!("{json}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AuthorStats, ReportMeta};

    fn sample_report() -> Report {
        Report {
            meta: ReportMeta {
                target: "src/lib.rs".to_string(),
                repo_path: ".".to_string(),
                commit_count: 2,
                current_line_count: 4,
                analyzed_at: "2024-01-01T00:00:00+00:00".to_string(),
            },
            authors: vec![AuthorStats {
                author: "Alice".to_string(),
                commits: 1,
                commits_share: 50.0,
                lines_touched: 4,
                lines_touched_share: 57.14,
                current_lines: 3,
                current_lines_share: 75.0,
                suitability: 62.5,
            }],
        }
    }

    #[test]
    fn test_report_serializes_all_fields() {
        let json = serde_json::to_string_pretty(&sample_report()).expect("report must serialize");
        for key in [
            "\"target\"",
            "\"author\"",
            "\"commits_share\"",
            "\"lines_touched_share\"",
            "\"current_lines_share\"",
            "\"suitability\"",
        ] {
            assert!(json.contains(key), "JSON output missing {key}");
        }
    }

    #[test]
    fn test_report_json_writes_file() {
        let path = std::env::temp_dir().join("git-steward-test-report.json");
        report_json(&sample_report(), Some(&path)).expect("write must succeed");
        let written = fs::read_to_string(&path).expect("file must exist");
        assert!(written.contains("Alice"));
        fs::remove_file(&path).ok();
    }
}

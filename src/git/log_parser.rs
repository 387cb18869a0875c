use std::path::Path;
use std::time::Duration;

use crate::error::{Result, StewardError};
use crate::git::run_git;
use crate::types::{HistoryTotals, TallyMap};

/// Runs `git log` for the target and returns the raw author/numstat stream.
///
/// `--no-merges` keeps merge commits out of the stream and `--follow`
/// tracks the target across renames, so every paragraph that comes back is
/// one contributing commit.
pub fn query_history(repo: &Path, target: &str, timeout: Duration) -> Result<String> {
    run_git(
        repo,
        &[
            "log",
            "--follow",
            "--no-merges",
            "--pretty=format:%aN",
            "--numstat",
            "--",
            target,
        ],
        timeout,
    )
}

/// Parses the history stream into per-author tallies.
///
/// One paragraph per commit, blank-line separated: the author's display
/// name on the first line, then one `<added>\t<deleted>\t<path>` numstat
/// record per touched file. Every numstat line of the paragraph counts
/// toward `lines_touched`.
///
/// Paragraph order never affects the result; the tallies are pure sums.
///
/// # Errors
///
/// `MalformedHistory` when a paragraph has no numstat record or a numeric
/// field fails to parse (binary-file `-` markers included). The error is
/// fatal: skipping a record would silently skew every share downstream.
pub fn parse_history(raw: &str, tallies: &mut TallyMap) -> Result<HistoryTotals> {
    let mut totals = HistoryTotals::default();

    for paragraph in raw.split("\n\n") {
        let mut lines = paragraph.lines().filter(|l| !l.trim().is_empty());
        let Some(author) = lines.next() else { continue };
        let author = author.trim();

        let mut touched = 0usize;
        let mut records = 0usize;
        for line in lines {
            let mut fields = line.split_whitespace();
            let added = parse_count(fields.next(), line)?;
            let deleted = parse_count(fields.next(), line)?;
            touched += added + deleted;
            records += 1;
        }
        if records == 0 {
            return Err(StewardError::MalformedHistory(format!(
                "commit by \"{author}\" carries no numstat record"
            )));
        }

        let tally = tallies.entry(author.to_string()).or_default();
        tally.commits += 1;
        tally.lines_touched += touched;
        totals.commits += 1;
        totals.lines_touched += touched;
    }

    Ok(totals)
}

fn parse_count(field: Option<&str>, line: &str) -> Result<usize> {
    field.and_then(|f| f.parse::<usize>().ok()).ok_or_else(|| {
        StewardError::MalformedHistory(format!("non-numeric numstat field in {line:?}"))
    })
}

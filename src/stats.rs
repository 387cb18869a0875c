use crate::error::{Result, StewardError};
use crate::types::{AuthorStats, HistoryTotals, TallyMap};

/// Freezes the parse-phase tallies into share-bearing records.
///
/// Each share is the author's percentage of that metric's total, so each
/// share family sums to ~100 across all authors. An author seen in only
/// one stream was zero-initialized in the other at insertion time and
/// computes to a 0% share there — intentional, not an error.
///
/// `suitability` is left at zero; the scorer fills it in.
///
/// # Errors
///
/// `NoData` when any total is zero. Dividing through would mint NaN
/// shares, so the gap is surfaced instead.
pub fn merge_shares(
    tallies: TallyMap,
    history: HistoryTotals,
    total_current_lines: usize,
) -> Result<Vec<AuthorStats>> {
    if history.commits == 0 {
        return Err(StewardError::NoData("commits"));
    }
    if history.lines_touched == 0 {
        return Err(StewardError::NoData("touched lines"));
    }
    if total_current_lines == 0 {
        return Err(StewardError::NoData("attributable lines"));
    }

    Ok(tallies
        .into_iter()
        .map(|(author, tally)| AuthorStats {
            author,
            commits: tally.commits,
            commits_share: percent(tally.commits, history.commits),
            lines_touched: tally.lines_touched,
            lines_touched_share: percent(tally.lines_touched, history.lines_touched),
            current_lines: tally.current_lines,
            current_lines_share: percent(tally.current_lines, total_current_lines),
            suitability: 0.0,
        })
        .collect())
}

fn percent(count: usize, total: usize) -> f64 {
    (count as f64 / total as f64) * 100.0
}

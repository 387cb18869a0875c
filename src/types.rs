use serde::Serialize;
use std::collections::HashMap;

// ─── Parse-phase accumulators ─────────────────────────────────────────────────

/// Raw counts for one author, mutated additively while the two git streams
/// are parsed. Zero-initialized the first time a name shows up in either
/// stream, so an author seen only in blame output still carries commit
/// fields (at zero) and vice versa.
#[derive(Debug, Clone, Default)]
pub struct AuthorTally {
    pub commits: usize,
    pub lines_touched: usize,
    pub current_lines: usize,
}

/// author display name → tally. Names are taken verbatim from git;
/// aliases are not reconciled.
pub type TallyMap = HashMap<String, AuthorTally>;

/// Running totals accumulated by the history parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryTotals {
    pub commits: usize,
    pub lines_touched: usize,
}

// ─── Scored records ───────────────────────────────────────────────────────────

/// One author's frozen statistics: raw counts, percentage shares of each
/// metric's total, and the weighted suitability score.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorStats {
    pub author: String,
    pub commits: usize,
    pub commits_share: f64,
    pub lines_touched: usize,
    pub lines_touched_share: f64,
    pub current_lines: usize,
    pub current_lines_share: f64,
    pub suitability: f64,
}

// ─── Scoring weights ──────────────────────────────────────────────────────────

/// Per-signal weights for the suitability score. Current-line ownership is
/// weighted heaviest: who owns the code today matters more than historical
/// churn.
#[derive(Debug, Clone)]
pub struct Weights {
    pub commits: f64,
    pub lines_touched: f64,
    pub current_lines: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            commits:       0.25,
            lines_touched: 0.35,
            current_lines: 0.40,
        }
    }
}

impl Weights {
    /// Builds a weight set scaled so the three weights sum to 1.0.
    /// A non-positive sum falls back to the defaults.
    pub fn normalized(commits: f64, lines_touched: f64, current_lines: f64) -> Weights {
        let sum = commits + lines_touched + current_lines;
        if !(sum > 0.0) {
            return Weights::default();
        }
        Weights {
            commits:       commits / sum,
            lines_touched: lines_touched / sum,
            current_lines: current_lines / sum,
        }
    }
}

// ─── Report ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub target: String,
    pub repo_path: String,
    pub commit_count: usize,
    pub current_line_count: usize,
    pub analyzed_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub authors: Vec<AuthorStats>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = Weights::default();
        let sum = w.commits + w.lines_touched + w.current_lines;
        assert!((sum - 1.0).abs() < 1e-9, "Default weights must sum to 1.0, got {sum}");
    }

    #[test]
    fn test_normalized_scales_to_unit_sum() {
        let w = Weights::normalized(2.0, 3.0, 5.0);
        let sum = w.commits + w.lines_touched + w.current_lines;
        assert!((sum - 1.0).abs() < 1e-9, "Normalized weights must sum to 1.0, got {sum}");
        assert!((w.commits - 0.2).abs() < 1e-9, "2/10 should normalize to 0.2");
        assert!((w.current_lines - 0.5).abs() < 1e-9, "5/10 should normalize to 0.5");
    }

    #[test]
    fn test_normalized_preserves_proportions() {
        // Scaling all three inputs by a constant must not change the result
        let a = Weights::normalized(0.25, 0.35, 0.40);
        let b = Weights::normalized(25.0, 35.0, 40.0);
        assert!((a.commits - b.commits).abs() < 1e-9);
        assert!((a.lines_touched - b.lines_touched).abs() < 1e-9);
        assert!((a.current_lines - b.current_lines).abs() < 1e-9);
    }

    #[test]
    fn test_normalized_zero_sum_falls_back_to_default() {
        let w = Weights::normalized(0.0, 0.0, 0.0);
        assert!((w.current_lines - 0.40).abs() < 1e-9, "Zero weights should fall back to defaults");
    }
}

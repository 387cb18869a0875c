use std::cmp::Ordering;

use crate::types::{AuthorStats, Weights};

/// Scores every author and returns the list ranked best-first.
///
/// Suitability is the weighted sum of the three shares; with shares in
/// [0,100] and weights summing to 1.0 the score lands in [0,100] too.
/// Ordering is descending by score with a lexicographic tie-break on the
/// author name, so equal scores always render in the same order.
pub fn rank(mut authors: Vec<AuthorStats>, weights: &Weights) -> Vec<AuthorStats> {
    for a in &mut authors {
        a.suitability = a.commits_share * weights.commits
            + a.current_lines_share * weights.current_lines
            + a.lines_touched_share * weights.lines_touched;
    }
    authors.sort_by(|a, b| {
        b.suitability
            .partial_cmp(&a.suitability)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.author.cmp(&b.author))
    });
    authors
}

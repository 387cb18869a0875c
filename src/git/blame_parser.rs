use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::git::{list_tracked_files, run_git};
use crate::types::TallyMap;

/// Marker carried by exactly one line per source line in `--line-porcelain`
/// output. `author-mail`, `author-time` and friends don't match the
/// trailing space.
const AUTHOR_MARKER: &str = "author ";

/// Runs `git blame --line-porcelain` for the target and returns the raw
/// attribution stream.
///
/// `git blame` only accepts files, so a folder target is expanded to its
/// tracked files and their streams concatenated. The parser doesn't care
/// where one file's stream ends and the next begins.
pub fn query_attribution(repo: &Path, target: &str, timeout: Duration) -> Result<String> {
    if repo.join(target).is_dir() {
        let mut combined = String::new();
        for file in list_tracked_files(repo, target, timeout)? {
            combined.push_str(&run_blame(repo, &file, timeout)?);
            combined.push('\n');
        }
        Ok(combined)
    } else {
        run_blame(repo, target, timeout)
    }
}

fn run_blame(repo: &Path, file: &str, timeout: Duration) -> Result<String> {
    run_git(repo, &["blame", "--minimal", "--line-porcelain", "--", file], timeout)
}

/// Counts current-line attribution from a porcelain stream and returns the
/// total number of attributed lines.
///
/// Only `author ` marker lines are read; headers, content lines and
/// anything malformed are silently skipped — the match is a prefix test,
/// not a parse, so there is no failure mode here.
pub fn parse_attribution(raw: &str, tallies: &mut TallyMap) -> usize {
    let mut total = 0usize;
    for line in raw.lines() {
        if let Some(author) = line.strip_prefix(AUTHOR_MARKER) {
            tallies.entry(author.to_string()).or_default().current_lines += 1;
            total += 1;
        }
    }
    total
}

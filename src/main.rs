mod error;
mod git;
mod reporters;
mod scoring;
mod stats;
mod types;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use error::{Result, StewardError};
use types::{Report, ReportMeta, TallyMap, Weights};

#[derive(Parser, Debug)]
#[command(
    name = "git-steward",
    about = "👤 Rank git contributors by how suitable they are to own a path",
    version,
    long_about = "Combines three signals from your git history — commits touching the\n\
                  target, lines added+deleted by those commits, and current-line\n\
                  ownership from blame — into one weighted suitability score, then\n\
                  ranks every contributor. Use it to decide who should review, own,\n\
                  or answer questions about a file or folder."
)]
struct Args {
    /// File or folder inside the repository to find an owner for.
    #[arg(value_name = "TARGET")]
    target: String,

    /// Root directory containing the repository.
    #[arg(long, default_value = ".")]
    repository_folder: PathBuf,

    /// Only show the single most suitable author.
    #[arg(short = 't', long)]
    top: bool,

    /// Print only author names, one per line, in ranked order.
    #[arg(short = 's', long)]
    stripped: bool,

    /// Output format
    #[arg(long, default_value = "terminal", value_parser = ["terminal", "json"])]
    format: String,

    /// Output file for --format json (stdout when omitted).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Kill any git invocation that runs longer than this many seconds.
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,

    #[arg(long = "weight-commits",       default_value_t = 0.25)] weight_commits:       f64,
    #[arg(long = "weight-lines-touched", default_value_t = 0.35)] weight_lines_touched: f64,
    #[arg(long = "weight-current-lines", default_value_t = 0.40)] weight_current_lines: f64,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let repo = args.repository_folder.as_path();
    if !repo.exists() {
        return Err(StewardError::GitInvocation(format!(
            "repository folder does not exist: {}",
            repo.display()
        )));
    }

    // Progress only for the human-facing table; stripped and json output
    // stay machine-clean.
    let show_progress = args.format == "terminal" && !args.stripped;
    let pb = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcome = analyze(args, &pb);
    pb.finish_and_clear();
    let report = outcome?;

    match args.format.as_str() {
        "json" => reporters::json::report_json(&report, args.output.as_deref())?,
        _ if args.stripped => reporters::terminal::report_stripped(&report),
        _ => reporters::terminal::report_terminal(&report),
    }

    Ok(())
}

// ─── Analysis pipeline ─────────────────────────────────────────────────────────

/// History → attribution → shares → ranked scores, in that order. The two
/// parse steps feed one shared tally map; shares are only computed once
/// both streams have been fully consumed.
fn analyze(args: &Args, pb: &ProgressBar) -> Result<Report> {
    let repo = args.repository_folder.as_path();
    let timeout = Duration::from_secs(args.timeout_secs);

    pb.set_message("[1/3] Collecting commit history...");
    let raw_history = git::log_parser::query_history(repo, &args.target, timeout)?;
    let mut tallies = TallyMap::new();
    let history_totals = git::log_parser::parse_history(&raw_history, &mut tallies)?;

    pb.set_message("[2/3] Collecting current-line attribution...");
    let raw_blame = git::blame_parser::query_attribution(repo, &args.target, timeout)?;
    let current_total = git::blame_parser::parse_attribution(&raw_blame, &mut tallies);

    pb.set_message("[3/3] Scoring suitability...");
    let weights = Weights::normalized(
        args.weight_commits,
        args.weight_lines_touched,
        args.weight_current_lines,
    );
    let authors = stats::merge_shares(tallies, history_totals, current_total)?;
    let mut ranked = scoring::rank(authors, &weights);
    if args.top {
        ranked.truncate(1);
    }

    Ok(Report {
        meta: ReportMeta {
            target: args.target.clone(),
            repo_path: repo.display().to_string(),
            commit_count: history_totals.commits,
            current_line_count: current_total,
            analyzed_at: chrono::Utc::now().to_rfc3339(),
        },
        authors: ranked,
    })
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const HISTORY: &str = "Alice\n3\t1\tsrc/lib.rs\n\nBob\n2\t1\tsrc/lib.rs";
    const BLAME: &str = "\
author Alice
\tline one
author Alice
\tline two
author Alice
\tline three
author Bob
\tline four
";

    /// Runs the pure pipeline on the canned streams: parse both, merge,
    /// rank with default weights.
    fn pipeline() -> Vec<types::AuthorStats> {
        let mut tallies = TallyMap::new();
        let history = git::log_parser::parse_history(HISTORY, &mut tallies)
            .expect("fixture history must parse");
        let current = git::blame_parser::parse_attribution(BLAME, &mut tallies);
        let authors = stats::merge_shares(tallies, history, current)
            .expect("fixture input is non-degenerate");
        scoring::rank(authors, &Weights::default())
    }

    #[test]
    fn test_end_to_end_fixture_ranks_alice_first() {
        let ranked = pipeline();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].author, "Alice");
        assert_eq!(ranked[1].author, "Bob");
        assert!((ranked[0].suitability - 62.5).abs() < 0.01, "got {}", ranked[0].suitability);
        assert!((ranked[1].suitability - 37.5).abs() < 0.01, "got {}", ranked[1].suitability);
    }

    #[test]
    fn test_end_to_end_fixture_counts() {
        let ranked = pipeline();
        let alice = &ranked[0];
        assert_eq!(alice.commits, 1);
        assert!((alice.commits_share - 50.0).abs() < 0.01);
        assert_eq!(alice.lines_touched, 4);
        assert!((alice.lines_touched_share - 57.14).abs() < 0.01);
        assert_eq!(alice.current_lines, 3);
        assert!((alice.current_lines_share - 75.0).abs() < 0.01);
    }

    #[test]
    fn test_top_is_head_of_full_ranking() {
        let mut ranked = pipeline();
        let full_head = ranked[0].author.clone();
        ranked.truncate(1);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].author, full_head, "--top must be plain truncation");
    }

    #[test]
    fn test_stripped_is_name_projection_in_rank_order() {
        let ranked = pipeline();
        let names: Vec<&str> = ranked.iter().map(|a| a.author.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob"]);
    }
}

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};

use crate::types::Report;

/// Prints the ranked table: one row per author, best candidate first.
pub fn report_terminal(report: &Report) {
    println!(
        "{} — {} ({} commits, {} current lines)",
        "👤 git-steward".cyan().bold(),
        report.meta.target.bright_black(),
        report.meta.commit_count.to_string().bright_black(),
        report.meta.current_line_count.to_string().bright_black(),
    );
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Author",
        "Suitability",
        "Total additions + deletions",
        "Total commits",
        "Current lines",
    ]);

    for author in &report.authors {
        table.add_row(vec![
            Cell::new(&author.author),
            Cell::new(format_suitability(author.suitability)).set_alignment(CellAlignment::Right),
            Cell::new(author.lines_touched).set_alignment(CellAlignment::Right),
            Cell::new(author.commits).set_alignment(CellAlignment::Right),
            Cell::new(author.current_lines).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
    println!();
}

/// Prints only the author names, one per line, in ranked order.
/// No header, no metrics — made for piping into other tools.
pub fn report_stripped(report: &Report) {
    for author in &report.authors {
        println!("{}", author.author);
    }
}

fn format_suitability(score: f64) -> String {
    format!("{score:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suitability_has_two_decimals() {
        assert_eq!(format_suitability(62.5), "62.50%");
        assert_eq!(format_suitability(42.499), "42.50%");
        assert_eq!(format_suitability(0.0), "0.00%");
    }

    #[test]
    fn test_suitability_full_score() {
        assert_eq!(format_suitability(100.0), "100.00%");
    }
}

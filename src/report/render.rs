//! Terminal presentation of an audit report.
//!
//! Consumes a finished [`AuditReport`]; the auditor itself never prints.
//! Hard misses render red, near misses yellow, tied scores yellow, and
//! absent guesses or scores as a grey `None` sentinel.

use colored::Colorize;
use comfy_table::{Cell, Color, Table};

use super::{AuditReport, Row, Verdict};

const HEADER: [&str; 6] = ["expected", "actual", "score", "2nd best", "score", "info"];

/// Build the mismatch table. Reports with no rows produce no table.
pub fn result_table(report: &AuditReport) -> Option<Table> {
    if report.rows.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(HEADER.iter().map(|title| Cell::new(title).fg(Color::Grey)));
    for row in &report.rows {
        table.add_row(render_row(row));
    }
    Some(table)
}

fn render_row(row: &Row) -> Vec<Cell> {
    let guess_color = match row.verdict {
        Verdict::HardMiss => Some(Color::Red),
        Verdict::NearMiss => Some(Color::Yellow),
        Verdict::RelevanceTie => None,
    };
    let score_color = match row.verdict {
        Verdict::RelevanceTie => Some(Color::Yellow),
        Verdict::HardMiss | Verdict::NearMiss => None,
    };
    vec![
        Cell::new(&row.expected),
        language_cell(row.best.language.as_deref(), guess_color),
        score_cell(row.best.relevance, score_color),
        language_cell(row.second_best.language.as_deref(), guess_color),
        score_cell(row.second_best.relevance, score_color),
        Cell::new(row.note.as_deref().unwrap_or("")),
    ]
}

fn language_cell(language: Option<&str>, color: Option<Color>) -> Cell {
    match (language, color) {
        (Some(language), Some(color)) => Cell::new(language).fg(color),
        (Some(language), None) => Cell::new(language),
        (None, _) => Cell::new("None").fg(Color::DarkGrey),
    }
}

fn score_cell(relevance: Option<u32>, color: Option<Color>) -> Cell {
    match (relevance, color) {
        (Some(relevance), Some(color)) => Cell::new(relevance).fg(color),
        (Some(relevance), None) => Cell::new(relevance),
        (None, _) => Cell::new("None").fg(Color::DarkGrey),
    }
}

/// One-line colored summary banner.
pub fn banner(report: &AuditReport) -> String {
    if report.passed() {
        format!(
            "{} - {} of {} languages passed auto-detection check!",
            "SUCCESS".green(),
            report.languages_checked.to_string().green(),
            report.languages_checked.to_string().bright_black(),
        )
    } else {
        format!(
            "{} - {} of {} languages have potential issues.",
            "ISSUES".red(),
            report.rows.len().to_string().red(),
            report.languages_checked.to_string().bright_black(),
        )
    }
}

//! Report data model: rows, verdicts, run summary.
//!
//! The auditor produces these values; [`render`] turns them into terminal
//! output. Keeping the two apart lets the classification logic run in tests
//! without a terminal.

pub mod render;

use serde::Serialize;

use crate::detect::{Detection, Guess};

/// Severity of one recorded observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Neither guess matched the expected language
    HardMiss,
    /// Only the second-best guess matched
    NearMiss,
    /// Correct, but indistinguishable from the runner-up by score
    RelevanceTie,
}

/// One observation: the expected language plus what the detector returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub expected: String,
    pub best: Guess,
    pub second_best: Guess,
    pub verdict: Verdict,
    pub note: Option<String>,
}

impl Row {
    fn record(expected: &str, detection: &Detection, verdict: Verdict, note: Option<&str>) -> Self {
        Row {
            expected: expected.to_string(),
            best: detection.best.clone(),
            second_best: detection.second_best.clone(),
            verdict,
            note: note.map(str::to_string),
        }
    }

    pub fn hard_miss(expected: &str, detection: &Detection) -> Self {
        Row::record(expected, detection, Verdict::HardMiss, None)
    }

    pub fn near_miss(expected: &str, detection: &Detection) -> Self {
        Row::record(expected, detection, Verdict::NearMiss, None)
    }

    pub fn relevance_tie(expected: &str, detection: &Detection) -> Self {
        Row::record(
            expected,
            detection,
            Verdict::RelevanceTie,
            Some("Relevance match."),
        )
    }
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub rows: Vec<Row>,
    pub languages_checked: usize,
}

impl AuditReport {
    pub fn new() -> Self {
        AuditReport::default()
    }

    /// Fold one audited language into the report.
    pub fn record_language(&mut self, rows: Vec<Row>) {
        self.languages_checked += 1;
        self.rows.extend(rows);
    }

    /// A run passes when nothing was recorded.
    pub fn passed(&self) -> bool {
        self.rows.is_empty()
    }
}

//! The detection auditor.
//!
//! Feeds corpus samples to a detector and classifies each outcome against
//! the language the sample was labeled with. Produces report rows only;
//! rendering and progress output live elsewhere.

use crate::corpus::Corpus;
use crate::detect::{Detection, Detector};
use crate::error::AuditResult;
use crate::report::{AuditReport, Row};

/// Runs corpus samples through a detector and accumulates mismatch rows.
pub struct Auditor<'a> {
    corpus: &'a Corpus,
    detector: &'a dyn Detector,
}

impl<'a> Auditor<'a> {
    pub fn new(corpus: &'a Corpus, detector: &'a dyn Detector) -> Self {
        Auditor { corpus, detector }
    }

    /// Audit every sample of one language, in sample order.
    ///
    /// Each sample is evaluated independently and contributes at most one
    /// row. An unreadable corpus propagates as a fatal error.
    pub fn audit_language(&self, language: &str) -> AuditResult<Vec<Row>> {
        let samples = self.corpus.load_samples(language)?;
        let mut rows = Vec::new();
        for sample in &samples {
            let detection = self.detector.detect(&sample.content);
            if let Some(row) = classify(language, &detection) {
                log::debug!(
                    "'{}': {:?} for {}",
                    language,
                    row.verdict,
                    sample.path.display()
                );
                rows.push(row);
            }
        }
        Ok(rows)
    }

    /// Audit a list of languages in order and build the run report.
    pub fn run(&self, languages: &[String]) -> AuditResult<AuditReport> {
        let mut report = AuditReport::new();
        for language in languages {
            let rows = self.audit_language(language)?;
            report.record_language(rows);
        }
        Ok(report)
    }
}

/// Compare one detection against the expected language.
///
/// Precedence: hard miss, then near miss, then relevance tie. A tie needs
/// two present, numerically equal scores on an otherwise correct detection;
/// absent scores never tie.
pub fn classify(expected: &str, detection: &Detection) -> Option<Row> {
    if !detection.best.is(expected) && !detection.second_best.is(expected) {
        return Some(Row::hard_miss(expected, detection));
    }
    if !detection.best.is(expected) {
        return Some(Row::near_miss(expected, detection));
    }
    if detection.best.relevance.is_some()
        && detection.best.relevance == detection.second_best.relevance
    {
        return Some(Row::relevance_tie(expected, detection));
    }
    None
}

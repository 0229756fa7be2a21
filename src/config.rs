//! Run configuration.
//!
//! Everything the auditor needs is carried explicitly: no module reads the
//! process environment or global state on its own. The CLI builds an
//! [`AuditConfig`] from its flags and the `ONLY_LANGUAGES` override and
//! passes it down.

use std::path::PathBuf;

use crate::language::LanguageRegistry;

/// Environment variable restricting the audited language set.
pub const LANGUAGES_ENV: &str = "ONLY_LANGUAGES";

/// Where the corpus lives and which languages to audit.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Fixture root; samples live under `<corpus_root>/detect/<language>/`.
    pub corpus_root: PathBuf,
    /// Explicit language set; `None` selects every eligible language.
    pub languages: Option<Vec<String>>,
}

impl AuditConfig {
    pub fn new(corpus_root: impl Into<PathBuf>) -> Self {
        AuditConfig {
            corpus_root: corpus_root.into(),
            languages: None,
        }
    }

    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = Some(languages);
        self
    }

    /// The languages this run audits, in order.
    ///
    /// An explicit set wins unconditionally; otherwise the set is every
    /// registry language whose auto-detection predicate holds.
    pub fn resolve_languages(&self, registry: &dyn LanguageRegistry) -> Vec<String> {
        match &self.languages {
            Some(languages) => languages.clone(),
            None => registry
                .list_languages()
                .into_iter()
                .filter(|language| registry.auto_detection(language))
                .collect(),
        }
    }
}

/// Parse a space-separated language override, e.g. the `ONLY_LANGUAGES`
/// value. Absent or whitespace-only values mean "no override".
pub fn parse_language_override(raw: Option<&str>) -> Option<Vec<String>> {
    let languages: Vec<String> = raw?.split_whitespace().map(str::to_string).collect();
    if languages.is_empty() {
        None
    } else {
        Some(languages)
    }
}

//! Syntect-backed implementation of the enumeration contract.

use super::{LanguageRegistry, normalize_syntax_name, syntax_set};

/// Enumerates languages from syntect's default syntax set.
///
/// A language is eligible for auto-detection when at least one non-hidden
/// syntax mapping to it carries a first-line match pattern.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntectRegistry;

impl LanguageRegistry for SyntectRegistry {
    fn list_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = syntax_set()
            .syntaxes()
            .iter()
            .filter(|syntax| !syntax.hidden)
            .map(|syntax| normalize_syntax_name(&syntax.name))
            .collect();
        languages.sort();
        languages.dedup();
        languages
    }

    fn auto_detection(&self, language: &str) -> bool {
        syntax_set().syntaxes().iter().any(|syntax| {
            !syntax.hidden
                && syntax.first_line_match.is_some()
                && normalize_syntax_name(&syntax.name) == language
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_languages_contains_common_names() {
        let languages = SyntectRegistry.list_languages();
        assert!(
            languages.iter().any(|l| l == "rust"),
            "default syntaxes should include rust"
        );
        assert!(
            languages.iter().any(|l| l == "python"),
            "default syntaxes should include python"
        );
    }

    #[test]
    fn test_list_languages_sorted_and_unique() {
        let languages = SyntectRegistry.list_languages();
        assert!(
            languages.windows(2).all(|pair| pair[0] < pair[1]),
            "language list should be strictly ascending"
        );
    }

    #[test]
    fn test_bash_is_eligible_for_auto_detection() {
        // The Sublime bash syntax declares a shebang first-line pattern
        assert!(SyntectRegistry.auto_detection("bash"));
    }

    #[test]
    fn test_unknown_language_is_not_eligible() {
        assert!(!SyntectRegistry.auto_detection("unknown_language_xyz"));
    }
}

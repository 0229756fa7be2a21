//! Language identifiers and the enumeration contract.
//!
//! Identifiers are normalized lowercase forms of syntect syntax names, so
//! the same string works as a corpus directory name, a detector guess, and
//! an expected value in a report row.

pub mod registry;

use std::sync::LazyLock;
use syntect::parsing::SyntaxSet;

pub use registry::SyntectRegistry;

/// Lazily initialized syntax set with default syntaxes.
static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// The process-wide default syntax set.
pub(crate) fn syntax_set() -> &'static SyntaxSet {
    &SYNTAX_SET
}

/// Knows every supported language and which ones auto-detection can find.
pub trait LanguageRegistry {
    /// All known language identifiers, sorted and deduplicated.
    fn list_languages(&self) -> Vec<String>;

    /// Whether auto-detection is expected to recognize this language.
    fn auto_detection(&self, language: &str) -> bool;
}

/// Normalize a syntect syntax name to a stable language identifier.
///
/// Syntect uses Sublime Text naming (e.g., "JavaScript", "Bourne Again
/// Shell (bash)") while corpus directories use short lowercase names.
pub fn normalize_syntax_name(name: &str) -> String {
    match name {
        // Shell variants
        "Bourne Again Shell (bash)" => "bash".to_string(),
        "Shell-Unix-Generic" => "bash".to_string(),
        // Common languages with different naming
        "JavaScript" => "javascript".to_string(),
        "TypeScript" => "typescript".to_string(),
        "Python" => "python".to_string(),
        "Ruby" => "ruby".to_string(),
        "Rust" => "rust".to_string(),
        "Go" => "go".to_string(),
        "C++" => "cpp".to_string(),
        "C" => "c".to_string(),
        "Java" => "java".to_string(),
        "Perl" => "perl".to_string(),
        "PHP" => "php".to_string(),
        "Lua" => "lua".to_string(),
        "R" => "r".to_string(),
        "Makefile" => "make".to_string(),
        "Dockerfile" => "dockerfile".to_string(),
        // Default: lowercase the name
        _ => name.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bash_variants() {
        assert_eq!(normalize_syntax_name("Bourne Again Shell (bash)"), "bash");
        assert_eq!(normalize_syntax_name("Shell-Unix-Generic"), "bash");
    }

    #[test]
    fn test_normalize_common_languages() {
        assert_eq!(normalize_syntax_name("Python"), "python");
        assert_eq!(normalize_syntax_name("C++"), "cpp");
        assert_eq!(normalize_syntax_name("Makefile"), "make");
    }

    #[test]
    fn test_normalize_unknown_name_lowercases() {
        assert_eq!(normalize_syntax_name("Erlang"), "erlang");
    }
}

//! Language auto-detection contract consumed by the auditor.
//!
//! The audit never detects anything itself; it talks to a detection engine
//! through [`Detector`]. The production backend lives in [`first_line`] and
//! adapts syntect's first-line detection. Tests substitute scripted
//! detectors.

pub mod first_line;

use serde::Serialize;

/// One language guess with its confidence.
///
/// `relevance` is a non-negative score. `None` means the engine did not
/// score the guess at all; `Some(0)` is a real score of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guess {
    pub language: Option<String>,
    pub relevance: Option<u32>,
}

impl Guess {
    /// A guess naming a language, with an optional score.
    pub fn new(language: impl Into<String>, relevance: Option<u32>) -> Self {
        Guess {
            language: Some(language.into()),
            relevance,
        }
    }

    /// The empty guess: no language, no score.
    pub fn none() -> Self {
        Guess {
            language: None,
            relevance: None,
        }
    }

    /// Whether this guess names the given language.
    pub fn is(&self, language: &str) -> bool {
        self.language.as_deref() == Some(language)
    }
}

/// Best and runner-up guesses for one sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub best: Guess,
    pub second_best: Guess,
}

impl Detection {
    pub fn new(best: Guess, second_best: Guess) -> Self {
        Detection { best, second_best }
    }
}

/// Narrow interface over an external auto-detection engine.
pub trait Detector {
    /// Guess the language of `content` without any filename hint.
    fn detect(&self, content: &str) -> Detection;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_is_matches_named_language() {
        let guess = Guess::new("lua", Some(10));
        assert!(guess.is("lua"));
        assert!(!guess.is("python"));
    }

    #[test]
    fn test_empty_guess_matches_nothing() {
        assert!(!Guess::none().is("lua"));
    }

    #[test]
    fn test_zero_score_is_distinct_from_absent() {
        assert_ne!(Guess::new("lua", Some(0)), Guess::new("lua", None));
    }
}

//! First-line auto-detection backed by syntect.
//!
//! Syntect's Sublime Text syntax definitions carry first-line patterns for
//! shebangs (`#!/usr/bin/env python`), mode lines (`# -*- mode: ruby -*-`)
//! and document prologues (`<?xml`). This backend feeds a sample's first
//! line through those patterns. It produces no relevance score and no
//! runner-up; when the first line matches nothing, the result is the empty
//! guess.

use crate::language::{normalize_syntax_name, syntax_set};

use super::{Detection, Detector, Guess};

/// Detector adapting `SyntaxSet::find_syntax_by_first_line`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLineDetector;

impl Detector for FirstLineDetector {
    fn detect(&self, content: &str) -> Detection {
        let best = content
            .lines()
            .next()
            .and_then(|line| syntax_set().find_syntax_by_first_line(line))
            .map(|syntax| Guess::new(normalize_syntax_name(&syntax.name), None))
            .unwrap_or_else(Guess::none);
        Detection::new(best, Guess::none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_shebang_bash() {
        let content = "#!/bin/bash\necho hello";
        let detection = FirstLineDetector.detect(content);
        assert!(detection.best.is("bash"), "Got: {:?}", detection.best);
    }

    #[test]
    fn test_detect_shebang_python() {
        let content = "#!/usr/bin/env python\nprint('hello')";
        let detection = FirstLineDetector.detect(content);
        assert!(detection.best.is("python"), "Got: {:?}", detection.best);
    }

    #[test]
    fn test_detect_shebang_python3() {
        let content = "#!/usr/bin/env python3\nprint('hello')";
        let detection = FirstLineDetector.detect(content);
        assert!(detection.best.is("python"), "Got: {:?}", detection.best);
    }

    #[test]
    fn test_detect_xml_prologue() {
        let content = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root/>";
        let detection = FirstLineDetector.detect(content);
        assert!(detection.best.is("xml"), "Got: {:?}", detection.best);
    }

    #[test]
    fn test_unrecognized_first_line_yields_empty_guess() {
        let detection = FirstLineDetector.detect("nothing recognizable here\n");
        assert_eq!(detection.best, Guess::none());
    }

    #[test]
    fn test_empty_content_yields_empty_guess() {
        let detection = FirstLineDetector.detect("");
        assert_eq!(detection.best, Guess::none());
    }

    #[test]
    fn test_backend_never_scores_or_ranks() {
        let detection = FirstLineDetector.detect("#!/bin/bash\n");
        assert_eq!(detection.best.relevance, None);
        assert_eq!(detection.second_best, Guess::none());
    }
}

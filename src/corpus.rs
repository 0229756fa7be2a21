//! Corpus loading.
//!
//! Layout convention: one directory per language under `<root>/detect`,
//! each holding any number of sample files. The directory name is the
//! expected language for every sample inside it.

use std::fs;
use std::path::PathBuf;

use crate::error::{AuditError, AuditResult};

/// A labeled sample corpus rooted at a fixture directory.
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
}

/// One sample file, read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub path: PathBuf,
    pub content: String,
}

impl Corpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Corpus { root: root.into() }
    }

    /// Directory holding the samples for one language.
    pub fn language_dir(&self, language: &str) -> PathBuf {
        self.root.join("detect").join(language)
    }

    /// Read every sample file for a language, sorted by file name.
    ///
    /// An unreadable directory or file is fatal. An empty directory is not:
    /// it yields an empty vector.
    pub fn load_samples(&self, language: &str) -> AuditResult<Vec<Sample>> {
        let dir = self.language_dir(language);
        let entries = fs::read_dir(&dir).map_err(|e| AuditError::corpus(language, &dir, e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| AuditError::corpus(language, &dir, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| AuditError::corpus(language, entry.path(), e))?;
            if file_type.is_file() {
                paths.push(entry.path());
            }
        }
        // read_dir order is platform-dependent; sort for reproducible runs
        paths.sort();

        let mut samples = Vec::with_capacity(paths.len());
        for path in paths {
            let content =
                fs::read_to_string(&path).map_err(|e| AuditError::corpus(language, &path, e))?;
            samples.push(Sample { path, content });
        }
        log::debug!(
            "loaded {} samples for '{}' from {}",
            samples.len(),
            language,
            dir.display()
        );
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_sample(root: &Path, language: &str, name: &str, content: &str) {
        let dir = root.join("detect").join(language);
        fs::create_dir_all(&dir).expect("Failed to create corpus dir");
        fs::write(dir.join(name), content).expect("Failed to write sample");
    }

    #[test]
    fn test_load_samples_sorted_by_file_name() {
        let temp = tempfile::tempdir().expect("Failed to create tempdir");
        write_sample(temp.path(), "lua", "second.lua", "print(2)");
        write_sample(temp.path(), "lua", "first.lua", "print(1)");

        let corpus = Corpus::new(temp.path());
        let samples = corpus.load_samples("lua").expect("corpus should load");

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].content, "print(1)");
        assert_eq!(samples[1].content, "print(2)");
    }

    #[test]
    fn test_missing_language_dir_is_an_error() {
        let temp = tempfile::tempdir().expect("Failed to create tempdir");
        let corpus = Corpus::new(temp.path());

        let err = corpus.load_samples("lua").unwrap_err();
        match err {
            AuditError::Corpus { language, path, .. } => {
                assert_eq!(language, "lua");
                assert!(path.ends_with("detect/lua"), "Got: {}", path.display());
            }
            other => panic!("expected corpus error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_language_dir_yields_no_samples() {
        let temp = tempfile::tempdir().expect("Failed to create tempdir");
        fs::create_dir_all(temp.path().join("detect").join("lua"))
            .expect("Failed to create corpus dir");

        let corpus = Corpus::new(temp.path());
        let samples = corpus.load_samples("lua").expect("corpus should load");
        assert!(samples.is_empty());
    }

    #[test]
    fn test_subdirectories_are_skipped() {
        let temp = tempfile::tempdir().expect("Failed to create tempdir");
        write_sample(temp.path(), "lua", "sample.lua", "print(1)");
        fs::create_dir_all(temp.path().join("detect").join("lua").join("nested"))
            .expect("Failed to create nested dir");

        let corpus = Corpus::new(temp.path());
        let samples = corpus.load_samples("lua").expect("corpus should load");
        assert_eq!(samples.len(), 1);
    }
}

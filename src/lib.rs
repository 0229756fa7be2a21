pub mod audit;
pub mod config;
pub mod corpus;
pub mod detect;
pub mod error;
pub mod language;
pub mod report;

pub use audit::Auditor;
pub use config::{AuditConfig, LANGUAGES_ENV, parse_language_override};
pub use corpus::{Corpus, Sample};
pub use detect::{Detection, Detector, Guess};
pub use error::{AuditError, AuditResult};
pub use language::LanguageRegistry;
pub use report::{AuditReport, Row, Verdict};

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use mekiki::detect::first_line::FirstLineDetector;
use mekiki::language::SyntectRegistry;
use mekiki::report::render;
use mekiki::{
    AuditConfig, AuditReport, AuditResult, Auditor, Corpus, LANGUAGES_ENV,
    parse_language_override,
};

/// Progress dots per output line.
const PROGRESS_BATCH: usize = 60;

/// Audit automatic language detection against a labeled sample corpus
#[derive(Parser)]
#[command(name = "mekiki")]
#[command(version)]
#[command(about = "Audit automatic language detection against a labeled sample corpus")]
struct Cli {
    /// Languages to audit (default: every language eligible for
    /// auto-detection, or the ONLY_LANGUAGES override)
    languages: Vec<String>,

    /// Corpus root; samples live under <CORPUS_ROOT>/detect/<language>/
    #[arg(long, default_value = "test")]
    corpus_root: PathBuf,

    /// Print the report as JSON instead of the table and banner
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = AuditConfig::new(cli.corpus_root);
    if !cli.languages.is_empty() {
        config = config.with_languages(cli.languages);
    } else if let Some(languages) =
        parse_language_override(std::env::var(LANGUAGES_ENV).ok().as_deref())
    {
        config = config.with_languages(languages);
    }

    let registry = SyntectRegistry;
    let languages = config.resolve_languages(&registry);
    let corpus = Corpus::new(&config.corpus_root);
    let detector = FirstLineDetector;
    let auditor = Auditor::new(&corpus, &detector);

    if cli.json {
        let report = auditor.run(&languages).unwrap_or_else(|err| fail(err));
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        }
        if !report.passed() {
            std::process::exit(1);
        }
        return;
    }

    println!(
        "Checking auto-detection for {} languages...",
        languages.len().to_string().bright_black()
    );
    let report = run_with_progress(&auditor, &languages).unwrap_or_else(|err| fail(err));

    if let Some(table) = render::result_table(&report) {
        println!("{}", table);
    }
    println!("{}", render::banner(&report));

    if !report.passed() {
        std::process::exit(1);
    }
}

/// Drive the auditor language by language, drawing one dot per language.
fn run_with_progress(auditor: &Auditor, languages: &[String]) -> AuditResult<AuditReport> {
    let mut report = AuditReport::new();
    for (index, language) in languages.iter().enumerate() {
        if index % PROGRESS_BATCH == 0 {
            println!();
        }
        report.record_language(auditor.audit_language(language)?);
        print!(".");
        let _ = std::io::stdout().flush();
    }
    println!("\n");
    Ok(report)
}

fn fail(err: mekiki::AuditError) -> ! {
    eprintln!("Error: {}", err);
    std::process::exit(1);
}

//! The `readiness score` command.

use std::path::PathBuf;

use anyhow::Result;

use readiness_core::config::load_config_from;
use readiness_core::parser;
use readiness_core::report::AssessmentReport;
use readiness_core::ScoringEngine;

use super::{catalog_path, print_summary, write_reports, OutputSettings};

pub fn execute(
    responses_path: PathBuf,
    catalog: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<String>,
    respondent: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let settings = OutputSettings::resolve(&config, output, format)?;

    let catalog =
        parser::load_catalog_or_builtin(catalog_path(catalog, &config).as_deref())?;
    let responses = parser::load_responses(&responses_path)?;
    tracing::debug!(
        path = %responses_path.display(),
        count = responses.len(),
        "loaded responses"
    );

    let warnings = parser::validate_responses(&catalog, &responses);
    for w in &warnings {
        let subject = w.subject.as_deref().unwrap_or("-");
        eprintln!("  [{subject}] WARNING: {}", w.message);
    }

    eprintln!(
        "Scoring {} responses against {} ({} questions)",
        responses.len(),
        catalog.title,
        catalog.total_questions()
    );

    let mut result = ScoringEngine::new(&catalog).evaluate(&responses);
    result.respondent = respondent.or(config.respondent);

    let report = AssessmentReport::new(&catalog, responses, result);
    print_summary(&report);
    write_reports(&report, &settings)?;

    Ok(())
}

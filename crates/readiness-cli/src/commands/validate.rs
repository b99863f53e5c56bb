//! The `readiness validate` command.

use std::path::PathBuf;

use anyhow::Result;

use readiness_core::model::Catalog;
use readiness_core::parser;

pub fn execute(catalog_path: Option<PathBuf>, responses_path: Option<PathBuf>) -> Result<()> {
    let catalogs = match &catalog_path {
        Some(path) if path.is_dir() => parser::load_catalog_directory(path)?,
        Some(path) => vec![parser::parse_catalog(path)?],
        None => vec![Catalog::builtin().clone()],
    };
    anyhow::ensure!(!catalogs.is_empty(), "no catalogs found");

    let mut total_warnings = 0;

    for catalog in &catalogs {
        println!(
            "Catalog: {} ({} categories, {} questions)",
            catalog.title,
            catalog.categories.len(),
            catalog.total_questions()
        );

        parser::validate_catalog(catalog)
            .map_err(|e| anyhow::anyhow!("catalog '{}' is invalid: {e}", catalog.id))?;

        let warnings = parser::catalog_warnings(catalog);
        for w in &warnings {
            let prefix = w
                .subject
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if let Some(path) = &responses_path {
        anyhow::ensure!(
            catalogs.len() == 1,
            "responses can only be checked against a single catalog"
        );
        let responses = parser::load_responses(path)?;
        println!("Responses: {} entries", responses.len());

        let warnings = parser::validate_responses(&catalogs[0], &responses);
        for w in &warnings {
            let subject = w.subject.as_deref().unwrap_or("-");
            println!("  [{subject}] WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All checks passed.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}

//! Subcommand implementations and the output plumbing they share.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use readiness_core::config::ReadinessConfig;
use readiness_core::report::AssessmentReport;
use readiness_report::{write_html_report, write_markdown_report};

pub mod catalog;
pub mod init;
pub mod score;
pub mod take;
pub mod validate;

const ALL_FORMATS: &[&str] = &["json", "html", "markdown"];

/// Parse a comma-separated format list. `all` expands to every format.
pub fn parse_formats(list: &str) -> Result<Vec<String>> {
    let mut formats = Vec::new();
    for raw in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let names: &[&str] = match raw {
            "all" => ALL_FORMATS,
            "json" => &["json"],
            "html" => &["html"],
            "markdown" | "md" => &["markdown"],
            other => anyhow::bail!("unknown format: '{other}' (expected json, html, markdown, all)"),
        };
        for name in names {
            if !formats.iter().any(|f| f == name) {
                formats.push(name.to_string());
            }
        }
    }
    anyhow::ensure!(!formats.is_empty(), "at least one output format is required");
    Ok(formats)
}

/// Output settings after applying command-line overrides to the config.
pub struct OutputSettings {
    pub dir: PathBuf,
    pub formats: Vec<String>,
}

impl OutputSettings {
    pub fn resolve(
        config: &ReadinessConfig,
        output: Option<PathBuf>,
        format: Option<String>,
    ) -> Result<Self> {
        let formats = match format {
            Some(f) => parse_formats(&f)?,
            None => parse_formats(&config.formats.join(","))?,
        };
        Ok(Self {
            dir: output.unwrap_or_else(|| config.output_dir.clone()),
            formats,
        })
    }
}

/// Write the report in every requested format. Returns the written paths.
pub fn write_reports(report: &AssessmentReport, settings: &OutputSettings) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&settings.dir)?;
    let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");
    let mut written = Vec::new();

    for fmt in &settings.formats {
        let path = match fmt.as_str() {
            "json" => {
                let path = settings.dir.join(format!("assessment-{timestamp}.json"));
                report.save_json(&path)?;
                path
            }
            "html" => {
                let path = settings.dir.join(format!("assessment-{timestamp}.html"));
                write_html_report(report, &path)?;
                path
            }
            "markdown" => {
                let path = settings.dir.join(format!("assessment-{timestamp}.md"));
                write_markdown_report(report, &path)?;
                path
            }
            other => anyhow::bail!("unknown format: '{other}'"),
        };
        eprintln!("{} report: {}", fmt, path.display());
        written.push(path);
    }

    Ok(written)
}

/// Print the section and axis tables for a scored report.
pub fn print_summary(report: &AssessmentReport) {
    let result = &report.result;

    let mut sections = Table::new();
    sections.set_header(vec!["Section", "Score", "Interpretation"]);
    for s in &result.section_scores {
        sections.add_row(vec![
            Cell::new(&s.category_id),
            Cell::new(format!("{}/{}", s.score, s.max_score)),
            Cell::new(&s.interpretation),
        ]);
    }

    let mut axes = Table::new();
    axes.set_header(vec!["Axis", "Score"]);
    for (label, value) in result.profile.axes() {
        axes.add_row(vec![Cell::new(label), Cell::new(value)]);
    }

    println!("\n{sections}");
    println!("\n{axes}");
    println!(
        "\nOverall score: {}/100 ({})",
        result.overall_score, result.recommendation
    );
    println!("{}", result.recommendation.headline());
    println!("\n{}", result.personalized_feedback);
    println!("\nLearning path: {}", result.learning_path);
}

/// Catalog path from the command line, falling back to the config.
pub fn catalog_path(cli: Option<PathBuf>, config: &ReadinessConfig) -> Option<PathBuf> {
    cli.or_else(|| config.catalog.clone())
}

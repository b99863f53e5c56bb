//! Markdown summary output.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use readiness_core::report::AssessmentReport;

/// Escape pipes so text stays inside one table cell.
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Render a report as a Markdown document.
pub fn to_markdown(report: &AssessmentReport) -> String {
    let result = &report.result;
    let mut md = String::new();

    let _ = writeln!(md, "# {}\n", report.catalog.title);
    if let Some(respondent) = &result.respondent {
        let _ = writeln!(md, "**Respondent:** {respondent}  ");
    }
    let _ = writeln!(
        md,
        "**Completed:** {}  ",
        result.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(
        md,
        "**Answered:** {} of {}\n",
        report.answered(),
        report.catalog.question_count
    );

    let _ = writeln!(md, "## {}\n", result.recommendation.headline());
    let _ = writeln!(
        md,
        "Overall score: **{}/100** ({})\n",
        result.overall_score, result.recommendation
    );
    let _ = writeln!(md, "{}\n", result.personalized_feedback);

    md.push_str("## Section Scores\n\n");
    md.push_str("| Section | Score | Interpretation |\n");
    md.push_str("|---------|------:|----------------|\n");
    for s in &result.section_scores {
        let _ = writeln!(
            md,
            "| {} | {}/{} | {} |",
            table_cell(&s.category_id),
            s.score,
            s.max_score,
            table_cell(&s.interpretation)
        );
    }

    md.push_str("\n## Readiness Profile\n\n");
    md.push_str("| Axis | Score |\n");
    md.push_str("|------|------:|\n");
    for (label, value) in result.profile.axes() {
        let _ = writeln!(md, "| {label} | {value} |");
    }

    md.push_str("\n## Next Steps\n\n");
    for (i, step) in result.next_steps.iter().enumerate() {
        let _ = writeln!(md, "{}. {step}", i + 1);
    }

    md.push_str("\n## Career Paths\n\n");
    for career in &result.career_recommendations {
        let _ = writeln!(md, "- {career}");
    }

    let _ = writeln!(md, "\n## Learning Path\n\n{}", result.learning_path);
    md
}

/// Write a Markdown report to a file.
pub fn write_markdown_report(report: &AssessmentReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_markdown(report))
        .with_context(|| format!("failed to write Markdown report to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use readiness_core::model::{Catalog, Response};
    use readiness_core::ScoringEngine;

    fn make_report(responses: Vec<Response>) -> AssessmentReport {
        let catalog = Catalog::builtin();
        let result = ScoringEngine::new(catalog).evaluate(&responses);
        AssessmentReport::new(catalog, responses, result)
    }

    #[test]
    fn empty_assessment_markdown() {
        let md = to_markdown(&make_report(Vec::new()));
        assert!(md.starts_with("# Graphic Design Readiness Assessment"));
        assert!(md.contains("## Consider alternative paths"));
        assert!(md.contains("Overall score: **0/100** (reconsider)"));
        assert!(md.contains("| interest | 0/100 |"));
        assert!(md.contains("| Job Fit | 0 |"));
        assert!(md.contains("4. Focus on your stronger areas of interest and aptitude"));
        assert!(md.contains("- Design Assistant"));
        assert!(md.contains("**Answered:** 0 of 24"));
        assert!(!md.contains("**Respondent:**"));
    }

    #[test]
    fn section_rows_follow_catalog_order() {
        let md = to_markdown(&make_report(vec![Response::new("tech_1", 4u32)]));
        let interest = md.find("| interest |").unwrap();
        let technical = md.find("| technical |").unwrap();
        assert!(interest < technical);
    }

    #[test]
    fn pipes_in_table_cells_are_escaped() {
        let mut report = make_report(Vec::new());
        report.result.section_scores[0].category_id = "ux|ui".into();
        report.result.section_scores[0].interpretation = "low | needs work".into();
        let md = to_markdown(&report);
        assert!(md.contains("| ux\\|ui | 0/100 | low \\| needs work |"));
    }

    #[test]
    fn write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.md");
        write_markdown_report(&make_report(Vec::new()), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("## Learning Path"));
    }
}

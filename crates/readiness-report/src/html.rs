//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::{Context, Result};
use std::path::Path;

use readiness_core::classifier::Recommendation;
use readiness_core::profile::AxisProfile;
use readiness_core::report::AssessmentReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// CSS class for a 0-100 score.
fn score_class(score: u32) -> &'static str {
    if score >= 80 {
        "pass"
    } else if score >= 60 {
        "warn"
    } else {
        "fail"
    }
}

fn banner_class(tier: Recommendation) -> &'static str {
    match tier {
        Recommendation::Proceed => "pass",
        Recommendation::ExploreWithCaution => "warn",
        Recommendation::Reconsider => "fail",
    }
}

/// Generate an HTML report from an assessment report.
pub fn generate_html(report: &AssessmentReport) -> String {
    let result = &report.result;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{} | results</title>\n",
        html_escape(&report.catalog.title)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&report.catalog.title)));
    let respondent = result
        .respondent
        .as_deref()
        .map(|r| format!("Respondent: <strong>{}</strong> | ", html_escape(r)))
        .unwrap_or_default();
    html.push_str(&format!(
        "<p class=\"meta\">{}{} of {} questions answered | {}</p>\n",
        respondent,
        report.answered(),
        report.catalog.question_count,
        result.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Recommendation banner
    html.push_str(&format!(
        "<section class=\"banner {}\">\n<h2>{}</h2>\n<p class=\"overall\">Overall score: <strong>{}/100</strong></p>\n<p>{}</p>\n</section>\n",
        banner_class(result.recommendation),
        html_escape(result.recommendation.headline()),
        result.overall_score,
        html_escape(&result.personalized_feedback),
    ));

    // Section scores
    html.push_str("<section class=\"sections\">\n");
    html.push_str("<h2>Section Scores</h2>\n");
    html.push_str("<table>\n");
    html.push_str("<thead><tr><th>Section</th><th>Score</th><th>Interpretation</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for s in &result.section_scores {
        html.push_str(&format!(
            "<tr><td>{}</td><td class=\"{}\">{}/{}</td><td>{}</td></tr>\n",
            html_escape(&s.category_id),
            score_class(s.score),
            s.score,
            s.max_score,
            html_escape(&s.interpretation),
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Axis chart
    html.push_str("<section class=\"profile\">\n");
    html.push_str("<h2>Readiness Profile</h2>\n");
    html.push_str(&generate_axis_chart(&result.profile));
    html.push_str("</section>\n");

    // Guidance
    html.push_str("<section class=\"guidance\">\n");
    html.push_str("<h2>Next Steps</h2>\n<ol>\n");
    for step in &result.next_steps {
        html.push_str(&format!("<li>{}</li>\n", html_escape(step)));
    }
    html.push_str("</ol>\n");
    html.push_str("<h2>Career Paths</h2>\n<ul>\n");
    for career in &result.career_recommendations {
        html.push_str(&format!("<li>{}</li>\n", html_escape(career)));
    }
    html.push_str("</ul>\n");
    html.push_str(&format!(
        "<h2>Learning Path</h2>\n<p>{}</p>\n",
        html_escape(&result.learning_path)
    ));
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &AssessmentReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    Ok(())
}

fn generate_axis_chart(profile: &AxisProfile) -> String {
    let bar_height = 26;
    let max_width = 400;
    let padding = 10;
    let label_width = 140;

    let axes = profile.axes();
    let total_height = axes.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, (label, value)) in axes.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = (*value).min(100) as usize * max_width / 100;

        let color = if *value >= 80 {
            "#22c55e"
        } else if *value >= 60 {
            "#eab308"
        } else {
            "#ef4444"
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            label
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            value
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --warn: #fef9c3; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --warn: #713f12; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); max-width: 960px; }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.banner { border-radius: 8px; padding: 0.5rem 1.5rem 1rem; margin: 1rem 0; }
.overall { font-size: 1.25rem; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.pass { background: var(--pass); }
.warn { background: var(--warn); }
.fail { background: var(--fail); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use readiness_core::model::{Catalog, Response};
    use readiness_core::ScoringEngine;

    fn make_test_report(respondent: Option<&str>) -> AssessmentReport {
        let catalog = Catalog::builtin();
        let responses: Vec<Response> = catalog
            .questions()
            .map(|q| Response::new(q.id.clone(), 4u32))
            .collect();
        let mut result = ScoringEngine::new(catalog).evaluate(&responses);
        result.respondent = respondent.map(String::from);
        AssessmentReport::new(catalog, responses, result)
    }

    #[test]
    fn html_report_contains_required_elements() {
        let report = make_test_report(None);
        let html = generate_html(&report);

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("Graphic Design Readiness Assessment"));
        assert!(html.contains("Yes, you should pursue Graphic Design!"));
        assert!(html.contains("<strong>80/100</strong>"));
        assert!(html.contains("<td class=\"pass\">80/100</td>"));
        assert!(html.contains("Job Fit"));
        assert!(html.contains("UI/UX Designer"));
        assert!(html.contains("24 of 24 questions answered"));
    }

    #[test]
    fn html_escapes_user_text() {
        let report = make_test_report(Some("<script>alert(1)</script>"));
        let html = generate_html(&report);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn score_classes() {
        assert_eq!(score_class(80), "pass");
        assert_eq!(score_class(79), "warn");
        assert_eq!(score_class(60), "warn");
        assert_eq!(score_class(59), "fail");
    }

    #[test]
    fn axis_chart_has_six_bars() {
        let profile = AxisProfile {
            interest: 100,
            ..Default::default()
        };
        let svg = generate_axis_chart(&profile);
        assert_eq!(svg.matches("<rect").count(), 6);
        assert!(svg.contains("width=\"400\""));
    }

    #[test]
    fn html_report_write_to_file() {
        let report = make_test_report(Some("sam"));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.html");

        write_html_report(&report, &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Respondent: <strong>sam</strong>"));
    }
}

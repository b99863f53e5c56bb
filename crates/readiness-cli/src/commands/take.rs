//! The `readiness take` command: an interactive session on stdin/stdout.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use readiness_core::collector::ResponseCollector;
use readiness_core::config::load_config_from;
use readiness_core::model::{AnswerValue, Catalog, Question, QuestionKind};
use readiness_core::parser;
use readiness_core::report::AssessmentReport;
use readiness_core::ScoringError;

use super::{catalog_path, print_summary, write_reports, OutputSettings};

pub fn execute(
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

    let mut collector = ResponseCollector::new(&catalog);
    if let Some(name) = respondent.or(config.respondent) {
        collector = collector.with_respondent(name);
    }

    let completed = run_session(&mut collector, io::stdin().lock(), io::stdout().lock())?;
    if !completed {
        println!("Assessment abandoned; nothing was saved.");
        return Ok(());
    }

    let (responses, result) = collector.into_parts();
    let result = result.context("assessment finished without a result")?;
    let report = AssessmentReport::new(&catalog, responses, result);
    print_summary(&report);
    write_reports(&report, &settings)?;

    Ok(())
}

/// Drive the collector from line-oriented input.
///
/// Returns `Ok(false)` when the respondent quits, and an error if input ends
/// before the last question is answered.
fn run_session<R: BufRead, W: Write>(
    collector: &mut ResponseCollector<'_>,
    mut input: R,
    mut out: W,
) -> Result<bool> {
    let catalog = collector.catalog();
    writeln!(
        out,
        "{} ({} questions, about {} minutes)",
        catalog.title,
        catalog.total_questions(),
        catalog.total_time_estimate()
    )?;
    writeln!(
        out,
        "Answer with an option number. Enter 'b' to go back or 'q' to quit."
    )?;

    let mut shown_section = None;
    let mut line = String::new();

    while !collector.is_complete() {
        let (section, index) = collector.position();
        let category = collector
            .current_category()
            .context("cursor is outside the catalog")?;
        let question = collector
            .current_question()
            .context("cursor is outside the catalog")?;

        if shown_section != Some(section) {
            writeln!(out, "\n== {} ==", category.title)?;
            if !category.description.is_empty() {
                writeln!(out, "{}", category.description)?;
            }
            shown_section = Some(section);
        }

        writeln!(
            out,
            "\n[{}/{}] {}",
            question_number(catalog, section, index),
            catalog.total_questions(),
            question.text
        )?;
        print_choices(&mut out, question)?;
        if let Some(previous) = collector.current_response() {
            writeln!(out, "  (current answer: {})", describe(question, &previous.value))?;
        }
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!(
                "input ended after {} of {} questions",
                collector.answered(),
                collector.total_questions()
            );
        }

        let answer = line.trim();
        match answer {
            "q" | "quit" => return Ok(false),
            "b" | "back" => {
                if !collector.back() {
                    writeln!(out, "  Already at the first question.")?;
                }
                continue;
            }
            _ => {}
        }

        let value = match parse_answer(question, answer) {
            Ok(value) => value,
            Err(msg) => {
                writeln!(out, "  {msg}")?;
                continue;
            }
        };

        match collector.record(value) {
            Ok(_) => {}
            Err(e @ ScoringError::InvalidAnswer { .. }) => writeln!(out, "  {e}")?,
            Err(e) => return Err(e.into()),
        }
    }

    writeln!(out, "\nAssessment complete.")?;
    Ok(true)
}

/// 1-based position of a question across the whole catalog.
fn question_number(catalog: &Catalog, section: usize, index: usize) -> usize {
    catalog.categories[..section]
        .iter()
        .map(|c| c.questions.len())
        .sum::<usize>()
        + index
        + 1
}

fn print_choices<W: Write>(out: &mut W, question: &Question) -> io::Result<()> {
    match question.kind {
        QuestionKind::FreeText => writeln!(out, "  (free text)"),
        _ if question.options.is_empty() => {
            writeln!(out, "  (answer 1-{})", question.option_count())
        }
        _ => {
            for (i, option) in question.options.iter().enumerate() {
                writeln!(out, "  {}. {}", i + 1, option)?;
            }
            Ok(())
        }
    }
}

/// Turn an input line into an answer. Options are entered 1-based.
fn parse_answer(question: &Question, answer: &str) -> Result<AnswerValue, String> {
    if question.kind == QuestionKind::FreeText {
        if answer.is_empty() {
            return Err("Please enter an answer.".into());
        }
        return Ok(AnswerValue::Text(answer.to_string()));
    }

    let count = question.option_count();
    match answer.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(AnswerValue::Choice((n - 1) as u32)),
        _ => Err(format!("Enter a number between 1 and {count}.")),
    }
}

fn describe(question: &Question, value: &AnswerValue) -> String {
    match value {
        AnswerValue::Choice(i) => match question.options.get(*i as usize) {
            Some(option) => format!("{}. {}", i + 1, option),
            None => (i + 1).to_string(),
        },
        AnswerValue::Text(text) => text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readiness_core::classifier::Recommendation;
    use std::io::Cursor;

    fn answers(lines: &[&str]) -> Cursor<Vec<u8>> {
        let mut input = lines.join("\n");
        input.push('\n');
        Cursor::new(input.into_bytes())
    }

    #[test]
    fn full_session_completes() {
        let catalog = Catalog::builtin();
        let mut collector = ResponseCollector::new(catalog);
        let mut out = Vec::new();

        let done = run_session(&mut collector, answers(&["5"; 24]), &mut out).unwrap();
        assert!(done);
        assert_eq!(
            collector.result().unwrap().recommendation,
            Recommendation::Proceed
        );

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("== Interest & Passion Assessment =="));
        assert!(transcript.contains("[24/24]"));
        assert!(transcript.contains("Assessment complete."));
    }

    #[test]
    fn back_and_retry_invalid_input() {
        let catalog = Catalog::builtin();
        let mut collector = ResponseCollector::new(catalog);
        let mut lines = vec!["b", "1", "b", "9", "abc", "3"];
        lines.extend(["2"; 23]);
        let mut out = Vec::new();

        assert!(run_session(&mut collector, answers(&lines), &mut out).unwrap());
        let first = &collector.responses()[0];
        assert_eq!(first.question_id, "int_1");
        assert_eq!(first.value, AnswerValue::Choice(2));
        assert_eq!(collector.answered(), 24);

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Already at the first question."));
        assert!(transcript.contains("Enter a number between 1 and 5."));
        assert!(transcript.contains("(current answer: 1. Never)"));
    }

    #[test]
    fn quit_and_early_eof() {
        let catalog = Catalog::builtin();

        let mut collector = ResponseCollector::new(catalog);
        let done = run_session(&mut collector, answers(&["4", "q"]), Vec::new()).unwrap();
        assert!(!done);
        assert_eq!(collector.answered(), 1);

        let mut collector = ResponseCollector::new(catalog);
        let err = run_session(&mut collector, answers(&["4", "4"]), Vec::new()).unwrap_err();
        assert!(err.to_string().contains("input ended after 2 of 24 questions"));
    }

    #[test]
    fn parses_answers_by_kind() {
        let mut question = Catalog::builtin().question("int_1").unwrap().clone();
        assert_eq!(parse_answer(&question, "1"), Ok(AnswerValue::Choice(0)));
        assert!(parse_answer(&question, "0").is_err());
        assert!(parse_answer(&question, "6").is_err());

        question.kind = QuestionKind::FreeText;
        question.options.clear();
        assert_eq!(
            parse_answer(&question, "posters"),
            Ok(AnswerValue::Text("posters".into()))
        );
        assert!(parse_answer(&question, "").is_err());
    }

    #[test]
    fn numbers_questions_across_sections() {
        let catalog = Catalog::builtin();
        assert_eq!(question_number(catalog, 0, 0), 1);
        assert_eq!(question_number(catalog, 1, 0), 6);
        assert_eq!(question_number(catalog, 4, 4), 24);
    }
}

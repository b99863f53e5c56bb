//! TOML catalog parser and response loading.
//!
//! Loads catalogs from TOML files and directories, validates them, and reads
//! response lists from JSON.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::{COGNITIVE, INTEREST, MOTIVATION, PERSONALITY, TECHNICAL};
use crate::error::CatalogError;
use crate::model::{
    AnswerValue, Catalog, Category, Framework, Interpretation, Question, QuestionKind, Response,
    FALLBACK_OPTION_COUNT,
};

/// Intermediate TOML structure for parsing catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    catalog: TomlCatalogHeader,
    #[serde(default)]
    categories: Vec<TomlCategory>,
}

#[derive(Debug, Deserialize)]
struct TomlCatalogHeader {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlCategory {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    time_estimate_minutes: u32,
    interpretation: TomlInterpretation,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlInterpretation {
    high: String,
    medium: String,
    low: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    text: String,
    kind: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    framework: Option<String>,
    #[serde(default)]
    weight: Option<f64>,
}

/// Parse a single TOML file into a `Catalog`.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `Catalog` (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let categories = parsed
        .categories
        .into_iter()
        .map(|c| {
            let questions = c
                .questions
                .into_iter()
                .map(|q| {
                    let kind: QuestionKind =
                        q.kind.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?;
                    let framework: Option<Framework> = q
                        .framework
                        .map(|f| f.parse().map_err(|e: String| anyhow::anyhow!("{}", e)))
                        .transpose()?;
                    Ok(Question {
                        id: q.id,
                        text: q.text,
                        kind,
                        options: q.options,
                        framework,
                        weight: q.weight,
                    })
                })
                .collect::<Result<Vec<_>>>()
                .with_context(|| format!("invalid question in category '{}'", c.id))?;

            Ok(Category {
                id: c.id,
                title: c.title,
                description: c.description,
                time_estimate_minutes: c.time_estimate_minutes,
                interpretation: Interpretation {
                    high: c.interpretation.high,
                    medium: c.interpretation.medium,
                    low: c.interpretation.low,
                },
                questions,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Catalog {
        id: parsed.catalog.id,
        title: parsed.catalog.title,
        description: parsed.catalog.description,
        categories,
    })
}

/// Recursively load all `.toml` catalog files from a directory.
pub fn load_catalog_directory(dir: &Path) -> Result<Vec<Catalog>> {
    let mut catalogs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            catalogs.extend(load_catalog_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_catalog(&path) {
                Ok(catalog) => catalogs.push(catalog),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(catalogs)
}

/// Load a catalog file, or the built-in catalog when `path` is `None`.
///
/// Loaded catalogs must pass [`validate_catalog`].
pub fn load_catalog_or_builtin(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(p) => {
            let catalog = parse_catalog(p)?;
            validate_catalog(&catalog)
                .with_context(|| format!("invalid catalog: {}", p.display()))?;
            Ok(catalog)
        }
        None => Ok(Catalog::builtin().clone()),
    }
}

/// Check the structural rules every catalog must satisfy.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), CatalogError> {
    if catalog.categories.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut category_ids = HashSet::new();
    let mut question_ids = HashSet::new();

    for category in &catalog.categories {
        if !category_ids.insert(category.id.as_str()) {
            return Err(CatalogError::DuplicateCategory(category.id.clone()));
        }
        if category.questions.is_empty() {
            return Err(CatalogError::EmptyCategory(category.id.clone()));
        }

        for question in &category.questions {
            if !question_ids.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
            if let Some(weight) = question.weight {
                if !weight.is_finite() || weight <= 0.0 {
                    return Err(CatalogError::InvalidWeight {
                        question_id: question.id.clone(),
                        weight,
                    });
                }
            }
            if question.kind == QuestionKind::FreeText && !question.options.is_empty() {
                return Err(CatalogError::OptionsOnFreeText(question.id.clone()));
            }
        }
    }

    Ok(())
}

/// A warning from catalog or response validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question or category the warning refers to (if applicable).
    pub subject: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Soft issues in a structurally valid catalog.
pub fn catalog_warnings(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let axis_sources = [INTEREST, PERSONALITY, COGNITIVE, MOTIVATION, TECHNICAL];

    for category in &catalog.categories {
        if !axis_sources.contains(&category.id.as_str()) {
            warnings.push(ValidationWarning {
                subject: Some(category.id.clone()),
                message: "category does not feed any profile axis".into(),
            });
        }
        for question in &category.questions {
            if question.kind.is_numeric() && question.options.is_empty() {
                warnings.push(ValidationWarning {
                    subject: Some(question.id.clone()),
                    message: format!(
                        "{} question defines no options; scored out of {FALLBACK_OPTION_COUNT}",
                        question.kind
                    ),
                });
            }
        }
        if !category.questions.iter().any(|q| q.kind.is_numeric()) {
            warnings.push(ValidationWarning {
                subject: Some(category.id.clone()),
                message: "category has no numeric questions and will always score 0".into(),
            });
        }
    }

    for source in axis_sources {
        if catalog.category(source).is_none() {
            warnings.push(ValidationWarning {
                subject: Some(source.to_string()),
                message: "axis source category is missing; its axes will read 0".into(),
            });
        }
    }

    warnings
}

/// Check responses against the catalog. Scoring does not require this.
pub fn validate_responses(catalog: &Catalog, responses: &[Response]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for response in responses {
        let Some(question) = catalog.question(&response.question_id) else {
            warnings.push(ValidationWarning {
                subject: Some(response.question_id.clone()),
                message: "unknown question id; response will be ignored".into(),
            });
            continue;
        };
        if let Some(reason) = answer_problem(question, &response.value) {
            warnings.push(ValidationWarning {
                subject: Some(response.question_id.clone()),
                message: reason,
            });
        }
    }

    let mut seen = HashSet::new();
    for response in responses {
        if !seen.insert(response.question_id.as_str()) {
            warnings.push(ValidationWarning {
                subject: Some(response.question_id.clone()),
                message: "answered more than once; the last answer is used".into(),
            });
        }
    }

    warnings
}

/// Why an answer does not fit a question, if it doesn't.
pub fn answer_problem(question: &Question, value: &AnswerValue) -> Option<String> {
    match (question.kind, value) {
        (QuestionKind::FreeText, AnswerValue::Choice(_)) => {
            Some("numeric answer given for a free-text question".into())
        }
        (QuestionKind::RatingScale | QuestionKind::SingleChoice, AnswerValue::Text(_)) => {
            Some(format!("text answer given for a {} question", question.kind))
        }
        (_, AnswerValue::Choice(index)) if *index as usize >= question.option_count() => Some(
            format!(
                "option index {index} out of range (question has {} options)",
                question.option_count()
            ),
        ),
        _ => None,
    }
}

/// Read a JSON array of responses.
pub fn load_responses(path: &Path) -> Result<Vec<Response>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read responses from {}", path.display()))?;
    let responses: Vec<Response> =
        serde_json::from_str(&content).context("failed to parse responses JSON")?;
    Ok(responses)
}

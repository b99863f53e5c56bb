//! The `readiness catalog` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use readiness_core::parser;

pub fn execute(catalog_path: Option<PathBuf>, show_questions: bool) -> Result<()> {
    let catalog = parser::load_catalog_or_builtin(catalog_path.as_deref())?;

    println!("{} [{}]", catalog.title, catalog.id);
    if !catalog.description.is_empty() {
        println!("{}", catalog.description);
    }

    let mut table = Table::new();
    table.set_header(vec!["Category", "Title", "Questions", "Minutes"]);
    for category in &catalog.categories {
        table.add_row(vec![
            Cell::new(&category.id),
            Cell::new(&category.title),
            Cell::new(category.questions.len()),
            Cell::new(category.time_estimate_minutes),
        ]);
    }
    println!("\n{table}");
    println!(
        "\n{} questions, about {} minutes",
        catalog.total_questions(),
        catalog.total_time_estimate()
    );

    if show_questions {
        let mut table = Table::new();
        table.set_header(vec!["Question", "Kind", "Options", "Weight", "Text"]);
        for question in catalog.questions() {
            table.add_row(vec![
                Cell::new(&question.id),
                Cell::new(question.kind),
                Cell::new(question.option_count()),
                Cell::new(format!("{:.1}", question.weight())),
                Cell::new(&question.text),
            ]);
        }
        println!("\n{table}");
    }

    Ok(())
}

//! The `readiness init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    if Path::new("readiness.toml").exists() {
        println!("readiness.toml already exists, skipping.");
    } else {
        std::fs::write("readiness.toml", SAMPLE_CONFIG)?;
        println!("Created readiness.toml");
    }

    std::fs::create_dir_all("responses")?;
    let example_path = Path::new("responses/example.json");
    if example_path.exists() {
        println!("responses/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_RESPONSES)?;
        println!("Created responses/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Run: readiness catalog --questions");
    println!("  2. Run: readiness validate --responses responses/example.json");
    println!("  3. Run: readiness score --responses responses/example.json");
    println!("  4. Or take the assessment yourself: readiness take");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# readiness configuration

# Custom catalog TOML. The built-in graphic design catalog is used when unset.
# catalog = "catalogs/custom.toml"

output_dir = "./readiness-results"
formats = ["json", "html"]
# respondent = "Sam"
"#;

const EXAMPLE_RESPONSES: &str = r#"[
  { "question_id": "int_1", "value": 3 },
  { "question_id": "int_2", "value": 4 },
  { "question_id": "int_3", "value": 3 },
  { "question_id": "int_4", "value": 2 },
  { "question_id": "int_5", "value": 3 },
  { "question_id": "pers_1", "value": 3 },
  { "question_id": "pers_2", "value": 2 },
  { "question_id": "pers_3", "value": 4 },
  { "question_id": "cog_1", "value": 3 },
  { "question_id": "cog_2", "value": 3 },
  { "question_id": "mot_1", "value": 4 },
  { "question_id": "mot_2", "value": 3 },
  { "question_id": "tech_1", "value": 2 },
  { "question_id": "tech_2", "value": 1 }
]
"#;

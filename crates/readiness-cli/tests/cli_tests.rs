//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const UX_CATALOG: &str = "../../catalogs/ux-design.toml";

/// Runs in `dir` with `HOME` pointed there so no user config leaks in.
fn readiness(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("readiness").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("READINESS_CATALOG")
        .env_remove("READINESS_OUTPUT_DIR");
    cmd
}

fn ux_catalog() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(UX_CATALOG)
}

fn write_responses(dir: &Path, json: &str) -> std::path::PathBuf {
    let path = dir.join("responses.json");
    std::fs::write(&path, json).unwrap();
    path
}

fn files_with_extension(dir: &Path, ext: &str) -> usize {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|x| x == ext))
        .count()
}

#[test]
fn catalog_lists_builtin() {
    let dir = TempDir::new().unwrap();
    readiness(dir.path())
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Graphic Design Readiness Assessment"))
        .stdout(predicate::str::contains("24 questions, about 30 minutes"));
}

#[test]
fn catalog_lists_questions() {
    let dir = TempDir::new().unwrap();
    readiness(dir.path())
        .arg("catalog")
        .arg("--catalog")
        .arg(ux_catalog())
        .arg("--questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("UX Design Readiness Check"))
        .stdout(predicate::str::contains("ux_cog_1"))
        .stdout(predicate::str::contains("free-text"));
}

#[test]
fn validate_builtin_catalog() {
    let dir = TempDir::new().unwrap();
    readiness(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 categories, 24 questions"))
        .stdout(predicate::str::contains("All checks passed"));
}

#[test]
fn validate_custom_catalog_file_and_directory() {
    let dir = TempDir::new().unwrap();
    readiness(dir.path())
        .arg("validate")
        .arg("--catalog")
        .arg(ux_catalog())
        .assert()
        .success()
        .stdout(predicate::str::contains("UX Design Readiness Check"))
        .stdout(predicate::str::contains("All checks passed"));

    readiness(dir.path())
        .arg("validate")
        .arg("--catalog")
        .arg(ux_catalog().parent().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("UX Design Readiness Check"));
}

#[test]
fn validate_reports_response_problems() {
    let dir = TempDir::new().unwrap();
    let responses = write_responses(
        dir.path(),
        r#"[
            {"question_id": "int_1", "value": 2},
            {"question_id": "int_1", "value": 3},
            {"question_id": "int_2", "value": 7},
            {"question_id": "nope", "value": 1}
        ]"#,
    );

    readiness(dir.path())
        .arg("validate")
        .arg("--responses")
        .arg(&responses)
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown question id"))
        .stdout(predicate::str::contains("option index 7 out of range"))
        .stdout(predicate::str::contains("answered more than once"))
        .stdout(predicate::str::contains("3 warning(s) found"));
}

#[test]
fn validate_rejects_broken_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(
        &path,
        r#"
[catalog]
id = "broken"
title = "Broken"

[[categories]]
id = "interest"
title = "Interest"

[categories.interpretation]
high = "h"
medium = "m"
low = "l"
"#,
    )
    .unwrap();

    readiness(dir.path())
        .arg("validate")
        .arg("--catalog")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("has no questions"));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();
    readiness(dir.path())
        .arg("validate")
        .arg("--catalog")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn score_writes_all_formats() {
    let dir = TempDir::new().unwrap();
    let responses = write_responses(
        dir.path(),
        r#"[
            {"question_id": "int_1", "value": 4},
            {"question_id": "int_2", "value": 4},
            {"question_id": "mot_1", "value": 4, "timestamp": "2024-05-01T10:00:00Z"}
        ]"#,
    );
    let out = dir.path().join("out");

    readiness(dir.path())
        .arg("score")
        .arg("--responses")
        .arg(&responses)
        .arg("--output")
        .arg(&out)
        .arg("--format")
        .arg("all")
        .arg("--respondent")
        .arg("sam")
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall score:"))
        .stdout(predicate::str::contains("(reconsider)"))
        .stdout(predicate::str::contains("Persistence"));

    assert_eq!(files_with_extension(&out, "json"), 1);
    assert_eq!(files_with_extension(&out, "html"), 1);
    assert_eq!(files_with_extension(&out, "md"), 1);

    let json_path = std::fs::read_dir(&out)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .find(|p| p.extension().is_some_and(|x| x == "json"))
        .unwrap();
    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(report["result"]["respondent"], "sam");
    assert_eq!(report["result"]["recommendation"], "reconsider");
    assert_eq!(report["responses"].as_array().unwrap().len(), 3);
}

#[test]
fn score_with_custom_catalog_and_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("readiness.toml"),
        format!(
            "catalog = {:?}\noutput_dir = \"results\"\nformats = [\"markdown\"]\nrespondent = \"kim\"\n",
            ux_catalog().display().to_string()
        ),
    )
    .unwrap();
    let responses = write_responses(
        dir.path(),
        r#"[
            {"question_id": "ux_int_1", "value": 4},
            {"question_id": "ux_int_2", "value": "The tax office website"},
            {"question_id": "ux_cog_1", "value": 3}
        ]"#,
    );

    readiness(dir.path())
        .arg("score")
        .arg("--responses")
        .arg(&responses)
        .assert()
        .success()
        .stdout(predicate::str::contains("cognitive"));

    let results = dir.path().join("results");
    assert_eq!(files_with_extension(&results, "md"), 1);
    assert_eq!(files_with_extension(&results, "json"), 0);
}

#[test]
fn score_warns_about_unknown_questions() {
    let dir = TempDir::new().unwrap();
    let responses = write_responses(dir.path(), r#"[{"question_id": "zzz", "value": 1}]"#);

    readiness(dir.path())
        .arg("score")
        .arg("--responses")
        .arg(&responses)
        .arg("--output")
        .arg(dir.path().join("out"))
        .assert()
        .success()
        .stderr(predicate::str::contains("[zzz] WARNING: unknown question id"))
        .stdout(predicate::str::contains("Overall score: 0/100"));
}

#[test]
fn score_rejects_bad_input() {
    let dir = TempDir::new().unwrap();
    readiness(dir.path())
        .arg("score")
        .arg("--responses")
        .arg("missing.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read responses"));

    let responses = write_responses(dir.path(), "[]");
    readiness(dir.path())
        .arg("score")
        .arg("--responses")
        .arg(&responses)
        .arg("--format")
        .arg("pdf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));

    readiness(dir.path())
        .arg("score")
        .arg("--responses")
        .arg(&responses)
        .arg("--config")
        .arg("nope.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn take_interactive_session() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    let answers = "5\n".repeat(24);

    readiness(dir.path())
        .arg("take")
        .arg("--output")
        .arg(&out)
        .write_stdin(answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/24]"))
        .stdout(predicate::str::contains("Assessment complete."))
        .stdout(predicate::str::contains("Yes, you should pursue Graphic Design!"));

    assert_eq!(files_with_extension(&out, "json"), 1);
}

#[test]
fn take_quit_saves_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");

    readiness(dir.path())
        .arg("take")
        .arg("--output")
        .arg(&out)
        .write_stdin("3\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing was saved"));

    assert!(!out.exists());
}

#[test]
fn take_fails_on_truncated_input() {
    let dir = TempDir::new().unwrap();
    readiness(dir.path())
        .arg("take")
        .write_stdin("3\n3\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input ended after 2 of 24 questions"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    readiness(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created readiness.toml"))
        .stdout(predicate::str::contains("Created responses/example.json"));

    assert!(dir.path().join("readiness.toml").exists());
    assert!(dir.path().join("responses/example.json").exists());

    readiness(dir.path())
        .arg("validate")
        .arg("--responses")
        .arg("responses/example.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    readiness(dir.path()).arg("init").assert().success();

    readiness(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    readiness(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Career readiness assessment scoring"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    readiness(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("readiness"));
}

use anyhow::Result;
use delcom_analyzer::config::batch::BatchConfig;
use delcom_analyzer::domain::ports::InputSource;
use delcom_analyzer::utils::validation::Validate;
use delcom_analyzer::{run_task, run_task_json, LocalInput};
use tempfile::TempDir;

const FULL_CONFIG: &str = r#"
[batch]
name = "ujian-akhir"
description = "End of term reports"

[report]
format = "text"

[[tasks]]
name = "nim-andi"
task = "nim"
input_text = "11S21044"

[[tasks]]
name = "nilai-andi"
task = "nilai"
input_file = "nilai.txt"

[[tasks]]
name = "frekuensi-kelas"
task = "frekuensi"
input_text = "3 5 3 5 7"
"#;

#[test]
fn test_config_file_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let config_path = dir.path().join("batch-config.toml");
    std::fs::write(&config_path, FULL_CONFIG)?;

    let config = BatchConfig::from_file(&config_path)?;
    config.validate()?;

    assert_eq!(config.batch.name, "ujian-akhir");
    assert_eq!(config.tasks.len(), 3);
    assert_eq!(config.format(), "text");

    Ok(())
}

#[test]
fn test_env_substitution_through_config_file() -> Result<()> {
    let dir = TempDir::new()?;
    std::env::set_var("DELCOM_BATCH_NAME", "injected-batch");

    let config_path = dir.path().join("batch-config.toml");
    std::fs::write(
        &config_path,
        r#"
[batch]
name = "${DELCOM_BATCH_NAME}"

[[tasks]]
name = "nim"
task = "nim"
input_text = "11S21044"
"#,
    )?;

    let config = BatchConfig::from_file(&config_path)?;
    assert_eq!(config.batch.name, "injected-batch");

    Ok(())
}

#[test]
fn test_batch_tasks_execute_against_local_inputs() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join("nilai.txt"),
        "10 10 10 10 30 30\nPA|100|80\nUTS|100|70\nUAS|100|90\n---\n",
    )?;

    let config = BatchConfig::from_toml_str(FULL_CONFIG)?;
    config.validate()?;

    let input = LocalInput::new(dir.path().to_str().unwrap().to_string());
    let mut reports = Vec::new();
    for task in &config.tasks {
        let text = match (&task.input_text, &task.input_file) {
            (Some(text), _) => text.clone(),
            (None, Some(file)) => input.read_input(file)?,
            (None, None) => unreachable!("validated config always carries an input"),
        };
        reports.push(run_task(task.kind()?, &text)?);
    }

    assert!(reports[0].starts_with("Informasi NIM 11S21044:"));
    assert!(reports[1].contains(">> Nilai Akhir: 56.00"));
    assert!(reports[2].starts_with("Tertinggi: 7"));

    Ok(())
}

#[test]
fn test_batch_json_format_produces_structured_reports() -> Result<()> {
    let config = BatchConfig::from_toml_str(&FULL_CONFIG.replace(
        "format = \"text\"",
        "format = \"json\"",
    ))?;
    assert_eq!(config.format(), "json");

    let task = &config.tasks[0];
    let json = run_task_json(task.kind()?, task.input_text.as_deref().unwrap())?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value["nim"], "11S21044");
    assert_eq!(value["year"], 2021);

    Ok(())
}

#[test]
fn test_failing_task_reports_typed_error() {
    let config = BatchConfig::from_toml_str(
        r#"
[batch]
name = "broken"

[[tasks]]
name = "short-nim"
task = "nim"
input_text = "11S"
"#,
    )
    .unwrap();
    config.validate().unwrap();

    let task = &config.tasks[0];
    let err = run_task(task.kind().unwrap(), task.input_text.as_deref().unwrap()).unwrap_err();
    assert!(err.to_string().contains("8 characters"));
}

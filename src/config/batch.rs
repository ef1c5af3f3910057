use crate::domain::model::Task;
use crate::utils::error::{AnalyzerError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub batch: BatchInfo,
    pub report: Option<ReportConfig>,
    pub tasks: Vec<TaskDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_path: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDefinition {
    pub name: String,
    pub task: String,
    pub input_file: Option<String>,
    pub input_text: Option<String>,
}

impl TaskDefinition {
    pub fn kind(&self) -> Result<Task> {
        Task::from_str(&self.task)
    }
}

impl BatchConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AnalyzerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| AnalyzerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn output_path(&self) -> &str {
        self.report
            .as_ref()
            .and_then(|r| r.output_path.as_deref())
            .unwrap_or("./reports")
    }

    pub fn format(&self) -> &str {
        self.report
            .as_ref()
            .and_then(|r| r.format.as_deref())
            .unwrap_or("text")
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("batch.name", &self.batch.name)?;
        validation::validate_path("report.output_path", self.output_path())?;
        validation::validate_one_of("report.format", self.format(), &["text", "json"])?;

        if self.tasks.is_empty() {
            return Err(AnalyzerError::MissingConfigError {
                field: "tasks".to_string(),
            });
        }

        let mut seen_names = HashSet::new();
        for task in &self.tasks {
            validation::validate_non_empty_string("tasks.name", &task.name)?;
            task.kind()?;

            if !seen_names.insert(task.name.as_str()) {
                return Err(AnalyzerError::InvalidConfigValueError {
                    field: "tasks.name".to_string(),
                    value: task.name.clone(),
                    reason: "Task names must be unique".to_string(),
                });
            }

            match (&task.input_file, &task.input_text) {
                (None, None) => {
                    return Err(AnalyzerError::MissingConfigError {
                        field: format!("tasks.{}.input_file or input_text", task.name),
                    })
                }
                (Some(_), Some(_)) => {
                    return Err(AnalyzerError::InvalidConfigValueError {
                        field: format!("tasks.{}", task.name),
                        value: "input_file + input_text".to_string(),
                        reason: "Exactly one input source must be set".to_string(),
                    })
                }
                _ => {}
            }
        }

        Ok(())
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

/// Replaces `${VAR}` occurrences with environment values; unset variables
/// are left intact.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

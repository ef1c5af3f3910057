pub mod batch;
pub mod cli;

use crate::domain::model::Task;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "delcom-analyzer"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Text analyzers for the Delcom academic case study")
)]
pub struct CliConfig {
    /// Which analyzer to run
    #[cfg_attr(feature = "cli", arg(value_enum))]
    pub task: Task,

    /// Input file path, or '-' to read from stdin
    #[cfg_attr(feature = "cli", arg(long, default_value = "-"))]
    pub input: String,

    /// Inline input text; takes precedence over --input
    #[cfg_attr(feature = "cli", arg(long))]
    pub text: Option<String>,

    /// Emit the report as JSON instead of plain text
    #[cfg_attr(feature = "cli", arg(long))]
    pub json: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.text.is_none() {
            validation::validate_path("input", &self.input)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(input: &str, text: Option<&str>) -> CliConfig {
        CliConfig {
            task: Task::Nim,
            input: input.to_string(),
            text: text.map(str::to_string),
            json: false,
            verbose: false,
        }
    }

    #[test]
    fn test_validate_requires_input_path_without_inline_text() {
        assert!(config("-", None).validate().is_ok());
        assert!(config("data.txt", None).validate().is_ok());
        assert!(config("", None).validate().is_err());
    }

    #[test]
    fn test_validate_ignores_input_path_with_inline_text() {
        assert!(config("", Some("11S21044")).validate().is_ok());
    }
}

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::cli::LocalInput;

pub use crate::core::{
    run_task, run_task_json, AnalysisEngine, FrequencyAnalyzer, GradeCalculator, MatrixAnalyzer,
    NimDecoder, Task,
};
pub use crate::utils::error::{AnalyzerError, Result};

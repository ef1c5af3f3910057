pub mod engine;
pub mod frequency;
pub mod grade;
pub mod matrix;
pub mod nim;

pub use crate::domain::model::Task;
pub use crate::domain::ports::{Analyzer, InputSource};
pub use crate::utils::error::Result;

pub use engine::{run_task, run_task_json, AnalysisEngine};
pub use frequency::FrequencyAnalyzer;
pub use grade::GradeCalculator;
pub use matrix::MatrixAnalyzer;
pub use nim::NimDecoder;

use crate::core::{FrequencyAnalyzer, GradeCalculator, MatrixAnalyzer, NimDecoder};
use crate::domain::model::Task;
use crate::domain::ports::Analyzer;
use crate::utils::error::Result;

/// Drives a single analyzer over decoded input text and renders the
/// resulting report.
pub struct AnalysisEngine<A: Analyzer> {
    analyzer: A,
}

impl<A: Analyzer> AnalysisEngine<A> {
    pub fn new(analyzer: A) -> Self {
        Self { analyzer }
    }

    pub fn run(&self, input: &str) -> Result<String> {
        tracing::debug!(
            "Running {} analyzer on {} bytes of input",
            self.analyzer.name(),
            input.len()
        );
        let report = self.analyzer.run(input)?;
        tracing::debug!("{} analysis complete", self.analyzer.name());
        Ok(report.to_string())
    }

    pub fn run_json(&self, input: &str) -> Result<String> {
        tracing::debug!(
            "Running {} analyzer on {} bytes of input (JSON output)",
            self.analyzer.name(),
            input.len()
        );
        let report = self.analyzer.run(input)?;
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

pub fn run_task(task: Task, input: &str) -> Result<String> {
    match task {
        Task::Nim => AnalysisEngine::new(NimDecoder).run(input),
        Task::Nilai => AnalysisEngine::new(GradeCalculator).run(input),
        Task::Matriks => AnalysisEngine::new(MatrixAnalyzer).run(input),
        Task::Frekuensi => AnalysisEngine::new(FrequencyAnalyzer).run(input),
    }
}

pub fn run_task_json(task: Task, input: &str) -> Result<String> {
    match task {
        Task::Nim => AnalysisEngine::new(NimDecoder).run_json(input),
        Task::Nilai => AnalysisEngine::new(GradeCalculator).run_json(input),
        Task::Matriks => AnalysisEngine::new(MatrixAnalyzer).run_json(input),
        Task::Frekuensi => AnalysisEngine::new(FrequencyAnalyzer).run_json(input),
    }
}

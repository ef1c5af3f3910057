use crate::domain::model::{
    CategoryScore, CategoryTally, GradeReport, GradeWeights, LetterGrade, ScoreCategory,
};
use crate::domain::ports::Analyzer;
use crate::utils::error::{AnalyzerError, Result};

/// Computes a weighted course grade from a weights header followed by
/// itemized `TYPE|max|value` score records.
pub struct GradeCalculator;

impl GradeCalculator {
    pub fn calculate(&self, text: &str) -> Result<GradeReport> {
        let mut lines = text.lines();
        let header = lines.next().ok_or_else(|| AnalyzerError::MalformedHeader {
            reason: "missing weights line".to_string(),
        })?;
        let weights = parse_weights(header)?;

        let mut tallies = [CategoryTally::default(); 6];
        for raw in lines {
            let line = raw.trim();
            if line == "---" {
                break;
            }
            let (kind, max, value) = parse_record(line)?;
            // Unrecognized record types are skipped without error.
            if let Some(category) = ScoreCategory::from_token(kind) {
                tallies[category.index()].add(max, value);
            }
        }

        let mut categories = Vec::with_capacity(ScoreCategory::ALL.len());
        let mut final_score = 0.0;
        for category in ScoreCategory::ALL {
            let rounded = tallies[category.index()].average().round() as i64;
            let weight = weights.of(category);
            let weighted = (rounded as f64 / 100.0) * weight as f64;
            final_score += weighted;
            categories.push(CategoryScore {
                category,
                rounded,
                weighted,
                weight,
            });
        }

        Ok(GradeReport {
            categories,
            final_score,
            grade: LetterGrade::from_score(final_score),
        })
    }
}

fn parse_weights(header: &str) -> Result<GradeWeights> {
    let mut weights = [0i64; 6];
    let mut tokens = header.split_whitespace();
    for (i, slot) in weights.iter_mut().enumerate() {
        let token = tokens
            .next()
            .ok_or_else(|| AnalyzerError::MalformedHeader {
                reason: format!("expected six weights, found {}", i),
            })?;
        *slot = token.parse().map_err(|_| AnalyzerError::MalformedHeader {
            reason: format!("weight '{}' is not an integer", token),
        })?;
    }
    // Tokens past the sixth are ignored.
    Ok(GradeWeights(weights))
}

fn parse_record(line: &str) -> Result<(&str, i64, i64)> {
    let malformed = |reason: String| AnalyzerError::MalformedRecord {
        line: line.to_string(),
        reason,
    };

    let mut fields = line.split('|');
    let kind = fields.next().unwrap_or_default();
    let max = fields
        .next()
        .ok_or_else(|| malformed("expected TYPE|max|value".to_string()))?;
    let value = fields
        .next()
        .ok_or_else(|| malformed("expected TYPE|max|value".to_string()))?;

    let max: i64 = max
        .parse()
        .map_err(|_| malformed(format!("max '{}' is not an integer", max)))?;
    let value: i64 = value
        .parse()
        .map_err(|_| malformed(format!("value '{}' is not an integer", value)))?;
    Ok((kind, max, value))
}

impl Analyzer for GradeCalculator {
    type Report = GradeReport;

    fn name(&self) -> &'static str {
        "nilai"
    }

    fn run(&self, input: &str) -> Result<Self::Report> {
        self.calculate(input)
    }
}

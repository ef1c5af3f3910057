use crate::domain::model::{Matrix, MatrixReport};
use crate::domain::ports::Analyzer;
use crate::utils::error::{AnalyzerError, Result};
use crate::utils::scan::IntScanner;

/// Analyzes a size-prefixed square matrix for L-shape perimeter dominance.
pub struct MatrixAnalyzer;

impl MatrixAnalyzer {
    pub fn analyze(&self, text: &str) -> Result<MatrixReport> {
        let matrix = parse_matrix(text)?;
        Ok(summarize(&matrix))
    }
}

fn parse_matrix(text: &str) -> Result<Matrix> {
    let mut scanner = IntScanner::new(text);
    let size = scanner.expect_int("matrix size")?;
    if size < 1 {
        return Err(AnalyzerError::InsufficientData {
            reason: format!("matrix size must be at least 1, got {}", size),
        });
    }

    let n = size as usize;
    let cell_count = n.checked_mul(n).ok_or_else(|| AnalyzerError::InsufficientData {
        reason: format!("matrix size {} is out of range", size),
    })?;

    let mut cells = Vec::new();
    for _ in 0..cell_count {
        cells.push(scanner.expect_int("matrix cell")?);
    }
    Ok(Matrix::new(n, cells))
}

fn summarize(matrix: &Matrix) -> MatrixReport {
    let n = matrix.size;
    match n {
        1 => {
            let center = matrix.get(0, 0);
            MatrixReport {
                l_sum: None,
                reverse_l_sum: None,
                center,
                difference: None,
                dominant: center,
            }
        }
        2 => {
            let sum: i64 = matrix.cells().iter().sum();
            MatrixReport {
                l_sum: None,
                reverse_l_sum: None,
                center: sum,
                difference: None,
                dominant: sum,
            }
        }
        _ => {
            // Left column plus bottom row; corners only counted in the
            // column pass. The reverse L mirrors with the right column
            // and top row.
            let l_sum: i64 = (0..n).map(|i| matrix.get(i, 0)).sum::<i64>()
                + (1..n - 1).map(|j| matrix.get(n - 1, j)).sum::<i64>();
            let reverse_l_sum: i64 = (0..n).map(|i| matrix.get(i, n - 1)).sum::<i64>()
                + (1..n - 1).map(|j| matrix.get(0, j)).sum::<i64>();

            let center = if n % 2 == 1 {
                matrix.get(n / 2, n / 2)
            } else {
                matrix.get(n / 2 - 1, n / 2 - 1)
                    + matrix.get(n / 2 - 1, n / 2)
                    + matrix.get(n / 2, n / 2 - 1)
                    + matrix.get(n / 2, n / 2)
            };

            let difference = (l_sum - reverse_l_sum).abs();
            let dominant = if difference == 0 {
                center
            } else {
                l_sum.max(reverse_l_sum)
            };

            MatrixReport {
                l_sum: Some(l_sum),
                reverse_l_sum: Some(reverse_l_sum),
                center,
                difference: Some(difference),
                dominant,
            }
        }
    }
}

impl Analyzer for MatrixAnalyzer {
    type Report = MatrixReport;

    fn name(&self) -> &'static str {
        "matriks"
    }

    fn run(&self, input: &str) -> Result<Self::Report> {
        self.analyze(input)
    }
}

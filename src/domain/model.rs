use crate::utils::error::AnalyzerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Analyzer selector shared by the CLI and the batch runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Task {
    /// Decode a student identifier (NIM)
    Nim,
    /// Compute a weighted course grade
    Nilai,
    /// Analyze an NxN matrix for L-shape dominance
    Matriks,
    /// Compute frequency statistics over an integer sequence
    Frekuensi,
}

impl Task {
    pub fn as_str(&self) -> &'static str {
        match self {
            Task::Nim => "nim",
            Task::Nilai => "nilai",
            Task::Matriks => "matriks",
            Task::Frekuensi => "frekuensi",
        }
    }
}

impl FromStr for Task {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nim" => Ok(Task::Nim),
            "nilai" => Ok(Task::Nilai),
            "matriks" => Ok(Task::Matriks),
            "frekuensi" => Ok(Task::Frekuensi),
            other => Err(AnalyzerError::InvalidConfigValueError {
                field: "task".to_string(),
                value: other.to_string(),
                reason: "Allowed values: nim, nilai, matriks, frekuensi".to_string(),
            }),
        }
    }
}

/// Decoded student identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NimReport {
    pub nim: String,
    pub program: String,
    pub year: i32,
    pub sequence: u32,
}

impl fmt::Display for NimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Informasi NIM {}:", self.nim)?;
        writeln!(f, ">> Program Studi: {}", self.program)?;
        writeln!(f, ">> Angkatan: {}", self.year)?;
        write!(f, ">> Urutan: {}", self.sequence)
    }
}

/// Score categories in their fixed reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreCategory {
    Participation,
    Task,
    Quiz,
    Project,
    Midterm,
    Final,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 6] = [
        ScoreCategory::Participation,
        ScoreCategory::Task,
        ScoreCategory::Quiz,
        ScoreCategory::Project,
        ScoreCategory::Midterm,
        ScoreCategory::Final,
    ];

    /// Maps a record-type token; unrecognized tokens map to `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "PA" => Some(ScoreCategory::Participation),
            "T" => Some(ScoreCategory::Task),
            "K" => Some(ScoreCategory::Quiz),
            "P" => Some(ScoreCategory::Project),
            "UTS" => Some(ScoreCategory::Midterm),
            "UAS" => Some(ScoreCategory::Final),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreCategory::Participation => "Partisipatif",
            ScoreCategory::Task => "Tugas",
            ScoreCategory::Quiz => "Kuis",
            ScoreCategory::Project => "Proyek",
            ScoreCategory::Midterm => "UTS",
            ScoreCategory::Final => "UAS",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Six weights in the fixed category order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeWeights(pub [i64; 6]);

impl GradeWeights {
    pub fn of(&self, category: ScoreCategory) -> i64 {
        self.0[category.index()]
    }
}

/// Accumulated maximum and obtained points for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTally {
    pub sum_max: i64,
    pub sum_obtained: i64,
}

impl CategoryTally {
    pub fn add(&mut self, max: i64, obtained: i64) {
        self.sum_max += max;
        self.sum_obtained += obtained;
    }

    /// Percentage average; a category with no records scores zero.
    pub fn average(&self) -> f64 {
        if self.sum_max == 0 {
            0.0
        } else {
            self.sum_obtained as f64 * 100.0 / self.sum_max as f64
        }
    }
}

const THRESHOLD_A: f64 = 79.5;
const THRESHOLD_AB: f64 = 72.0;
const THRESHOLD_B: f64 = 64.5;
const THRESHOLD_BC: f64 = 57.0;
const THRESHOLD_C: f64 = 49.5;
const THRESHOLD_D: f64 = 34.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LetterGrade {
    A,
    AB,
    B,
    BC,
    C,
    D,
    E,
}

impl LetterGrade {
    pub fn from_score(score: f64) -> Self {
        if score >= THRESHOLD_A {
            LetterGrade::A
        } else if score >= THRESHOLD_AB {
            LetterGrade::AB
        } else if score >= THRESHOLD_B {
            LetterGrade::B
        } else if score >= THRESHOLD_BC {
            LetterGrade::BC
        } else if score >= THRESHOLD_C {
            LetterGrade::C
        } else if score >= THRESHOLD_D {
            LetterGrade::D
        } else {
            LetterGrade::E
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LetterGrade::A => "A",
            LetterGrade::AB => "AB",
            LetterGrade::B => "B",
            LetterGrade::BC => "BC",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::E => "E",
        };
        write!(f, "{}", s)
    }
}

/// One reported category line: rounded average plus weighted contribution.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub category: ScoreCategory,
    pub rounded: i64,
    pub weighted: f64,
    pub weight: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeReport {
    pub categories: Vec<CategoryScore>,
    pub final_score: f64,
    pub grade: LetterGrade,
}

impl fmt::Display for GradeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Perolehan Nilai:")?;
        for score in &self.categories {
            writeln!(
                f,
                ">> {}: {}/100 ({:.2}/{})",
                score.category.label(),
                score.rounded,
                score.weighted,
                score.weight
            )?;
        }
        writeln!(f)?;
        writeln!(f, ">> Nilai Akhir: {:.2}", self.final_score)?;
        write!(f, ">> Grade: {}", self.grade)
    }
}

/// Square integer grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub size: usize,
    cells: Vec<i64>,
}

impl Matrix {
    pub fn new(size: usize, cells: Vec<i64>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.cells[row * self.size + col]
    }

    pub fn cells(&self) -> &[i64] {
        &self.cells
    }
}

/// Perimeter-dominance summary; `None` fields render as `Tidak Ada`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixReport {
    pub l_sum: Option<i64>,
    pub reverse_l_sum: Option<i64>,
    pub center: i64,
    pub difference: Option<i64>,
    pub dominant: i64,
}

fn fmt_opt(value: Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "Tidak Ada".to_string(),
    }
}

impl fmt::Display for MatrixReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nilai L: {}", fmt_opt(self.l_sum))?;
        writeln!(f, "Nilai Kebalikan L: {}", fmt_opt(self.reverse_l_sum))?;
        writeln!(f, "Nilai Tengah: {}", self.center)?;
        writeln!(f, "Perbedaan: {}", fmt_opt(self.difference))?;
        write!(f, "Dominan: {}", self.dominant)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: i64,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueProduct {
    pub value: i64,
    pub count: usize,
    pub product: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyReport {
    pub highest: i64,
    pub lowest: i64,
    pub most_frequent: ValueCount,
    pub solitary: ValueCount,
    pub highest_product: ValueProduct,
    pub lowest_product: ValueProduct,
}

impl fmt::Display for FrequencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tertinggi: {}", self.highest)?;
        writeln!(f, "Terendah: {}", self.lowest)?;
        writeln!(
            f,
            "Terbanyak: {} ({}x)",
            self.most_frequent.value, self.most_frequent.count
        )?;
        writeln!(
            f,
            "Tersedikit: {} ({}x)",
            self.solitary.value, self.solitary.count
        )?;
        writeln!(
            f,
            "Jumlah Tertinggi: {} * {} = {}",
            self.highest_product.value, self.highest_product.count, self.highest_product.product
        )?;
        write!(
            f,
            "Jumlah Terendah: {} * {} = {}",
            self.lowest_product.value, self.lowest_product.count, self.lowest_product.product
        )
    }
}

/// Terminal outcome of the frequency analyzer. An empty sequence and a
/// sequence without a solitary value are successful results, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyOutcome {
    NoInput,
    NoUnique,
    Report(FrequencyReport),
}

impl fmt::Display for FrequencyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrequencyOutcome::NoInput => write!(f, "Tidak ada input"),
            FrequencyOutcome::NoUnique => write!(f, "Tidak ada angka unik"),
            FrequencyOutcome::Report(report) => report.fmt(f),
        }
    }
}

use crate::domain::model::NimReport;
use crate::domain::ports::Analyzer;
use crate::utils::error::{AnalyzerError, Result};

/// Study program table (prefix -> program name). Fixed reference data.
pub const STUDY_PROGRAMS: [(&str, &str); 9] = [
    ("11S", "Sarjana Informatika"),
    ("12S", "Sarjana Sistem Informasi"),
    ("14S", "Sarjana Teknik Elektro"),
    ("21S", "Sarjana Manajemen Rekayasa"),
    ("22S", "Sarjana Teknik Metalurgi"),
    ("31S", "Sarjana Teknik Bioproses"),
    ("114", "Diploma 4 Teknologi Rekayasa Perangkat Lunak"),
    ("113", "Diploma 3 Teknologi Informasi"),
    ("133", "Diploma 3 Teknologi Komputer"),
];

pub fn program_name(prefix: &str) -> Option<&'static str> {
    STUDY_PROGRAMS
        .iter()
        .find(|(code, _)| *code == prefix)
        .map(|(_, name)| *name)
}

/// Decodes an 8-character student identifier into program, enrollment
/// year, and sequence number.
pub struct NimDecoder;

impl NimDecoder {
    pub fn decode(&self, nim: &str) -> Result<NimReport> {
        let nim = nim.trim();
        let chars: Vec<char> = nim.chars().collect();
        if chars.len() != 8 {
            return Err(AnalyzerError::InvalidLength {
                length: chars.len(),
            });
        }

        let prefix: String = chars[..3].iter().collect();
        let year_code: String = chars[3..5].iter().collect();
        let sequence: String = chars[5..].iter().collect();

        let program = program_name(&prefix).ok_or_else(|| AnalyzerError::UnknownPrefix {
            prefix: prefix.clone(),
        })?;

        // The 8-char contract guarantees digits here, but non-digit input
        // must still fail as a format error rather than panic.
        let year_code: i32 = year_code
            .parse()
            .map_err(|_| AnalyzerError::InvalidLength { length: chars.len() })?;
        let sequence: u32 = sequence
            .parse()
            .map_err(|_| AnalyzerError::InvalidLength { length: chars.len() })?;

        Ok(NimReport {
            nim: nim.to_string(),
            program: program.to_string(),
            year: 2000 + year_code,
            sequence,
        })
    }
}

impl Analyzer for NimDecoder {
    type Report = NimReport;

    fn name(&self) -> &'static str {
        "nim"
    }

    fn run(&self, input: &str) -> Result<Self::Report> {
        self.decode(input)
    }
}

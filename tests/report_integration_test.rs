use anyhow::Result;
use delcom_analyzer::domain::ports::InputSource;
use delcom_analyzer::{run_task, run_task_json, AnalyzerError, LocalInput, Task};
use tempfile::TempDir;

#[test]
fn test_nim_report_end_to_end() {
    let report = run_task(Task::Nim, "11S21044").unwrap();
    assert_eq!(
        report,
        "Informasi NIM 11S21044:\n\
         >> Program Studi: Sarjana Informatika\n\
         >> Angkatan: 2021\n\
         >> Urutan: 44"
    );
}

#[test]
fn test_grade_report_end_to_end() {
    let input = "10 10 10 10 30 30\nPA|100|80\nUTS|100|70\nUAS|100|90\n---";
    let report = run_task(Task::Nilai, input).unwrap();
    assert!(report.starts_with("Perolehan Nilai:"));
    assert!(report.contains(">> Partisipatif: 80/100 (8.00/10)"));
    assert!(report.contains(">> UTS: 70/100 (21.00/30)"));
    assert!(report.contains(">> UAS: 90/100 (27.00/30)"));
    assert!(report.contains(">> Nilai Akhir: 56.00"));
    assert!(report.ends_with(">> Grade: C"));
}

#[test]
fn test_matrix_report_end_to_end() {
    let report = run_task(Task::Matriks, "3 1 2 3 4 5 6 7 8 9").unwrap();
    assert_eq!(
        report,
        "Nilai L: 20\n\
         Nilai Kebalikan L: 20\n\
         Nilai Tengah: 5\n\
         Perbedaan: 0\n\
         Dominan: 5"
    );
}

#[test]
fn test_frequency_report_end_to_end() {
    let report = run_task(Task::Frekuensi, "3 5 3 5 7").unwrap();
    assert_eq!(
        report,
        "Tertinggi: 7\n\
         Terendah: 3\n\
         Terbanyak: 3 (2x)\n\
         Tersedikit: 7 (1x)\n\
         Jumlah Tertinggi: 5 * 2 = 10\n\
         Jumlah Terendah: 3 * 2 = 6"
    );
}

#[test]
fn test_frequency_terminal_outcomes_are_not_errors() {
    assert_eq!(run_task(Task::Frekuensi, "").unwrap(), "Tidak ada input");
    assert_eq!(
        run_task(Task::Frekuensi, "1 1").unwrap(),
        "Tidak ada angka unik"
    );
}

#[test]
fn test_error_reports_carry_context() {
    let err = run_task(Task::Nim, "11S2104").unwrap_err();
    assert!(matches!(err, AnalyzerError::InvalidLength { length: 7 }));

    let err = run_task(Task::Nim, "99Z21044").unwrap_err();
    assert!(err.to_string().contains("99Z"));

    let err = run_task(Task::Nilai, "10 20").unwrap_err();
    assert!(matches!(err, AnalyzerError::MalformedHeader { .. }));

    let err = run_task(Task::Matriks, "2 1 2 3").unwrap_err();
    assert!(matches!(err, AnalyzerError::InsufficientData { .. }));
}

#[test]
fn test_json_reports_are_structured() -> Result<()> {
    let json = run_task_json(Task::Matriks, "3 1 2 3 4 5 6 7 8 9")?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value["l_sum"], 20);
    assert_eq!(value["dominant"], 5);

    let json = run_task_json(Task::Frekuensi, "3 5 3 5 7")?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value["report"]["most_frequent"]["value"], 3);
    assert_eq!(value["report"]["highest_product"]["product"], 10);

    let json = run_task_json(Task::Frekuensi, "")?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value, serde_json::json!("no_input"));

    Ok(())
}

#[test]
fn test_file_input_end_to_end() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("matrix.txt"), "3\n1 2 3\n4 5 6\n7 8 9\n")?;

    let input = LocalInput::new(dir.path().to_str().unwrap().to_string());
    let text = input.read_input("matrix.txt")?;
    let report = run_task(Task::Matriks, &text)?;
    assert!(report.ends_with("Dominan: 5"));

    Ok(())
}

#[test]
fn test_file_input_rejects_invalid_encoding() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("binary.dat"), [0xc3u8, 0x28])?;

    let input = LocalInput::new(dir.path().to_str().unwrap().to_string());
    let err = input.read_input("binary.dat").unwrap_err();
    assert!(matches!(err, AnalyzerError::InvalidEncoding(_)));

    Ok(())
}

#[test]
fn test_grade_arithmetic_is_idempotent() {
    // recomputing from the report's own numeric fields reproduces the
    // final score exactly
    let input = "10 10 10 10 30 30\nPA|100|80\nUTS|100|70\nUAS|100|90\n---";
    let report = run_task(Task::Nilai, input).unwrap();

    let mut recomputed = 0.0;
    for line in report.lines() {
        if let Some(rest) = line.strip_prefix(">> ") {
            if let Some((_, numbers)) = rest.split_once(": ") {
                if let Some((rounded, contribution)) = numbers.split_once("/100 (") {
                    let rounded: f64 = rounded.parse().unwrap();
                    let (weighted, weight) = contribution
                        .trim_end_matches(')')
                        .split_once('/')
                        .unwrap();
                    let weighted: f64 = weighted.parse().unwrap();
                    let weight: f64 = weight.parse().unwrap();
                    assert!((rounded / 100.0 * weight - weighted).abs() < 1e-9);
                    recomputed += weighted;
                }
            }
        }
    }
    assert!((recomputed - 56.00).abs() < 1e-9);
}

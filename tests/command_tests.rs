use exam_stats::commands::{execute_analyze, validate_args, AnalyzeArgs};
use exam_stats::output::read_report;
use std::path::PathBuf;

fn write_input(dir: &std::path::Path) -> PathBuf {
    let input = dir.join("records.json");
    let rows = serde_json::json!([
        {"Roll No": "A1", "Sub Name": "Math", "Status": "PASS", "Total": 91, "Grade": "O"},
        {"Roll No": "A1", "Sub Name": "MathLab", "Status": "FAIL", "Total": 30, "Grade": "F"},
        {"Roll No": "A2", "Sub Name": "Math", "Status": "PASS", "Total": 60, "Grade": "B"}
    ]);
    std::fs::write(&input, rows.to_string()).unwrap();
    input
}

#[test]
fn test_validate_args_valid() {
    let args = AnalyzeArgs {
        input: PathBuf::from("records.json"),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_empty_input() {
    let args = AnalyzeArgs {
        input: PathBuf::new(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_bucket_limit() {
    let zero = AnalyzeArgs {
        fail_bucket_limit: 0,
        ..Default::default()
    };
    assert!(validate_args(&zero).is_err());

    let max = AnalyzeArgs {
        fail_bucket_limit: 50,
        ..Default::default()
    };
    assert!(validate_args(&max).is_ok());
}

#[test]
fn test_execute_analyze_writes_report() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(temp_dir.path());
    let output = temp_dir.path().join("out/report.json");
    let summary = temp_dir.path().join("out/summary.txt");

    let args = AnalyzeArgs {
        input,
        output_json: output.clone(),
        output_summary: Some(summary.clone()),
        ..Default::default()
    };
    execute_analyze(args).unwrap();

    let report = read_report(&output).unwrap();
    assert_eq!(report.subjects, vec!["Math".to_string(), "MathLab".to_string()]);
    assert_eq!(report.subject_stats.len(), 2);
    assert_eq!(report.overall.total_pass, 1);
    assert!(summary.exists());
}

#[test]
fn test_execute_analyze_unknown_subject() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(temp_dir.path());
    let output = temp_dir.path().join("report.json");

    let args = AnalyzeArgs {
        input,
        subject: Some("History".to_string()),
        output_json: output.clone(),
        ..Default::default()
    };

    let err = execute_analyze(args).unwrap_err();
    assert!(format!("{:#}", err).contains("History"));
    assert!(!output.exists());
}

#[test]
fn test_execute_analyze_missing_input() {
    let temp_dir = tempfile::tempdir().unwrap();

    let args = AnalyzeArgs {
        input: temp_dir.path().join("missing.json"),
        output_json: temp_dir.path().join("report.json"),
        ..Default::default()
    };

    assert!(execute_analyze(args).is_err());
}

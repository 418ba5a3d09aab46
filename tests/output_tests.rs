use exam_stats::aggregator::build_report;
use exam_stats::output::{read_report, render_text_summary, validate_path, write_report, write_summary};
use exam_stats::parser::{parse_table, AnalysisReport};
use exam_stats::utils::config::SCHEMA_VERSION;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;
use tempfile::NamedTempFile;

fn create_test_report() -> AnalysisReport {
    let mut rows = vec![
        json!({"Roll No": "A1", "Sub Name": "Math", "Status": "PASS", "Total": 91, "Grade": "O"}),
        json!({"Roll No": "A1", "Sub Name": "MathLab", "Status": "FAIL", "Total": 30, "Grade": "F"}),
        json!({"Roll No": "A2", "Sub Name": "Math", "Status": "PASS", "Total": 60, "Grade": "B"}),
        json!({"Roll No": "A2", "Sub Name": "MathLab", "Status": "PASS", "Total": 72, "Grade": "A"}),
    ];
    // A3 fails six theory subjects, above the display cap
    for i in 1..=6 {
        rows.push(json!({
            "Roll No": "A3",
            "Sub Name": format!("Elective {}", i),
            "Status": "FAIL",
            "Total": 20,
            "Grade": "F"
        }));
    }

    let table = parse_table(&serde_json::Value::Array(rows)).unwrap();
    build_report(&table, "marks.json", None, 5).unwrap()
}

#[test]
fn test_report_contents() {
    let report = create_test_report();

    assert_eq!(report.version, SCHEMA_VERSION);
    assert_eq!(report.subjects.len(), 8);
    assert_eq!(report.subject_stats.len(), 8);
    assert_eq!(report.overview.len(), 8);
    assert_eq!(report.fail_counts.len(), 1);
    assert_eq!(report.fail_counts["1_lab_fails"], vec!["A1".to_string()]);
    assert_eq!(report.failure_profile.subjects.get(&6), Some(&vec!["A3".to_string()]));
    assert_eq!(report.overall.total_pass, 1);
    assert_eq!(report.overall.total_fail, 2);
}

#[test]
fn test_single_subject_report() {
    let table = parse_table(&json!([
        {"Roll No": "A1", "Sub Name": "Math", "Status": "PASS", "Total": 91, "Grade": "O"},
        {"Roll No": "A1", "Sub Name": "Physics", "Status": "PASS", "Total": 61, "Grade": "B+"}
    ]))
    .unwrap();

    let report = build_report(&table, "inline", Some("Physics"), 5).unwrap();
    assert_eq!(report.subject_stats.len(), 1);
    assert_eq!(report.subject_stats[0].subject_name, "Physics");
    assert_eq!(report.overview.len(), 2);
}

#[test]
fn test_json_field_names() {
    let report = create_test_report();
    let value = serde_json::to_value(&report).unwrap();

    let math = &value["subject_stats"][0];
    assert_eq!(math["subject_name"], "Math");
    assert_eq!(math["num_students_pass"], 2);
    assert_eq!(math["num_students_fail"], 0);
    assert_eq!(math["average_mark"], 75.5);
    assert_eq!(math["highest_students"][0]["roll_no"], "A1");
    assert_eq!(math["highest_students"][0]["grade"], "O");
    assert_eq!(math["marks_distribution"][0]["range"], "91-100");

    assert_eq!(value["overview"][0]["passPercentage"], 100.0);
    assert_eq!(value["overall"]["totalPass"], 1);
    assert_eq!(value["overall"]["totalFail"], 2);
}

#[test]
fn test_write_and_read_report() {
    let report = create_test_report();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    write_report(&report, path).unwrap();
    let loaded = read_report(path).unwrap();

    assert_eq!(loaded, report);
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/report.json");

    let report = create_test_report();
    write_report(&report, &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_text_summary_rounding_and_sections() {
    let report = create_test_report();
    let summary = render_text_summary(&report);

    assert!(summary.contains("Subject Analysis: Math"));
    assert!(summary.contains("Average Mark:   75.50"));
    assert!(summary.contains("Pass Rate:      100.00% (2)"));
    assert!(summary.contains("O   1 students (50.0%)"));
    assert!(summary.contains("Total Pass (All Subjects):          1 students"));
    assert!(summary.contains("1_lab_fails"));
    assert!(summary.contains("more than 5 fails:  A3"));
}

#[test]
fn test_text_summary_fail_counts_in_numeric_order() {
    let mut rows = vec![
        json!({"Roll No": "B2", "Sub Name": "Math", "Status": "FAIL", "Total": 12, "Grade": "F"}),
        json!({"Roll No": "B3", "Sub Name": "Chem Lab", "Status": "FAIL", "Total": 15, "Grade": "F"}),
    ];
    for i in 1..=10 {
        rows.push(json!({
            "Roll No": "B1",
            "Sub Name": format!("Paper {}", i),
            "Status": "FAIL",
            "Total": 10,
            "Grade": "F"
        }));
    }

    let table = parse_table(&serde_json::Value::Array(rows)).unwrap();
    let report = build_report(&table, "inline", None, 12).unwrap();
    let summary = render_text_summary(&report);

    let position = |needle: &str| {
        summary
            .find(needle)
            .unwrap_or_else(|| panic!("missing {:?} in:\n{}", needle, summary))
    };
    let lab = position("  1_lab_fails ");
    let one = position("  1_subject_fails ");
    let ten = position("  10_subject_fails ");

    assert!(lab < one);
    assert!(one < ten);
    assert!(summary[one..ten].contains("B2"));
    assert!(summary[ten..].contains("B1"));
    assert!(!summary.contains("more than 12 fails"));
}

#[test]
fn test_write_summary() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("summary.txt");

    let report = create_test_report();
    write_summary(&report, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render_text_summary(&report));
}

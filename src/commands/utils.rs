use crate::output::read_report;
use crate::parser::read_table;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Subjects: {}", report.subjects.len());
    println!("  Subject Breakdowns: {}", report.subject_stats.len());
    println!("  Total Pass: {}", report.overall.total_pass);
    println!("  Total Fail: {}", report.overall.total_fail);

    Ok(())
}

/// List the distinct subjects of an input file
pub fn list_subjects(input: PathBuf) -> Result<()> {
    let table = read_table(&input)
        .with_context(|| format!("Failed to read records from {}", input.display()))?;

    for subject in table.subjects() {
        println!("{}", subject);
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Exam Stats Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Input rows (JSON array of objects):");
        println!("  Roll No: string          - Student identifier");
        println!("  Sub Name: string         - Subject; names containing 'lab' are labs");
        println!("  Status: string           - PASS or FAIL (anything else is neither)");
        println!("  Total: number            - Mark, 0 to 100");
        println!("  Grade: string            - O, A+, A, B+, B, C or F");
        println!();
        println!("Report Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  source: string           - Input the report was computed from");
        println!("  subjects: array          - Distinct subjects, first-appearance order");
        println!("  subject_stats: array     - Per-subject breakdowns");
        println!("    total_students, num_students_pass, num_students_fail");
        println!("    pass_percentage, fail_percentage, average_mark");
        println!("    highest_mark/students, lowest_mark/students");
        println!("    grade_distribution, marks_distribution");
        println!("  overview: array          - passPercentage/failPercentage per subject");
        println!("  fail_counts: object      - '{{n}}_lab_fails' / '{{n}}_subject_fails'");
        println!("  fail_bucket_limit: number - Highest n with its own key");
        println!("  failure_profile: object  - Uncapped fail counts (labs, subjects)");
        println!("  overall: object          - totalPass, totalFail");
        println!("  generated_at: string     - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Exam Stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Pass/fail rates, grade distributions and mark histograms for exam records.");
}

//! Plain-text rendering of an analysis report.
//!
//! Display rounding happens here only: percentages to 2 decimals, grade
//! shares to 1 decimal. The engine's values are never re-derived.

use super::json::{ensure_parent_dir, validate_path};
use crate::parser::schema::{AnalysisReport, StudentMark, SubjectStats};
use crate::utils::error::OutputError;
use log::info;
use std::path::Path;

const RULE_WIDTH: usize = 80;

/// Render a human-readable summary of a report
///
/// **Public** - used by `--summary` and `write_summary`
pub fn render_text_summary(report: &AnalysisReport) -> String {
    let mut lines: Vec<String> = Vec::new();
    let rule = "=".repeat(RULE_WIDTH);

    lines.push(rule.clone());
    lines.push("STUDENT ANALYSIS REPORT".to_string());
    lines.push(rule.clone());
    lines.push(format!("Source:   {}", report.source));
    lines.push(format!("Subjects: {}", report.subjects.len()));

    for stats in &report.subject_stats {
        render_subject(&mut lines, stats);
    }

    lines.push(String::new());
    lines.push("Overall Performance".to_string());
    lines.push(format!(
        "  Total Pass (All Subjects):          {} students",
        report.overall.total_pass
    ));
    lines.push(format!(
        "  Total Fail (One or More Subjects):  {} students",
        report.overall.total_fail
    ));

    if !report.overview.is_empty() {
        lines.push(String::new());
        lines.push("Subject-wise Performance".to_string());
        for summary in &report.overview {
            lines.push(format!(
                "  {:<30} pass {:>6.2}%  fail {:>6.2}%",
                summary.subject, summary.pass_percentage, summary.fail_percentage
            ));
        }
    }

    render_fail_counts(&mut lines, report);

    lines.push(String::new());
    lines.push(format!("Generated on: {}", report.generated_at));
    lines.push(rule);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_subject(lines: &mut Vec<String>, stats: &SubjectStats) {
    lines.push(String::new());
    lines.push(format!("Subject Analysis: {}", stats.subject_name));
    lines.push(format!("  Total Students: {}", stats.total_students));
    lines.push(format!("  Average Mark:   {:.2}", stats.average_mark));
    lines.push(format!(
        "  Pass Rate:      {:.2}% ({})",
        stats.pass_percentage, stats.pass_count
    ));
    lines.push(format!(
        "  Fail Rate:      {:.2}% ({})",
        stats.fail_percentage, stats.fail_count
    ));

    render_students(lines, "Highest", stats.highest_mark, &stats.highest_students);
    render_students(lines, "Lowest", stats.lowest_mark, &stats.lowest_students);

    lines.push("  Grade Distribution:".to_string());
    for entry in &stats.grade_distribution {
        let share = entry.count as f64 / stats.total_students as f64 * 100.0;
        lines.push(format!(
            "    {:<3} {} students ({:.1}%)",
            entry.grade.as_str(),
            entry.count,
            share
        ));
    }

    lines.push("  Marks Distribution:".to_string());
    for range in &stats.marks_distribution {
        lines.push(format!("    {:<7} {}", range.range, range.count));
    }
}

fn render_students(lines: &mut Vec<String>, label: &str, mark: f64, students: &[StudentMark]) {
    lines.push(format!(
        "  {} Mark: {} ({} students)",
        label,
        mark,
        students.len()
    ));
    for student in students {
        lines.push(format!("    {} - grade {}", student.roll_no, student.grade));
    }
}

/// Lab buckets then subject buckets, each in ascending fail count
fn render_fail_counts(lines: &mut Vec<String>, report: &AnalysisReport) {
    let limit = report.fail_bucket_limit;
    let profile = &report.failure_profile;
    let beyond = profile.beyond(limit);

    let mut buckets: Vec<String> = Vec::new();
    if limit > 0 {
        for (n, students) in profile.labs.range(1..=limit) {
            let key = format!("{}_lab_fails", n);
            buckets.push(format!("  {:<20} {}", key, students.join(", ")));
        }
        for (n, students) in profile.subjects.range(1..=limit) {
            let key = format!("{}_subject_fails", n);
            buckets.push(format!("  {:<20} {}", key, students.join(", ")));
        }
    }

    if buckets.is_empty() && beyond.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.push("Fail Counts".to_string());
    lines.extend(buckets);
    if !beyond.is_empty() {
        lines.push(format!(
            "  more than {} fails:  {}",
            limit,
            beyond.join(", ")
        ));
    }
}

/// Write the text summary next to (or instead of) the JSON report
pub fn write_summary(
    report: &AnalysisReport,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing summary to: {}", output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    std::fs::write(output_path, render_text_summary(report)).map_err(OutputError::WriteFailed)
}

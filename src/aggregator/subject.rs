//! Per-subject statistics: pass/fail, mean, extremes, distributions.
//!
//! Pass is exact `PASS`; every other status counts toward fail here,
//! including values that are neither PASS nor FAIL.

use super::distribution::{bucket_for, calculate_grade_distribution, calculate_marks_distribution};
use crate::parser::record::Record;
use crate::parser::schema::{StudentMark, SubjectStats};
use crate::parser::table::RecordTable;
use crate::utils::config::{MAX_MARK, MIN_MARK};
use crate::utils::error::AnalysisError;
use log::debug;

/// Calculate the full breakdown for one subject
///
/// **Public** - main entry point for subject analysis
///
/// # Arguments
/// * `table` - Uploaded records
/// * `subject` - Exact subject name to filter on
///
/// # Errors
/// * `AnalysisError::Validation` - empty table or blank subject name
/// * `AnalysisError::NotFound` - no record for this subject
/// * `AnalysisError::InvalidData` - a mark is missing, non-numeric or out of
///   range, or a grade is missing or unknown
pub fn calculate_subject_stats(
    table: &RecordTable,
    subject: &str,
) -> Result<SubjectStats, AnalysisError> {
    super::ensure_not_empty(table)?;

    if subject.trim().is_empty() {
        return Err(AnalysisError::Validation(
            "Subject name is required".to_string(),
        ));
    }

    let rows: Vec<&Record> = table.subject_records(subject).collect();
    if rows.is_empty() {
        return Err(AnalysisError::NotFound(format!(
            "no data for subject '{}'",
            subject
        )));
    }

    debug!("Calculating stats for '{}' over {} records", subject, rows.len());

    let marks = rows
        .iter()
        .map(|r| checked_mark(r))
        .collect::<Result<Vec<f64>, _>>()?;
    let grades = rows
        .iter()
        .map(|r| r.grade())
        .collect::<Result<Vec<_>, _>>()?;

    let total_students = rows.len();
    let pass_count = rows.iter().filter(|r| r.status.is_pass()).count();
    let fail_count = total_students - pass_count;

    let sum: f64 = marks.iter().sum();
    let average_mark = round2(sum / total_students as f64);

    let highest_mark = marks.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lowest_mark = marks.iter().copied().fold(f64::INFINITY, f64::min);

    let students_at = |target: f64| -> Vec<StudentMark> {
        rows.iter()
            .zip(marks.iter().zip(grades.iter()))
            .filter(|(_, (mark, _))| **mark == target)
            .map(|(r, (mark, grade))| StudentMark {
                roll_no: r.roll_no.clone(),
                marks: *mark,
                grade: *grade,
            })
            .collect()
    };

    Ok(SubjectStats {
        subject_name: subject.to_string(),
        total_students,
        pass_count,
        fail_count,
        pass_percentage: percentage(pass_count, total_students),
        fail_percentage: percentage(fail_count, total_students),
        average_mark,
        highest_mark,
        lowest_mark,
        highest_students: students_at(highest_mark),
        lowest_students: students_at(lowest_mark),
        grade_distribution: calculate_grade_distribution(&grades),
        marks_distribution: calculate_marks_distribution(&marks),
    })
}

/// Calculate stats for every subject in first-appearance order
///
/// **Public** - used by the full report
pub fn calculate_all_subject_stats(
    table: &RecordTable,
) -> Result<Vec<SubjectStats>, AnalysisError> {
    super::ensure_not_empty(table)?;

    table
        .subjects()
        .into_iter()
        .map(|subject| calculate_subject_stats(table, subject))
        .collect()
}

/// Mark that is present and falls into one of the reporting ranges
///
/// **Private** - internal validation
fn checked_mark(record: &Record) -> Result<f64, AnalysisError> {
    let mark = record.mark()?;
    if bucket_for(mark).is_none() {
        return Err(AnalysisError::InvalidData(format!(
            "Mark {} for student {} is outside {}..={}",
            mark, record.roll_no, MIN_MARK, MAX_MARK
        )));
    }
    Ok(mark)
}

/// `count / group_size * 100`; group size is never zero for a found subject
pub(crate) fn percentage(count: usize, group_size: usize) -> f64 {
    (count as f64 / group_size as f64) * 100.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//! Output JSON schema definitions for analysis results.
//!
//! Field names follow the JSON contract the chart and PDF front end
//! already consumes. Schema is versioned to allow future evolution.

use super::record::Grade;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full breakdown for one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectStats {
    pub subject_name: String,
    pub total_students: usize,

    #[serde(rename = "num_students_pass")]
    pub pass_count: usize,

    /// Every row that is not exactly PASS
    #[serde(rename = "num_students_fail")]
    pub fail_count: usize,

    pub pass_percentage: f64,
    pub fail_percentage: f64,

    /// Mean mark, rounded to 2 decimals
    pub average_mark: f64,

    pub highest_mark: f64,
    pub lowest_mark: f64,

    /// All students tied on the highest mark, in table order
    pub highest_students: Vec<StudentMark>,

    /// All students tied on the lowest mark, in table order
    pub lowest_students: Vec<StudentMark>,

    /// Present grades only, best grade first
    pub grade_distribution: Vec<GradeCount>,

    /// All mark ranges, highest range first
    pub marks_distribution: Vec<MarkRangeCount>,
}

/// A student projected for extreme-mark reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentMark {
    pub roll_no: String,
    pub marks: f64,
    pub grade: Grade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCount {
    pub grade: Grade,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkRangeCount {
    /// Display label, e.g. "91-100"
    pub range: String,
    pub count: usize,
}

/// Pass/fail shares for one subject in the overview chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectSummary {
    pub subject: String,
    pub pass_percentage: f64,
    pub fail_percentage: f64,
}

/// Students grouped by how many labs / theory subjects they failed.
///
/// Keys are exact fail counts with no upper bound. Students with zero
/// fails in a category do not appear in that category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FailureProfile {
    pub labs: BTreeMap<usize, Vec<String>>,
    pub subjects: BTreeMap<usize, Vec<String>>,
}

/// Student-level outcome across all subjects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallOutcome {
    /// Students whose every row is PASS
    pub total_pass: usize,

    /// Distinct students minus `total_pass`
    pub total_fail: usize,
}

/// Top-level report written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Input the report was computed from
    pub source: String,

    /// Distinct subjects in first-appearance order
    pub subjects: Vec<String>,

    pub subject_stats: Vec<SubjectStats>,

    pub overview: Vec<SubjectSummary>,

    /// Keyed fail-count view ("1_lab_fails", ...), capped for display
    pub fail_counts: BTreeMap<String, Vec<String>>,

    /// Highest fail count with its own key in `fail_counts`
    pub fail_bucket_limit: usize,

    /// Uncapped fail counts per student
    pub failure_profile: FailureProfile,

    pub overall: OverallOutcome,

    /// Timestamp when report was generated
    pub generated_at: String,
}

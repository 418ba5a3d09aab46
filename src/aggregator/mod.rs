//! Aggregation of record tables into descriptive statistics.
//!
//! This module turns an uploaded record table into:
//! - Per-subject breakdowns (pass/fail, mean, extremes, distributions)
//! - A pass/fail overview across subjects
//! - Per-student lab and theory fail counts
//! - Student-level overall pass/fail
//!
//! All aggregators are pure functions over a shared `&RecordTable`.

pub mod cross_subject;
pub mod distribution;
pub mod failures;
pub mod overall;
pub mod report;
pub mod subject;

// Re-export main functions
pub use cross_subject::calculate_subject_overview;
pub use distribution::{bucket_for, MarkRange, MARK_RANGES};
pub use failures::calculate_failure_profile;
pub use overall::classify_overall_outcome;
pub use report::build_report;
pub use subject::{calculate_all_subject_stats, calculate_subject_stats};

use crate::parser::table::RecordTable;
use crate::utils::error::AnalysisError;

fn ensure_not_empty(table: &RecordTable) -> Result<(), AnalysisError> {
    if table.is_empty() {
        return Err(AnalysisError::Validation(
            "No data provided. Please upload a file first.".to_string(),
        ));
    }
    Ok(())
}

//! Student-level pass/fail across all subjects.

use crate::parser::schema::OverallOutcome;
use crate::parser::table::RecordTable;
use crate::utils::error::AnalysisError;
use log::debug;
use std::collections::HashMap;

/// Count students who passed every subject versus failed at least one
///
/// **Public** - main entry point for the overall classifier
///
/// A student passes overall only if every one of their rows is exactly
/// PASS. This is independent of the subject-level pass rates.
///
/// # Errors
/// * `AnalysisError::Validation` - empty table
pub fn classify_overall_outcome(table: &RecordTable) -> Result<OverallOutcome, AnalysisError> {
    super::ensure_not_empty(table)?;

    let mut all_passed: HashMap<&str, bool> = HashMap::new();
    for record in table.iter() {
        let passed = all_passed.entry(record.roll_no.as_str()).or_insert(true);
        *passed &= record.status.is_pass();
    }

    let total_pass = all_passed.values().filter(|passed| **passed).count();
    let outcome = OverallOutcome {
        total_pass,
        total_fail: all_passed.len() - total_pass,
    };

    debug!(
        "Overall outcome over {} students: {} pass, {} fail",
        all_passed.len(),
        outcome.total_pass,
        outcome.total_fail
    );

    Ok(outcome)
}

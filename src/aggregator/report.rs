//! Assemble all aggregator outputs into one versioned report.

use super::{
    calculate_all_subject_stats, calculate_failure_profile, calculate_subject_overview,
    calculate_subject_stats, classify_overall_outcome,
};
use crate::parser::schema::AnalysisReport;
use crate::parser::table::RecordTable;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::AnalysisError;
use log::debug;

/// Build a report from a record table
///
/// **Public** - used by the analyze command
///
/// # Arguments
/// * `table` - Uploaded records
/// * `source` - Where the records came from (recorded in the report)
/// * `subject` - Single subject to break down, or every subject if None
/// * `fail_bucket_limit` - Highest fail count given its own keyed bucket
///
/// # Errors
/// Any aggregator error; the report is never partially built.
pub fn build_report(
    table: &RecordTable,
    source: &str,
    subject: Option<&str>,
    fail_bucket_limit: usize,
) -> Result<AnalysisReport, AnalysisError> {
    let subject_stats = match subject {
        Some(name) => vec![calculate_subject_stats(table, name)?],
        None => calculate_all_subject_stats(table)?,
    };
    let overview = calculate_subject_overview(table)?;
    let failure_profile = calculate_failure_profile(table)?;
    let overall = classify_overall_outcome(table)?;

    debug!(
        "Report built: {} subject breakdowns, {} of {} students failed",
        subject_stats.len(),
        overall.total_fail,
        overall.total_pass + overall.total_fail
    );

    Ok(AnalysisReport {
        version: SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        subjects: table.subjects().into_iter().map(str::to_string).collect(),
        subject_stats,
        overview,
        fail_counts: failure_profile.buckets(fail_bucket_limit),
        fail_bucket_limit,
        failure_profile,
        overall,
        generated_at: chrono::Utc::now().to_rfc3339(),
    })
}

//! Pass/fail shares for every subject, for the overview chart.

use super::subject::percentage;
use crate::parser::schema::SubjectSummary;
use crate::parser::table::RecordTable;
use crate::utils::error::AnalysisError;
use log::debug;
use std::collections::HashMap;

/// Calculate pass/fail percentages per subject
///
/// **Public** - main entry point for the subject overview
///
/// Subjects are listed in first-appearance order. As with subject stats,
/// any status other than exactly PASS counts toward fail.
///
/// # Errors
/// * `AnalysisError::Validation` - empty table
pub fn calculate_subject_overview(
    table: &RecordTable,
) -> Result<Vec<SubjectSummary>, AnalysisError> {
    super::ensure_not_empty(table)?;

    // (total, pass) per subject in a single pass
    let mut tallies: HashMap<&str, (usize, usize)> = HashMap::new();
    for record in table.iter() {
        let tally = tallies.entry(record.subject_name.as_str()).or_insert((0, 0));
        tally.0 += 1;
        if record.status.is_pass() {
            tally.1 += 1;
        }
    }

    let overview: Vec<SubjectSummary> = table
        .subjects()
        .into_iter()
        .map(|subject| {
            // Subjects come from existing rows, so total is never zero
            let (total, pass) = tallies.get(subject).copied().unwrap_or((0, 0));
            SubjectSummary {
                subject: subject.to_string(),
                pass_percentage: percentage(pass, total),
                fail_percentage: percentage(total - pass, total),
            }
        })
        .collect();

    debug!("Calculated overview for {} subjects", overview.len());

    Ok(overview)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::record::{Record, Status};

    fn row(roll: &str, subject: &str, status: Status) -> Record {
        Record {
            roll_no: roll.to_string(),
            subject_name: subject.to_string(),
            status,
            total: Some(50.0),
            grade: Some("C".to_string()),
        }
    }

    #[test]
    fn test_overview_order_and_shares() {
        let table = RecordTable::new(vec![
            row("A1", "Physics", Status::Pass),
            row("A1", "Math", Status::Fail),
            row("A2", "Physics", Status::Fail),
            row("A2", "Math", Status::Fail),
            row("A3", "Physics", Status::Other("RA".to_string())),
            row("A3", "Math", Status::Pass),
        ]);

        let overview = calculate_subject_overview(&table).unwrap();

        assert_eq!(overview.len(), 2);
        assert_eq!(overview[0].subject, "Physics");
        assert!((overview[0].pass_percentage - 100.0 / 3.0).abs() < 1e-9);
        assert!((overview[0].fail_percentage - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(overview[1].subject, "Math");
    }

    #[test]
    fn test_overview_empty_table() {
        assert!(matches!(
            calculate_subject_overview(&RecordTable::default()),
            Err(AnalysisError::Validation(_))
        ));
    }
}

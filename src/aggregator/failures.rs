//! Per-student failure counts, split into labs and theory subjects.
//!
//! Only rows whose status is exactly FAIL count here. Other non-PASS
//! values are ignored, unlike in the subject breakdown.

use crate::parser::schema::FailureProfile;
use crate::parser::table::RecordTable;
use crate::utils::error::AnalysisError;
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// Fail tallies for one student
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FailTally {
    labs: usize,
    subjects: usize,
}

/// Group students by how many labs and theory subjects they failed
///
/// **Public** - main entry point for failure profiling
///
/// Roll numbers inside each count are in first-appearance order.
///
/// # Errors
/// * `AnalysisError::Validation` - empty table
pub fn calculate_failure_profile(table: &RecordTable) -> Result<FailureProfile, AnalysisError> {
    super::ensure_not_empty(table)?;

    let mut order: Vec<&str> = Vec::new();
    let mut tallies: HashMap<&str, FailTally> = HashMap::new();

    for record in table.iter().filter(|r| r.status.is_fail()) {
        let roll_no = record.roll_no.as_str();
        let tally = tallies.entry(roll_no).or_insert_with(|| {
            order.push(roll_no);
            FailTally::default()
        });
        if record.is_lab() {
            tally.labs += 1;
        } else {
            tally.subjects += 1;
        }
    }

    let mut profile = FailureProfile::default();
    for roll_no in order {
        let tally = tallies[roll_no];
        if tally.labs > 0 {
            profile
                .labs
                .entry(tally.labs)
                .or_default()
                .push(roll_no.to_string());
        }
        if tally.subjects > 0 {
            profile
                .subjects
                .entry(tally.subjects)
                .or_default()
                .push(roll_no.to_string());
        }
    }

    debug!(
        "Failure profile: {} lab buckets, {} subject buckets",
        profile.labs.len(),
        profile.subjects.len()
    );

    Ok(profile)
}

impl FailureProfile {
    /// Keyed view for charts: `"{n}_lab_fails"` and `"{n}_subject_fails"`
    /// for `n` in `1..=max`. Empty buckets and counts above `max` are left
    /// out; see [`FailureProfile::beyond`] for the latter.
    pub fn buckets(&self, max: usize) -> BTreeMap<String, Vec<String>> {
        if max == 0 {
            return BTreeMap::new();
        }

        let labs = self
            .labs
            .range(1..=max)
            .map(|(n, rolls)| (format!("{}_lab_fails", n), rolls.clone()));
        let subjects = self
            .subjects
            .range(1..=max)
            .map(|(n, rolls)| (format!("{}_subject_fails", n), rolls.clone()));

        labs.chain(subjects).collect()
    }

    /// Students with more than `max` fails in either category
    pub fn beyond(&self, max: usize) -> Vec<String> {
        let mut students: Vec<String> = Vec::new();
        let over = self
            .labs
            .range(max.saturating_add(1)..)
            .chain(self.subjects.range(max.saturating_add(1)..))
            .flat_map(|(_, rolls)| rolls.iter());
        for roll_no in over {
            if !students.contains(roll_no) {
                students.push(roll_no.clone());
            }
        }
        students
    }
}

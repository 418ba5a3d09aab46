//! Mark-range bucketing and grade counting.
//!
//! Bucket edges are fixed: upper bounds are exclusive except for the top
//! range, which includes 100. Ranges are listed highest first.

use crate::parser::record::Grade;
use crate::parser::schema::{GradeCount, MarkRangeCount};
use std::collections::HashMap;

/// One fixed mark range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkRange {
    pub label: &'static str,
    pub lower: f64,
    pub upper: f64,
    pub upper_inclusive: bool,
}

impl MarkRange {
    const fn new(label: &'static str, lower: f64, upper: f64, upper_inclusive: bool) -> Self {
        Self {
            label,
            lower,
            upper,
            upper_inclusive,
        }
    }

    pub fn contains(&self, mark: f64) -> bool {
        mark >= self.lower
            && if self.upper_inclusive {
                mark <= self.upper
            } else {
                mark < self.upper
            }
    }
}

/// Reporting ranges, highest first
pub const MARK_RANGES: [MarkRange; 7] = [
    MarkRange::new("91-100", 91.0, 100.0, true),
    MarkRange::new("81-90", 81.0, 91.0, false),
    MarkRange::new("71-80", 71.0, 81.0, false),
    MarkRange::new("61-70", 61.0, 71.0, false),
    MarkRange::new("51-60", 51.0, 61.0, false),
    MarkRange::new("41-50", 41.0, 51.0, false),
    MarkRange::new("0-40", 0.0, 41.0, false),
];

/// Index into `MARK_RANGES` for a mark, None if outside 0..=100
pub fn bucket_for(mark: f64) -> Option<usize> {
    MARK_RANGES.iter().position(|range| range.contains(mark))
}

/// Count marks per range. Every range is reported, empty or not.
///
/// Marks outside 0..=100 are not counted; callers validate beforehand.
pub fn calculate_marks_distribution(marks: &[f64]) -> Vec<MarkRangeCount> {
    let mut counts = [0usize; MARK_RANGES.len()];
    for idx in marks.iter().filter_map(|&m| bucket_for(m)) {
        counts[idx] += 1;
    }

    MARK_RANGES
        .iter()
        .zip(counts)
        .map(|(range, count)| MarkRangeCount {
            range: range.label.to_string(),
            count,
        })
        .collect()
}

/// Count grades, best grade first. Only grades that occur are listed.
pub fn calculate_grade_distribution(grades: &[Grade]) -> Vec<GradeCount> {
    let mut counts: HashMap<Grade, usize> = HashMap::new();
    for grade in grades {
        *counts.entry(*grade).or_insert(0) += 1;
    }

    let mut distribution: Vec<GradeCount> = counts
        .into_iter()
        .map(|(grade, count)| GradeCount { grade, count })
        .collect();
    distribution.sort_by(|a, b| b.grade.rank().cmp(&a.grade.rank()));
    distribution
}

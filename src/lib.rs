//! Exam Stats
//!
//! Descriptive statistics for student examination records: pass/fail
//! rates, grade distributions, mark-range histograms and top/bottom
//! performers, per subject and in aggregate.
//!
//! ## Getting Started
//!
//! ```ignore
//! use exam_stats::aggregator::calculate_subject_stats;
//! use exam_stats::parser::read_table;
//!
//! let table = read_table("records.json")?;
//! let stats = calculate_subject_stats(&table, "Mathematics")?;
//! println!("{} pass {:.2}%", stats.subject_name, stats.pass_percentage);
//! ```
//!
//! The `exam-stats` CLI wraps the same engine:
//!
//! ```bash
//! exam-stats analyze --input records.json --summary
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

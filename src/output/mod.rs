//! Output writers for analysis reports.
//!
//! This module handles writing data to disk in various formats:
//! - JSON reports (consumed by the chart and PDF front end)
//! - Text summaries

pub mod json;
pub mod summary;

// Re-export main functions
pub use json::{read_report, validate_path, write_report};
pub use summary::{render_text_summary, write_summary};

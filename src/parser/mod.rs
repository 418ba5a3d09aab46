//! Record table decoding and schema definitions.
//!
//! This module handles:
//! - Decoding uploaded row payloads into typed records
//! - Status and grade vocabularies
//! - Defining output schema

pub mod record;
pub mod schema;
pub mod table;

// Re-export main types
pub use record::{Grade, Record, Status};
pub use schema::{
    AnalysisReport, FailureProfile, GradeCount, MarkRangeCount, OverallOutcome, StudentMark, SubjectStats,
    SubjectSummary,
};
pub use table::{parse_table, read_table, RecordTable};

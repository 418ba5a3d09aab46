//! Configuration and constants for the engine and CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Header names for each record field. The first entry is the spreadsheet
// header, the rest are accepted aliases from clients that re-key rows.
pub const ROLL_NO_FIELD_NAMES: &[&str] = &["Roll No", "roll_no", "rollNo"];
pub const SUBJECT_FIELD_NAMES: &[&str] = &["Sub Name", "subject_name", "subjectName"];
pub const STATUS_FIELD_NAMES: &[&str] = &["Status", "status"];
pub const TOTAL_FIELD_NAMES: &[&str] = &["Total", "total"];
pub const GRADE_FIELD_NAMES: &[&str] = &["Grade", "grade"];

/// Key of the wrapper object some clients send instead of a bare row array
pub const DATA_WRAPPER_FIELD: &str = "data";

/// Substring (case-insensitive) that marks a subject as a laboratory course
pub const LAB_MARKER: &str = "lab";

/// Marks outside this range cannot be bucketed
pub const MIN_MARK: f64 = 0.0;
pub const MAX_MARK: f64 = 100.0;

/// Highest fail count shown as its own bucket in the keyed fail-count view
pub const DEFAULT_FAIL_BUCKET_LIMIT: usize = 5;
pub const MAX_FAIL_BUCKET_LIMIT: usize = 50;

//! Record table and the decoder for uploaded row payloads.
//!
//! The upload step hands us a JSON array of row objects keyed by the
//! spreadsheet's first header row. Structural problems (not an array, a
//! row without roll number or subject) are rejected here; mark and grade
//! problems are kept on the record for the aggregators to report.

use super::record::{Record, Status};
use crate::utils::config::{
    DATA_WRAPPER_FIELD, GRADE_FIELD_NAMES, ROLL_NO_FIELD_NAMES, STATUS_FIELD_NAMES,
    SUBJECT_FIELD_NAMES, TOTAL_FIELD_NAMES,
};
use crate::utils::error::ParseError;
use log::{debug, info, warn};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Ordered, read-only collection of records for one analysis session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    records: Vec<Record>,
}

impl RecordTable {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Rows whose subject name matches exactly
    pub fn subject_records<'a>(&'a self, subject: &'a str) -> impl Iterator<Item = &'a Record> {
        self.records.iter().filter(move |r| r.subject_name == subject)
    }

    /// Distinct subject names in first-appearance order
    pub fn subjects(&self) -> Vec<&str> {
        first_appearance(self.records.iter().map(|r| r.subject_name.as_str()))
    }

    /// Distinct roll numbers in first-appearance order
    pub fn students(&self) -> Vec<&str> {
        first_appearance(self.records.iter().map(|r| r.roll_no.as_str()))
    }
}

fn first_appearance<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

/// Decode a row payload into a record table
///
/// **Public** - main entry point for decoding
///
/// # Arguments
/// * `raw` - JSON array of row objects, or `{ "data": [...] }`
///
/// # Errors
/// * `ParseError::InvalidFormat` - payload is not a row array, a row is not
///   an object, or a row lacks its roll number or subject name
pub fn parse_table(raw: &Value) -> Result<RecordTable, ParseError> {
    let rows = match raw {
        Value::Array(rows) => rows,
        Value::Object(obj) => obj
            .get(DATA_WRAPPER_FIELD)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ParseError::InvalidFormat(format!(
                    "expected an array of rows or an object with a '{}' array",
                    DATA_WRAPPER_FIELD
                ))
            })?,
        other => {
            return Err(ParseError::InvalidFormat(format!(
                "expected an array of rows, found {}",
                json_kind(other)
            )))
        }
    };

    let records = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| parse_row(idx + 1, row))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Decoded {} records", records.len());

    Ok(RecordTable::new(records))
}

/// Read a JSON row payload from disk and decode it
pub fn read_table(input_path: impl AsRef<Path>) -> Result<RecordTable, ParseError> {
    let input_path = input_path.as_ref();

    info!("Reading records from: {}", input_path.display());

    let file = File::open(input_path)?;
    let raw: Value = serde_json::from_reader(BufReader::new(file))?;

    parse_table(&raw)
}

/// Decode one row object
///
/// **Private** - `row_no` is 1-based for error messages
fn parse_row(row_no: usize, row: &Value) -> Result<Record, ParseError> {
    let obj = row.as_object().ok_or_else(|| {
        ParseError::InvalidFormat(format!("row {} is {}, not an object", row_no, json_kind(row)))
    })?;

    let roll_no = required_text(obj, ROLL_NO_FIELD_NAMES, row_no)?;
    let subject_name = required_text(obj, SUBJECT_FIELD_NAMES, row_no)?;

    let status = match lookup(obj, STATUS_FIELD_NAMES).and_then(cell_text) {
        Some(raw) => Status::from_raw(&raw),
        None => Status::Other(String::new()),
    };

    let total = lookup(obj, TOTAL_FIELD_NAMES).and_then(parse_mark);
    if total.is_none() {
        warn!("Row {} ({}): mark is missing or not numeric", row_no, roll_no);
    }

    let grade = lookup(obj, GRADE_FIELD_NAMES)
        .and_then(cell_text)
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty());

    Ok(Record {
        roll_no,
        subject_name,
        status,
        total,
        grade,
    })
}

/// First present, non-null cell among the accepted header names
fn lookup<'a>(obj: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .filter_map(|name| obj.get(*name))
        .find(|v| !v.is_null())
}

fn required_text(
    obj: &Map<String, Value>,
    names: &[&str],
    row_no: usize,
) -> Result<String, ParseError> {
    lookup(obj, names)
        .and_then(cell_text)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| {
            ParseError::InvalidFormat(format!("row {} is missing '{}'", row_no, names[0]))
        })
}

/// Text form of a scalar cell; numbers are stringified
fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse a mark cell. Accepts JSON numbers and numeric strings.
///
/// **Public** - exposed for tests
pub fn parse_mark(value: &Value) -> Option<f64> {
    let mark = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    mark.is_finite().then_some(mark)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_mark_variants() {
        assert_eq!(parse_mark(&json!(91)), Some(91.0));
        assert_eq!(parse_mark(&json!(" 75.5 ")), Some(75.5));
        assert_eq!(parse_mark(&json!("AB")), None);
        assert_eq!(parse_mark(&json!("NaN")), None);
        assert_eq!(parse_mark(&json!("inf")), None);
        assert_eq!(parse_mark(&json!(null)), None);
    }

    #[test]
    fn test_subjects_first_appearance() {
        let raw = json!([
            {"Roll No": "A1", "Sub Name": "Physics", "Status": "PASS", "Total": 70, "Grade": "A"},
            {"Roll No": "A1", "Sub Name": "Math", "Status": "PASS", "Total": 70, "Grade": "A"},
            {"Roll No": "A2", "Sub Name": "Physics", "Status": "PASS", "Total": 70, "Grade": "A"}
        ]);
        let table = parse_table(&raw).unwrap();
        assert_eq!(table.subjects(), vec!["Physics", "Math"]);
        assert_eq!(table.students(), vec!["A1", "A2"]);
        assert_eq!(table.subject_records("Physics").count(), 2);
    }

    #[test]
    fn test_missing_status_is_other() {
        let raw = json!([{"Roll No": "A1", "Sub Name": "Math", "Total": 40}]);
        let table = parse_table(&raw).unwrap();
        let record = &table.records()[0];
        assert_eq!(record.status, Status::Other(String::new()));
        assert_eq!(record.grade, None);
    }

    #[test]
    fn test_numeric_roll_no_is_stringified() {
        let raw = json!([{"Roll No": 1042, "Sub Name": "Math", "Status": "PASS", "Total": 40, "Grade": "C"}]);
        let table = parse_table(&raw).unwrap();
        assert_eq!(table.records()[0].roll_no, "1042");
    }

    #[test]
    fn test_row_without_subject_rejected() {
        let raw = json!([
            {"Roll No": "A1", "Sub Name": "Math", "Status": "PASS", "Total": 40, "Grade": "C"},
            {"Roll No": "A2", "Sub Name": "  ", "Status": "PASS", "Total": 40, "Grade": "C"}
        ]);
        let err = parse_table(&raw).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_identifier_cells_kept_verbatim() {
        let raw = json!([
            {"Roll No": "A1", "Sub Name": "Math", "Status": "PASS", "Total": 70, "Grade": "A"},
            {"Roll No": " A1", "Sub Name": "Math ", "Status": "FAIL", "Total": 20, "Grade": "F"}
        ]);
        let table = parse_table(&raw).unwrap();
        assert_eq!(table.subjects(), vec!["Math", "Math "]);
        assert_eq!(table.students(), vec!["A1", " A1"]);
        assert_eq!(table.subject_records("Math").count(), 1);
    }
}

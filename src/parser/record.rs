//! Record types for one student-subject mark entry.
//!
//! A `Record` keeps mark and grade as decoded from the upload so that
//! contract violations surface as `AnalysisError::InvalidData` from the
//! aggregator that actually needs the field.

use crate::utils::config::LAB_MARKER;
use crate::utils::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result status of a record as provided by the upload
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pass,
    Fail,
    /// Any other cell value, kept verbatim. Never counts as a pass.
    Other(String),
}

impl Status {
    /// Classify a raw cell value. Matching is exact and case-sensitive.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "PASS" => Self::Pass,
            "FAIL" => Self::Fail,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("PASS"),
            Self::Fail => f.write_str("FAIL"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// Letter grade from the closed set O, A+, A, B+, B, C, F
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    F,
    C,
    B,
    BPlus,
    A,
    APlus,
    O,
}

impl Grade {
    /// All grades, best first
    pub const ALL: [Grade; 7] = [
        Grade::O,
        Grade::APlus,
        Grade::A,
        Grade::BPlus,
        Grade::B,
        Grade::C,
        Grade::F,
    ];

    /// Fixed rank used to order grade distributions (O=7 .. F=1)
    pub fn rank(self) -> u8 {
        match self {
            Self::O => 7,
            Self::APlus => 6,
            Self::A => 5,
            Self::BPlus => 4,
            Self::B => 3,
            Self::C => 2,
            Self::F => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::O => "O",
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::C => "C",
            Self::F => "F",
        }
    }
}

impl std::str::FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| format!("unknown grade '{}'", s))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Grade {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Grade {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One row of the record table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub roll_no: String,
    pub subject_name: String,
    pub status: Status,

    /// None when the cell was absent, non-numeric or not finite
    pub total: Option<f64>,

    /// Raw grade text; None when absent or empty
    pub grade: Option<String>,
}

impl Record {
    /// Laboratory courses carry "lab" (any case) in their name
    pub fn is_lab(&self) -> bool {
        self.subject_name.to_lowercase().contains(LAB_MARKER)
    }

    /// Numeric mark, or `InvalidData` naming the student
    pub fn mark(&self) -> Result<f64, AnalysisError> {
        self.total.ok_or_else(|| {
            AnalysisError::InvalidData(format!(
                "Invalid mark value found for student {}",
                self.roll_no
            ))
        })
    }

    /// Letter grade, or `InvalidData` when missing or outside the grade set
    pub fn grade(&self) -> Result<Grade, AnalysisError> {
        let raw = self.grade.as_deref().ok_or_else(|| {
            AnalysisError::InvalidData(format!("Missing grade for student {}", self.roll_no))
        })?;

        raw.parse().map_err(|e| {
            AnalysisError::InvalidData(format!("{} for student {}", e, self.roll_no))
        })
    }
}

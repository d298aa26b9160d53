use serde::{Deserialize, Serialize};
use std::fmt;

/// Schema location used by `validate_input` when none is given.
pub const DEFAULT_SCHEMA_PATH: &str = "/output-schema.json";

/// One step of a location inside a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member name
    Key(String),
    /// Array position
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// A single violation reported by the schema validator.
///
/// `path` runs from the document root down to the offending value. An empty
/// path means the root itself (or, for a malformed submission, no location at
/// all).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    pub path: Vec<PathSegment>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, path: Vec<PathSegment>) -> Self {
        ValidationError {
            message: message.into(),
            path,
        }
    }

    /// An error that is not tied to any location in the document.
    pub fn unlocated(message: impl Into<String>) -> Self {
        Self::new(message, Vec::new())
    }
}

/// Outcome of checking one document against a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub issues: Vec<ValidationError>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        ValidationResult {
            is_valid: true,
            issues: Vec::new(),
        }
    }

    pub fn add_issue(&mut self, issue: ValidationError) {
        self.is_valid = false;
        self.issues.push(issue);
    }
}

impl FromIterator<ValidationError> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut result = ValidationResult::new();
        for issue in iter {
            result.add_issue(issue);
        }
        result
    }
}

/// Pass/fail verdict written to the results file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubmissionStatus {
    Validated,
    Invalid,
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStatus::Validated => f.write_str("VALIDATED"),
            SubmissionStatus::Invalid => f.write_str("INVALID"),
        }
    }
}

/// Result of the `validate_json_submission` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub status: SubmissionStatus,
    pub reasons: Vec<String>,
}

impl SubmissionResult {
    pub fn validated() -> Self {
        SubmissionResult {
            status: SubmissionStatus::Validated,
            reasons: Vec::new(),
        }
    }

    pub fn invalid(reasons: Vec<String>) -> Self {
        SubmissionResult {
            status: SubmissionStatus::Invalid,
            reasons,
        }
    }

    /// Wire form of the result, as read by downstream automation.
    pub fn to_record(&self) -> ResultsRecord {
        ResultsRecord {
            prediction_file_errors: self.reasons.join("\n"),
            prediction_file_status: self.status,
        }
    }
}

/// Exact JSON shape of the results file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsRecord {
    pub prediction_file_errors: String,
    pub prediction_file_status: SubmissionStatus,
}

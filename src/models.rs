use serde::{Deserialize, Serialize};

// Sentinel used whenever a summary value is missing from the page.
pub const NOT_AVAILABLE: &str = "N/A";

// Login credentials, held only for the duration of a login attempt.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// One row of the grade table, exactly as printed on the results page.
// Values are raw extracted text; nothing is parsed into numbers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GradeRecord {
    pub course: String,
    pub grade: String,
    pub mark: String,
    pub credit_hours: String,
    pub grade_point: String,
}

// Per-semester totals from the summary box. Fields the page does not
// provide carry the "N/A" sentinel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GpaSummary {
    pub grade_point: String,
    pub credit_hours: String,
    pub gpa: String,
}

impl Default for GpaSummary {
    fn default() -> Self {
        Self {
            grade_point: NOT_AVAILABLE.to_string(),
            credit_hours: NOT_AVAILABLE.to_string(),
            gpa: NOT_AVAILABLE.to_string(),
        }
    }
}

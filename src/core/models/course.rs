//! Course model

use serde::{Deserialize, Serialize};

use super::grade::{self, Grade};

/// Represents one enrolled unit of study within a semester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course code (e.g., "CS 2510")
    pub code: String,

    /// Course name (e.g., "Fundamentals of Computer Science 2")
    pub name: String,

    /// Credit hours (can be fractional; zero-credit courses are permitted)
    pub credits: f32,

    /// Letter grade, or `None` while the course is in progress.
    /// Stored as the empty string in the record format.
    #[serde(with = "grade::optional", default)]
    pub grade: Option<Grade>,

    /// Raw percentage score recorded at entry time.
    /// Never read by aggregation; the letter grade is authoritative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f32>,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl Course {
    /// Create a new, ungraded course
    ///
    /// # Arguments
    /// * `code` - Course code
    /// * `name` - Full course name
    /// * `credits` - Credit hours (can be fractional)
    #[must_use]
    pub const fn new(code: String, name: String, credits: f32) -> Self {
        Self {
            code,
            name,
            credits,
            grade: None,
            percentage: None,
            notes: String::new(),
        }
    }

    /// Create a graded course
    #[must_use]
    pub const fn graded(code: String, name: String, credits: f32, grade: Grade) -> Self {
        Self {
            code,
            name,
            credits,
            grade: Some(grade),
            percentage: None,
            notes: String::new(),
        }
    }

    /// Whether a result has been entered for this course
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        self.grade.is_some()
    }
}

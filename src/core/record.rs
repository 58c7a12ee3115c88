//! Academic record persistence
//!
//! Loads and saves the semester list as JSON. The on-disk shape matches the
//! original application's local-storage export (camelCase keys, ungraded
//! courses as empty-string grades, unknown fields ignored), so an exported
//! `smartGPAData_v3` file can be read directly.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::models::Semester;

/// Errors raised while reading or writing a record file
#[derive(Debug, Error)]
pub enum RecordError {
    /// Filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed or mismatched JSON
    #[error("Record parse error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// The persisted academic record: every semester plus the optional CGPA goal
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicRecord {
    /// All semesters, oldest first by convention
    #[serde(default)]
    pub semesters: Vec<Semester>,

    /// Target CGPA the student is working toward
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa_goal: Option<f32>,
}

impl AcademicRecord {
    /// The semester currently flagged as in progress, if any
    #[must_use]
    pub fn current_semester(&self) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.is_current)
    }

    /// Parse a record from a JSON string
    ///
    /// # Errors
    /// Returns [`RecordError::Serde`] when the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a record from a JSON file
    ///
    /// # Errors
    /// Returns [`RecordError::Io`] when the file cannot be read and
    /// [`RecordError::Serde`] when its contents don't parse.
    pub fn load(path: &Path) -> Result<Self, RecordError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Save the record to a JSON file, creating parent directories as needed
    ///
    /// # Errors
    /// Returns [`RecordError::Io`] on filesystem failure and
    /// [`RecordError::Serde`] if serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), RecordError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grade;

    #[test]
    fn parses_app_export_shape() {
        let json = r#"{
            "semesters": [
                {
                    "id": "sem_1",
                    "name": "Fall 2024",
                    "isCurrent": false,
                    "isCompleted": true,
                    "courses": [
                        {"id": "c1", "code": "CS 1800", "name": "Discrete", "credits": 4, "grade": "A", "notes": ""},
                        {"id": "c2", "code": "CS 1802", "name": "Seminar", "credits": 1, "grade": "", "notes": ""}
                    ],
                    "notes": ""
                }
            ],
            "theme": "dark",
            "gpaGoal": 3.5,
            "notificationsEnabled": true
        }"#;

        let record = AcademicRecord::from_json(json).expect("parse record");
        assert_eq!(record.semesters.len(), 1);
        assert_eq!(record.gpa_goal, Some(3.5));

        let semester = &record.semesters[0];
        assert!(semester.is_completed);
        assert_eq!(semester.courses[0].grade, Some(Grade::A));
        assert_eq!(semester.courses[1].grade, None);
    }

    #[test]
    fn current_semester_lookup() {
        let mut record = AcademicRecord::default();
        assert!(record.current_semester().is_none());

        record.semesters.push(Semester {
            is_current: false,
            ..Semester::new("Fall 2024".to_string())
        });
        record.semesters.push(Semester::new("Spring 2025".to_string()));

        let current = record.current_semester().expect("one current semester");
        assert_eq!(current.name, "Spring 2025");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(AcademicRecord::from_json("{not json").is_err());
    }
}

//! Semester model

use serde::{Deserialize, Serialize};

use super::Course;

/// An ordered collection of courses plus lifecycle flags.
///
/// At most one semester should be marked current; that invariant is
/// maintained by the surrounding application, not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Semester {
    /// Display name (e.g., "Fall 2025")
    pub name: String,

    /// Whether this is the in-progress semester
    #[serde(default)]
    pub is_current: bool,

    /// Whether this semester has been archived
    #[serde(default)]
    pub is_completed: bool,

    /// Courses enrolled this semester
    #[serde(default)]
    pub courses: Vec<Course>,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    /// Optional end date in ISO format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Semester {
    /// Create a new, current semester with no courses
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            is_current: true,
            is_completed: false,
            courses: Vec::new(),
            notes: String::new(),
            end_date: None,
        }
    }

    /// Courses that have a result entered
    pub fn graded_courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter().filter(|c| c.is_graded())
    }

    /// Whether at least one course has a result entered
    #[must_use]
    pub fn has_graded_courses(&self) -> bool {
        self.courses.iter().any(Course::is_graded)
    }

    /// Total credit hours across all courses, graded or not
    #[must_use]
    pub fn attempted_credits(&self) -> f32 {
        self.courses.iter().map(|c| c.credits).sum()
    }

    /// Credit hours across graded courses only
    #[must_use]
    pub fn graded_credits(&self) -> f32 {
        self.graded_courses().map(|c| c.credits).sum()
    }

    /// Derive the name of the semester that follows this one.
    ///
    /// `Fall Y` rolls over to `Spring Y+1`; `Spring Y` and `Summer Y`
    /// advance to `Fall Y`. Names that don't follow the `Term Year`
    /// convention get no suggestion.
    #[must_use]
    pub fn next_name(&self) -> Option<String> {
        let (term, year_str) = self.name.split_once(' ')?;
        let year: u32 = year_str.parse().ok()?;

        match term {
            "Fall" => Some(format!("Spring {}", year + 1)),
            "Spring" | "Summer" => Some(format!("Fall {year}")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grade;

    fn semester_with(courses: Vec<Course>) -> Semester {
        Semester {
            courses,
            ..Semester::new("Fall 2025".to_string())
        }
    }

    #[test]
    fn test_graded_filtering() {
        let sem = semester_with(vec![
            Course::graded("CS 1800".into(), "Discrete".into(), 4.0, Grade::A),
            Course::new("CS 1802".into(), "Seminar".into(), 1.0),
        ]);

        assert!(sem.has_graded_courses());
        assert_eq!(sem.graded_courses().count(), 1);
        assert!((sem.attempted_credits() - 5.0).abs() < f32::EPSILON);
        assert!((sem.graded_credits() - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_next_name_rollover() {
        assert_eq!(
            semester_with(vec![]).next_name().as_deref(),
            Some("Spring 2026")
        );

        let spring = Semester::new("Spring 2026".to_string());
        assert_eq!(spring.next_name().as_deref(), Some("Fall 2026"));

        let summer = Semester::new("Summer 2026".to_string());
        assert_eq!(summer.next_name().as_deref(), Some("Fall 2026"));
    }

    #[test]
    fn test_next_name_unconventional() {
        let sem = Semester::new("Semester One".to_string());
        assert_eq!(sem.next_name(), None);
    }
}

//! Weighted GPA and CGPA aggregation

use super::GradeEngine;
use crate::models::{Course, Semester};

/// Derived totals over a set of graded courses.
///
/// Ephemeral value object, computed fresh on every read and never cached.
/// `gpa` is `0` when `total_credits` is zero: the deliberate "no grades yet"
/// sentinel, distinct from "failed everything".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregateTotals {
    /// Sum of credits across graded courses
    pub total_credits: f32,
    /// Sum of `credits * grade_point` across graded courses
    pub total_quality_points: f32,
    /// `total_quality_points / total_credits`, or `0` with no credits
    pub gpa: f32,
}

impl AggregateTotals {
    /// Build totals from accumulated credits and quality points
    #[must_use]
    pub fn from_parts(total_credits: f32, total_quality_points: f32) -> Self {
        let gpa = if total_credits == 0.0 {
            0.0
        } else {
            total_quality_points / total_credits
        };
        Self {
            total_credits,
            total_quality_points,
            gpa,
        }
    }
}

impl GradeEngine {
    /// Weighted-average totals over the graded courses in a slice.
    ///
    /// Courses with no grade are excluded from both the numerator and the
    /// denominator; zero-credit graded courses contribute zero weight to
    /// each and so never move the average.
    #[must_use]
    pub fn course_totals(&self, courses: &[Course]) -> AggregateTotals {
        let mut total_credits = 0.0;
        let mut total_quality_points = 0.0;

        for course in courses {
            if let Some(grade) = course.grade {
                total_quality_points += self.grade_point(grade) * course.credits;
                total_credits += course.credits;
            }
        }

        AggregateTotals::from_parts(total_credits, total_quality_points)
    }

    /// Weighted-average GPA for one semester's courses.
    ///
    /// Returns `0` (never NaN) when no course is graded, or when every
    /// graded course carries zero credits.
    #[must_use]
    pub fn semester_gpa(&self, courses: &[Course]) -> f32 {
        self.course_totals(courses).gpa
    }

    /// Cumulative totals across every course of every semester.
    ///
    /// All semesters participate regardless of `is_current`/`is_completed`;
    /// any lifecycle filtering is the caller's responsibility.
    #[must_use]
    pub fn cumulative_cgpa(&self, semesters: &[Semester]) -> AggregateTotals {
        let mut total_credits = 0.0;
        let mut total_quality_points = 0.0;

        for semester in semesters {
            for course in semester.graded_courses() {
                if let Some(grade) = course.grade {
                    total_quality_points += self.grade_point(grade) * course.credits;
                    total_credits += course.credits;
                }
            }
        }

        AggregateTotals::from_parts(total_credits, total_quality_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grade;

    const TOLERANCE: f32 = 1e-4;

    fn course(credits: f32, grade: Option<Grade>) -> Course {
        Course {
            code: "CS 0000".to_string(),
            name: "Test Course".to_string(),
            credits,
            grade,
            percentage: None,
            notes: String::new(),
        }
    }

    fn semester(courses: Vec<Course>) -> Semester {
        Semester {
            courses,
            ..Semester::new("Fall 2025".to_string())
        }
    }

    #[test]
    fn empty_course_list_yields_zero() {
        let engine = GradeEngine::default();
        assert!(engine.semester_gpa(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn all_ungraded_yields_zero_not_nan() {
        let engine = GradeEngine::default();
        let courses = vec![course(3.0, None), course(4.0, None)];

        let gpa = engine.semester_gpa(&courses);
        assert!(!gpa.is_nan());
        assert!(gpa.abs() < TOLERANCE);
    }

    #[test]
    fn weighted_average_matches_hand_computation() {
        // (3 * 3.75 + 1 * 0.0) / 4 = 2.8125
        let engine = GradeEngine::default();
        let courses = vec![
            course(3.0, Some(Grade::A)),
            course(1.0, Some(Grade::F)),
        ];

        assert!((engine.semester_gpa(&courses) - 2.8125).abs() < TOLERANCE);
    }

    #[test]
    fn ungraded_courses_are_excluded_from_denominator() {
        let engine = GradeEngine::default();
        let graded_only = vec![course(3.0, Some(Grade::B))];
        let with_pending = vec![course(3.0, Some(Grade::B)), course(4.0, None)];

        assert!(
            (engine.semester_gpa(&graded_only) - engine.semester_gpa(&with_pending)).abs()
                < TOLERANCE
        );
    }

    #[test]
    fn zero_credit_graded_course_is_neutral() {
        let engine = GradeEngine::default();
        let base = vec![
            course(3.0, Some(Grade::BPlus)),
            course(3.0, Some(Grade::AMinus)),
        ];
        let mut with_zero = base.clone();
        with_zero.push(course(0.0, Some(Grade::F)));

        assert!((engine.semester_gpa(&base) - engine.semester_gpa(&with_zero)).abs() < TOLERANCE);
    }

    #[test]
    fn all_zero_credit_graded_yields_zero() {
        let engine = GradeEngine::default();
        let courses = vec![course(0.0, Some(Grade::A)), course(0.0, Some(Grade::B))];

        let gpa = engine.semester_gpa(&courses);
        assert!(!gpa.is_nan());
        assert!(gpa.abs() < TOLERANCE);
    }

    #[test]
    fn cumulative_matches_single_semester_gpa() {
        // (3 * 3.25 + 3 * 3.5) / 6 = 3.375
        let engine = GradeEngine::default();
        let sem = semester(vec![
            course(3.0, Some(Grade::BPlus)),
            course(3.0, Some(Grade::AMinus)),
        ]);

        let semester_gpa = engine.semester_gpa(&sem.courses);
        let totals = engine.cumulative_cgpa(std::slice::from_ref(&sem));

        assert!((semester_gpa - 3.375).abs() < TOLERANCE);
        assert!((totals.gpa - 3.375).abs() < TOLERANCE);
        assert!((totals.total_credits - 6.0).abs() < TOLERANCE);
    }

    #[test]
    fn cumulative_credits_accumulate_across_semesters() {
        let engine = GradeEngine::default();
        let first = semester(vec![course(4.0, Some(Grade::A)), course(2.0, None)]);
        let second = semester(vec![course(3.0, Some(Grade::C))]);

        let only_first = engine.cumulative_cgpa(std::slice::from_ref(&first));
        let only_second = engine.cumulative_cgpa(std::slice::from_ref(&second));
        let combined = engine.cumulative_cgpa(&[first, second]);

        assert!(
            (combined.total_credits - (only_first.total_credits + only_second.total_credits))
                .abs()
                < TOLERANCE
        );
        assert!(
            (combined.total_quality_points
                - (only_first.total_quality_points + only_second.total_quality_points))
                .abs()
                < TOLERANCE
        );
    }

    #[test]
    fn determinism_same_inputs_same_outputs() {
        let engine = GradeEngine::default();
        let sem = semester(vec![
            course(3.0, Some(Grade::BMinus)),
            course(4.0, Some(Grade::CPlus)),
        ]);
        let semesters = vec![sem];

        let first = engine.cumulative_cgpa(&semesters);
        let second = engine.cumulative_cgpa(&semesters);
        assert_eq!(first, second);
    }
}

//! Forward-looking CGPA queries
//!
//! Three independent, pure query functions over a cumulative baseline plus
//! user-supplied hypothetical parameters. None mutate state; infeasible or
//! unanswerable requests come back as [`EngineError`] signals, never panics.

use super::{AggregateTotals, EngineError, GradeEngine};
use crate::models::Semester;
use std::fmt;

/// Directional comparison of a projected CGPA against the current one.
/// Purely a display hint derived by sign comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Projected CGPA is above the current one
    Up,
    /// Projected CGPA is below the current one
    Down,
    /// No change
    Same,
}

impl Trend {
    /// Compare a projected value against the current one
    #[must_use]
    pub fn of(current: f32, projected: f32) -> Self {
        if projected > current {
            Self::Up
        } else if projected < current {
            Self::Down
        } else {
            Self::Same
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Same => "same",
        };
        f.write_str(label)
    }
}

fn validate_planned_credits(planned_credits: f32) -> Result<(), EngineError> {
    if !planned_credits.is_finite() {
        return Err(EngineError::InvalidInput(format!(
            "planned credits must be a number, got {planned_credits}"
        )));
    }
    if planned_credits <= 0.0 {
        return Err(EngineError::InvalidInput(format!(
            "planned credits must be positive, got {planned_credits}"
        )));
    }
    Ok(())
}

fn validate_gpa_value(label: &str, value: f32) -> Result<(), EngineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::InvalidInput(format!(
            "{label} must be a number, got {value}"
        )))
    }
}

impl GradeEngine {
    /// Grade-point average required over `planned_credits` future credits to
    /// lift the baseline to `target_cgpa`.
    ///
    /// A result below zero means the target is already exceeded even with
    /// the worst possible grades and is clamped to `0`.
    ///
    /// # Errors
    /// - [`EngineError::InvalidInput`] when `planned_credits <= 0` or any
    ///   input is not a number.
    /// - [`EngineError::Impossible`] when the required average exceeds the
    ///   scale's maximum grade point.
    pub fn required_gpa(
        &self,
        baseline: &AggregateTotals,
        target_cgpa: f32,
        planned_credits: f32,
    ) -> Result<f32, EngineError> {
        validate_gpa_value("target CGPA", target_cgpa)?;
        validate_planned_credits(planned_credits)?;

        let total_target_points = target_cgpa * (baseline.total_credits + planned_credits);
        let required_points = total_target_points - baseline.total_quality_points;
        let required = required_points / planned_credits;

        let max = self.scale().max_grade_point();
        if required > max {
            return Err(EngineError::Impossible { required, max });
        }

        Ok(required.max(0.0))
    }

    /// CGPA that results from achieving `hypothetical_gpa` over
    /// `planned_credits` additional credits.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidInput`] when `planned_credits <= 0`,
    /// when any input is not a number, or when the combined credit total
    /// would not be positive.
    pub fn resulting_cgpa(
        &self,
        baseline: &AggregateTotals,
        hypothetical_gpa: f32,
        planned_credits: f32,
    ) -> Result<f32, EngineError> {
        validate_gpa_value("hypothetical GPA", hypothetical_gpa)?;
        validate_planned_credits(planned_credits)?;

        let new_total_credits = baseline.total_credits + planned_credits;
        if new_total_credits <= 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "combined credit total must be positive, got {new_total_credits}"
            )));
        }

        let new_total_points = baseline.total_quality_points + hypothetical_gpa * planned_credits;
        Ok(new_total_points / new_total_credits)
    }

    /// Arithmetic mean of per-semester GPAs over semesters that have at
    /// least one graded course. Semesters with no grades are excluded from
    /// the average, not counted as zero.
    ///
    /// Returns `None` when no semester qualifies.
    #[must_use]
    pub fn historical_average_gpa(&self, semesters: &[Semester]) -> Option<f32> {
        let gpas: Vec<f32> = semesters
            .iter()
            .filter(|s| s.has_graded_courses())
            .map(|s| self.semester_gpa(&s.courses))
            .collect();

        if gpas.is_empty() {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let count = gpas.len() as f32;
        Some(gpas.iter().sum::<f32>() / count)
    }

    /// Projected CGPA using the historical per-semester GPA average as the
    /// hypothetical input to [`resulting_cgpa`](Self::resulting_cgpa).
    ///
    /// # Errors
    /// - [`EngineError::InvalidInput`] when `planned_credits` is invalid.
    /// - [`EngineError::NotAvailable`] when there is no graded history to
    ///   extrapolate from.
    pub fn historical_trend_forecast(
        &self,
        semesters: &[Semester],
        baseline: &AggregateTotals,
        planned_credits: f32,
    ) -> Result<f32, EngineError> {
        validate_planned_credits(planned_credits)?;

        let average = self
            .historical_average_gpa(semesters)
            .ok_or(EngineError::NotAvailable)?;

        self.resulting_cgpa(baseline, average, planned_credits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Grade};

    const TOLERANCE: f32 = 1e-4;

    fn baseline(total_credits: f32, total_quality_points: f32) -> AggregateTotals {
        AggregateTotals::from_parts(total_credits, total_quality_points)
    }

    fn semester_with_grades(grades: &[(f32, Option<Grade>)]) -> Semester {
        let courses = grades
            .iter()
            .map(|(credits, grade)| Course {
                code: "CS 0000".to_string(),
                name: "Test Course".to_string(),
                credits: *credits,
                grade: *grade,
                percentage: None,
                notes: String::new(),
            })
            .collect();
        Semester {
            courses,
            ..Semester::new("Fall 2025".to_string())
        }
    }

    #[test]
    fn required_gpa_basic_derivation() {
        // 60 credits at 3.0; need (3.2 * 75 - 180) / 15 = 4.0 exactly
        let engine = GradeEngine::default();
        let required = engine
            .required_gpa(&baseline(60.0, 180.0), 3.2, 15.0)
            .expect("feasible target");
        assert!((required - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn required_gpa_rejects_nonpositive_credits() {
        let engine = GradeEngine::default();
        assert!(matches!(
            engine.required_gpa(&baseline(60.0, 180.0), 3.2, 0.0),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            engine.required_gpa(&baseline(60.0, 180.0), 3.2, -3.0),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            engine.required_gpa(&baseline(60.0, 180.0), f32::NAN, 15.0),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn required_gpa_detects_impossible_targets() {
        // Current CGPA 2.0 over 100 credits; 4.0 in 3 credits is hopeless
        let engine = GradeEngine::default();
        let result = engine.required_gpa(&baseline(100.0, 200.0), 4.0, 3.0);
        match result {
            Err(EngineError::Impossible { required, max }) => {
                assert!(required > max);
                assert!((max - 4.0).abs() < TOLERANCE);
            }
            other => panic!("expected Impossible, got {other:?}"),
        }
    }

    #[test]
    fn required_gpa_clamps_negative_to_zero() {
        // Already above target: any grades at all overshoot
        let engine = GradeEngine::default();
        let required = engine
            .required_gpa(&baseline(100.0, 390.0), 2.0, 5.0)
            .expect("target already exceeded");
        assert!(required.abs() < TOLERANCE);
    }

    #[test]
    fn resulting_cgpa_blends_baseline_and_hypothetical() {
        let engine = GradeEngine::default();
        let result = engine
            .resulting_cgpa(&baseline(60.0, 180.0), 3.8, 15.0)
            .expect("valid inputs");
        // (180 + 3.8 * 15) / 75 = 3.16
        assert!((result - 3.16).abs() < TOLERANCE);
    }

    #[test]
    fn resulting_cgpa_rejects_nonpositive_credits() {
        let engine = GradeEngine::default();
        assert!(matches!(
            engine.resulting_cgpa(&baseline(60.0, 180.0), 3.8, 0.0),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn required_and_resulting_are_inverses() {
        let engine = GradeEngine::default();
        let base = baseline(45.0, 140.0);
        let target = 3.2;
        let planned = 16.0;

        let required = engine
            .required_gpa(&base, target, planned)
            .expect("feasible target");
        let round_trip = engine
            .resulting_cgpa(&base, required, planned)
            .expect("valid inputs");

        assert!((round_trip - target).abs() < TOLERANCE);
    }

    #[test]
    fn trend_compares_by_sign() {
        assert_eq!(Trend::of(3.0, 3.2), Trend::Up);
        assert_eq!(Trend::of(3.0, 2.8), Trend::Down);
        assert_eq!(Trend::of(3.0, 3.0), Trend::Same);
    }

    #[test]
    fn historical_average_excludes_ungraded_semesters() {
        let engine = GradeEngine::default();
        let semesters = vec![
            semester_with_grades(&[(3.0, Some(Grade::A))]),       // 3.75
            semester_with_grades(&[(3.0, Some(Grade::CMinus))]),  // 1.5
            semester_with_grades(&[(3.0, None)]),                 // excluded
        ];

        let average = engine
            .historical_average_gpa(&semesters)
            .expect("two graded semesters");
        assert!((average - 2.625).abs() < TOLERANCE);
    }

    #[test]
    fn historical_forecast_without_history_is_not_available() {
        let engine = GradeEngine::default();
        let semesters = vec![semester_with_grades(&[(3.0, None), (4.0, None)])];

        assert!(engine.historical_average_gpa(&semesters).is_none());
        assert_eq!(
            engine.historical_trend_forecast(&semesters, &baseline(0.0, 0.0), 15.0),
            Err(EngineError::NotAvailable)
        );
    }

    #[test]
    fn historical_forecast_validates_credits_before_history() {
        let engine = GradeEngine::default();
        let semesters = vec![semester_with_grades(&[(3.0, None)])];

        assert!(matches!(
            engine.historical_trend_forecast(&semesters, &baseline(0.0, 0.0), 0.0),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn historical_forecast_delegates_to_resulting_cgpa() {
        let engine = GradeEngine::default();
        let semesters = vec![semester_with_grades(&[(3.0, Some(Grade::B))])]; // 3.0 average
        let base = baseline(30.0, 60.0); // CGPA 2.0

        let forecast = engine
            .historical_trend_forecast(&semesters, &base, 15.0)
            .expect("graded history exists");
        let direct = engine
            .resulting_cgpa(&base, 3.0, 15.0)
            .expect("valid inputs");

        assert!((forecast - direct).abs() < TOLERANCE);
        assert_eq!(Trend::of(base.gpa, forecast), Trend::Up);
    }
}

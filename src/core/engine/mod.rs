//! Grade aggregation engine
//!
//! Pure, stateless computation over in-memory course and semester data:
//! letter-grade lookup, weighted semester GPA, cumulative CGPA, and
//! forward-looking forecasts. All functions are deterministic and free of
//! side effects; callers hand in a snapshot and get a fresh result back.

pub mod aggregate;
pub mod error;
pub mod forecast;
pub mod scale;

pub use aggregate::AggregateTotals;
pub use error::EngineError;
pub use forecast::Trend;
pub use scale::GradeScale;

use crate::models::Grade;

/// The grade aggregation engine.
///
/// Holds the immutable [`GradeScale`] used for every conversion, so callers
/// with a non-standard institutional scale can inject their own table. The
/// engine itself carries no other state.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeEngine {
    scale: GradeScale,
}

impl GradeEngine {
    /// Create an engine over a specific grade scale
    #[must_use]
    pub const fn new(scale: GradeScale) -> Self {
        Self { scale }
    }

    /// The scale this engine aggregates against
    #[must_use]
    pub const fn scale(&self) -> &GradeScale {
        &self.scale
    }

    /// Grade-point value for a letter grade on this engine's scale.
    ///
    /// Ungraded courses have no letter and therefore no grade point; the
    /// aggregation functions exclude them from both numerator and
    /// denominator rather than treating them as zero.
    #[must_use]
    pub const fn grade_point(&self, grade: Grade) -> f32 {
        self.scale.grade_point(grade)
    }

    /// Convert a 0-100 percentage score to a letter grade.
    ///
    /// Values outside the range are clamped to [0, 100] before lookup.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidInput`] for NaN or infinite input.
    pub fn letter_from_percentage(&self, percentage: f32) -> Result<Grade, EngineError> {
        if !percentage.is_finite() {
            return Err(EngineError::InvalidInput(format!(
                "percentage must be a number, got {percentage}"
            )));
        }
        Ok(self.scale.letter_for_percentage(percentage.clamp(0.0, 100.0)))
    }
}

impl Default for GradeEngine {
    fn default() -> Self {
        Self::new(GradeScale::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_scale_anchors() {
        let engine = GradeEngine::default();
        assert!((engine.grade_point(Grade::APlus) - 4.0).abs() < f32::EPSILON);
        assert!(engine.grade_point(Grade::F).abs() < f32::EPSILON);
    }

    #[test]
    fn percentage_conversion_uses_canonical_cutoffs() {
        let engine = GradeEngine::default();
        assert_eq!(engine.letter_from_percentage(93.0), Ok(Grade::APlus));
        assert_eq!(engine.letter_from_percentage(90.0), Ok(Grade::APlus));
        assert_eq!(engine.letter_from_percentage(89.9), Ok(Grade::A));
        assert_eq!(engine.letter_from_percentage(72.5), Ok(Grade::B));
        assert_eq!(engine.letter_from_percentage(35.0), Ok(Grade::DMinus));
        assert_eq!(engine.letter_from_percentage(34.9), Ok(Grade::F));
    }

    #[test]
    fn percentage_conversion_clamps_out_of_range() {
        let engine = GradeEngine::default();
        assert_eq!(engine.letter_from_percentage(120.0), Ok(Grade::APlus));
        assert_eq!(engine.letter_from_percentage(-5.0), Ok(Grade::F));
    }

    #[test]
    fn percentage_conversion_rejects_nan() {
        let engine = GradeEngine::default();
        assert!(matches!(
            engine.letter_from_percentage(f32::NAN),
            Err(EngineError::InvalidInput(_))
        ));
    }
}

//! Grade scale table

use crate::models::Grade;

/// Immutable mapping from letter grades to grade-point values, plus the
/// percentage cutoffs used to assign letters at entry time.
///
/// The standard table is anchored at `A+ = 4.0` and `F = 0.0` with values
/// monotonically non-increasing from best to worst. Alternate institutional
/// scales can be constructed with [`GradeScale::new`] and injected into a
/// [`GradeEngine`](crate::engine::GradeEngine).
#[derive(Debug, Clone, PartialEq)]
pub struct GradeScale {
    points: [f32; Grade::COUNT],
    cutoffs: [(f32, Grade); Grade::COUNT - 1],
}

impl GradeScale {
    /// Create a custom scale.
    ///
    /// `points` is indexed by [`Grade::index`] (best to worst) and is
    /// expected to be non-increasing. `cutoffs` are minimum percentages in
    /// descending order; a percentage below every cutoff maps to `F`.
    #[must_use]
    pub const fn new(
        points: [f32; Grade::COUNT],
        cutoffs: [(f32, Grade); Grade::COUNT - 1],
    ) -> Self {
        Self { points, cutoffs }
    }

    /// The canonical 4.0-anchored scale
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            points: [
                4.0,  // A+
                3.75, // A
                3.5,  // A-
                3.25, // B+
                3.0,  // B
                2.75, // B-
                2.5,  // C+
                2.0,  // C
                1.5,  // C-
                1.0,  // D+
                0.5,  // D
                0.0,  // D-
                0.0,  // F
            ],
            cutoffs: [
                (90.0, Grade::APlus),
                (85.0, Grade::A),
                (80.0, Grade::AMinus),
                (75.0, Grade::BPlus),
                (70.0, Grade::B),
                (65.0, Grade::BMinus),
                (60.0, Grade::CPlus),
                (55.0, Grade::C),
                (50.0, Grade::CMinus),
                (45.0, Grade::DPlus),
                (40.0, Grade::D),
                (35.0, Grade::DMinus),
            ],
        }
    }

    /// Grade-point value for a letter grade
    #[must_use]
    pub const fn grade_point(&self, grade: Grade) -> f32 {
        self.points[grade.index()]
    }

    /// The highest grade-point value on the scale
    #[must_use]
    pub fn max_grade_point(&self) -> f32 {
        self.points.iter().copied().fold(0.0_f32, f32::max)
    }

    /// Map a percentage (assumed already within [0, 100]) to a letter.
    /// Falls through to `F` below the lowest cutoff.
    #[must_use]
    pub fn letter_for_percentage(&self, percentage: f32) -> Grade {
        for (minimum, grade) in &self.cutoffs {
            if percentage >= *minimum {
                return *grade;
            }
        }
        Grade::F
    }
}

impl Default for GradeScale {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_points_are_non_increasing() {
        let scale = GradeScale::standard();
        let mut previous = f32::INFINITY;
        for grade in Grade::ALL {
            let point = scale.grade_point(grade);
            assert!(
                point <= previous,
                "{grade} has point {point} above predecessor {previous}"
            );
            previous = point;
        }
    }

    #[test]
    fn standard_cutoffs_cover_every_boundary() {
        let scale = GradeScale::standard();
        assert_eq!(scale.letter_for_percentage(100.0), Grade::APlus);
        assert_eq!(scale.letter_for_percentage(85.0), Grade::A);
        assert_eq!(scale.letter_for_percentage(84.9), Grade::AMinus);
        assert_eq!(scale.letter_for_percentage(0.0), Grade::F);
    }

    #[test]
    fn max_grade_point_is_four_on_standard_scale() {
        assert!((GradeScale::standard().max_grade_point() - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn custom_scale_overrides_points() {
        let mut points = [0.0; Grade::COUNT];
        points[Grade::APlus.index()] = 5.0;
        let scale = GradeScale::new(points, GradeScale::standard().cutoffs);

        assert!((scale.grade_point(Grade::APlus) - 5.0).abs() < f32::EPSILON);
        assert!((scale.max_grade_point() - 5.0).abs() < f32::EPSILON);
    }
}

//! Export record summaries to CSV

use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::engine::GradeEngine;
use crate::record::AcademicRecord;
use crate::models::Semester;

/// One computed row of the per-semester summary table
#[derive(Debug, Clone, PartialEq)]
pub struct SemesterRow {
    /// Semester display name
    pub name: String,
    /// Lifecycle status label (current, completed, planned)
    pub status: &'static str,
    /// Credits across all courses, graded or not
    pub attempted_credits: f32,
    /// Credits across graded courses only
    pub graded_credits: f32,
    /// Quality points across graded courses
    pub quality_points: f32,
    /// Weighted semester GPA (0 when nothing is graded)
    pub gpa: f32,
}

/// Summary statistics for an academic record
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSummary {
    /// Cumulative GPA across all semesters
    pub cgpa: f32,
    /// Total graded credits across all semesters
    pub total_credits: f32,
    /// Total quality points across all semesters
    pub total_quality_points: f32,
    /// Number of semesters on record
    pub semester_count: usize,
    /// Number of semesters with at least one graded course
    pub graded_semester_count: usize,
    /// Semester with the highest GPA, when any semester is graded
    pub best_semester: Option<String>,
    /// GPA of the best semester
    pub best_gpa: f32,
    /// Mean per-semester GPA over graded semesters
    pub historical_average: Option<f32>,
}

impl RecordSummary {
    /// Compute summary statistics for a record
    #[must_use]
    pub fn from_record(engine: &GradeEngine, record: &AcademicRecord) -> Self {
        let totals = engine.cumulative_cgpa(&record.semesters);

        let mut best_semester = None;
        let mut best_gpa = 0.0_f32;
        let mut graded_semester_count = 0;

        for semester in &record.semesters {
            if !semester.has_graded_courses() {
                continue;
            }
            graded_semester_count += 1;

            let gpa = engine.semester_gpa(&semester.courses);
            if best_semester.is_none() || gpa > best_gpa {
                best_gpa = gpa;
                best_semester = Some(semester.name.clone());
            }
        }

        Self {
            cgpa: totals.gpa,
            total_credits: totals.total_credits,
            total_quality_points: totals.total_quality_points,
            semester_count: record.semesters.len(),
            graded_semester_count,
            best_semester,
            best_gpa,
            historical_average: engine.historical_average_gpa(&record.semesters),
        }
    }
}

fn status_label(semester: &Semester) -> &'static str {
    if semester.is_completed {
        "completed"
    } else if semester.is_current {
        "current"
    } else {
        "planned"
    }
}

/// Compute the per-semester summary rows for a record
#[must_use]
pub fn semester_rows(engine: &GradeEngine, record: &AcademicRecord) -> Vec<SemesterRow> {
    record
        .semesters
        .iter()
        .map(|semester| {
            let totals = engine.course_totals(&semester.courses);
            SemesterRow {
                name: semester.name.clone(),
                status: status_label(semester),
                attempted_credits: semester.attempted_credits(),
                graded_credits: totals.total_credits,
                quality_points: totals.total_quality_points,
                gpa: totals.gpa,
            }
        })
        .collect()
}

/// Export the per-semester summary table and cumulative totals as CSV.
///
/// Returns the computed [`RecordSummary`] so callers can print highlights
/// without recomputing.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn export_summary_csv(
    engine: &GradeEngine,
    record: &AcademicRecord,
    output_path: &Path,
) -> Result<RecordSummary, Box<dyn Error>> {
    let summary = RecordSummary::from_record(engine, record);
    let rows = semester_rows(engine, record);

    let mut csv = String::new();
    csv.push_str("Semester,Status,Attempted Credits,Graded Credits,Quality Points,GPA\n");

    for row in &rows {
        let _ = writeln!(
            csv,
            "{},{},{:.1},{:.1},{:.2},{:.2}",
            escape_field(&row.name),
            row.status,
            row.attempted_credits,
            row.graded_credits,
            row.quality_points,
            row.gpa
        );
    }

    let _ = writeln!(
        csv,
        "Cumulative,,,{:.1},{:.2},{:.2}",
        summary.total_credits, summary.total_quality_points, summary.cgpa
    );

    fs::write(output_path, csv)?;
    Ok(summary)
}

/// Quote a CSV field when it contains separators or quotes
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Grade, Semester};

    const TOLERANCE: f32 = 1e-4;

    fn sample_record() -> AcademicRecord {
        let fall = Semester {
            is_current: false,
            is_completed: true,
            courses: vec![
                Course::graded("CS 1800".into(), "Discrete".into(), 4.0, Grade::A),
                Course::graded("MATH 1341".into(), "Calculus 1".into(), 4.0, Grade::BPlus),
            ],
            ..Semester::new("Fall 2024".to_string())
        };
        let spring = Semester {
            courses: vec![Course::new("CS 2500".into(), "Fundies 1".into(), 4.0)],
            ..Semester::new("Spring 2025".to_string())
        };
        AcademicRecord {
            semesters: vec![fall, spring],
            gpa_goal: Some(3.5),
        }
    }

    #[test]
    fn summary_counts_graded_semesters_only() {
        let engine = GradeEngine::default();
        let summary = RecordSummary::from_record(&engine, &sample_record());

        assert_eq!(summary.semester_count, 2);
        assert_eq!(summary.graded_semester_count, 1);
        assert_eq!(summary.best_semester.as_deref(), Some("Fall 2024"));
        // (4 * 3.75 + 4 * 3.25) / 8 = 3.5
        assert!((summary.cgpa - 3.5).abs() < TOLERANCE);
        assert!((summary.total_credits - 8.0).abs() < TOLERANCE);
    }

    #[test]
    fn rows_carry_status_labels() {
        let engine = GradeEngine::default();
        let rows = semester_rows(&engine, &sample_record());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].status, "completed");
        assert_eq!(rows[1].status, "current");
        assert!((rows[1].gpa).abs() < TOLERANCE);
        assert!((rows[1].attempted_credits - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn csv_export_writes_header_rows_and_cumulative() {
        let engine = GradeEngine::default();
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("summary.csv");

        let summary =
            export_summary_csv(&engine, &sample_record(), &path).expect("export succeeds");
        let contents = std::fs::read_to_string(&path).expect("read exported csv");

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4); // header + 2 semesters + cumulative
        assert!(lines[0].starts_with("Semester,Status"));
        assert!(lines[1].starts_with("Fall 2024,completed"));
        assert!(lines[3].starts_with("Cumulative"));
        assert!((summary.cgpa - 3.5).abs() < TOLERANCE);
    }

    #[test]
    fn csv_fields_with_commas_are_quoted() {
        assert_eq!(escape_field("Fall 2024"), "Fall 2024");
        assert_eq!(escape_field("Fall, 2024"), "\"Fall, 2024\"");
        assert_eq!(escape_field("the \"one\""), "\"the \"\"one\"\"\"");
    }
}

//! Report generation module for academic records
//!
//! Renders an academic record into Markdown or HTML: per-semester GPA table,
//! cumulative summary, and a forward-looking outlook section (goal gap and
//! historical forecast).

pub mod formats;

use std::error::Error;
use std::path::Path;

use crate::engine::{EngineError, GradeEngine, Trend};
use crate::export::{RecordSummary, SemesterRow};
use crate::record::AcademicRecord;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates everything needed to render a record report, providing a
/// single source of truth for templates.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// The record being reported
    pub record: &'a AcademicRecord,
    /// Engine used for all aggregation in the report
    pub engine: &'a GradeEngine,
    /// Cumulative summary statistics
    pub summary: &'a RecordSummary,
    /// Per-semester table rows
    pub rows: &'a [SemesterRow],
    /// Hypothetical future credit load for the outlook section
    pub planned_credits: f32,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        record: &'a AcademicRecord,
        engine: &'a GradeEngine,
        summary: &'a RecordSummary,
        rows: &'a [SemesterRow],
        planned_credits: f32,
    ) -> Self {
        Self {
            record,
            engine,
            summary,
            rows,
            planned_credits,
        }
    }

    /// Report title: the current semester's name, or a generic fallback
    #[must_use]
    pub fn title(&self) -> String {
        self.record.current_semester().map_or_else(
            || "Academic Record".to_string(),
            |s| format!("Academic Record through {}", s.name),
        )
    }

    /// Historical average formatted for display ("N/A" without history)
    #[must_use]
    pub fn historical_average_display(&self) -> String {
        self.summary
            .historical_average
            .map_or_else(|| "N/A".to_string(), |avg| format!("{avg:.2}"))
    }

    /// Best semester formatted for display
    #[must_use]
    pub fn best_semester_display(&self) -> String {
        self.summary.best_semester.as_ref().map_or_else(
            || "N/A".to_string(),
            |name| format!("{name} ({:.2})", self.summary.best_gpa),
        )
    }

    /// Lines for the outlook section: goal gap and historical forecast.
    ///
    /// Infeasible and unanswerable forecasts render as prose rather than
    /// numbers; the distinction between "impossible" and "no data" is kept.
    #[must_use]
    pub fn outlook_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let totals = self.engine.cumulative_cgpa(&self.record.semesters);

        if let Some(goal) = self.record.gpa_goal {
            let line = match self.engine.required_gpa(&totals, goal, self.planned_credits) {
                Ok(required) => format!(
                    "Reaching the {goal:.2} CGPA goal takes a {required:.2} GPA over the next {:.0} credits.",
                    self.planned_credits
                ),
                Err(EngineError::Impossible { required, .. }) => format!(
                    "The {goal:.2} CGPA goal is out of reach in {:.0} credits (a {required:.2} GPA would be needed).",
                    self.planned_credits
                ),
                Err(err) => format!("Goal forecast unavailable: {err}."),
            };
            lines.push(line);
        }

        match self
            .engine
            .historical_trend_forecast(&self.record.semesters, &totals, self.planned_credits)
        {
            Ok(projected) => {
                let trend = Trend::of(totals.gpa, projected);
                lines.push(format!(
                    "At the historical pace, {:.0} more credits project a {projected:.2} CGPA ({trend}).",
                    self.planned_credits
                ));
            }
            Err(EngineError::NotAvailable) => {
                lines.push("No graded history yet; nothing to extrapolate from.".to_string());
            }
            Err(err) => lines.push(format!("Historical forecast unavailable: {err}.")),
        }

        lines
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

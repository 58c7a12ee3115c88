//! Markdown report generator
//!
//! Generates academic record reports in Markdown format. These render well
//! in GitHub, GitLab, and VS Code.

use crate::core::get_version;
use crate::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{title}}", &ctx.title());
        output = output.replace("{{cgpa}}", &format!("{:.2}", ctx.summary.cgpa));
        output = output.replace("{{semester_count}}", &ctx.summary.semester_count.to_string());
        output = output.replace(
            "{{graded_semester_count}}",
            &ctx.summary.graded_semester_count.to_string(),
        );
        output = output.replace(
            "{{total_credits}}",
            &format!("{:.1}", ctx.summary.total_credits),
        );
        output = output.replace(
            "{{total_quality_points}}",
            &format!("{:.2}", ctx.summary.total_quality_points),
        );
        output = output.replace("{{best_semester}}", &ctx.best_semester_display());
        output = output.replace("{{historical_average}}", &ctx.historical_average_display());

        let semester_table = Self::generate_semester_table(ctx);
        output = output.replace("{{semester_table}}", &semester_table);

        let outlook = Self::generate_outlook(ctx);
        output = output.replace("{{outlook}}", &outlook);

        output.replace("{{version}}", get_version())
    }

    /// Generate the per-semester table
    fn generate_semester_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("| Semester | Status | Credits | Graded Credits | Quality Points | GPA |\n");
        table.push_str("|---|---|---|---|---|---|\n");

        for row in ctx.rows {
            let _ = writeln!(
                table,
                "| {} | {} | {:.1} | {:.1} | {:.2} | {:.2} |",
                row.name,
                row.status,
                row.attempted_credits,
                row.graded_credits,
                row.quality_points,
                row.gpa
            );
        }

        table
    }

    /// Generate the outlook bullet list
    fn generate_outlook(ctx: &ReportContext) -> String {
        let mut outlook = String::new();
        for line in ctx.outlook_lines() {
            let _ = writeln!(outlook, "- {line}");
        }
        outlook
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

//! HTML report generator
//!
//! Generates self-contained HTML reports with embedded CSS; no external
//! assets are referenced.

use crate::core::get_version;
use crate::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{title}}", &escape_html(&ctx.title()));
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
        output = output.replace(
            "{{best_semester}}",
            &escape_html(&ctx.best_semester_display()),
        );
        output = output.replace("{{historical_average}}", &ctx.historical_average_display());

        let semester_table = Self::generate_semester_table(ctx);
        output = output.replace("{{semester_table}}", &semester_table);

        let outlook = Self::generate_outlook(ctx);
        output = output.replace("{{outlook}}", &outlook);

        output.replace("{{version}}", get_version())
    }

    /// Generate the per-semester HTML table
    fn generate_semester_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("<table>\n");
        table.push_str(
            "  <tr><th>Semester</th><th>Status</th><th>Credits</th><th>Graded Credits</th><th>Quality Points</th><th>GPA</th></tr>\n",
        );

        for row in ctx.rows {
            let _ = writeln!(
                table,
                "  <tr><td>{}</td><td>{}</td><td>{:.1}</td><td>{:.1}</td><td>{:.2}</td><td>{:.2}</td></tr>",
                escape_html(&row.name),
                row.status,
                row.attempted_credits,
                row.graded_credits,
                row.quality_points,
                row.gpa
            );
        }

        table.push_str("</table>");
        table
    }

    /// Generate the outlook list items
    fn generate_outlook(ctx: &ReportContext) -> String {
        let mut outlook = String::new();
        for line in ctx.outlook_lines() {
            let _ = writeln!(outlook, "  <li>{}</li>", escape_html(&line));
        }
        outlook
    }
}

/// Minimal HTML escaping for text content
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

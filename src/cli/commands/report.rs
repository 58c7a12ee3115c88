//! Report command handler
//!
//! Generates academic record reports in Markdown or HTML with the semester
//! table, cumulative summary, and forecast outlook.

use smart_gpa::config::Config;
use smart_gpa::engine::GradeEngine;
use smart_gpa::export::{semester_rows, RecordSummary};
use smart_gpa::report::{
    formats::ReportFormat, HtmlReporter, MarkdownReporter, ReportContext, ReportGenerator,
};
use smart_gpa::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `input_file` - Optional path to a record JSON file
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `planned_credits` - Hypothetical credit load for the outlook section
/// * `config` - Configuration containing the default data file and reports directory
pub fn run(
    input_file: Option<&Path>,
    output_file: Option<&Path>,
    format_str: &str,
    planned_credits: f32,
    config: &Config,
) {
    match generate_report(input_file, output_file, format_str, planned_credits, config) {
        Ok(report_path) => {
            println!("✓ Report generated: {}", report_path.display());
            info!("Report generated: {}", report_path.display());
        }
        Err(err) => {
            error!("Report generation failed: {err}");
            eprintln!("{err}");
        }
    }
}

fn generate_report(
    input_file: Option<&Path>,
    output_file: Option<&Path>,
    format_str: &str,
    planned_credits: f32,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e} (expected 'markdown' or 'html')"))?;

    let record_path = super::resolve_record_path(input_file, config)?;
    let record = super::load_record(&record_path)?;
    info!("Record loaded: {}", record_path.display());

    let engine = GradeEngine::default();
    let summary = RecordSummary::from_record(&engine, &record);
    let rows = semester_rows(&engine, &record);
    let ctx = ReportContext::new(&record, &engine, &summary, &rows, planned_credits);

    let output_path = resolve_output_path(output_file, &record_path, format, config)?;

    let generator: Box<dyn ReportGenerator> = match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    };

    generator.generate(&ctx, &output_path).map_err(|e| {
        format!(
            "✗ Failed to generate report {}: {e}",
            output_path.display()
        )
    })?;

    Ok(output_path)
}

fn resolve_output_path(
    output_file: Option<&Path>,
    record_path: &Path,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(path) = output_file {
        return Ok(path.to_path_buf());
    }

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let filename = record_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("record")
        .to_string();
    Ok(reports_dir.join(format!("{filename}_report.{}", format.extension())))
}

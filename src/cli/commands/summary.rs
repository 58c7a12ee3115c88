//! Summary command handler

use smart_gpa::config::Config;
use smart_gpa::engine::GradeEngine;
use smart_gpa::export::{export_summary_csv, semester_rows, RecordSummary};
use smart_gpa::{error, info};
use std::path::{Path, PathBuf};

/// Run the summary command.
///
/// # Arguments
/// * `input_file` - Optional path to a record JSON file
/// * `output` - Optional CSV output path
/// * `no_csv` - Skip the CSV export
/// * `config` - Configuration containing the default data file and exports directory
/// * `verbose` - Whether to show detailed summary output
pub fn run(
    input_file: Option<&Path>,
    output: Option<&Path>,
    no_csv: bool,
    config: &Config,
    verbose: bool,
) {
    if let Err(err) = summarize(input_file, output, no_csv, config, verbose) {
        error!("Summary failed: {err}");
        eprintln!("{err}");
    }
}

fn summarize(
    input_file: Option<&Path>,
    output: Option<&Path>,
    no_csv: bool,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let record_path = super::resolve_record_path(input_file, config)?;
    let record = super::load_record(&record_path)?;
    info!("Record loaded: {}", record_path.display());

    let engine = GradeEngine::default();
    let summary = RecordSummary::from_record(&engine, &record);
    let rows = semester_rows(&engine, &record);

    println!("\n=== Academic Record Summary ===\n");
    for row in &rows {
        println!(
            "{} ({}): GPA {:.2} over {:.1} graded credits",
            row.name, row.status, row.gpa, row.graded_credits
        );
    }
    println!(
        "\nCumulative GPA: {:.2} ({:.1} credits, {:.2} quality points)",
        summary.cgpa, summary.total_credits, summary.total_quality_points
    );

    if verbose {
        if let Some(best) = &summary.best_semester {
            println!("Best semester: {} ({:.2})", best, summary.best_gpa);
        }
        if let Some(avg) = summary.historical_average {
            println!("Historical average GPA: {avg:.2}");
        }
    }

    if no_csv {
        return Ok(());
    }

    let output_path = resolve_output_path(output, &record_path, config)?;
    export_summary_csv(&engine, &record, &output_path).map_err(|e| {
        error!("CSV export failed for {}: {e}", output_path.display());
        format!("✗ Failed to export {}: {e}", output_path.display())
    })?;

    println!("✓ Summary exported to: {}", output_path.display());
    info!("Exported record summary to: {}", output_path.display());
    Ok(())
}

fn resolve_output_path(
    output: Option<&Path>,
    record_path: &Path,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(path) = output {
        return Ok(path.to_path_buf());
    }

    let exports_dir = PathBuf::from(&config.paths.exports_dir);
    std::fs::create_dir_all(&exports_dir).map_err(|e| {
        format!(
            "✗ Failed to create exports directory {}: {e}",
            exports_dir.display()
        )
    })?;

    let filename = record_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("record")
        .to_string();
    Ok(exports_dir.join(format!("{filename}_summary.csv")))
}

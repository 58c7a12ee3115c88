//! Forecast command handler
//!
//! Answers the three planning questions for a record: what GPA is needed to
//! reach a target CGPA, where an expected GPA would land the CGPA, and what
//! the historical per-semester average projects to.

use smart_gpa::config::Config;
use smart_gpa::engine::{EngineError, GradeEngine, Trend};
use smart_gpa::{error, info};
use std::path::Path;

/// Run the forecast command.
///
/// # Arguments
/// * `input_file` - Optional path to a record JSON file
/// * `target` - Optional target CGPA to solve the required GPA for
/// * `expected` - Optional expected GPA over the planned credits
/// * `planned_credits` - Hypothetical future credit load
/// * `config` - Configuration containing the default data file
pub fn run(
    input_file: Option<&Path>,
    target: Option<f32>,
    expected: Option<f32>,
    planned_credits: f32,
    config: &Config,
) {
    if let Err(err) = forecast(input_file, target, expected, planned_credits, config) {
        error!("Forecast failed: {err}");
        eprintln!("{err}");
    }
}

fn forecast(
    input_file: Option<&Path>,
    target: Option<f32>,
    expected: Option<f32>,
    planned_credits: f32,
    config: &Config,
) -> Result<(), String> {
    let record_path = super::resolve_record_path(input_file, config)?;
    let record = super::load_record(&record_path)?;
    info!("Record loaded: {}", record_path.display());

    let engine = GradeEngine::default();
    let totals = engine.cumulative_cgpa(&record.semesters);

    println!("\n=== CGPA Forecast ===\n");
    println!(
        "Current CGPA: {:.2} over {:.1} graded credits",
        totals.gpa, totals.total_credits
    );
    println!("Planned credits next term: {planned_credits:.1}");

    // Use the record's stored goal when no explicit target is given.
    let effective_target = target.or(record.gpa_goal);
    if let Some(goal) = effective_target {
        match engine.required_gpa(&totals, goal, planned_credits) {
            Ok(required) => {
                println!("\nTo reach a CGPA of {goal:.2}:");
                println!("  Required GPA: {required:.2}");
            }
            Err(EngineError::Impossible { required, max }) => {
                println!("\nTo reach a CGPA of {goal:.2}:");
                println!(
                    "  ✗ Not reachable over {planned_credits:.1} credits \
                     (would require {required:.2}, maximum is {max:.2})"
                );
            }
            Err(e) => return Err(format!("✗ {e}")),
        }
    }

    if let Some(gpa) = expected {
        let resulting = engine
            .resulting_cgpa(&totals, gpa, planned_credits)
            .map_err(|e| format!("✗ {e}"))?;
        let trend = Trend::of(totals.gpa, resulting);
        println!("\nWith a GPA of {gpa:.2} over the planned credits:");
        println!("  Resulting CGPA: {resulting:.2} ({trend})");
    }

    match engine.historical_trend_forecast(&record.semesters, &totals, planned_credits) {
        Ok(projected) => {
            let average = engine
                .historical_average_gpa(&record.semesters)
                .unwrap_or(projected);
            let trend = Trend::of(totals.gpa, projected);
            println!("\nIf the historical average ({average:.2}) holds:");
            println!("  Projected CGPA: {projected:.2} ({trend})");
        }
        Err(EngineError::NotAvailable) => {
            println!("\nHistorical projection: n/a (no graded semesters yet)");
        }
        Err(e) => return Err(format!("✗ {e}")),
    }

    Ok(())
}

//! Grade command handler

use smart_gpa::engine::GradeEngine;
use smart_gpa::error;
use smart_gpa::models::Grade;
use std::str::FromStr;

/// Run the grade command.
///
/// A numeric value is converted percentage -> letter -> grade points; a
/// letter is looked up directly.
pub fn run(value: &str) {
    if let Err(err) = convert(value) {
        error!("Grade lookup failed for '{value}': {err}");
        eprintln!("{err}");
    }
}

fn convert(value: &str) -> Result<(), String> {
    let engine = GradeEngine::default();

    if let Ok(percentage) = value.parse::<f32>() {
        let letter = engine
            .letter_from_percentage(percentage)
            .map_err(|e| format!("✗ {e}"))?;
        let points = engine.grade_point(letter);
        println!("✓ {percentage}% -> {letter} ({points:.2} grade points)");
        return Ok(());
    }

    let letter = Grade::from_str(value).map_err(|e| format!("✗ {e}"))?;
    let points = engine.grade_point(letter);
    println!("✓ {letter} = {points:.2} grade points");
    Ok(())
}

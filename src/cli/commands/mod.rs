//! CLI command handlers for `SmartGPA`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod forecast;
pub mod grade;
pub mod report;
pub mod summary;

use smart_gpa::config::Config;
use smart_gpa::error;
use smart_gpa::record::AcademicRecord;
use std::path::{Path, PathBuf};

/// Resolve the record file to operate on: an explicit path wins, otherwise
/// the configured `data_file` is used.
pub fn resolve_record_path(input_file: Option<&Path>, config: &Config) -> Result<PathBuf, String> {
    if let Some(path) = input_file {
        return Ok(path.to_path_buf());
    }

    if config.paths.data_file.is_empty() {
        return Err(
            "✗ No record file provided and no data_file configured. \
             Pass a FILE argument or run `smartgpa config set data_file <path>`."
                .to_string(),
        );
    }

    Ok(PathBuf::from(&config.paths.data_file))
}

/// Load a record from disk, mapping failures to a printable message.
pub fn load_record(path: &Path) -> Result<AcademicRecord, String> {
    AcademicRecord::load(path).map_err(|e| {
        error!("Failed to load record {}: {e}", path.display());
        format!("✗ Failed to load {}: {e}", path.display())
    })
}

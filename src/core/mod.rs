//! Core module for the `SmartGPA` domain logic

pub mod config;
pub mod engine;
pub mod export;
pub mod models;
pub mod record;
pub mod report;

/// Returns the current version of the `SmartGPA` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

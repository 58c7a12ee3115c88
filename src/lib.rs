//! Shared library for `SmartGPA`
//! Contains the grade aggregation engine, academic record model, and
//! supporting functionality used by the CLI.

pub mod core;
pub mod logger;

pub use self::core::*;

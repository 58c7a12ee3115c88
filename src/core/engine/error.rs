//! Engine error taxonomy

use thiserror::Error;

/// Recoverable signals returned by the engine's query functions.
///
/// Nothing here is fatal; callers decide whether to show "N/A", a warning,
/// or a clamped value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A non-numeric, negative, or zero value was supplied where a positive
    /// credit load or valid percentage is required.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The inputs were well-formed but the answer lies outside the
    /// representable grade-point range.
    #[error("required GPA of {required:.2} exceeds the {max:.2} maximum")]
    Impossible {
        /// The grade-point average the request would demand
        required: f32,
        /// The highest grade point achievable on the scale
        max: f32,
    },

    /// The data needed to answer meaningfully does not exist; distinct from
    /// a true zero result.
    #[error("no graded history available")]
    NotAvailable,
}

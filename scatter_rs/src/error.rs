//! Error types for kernel placement.

use thiserror::Error;

/// Rejected placement configuration.
///
/// The generator itself never fails; every variant here is raised while
/// constructing a [`crate::SafeZone`], a [`crate::Scatter`] or a
/// [`crate::FixedSequence`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScatterError {
    #[error("safe zone bound {name} = {value} lies outside the 0..=100 plane")]
    ZoneOutOfPlane { name: &'static str, value: f64 },

    #[error("safe zone is empty on the {axis} axis: min {min} must be below max {max}")]
    EmptyZone {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{field} span {min}..{max} is inverted or not finite")]
    InvalidSpan {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{field} span {min}..{max} must stay within {lo}..={hi}")]
    SpanOutOfBounds {
        field: &'static str,
        min: f64,
        max: f64,
        lo: f64,
        hi: f64,
    },

    #[error("fixed random sequence needs at least one value")]
    EmptySequence,

    #[error("fixed random value {0} is outside [0, 1)")]
    UnitOutOfRange(f64),
}

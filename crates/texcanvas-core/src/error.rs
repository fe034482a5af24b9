//! Error types for the core value types.
//!
//! [`ColorError`] is returned when a color string cannot be turned into a
//! [`HexColor`](crate::color::HexColor). [`GeometryError`] is returned by
//! operations that would otherwise divide by zero or by nothing: autoscaling an
//! empty or coincident point set, and normalizing a zero-length direction.

use thiserror::Error;

/// A color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("hex color `{0}` must have exactly 6 digits")]
    InvalidLength(String),

    #[error("hex color `{0}` contains a non-hexadecimal digit")]
    InvalidDigit(String),

    #[error("unrecognized color `{input}`: {reason}")]
    Unrecognized { input: String, reason: String },
}

/// A geometric input has no well-defined result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("cannot autoscale an empty point set")]
    EmptyPointSet,

    #[error("cannot autoscale: all points coincide, the bounding box has zero extent")]
    CoincidentPoints,

    #[error("point set contains a non-finite coordinate")]
    NonFiniteCoordinate,

    #[error("target size must be positive and finite, got {0}")]
    InvalidTargetSize(f64),

    #[error("cone center and orientation point coincide, direction has zero length")]
    ZeroLengthDirection,
}

impl GeometryError {
    /// Returns `true` for errors caused by the data itself rather than by how
    /// the caller invoked the operation.
    ///
    /// An empty point set or a bad target size is caller misuse; coincident
    /// points, non-finite coordinates and a zero-length cone direction are
    /// degenerate data.
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Self::CoincidentPoints | Self::NonFiniteCoordinate | Self::ZeroLengthDirection
        )
    }
}

//! Error types for geometry validation.

use crate::grid::Axis;
use thiserror::Error;

/// Errors from validating a [`crate::GridGeometry`].
///
/// Snapping itself is infallible; validation exists so a host can reject
/// malformed geometry at construction instead of feeding it to the snapper.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("gutter must be non-negative, got {gutter}")]
    NegativeGutter { gutter: f64 },

    #[error("segment length on the {axis:?} axis must be positive, got {value}")]
    NonPositiveSegment { axis: Axis, value: f64 },
}

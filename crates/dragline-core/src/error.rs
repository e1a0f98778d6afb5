#![forbid(unsafe_code)]

//! Validation errors for geometric input.

use thiserror::Error;

/// A rectangle supplied by the drag/resize layer failed validation.
///
/// The engine fails fast on malformed geometry rather than letting NaN or
/// negative-length guide lines propagate into the render layer.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// A coordinate or size is NaN or infinite.
    #[error("rectangle field `{field}` is not finite: {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// Width or height is negative.
    #[error("rectangle {dimension} is negative: {value}")]
    NegativeSize { dimension: &'static str, value: f64 },
}

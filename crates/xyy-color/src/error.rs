//! Error types for color operations.
//!
//! The transforms are plain arithmetic; the only failure modes are an
//! undefined inverse chromaticity projection and malformed pipelines.

use thiserror::Error;

/// Color operation error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// xyY with `y == 0` has no XYZ equivalent (division by zero).
    #[error("chromaticity y is zero (x={x}, y={y}, Y={luminance}): XYZ is undefined")]
    ZeroChromaticityY {
        /// Chromaticity x.
        x: f64,
        /// Chromaticity y.
        y: f64,
        /// Luminance Y.
        luminance: f64,
    },

    /// Input contains NaN or infinity.
    #[error("non-finite input: {0}")]
    NonFinite(String),

    /// Pipeline steps do not chain.
    #[error("invalid pipeline: {0}")]
    InvalidPipeline(String),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

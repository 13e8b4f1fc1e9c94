//! Defines [`PolylabelError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PolylabelError {
    /// A ring is not closed, has fewer than three distinct vertices, or holds non-finite
    /// coordinates.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The polygon (or every part of a multi-polygon) encloses zero area, so no pole of
    /// inaccessibility exists.
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Incorrect geometry type for operation
    #[error("Incorrect geometry type for operation: {0}")]
    IncorrectGeometryType(String),

    /// The requested precision is not a finite, strictly positive number.
    #[error("Precision must be finite and greater than zero, got {0}")]
    InvalidPrecision(f64),

    /// Search options that cannot be honored, such as an iteration cap of zero.
    #[error("Invalid search options: {0}")]
    InvalidOptions(String),

    /// [serde_json::Error]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, PolylabelError>;

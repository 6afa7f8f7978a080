//! Error types for asciisolid

use thiserror::Error;

/// Main error type for asciisolid operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    #[error("Invalid glyph ramp: {0}")]
    InvalidRamp(String),

    #[error("Point/normal count mismatch: {points} points, {normals} normals")]
    MismatchedNormals { points: usize, normals: usize },
}

/// Result type alias for asciisolid operations
pub type Result<T> = std::result::Result<T, Error>;

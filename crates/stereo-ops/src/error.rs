//! Error types for stereo operators.

use thiserror::Error;

/// Error type for stereo operator evaluation.
#[derive(Error, Debug)]
pub enum OpsError {
    /// A row-level failure from the core types or an upstream source.
    #[error(transparent)]
    Core(#[from] stereo_core::Error),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid frame or region dimensions.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Result type for stereo operator evaluation.
pub type OpsResult<T> = Result<T, OpsError>;

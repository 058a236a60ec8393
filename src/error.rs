//! Error types for field construction and configuration loading.

use thiserror::Error;

/// Errors raised when building or retuning a [`FluidField`](crate::FluidField).
#[derive(Debug, Error, PartialEq)]
pub enum FluidError {
    /// Grid has no interior cells to solve on.
    #[error("grid size {size} is below the minimum of {min}")]
    GridTooSmall { size: usize, min: usize },

    /// Render target has a zero dimension.
    #[error("render surface {width}x{height} has no area")]
    EmptySurface { width: usize, height: usize },

    /// A solver parameter is negative, non-finite or zero where it must not be.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Grid size is fixed for the lifetime of a field.
    #[error("grid size cannot change from {current} to {requested}")]
    GridSizeChanged { current: usize, requested: usize },
}

/// Errors raised while reading `fluid-backdrop.yaml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

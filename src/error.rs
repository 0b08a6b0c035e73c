//! Error types for raster2d operations.
//!
//! Rasterization and region fill never fail: out-of-bounds writes and
//! degenerate input are absorbed as no-ops. Errors only come from building
//! a canvas or loading configuration.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in raster2d operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (reading a configuration file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Raw pixel data does not match the requested dimensions.
    #[error("Buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferLengthMismatch {
        /// Byte count implied by width * height * 4.
        expected: usize,
        /// Byte count actually supplied.
        actual: usize,
    },

    /// Configuration could not be parsed.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml_ng::Error),

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_buffer_length_mismatch() {
        let err = Error::BufferLengthMismatch {
            expected: 400,
            actual: 399,
        };
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("399"));
    }

    #[test]
    fn test_invalid_config_message() {
        let err = Error::InvalidConfig("curve_step_degrees must be positive".into());
        assert!(err.to_string().starts_with("Invalid config"));
    }
}

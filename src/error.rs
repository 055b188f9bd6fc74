//! Error types for scalar-evo
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for invalid run configurations
///
/// Each variant names the offending field and the constraint it violated.
/// Validation runs eagerly, before any fitness evaluation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Population too small for tournament selection over the better half
    #[error("popSize must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// A probability or ratio field outside [0, 1]
    #[error("{field} must be within [0, 1], got {value}")]
    RateOutOfRange { field: &'static str, value: f64 },

    /// Search bounds that are inverted, equal, or non-finite
    #[error("bounds must satisfy minBound < maxBound and be finite, got [{min}, {max}]")]
    InvalidBounds { min: f64, max: f64 },
}

/// Error type for statistics sink failures
#[derive(Debug, Error)]
pub enum SinkError {
    /// Could not create the sink target
    #[error("failed to create stats sink at {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing a stats row failed
    #[error("failed to write stats row: {0}")]
    Write(#[from] csv::Error),

    /// Flushing a completed row to the target failed
    #[error("failed to flush stats sink at {path}: {source}")]
    Flush {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Top-level error type for evolution runs
#[derive(Debug, Error)]
pub enum GaError {
    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Stats sink failure
    #[error("stats sink error: {0}")]
    Sink(#[from] SinkError),
}

/// Result type alias for evolution operations
pub type GaResult<T> = Result<T, GaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::PopulationTooSmall(1);
        assert_eq!(err.to_string(), "popSize must be at least 2, got 1");

        let err = ConfigError::RateOutOfRange {
            field: "mutationRate",
            value: 1.5,
        };
        assert_eq!(
            err.to_string(),
            "mutationRate must be within [0, 1], got 1.5"
        );

        let err = ConfigError::InvalidBounds {
            min: 5.0,
            max: -5.0,
        };
        assert!(err.to_string().contains("[5, -5]"));
    }

    #[test]
    fn test_ga_error_from_config_error() {
        let config_err = ConfigError::PopulationTooSmall(0);
        let ga_err: GaError = config_err.into();
        assert!(matches!(ga_err, GaError::Config(_)));
    }

    #[test]
    fn test_sink_error_names_target() {
        let err = SinkError::Flush {
            path: PathBuf::from("output.csv"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        let msg = err.to_string();
        assert!(msg.contains("output.csv"));
        assert!(msg.contains("disk full"));
    }
}

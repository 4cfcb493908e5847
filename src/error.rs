// src/error.rs
use std::fmt;

/// Custom error types for the sde-order library
#[derive(Debug, Clone)]
pub enum SdeError {
    /// Time grid cannot support the requested operation
    InvalidGrid { reason: String },

    /// Supplied increment sequence does not match the grid's interval count
    IncrementCountMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// A pairwise trajectory distance left the domain of the logarithm
    NumericDomain { quantity: String, value: f64 },

    /// Integrator produced a trajectory with no states
    EmptyTrajectory { level: String },
}

impl fmt::Display for SdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdeError::InvalidGrid { reason } => {
                write!(f, "Invalid time grid: {}", reason)
            }
            SdeError::IncrementCountMismatch {
                name,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Increment sequence '{}' has {} samples, expected {}",
                    name, actual, expected
                )
            }
            SdeError::NumericDomain { quantity, value } => {
                write!(
                    f,
                    "Numeric domain error: {} = {:e} has no defined logarithm; \
                     the convergence rate is undefined for this realization",
                    quantity, value
                )
            }
            SdeError::EmptyTrajectory { level } => {
                write!(
                    f,
                    "Integrator returned an empty trajectory on the {} grid",
                    level
                )
            }
        }
    }
}

impl std::error::Error for SdeError {}

/// Result type alias for sde-order operations
pub type SdeResult<T> = Result<T, SdeError>;

/// Validation utilities
pub mod validation {
    use super::{SdeError, SdeResult};

    /// Number of intervals defined by a grid of `points` time points.
    pub fn interval_count(points: usize) -> SdeResult<usize> {
        if points < 2 {
            Err(SdeError::InvalidGrid {
                reason: format!("need at least 2 time points, got {}", points),
            })
        } else {
            Ok(points - 1)
        }
    }

    /// Validate that an interval count can be halved once
    pub fn validate_even_intervals(intervals: usize) -> SdeResult<()> {
        if intervals == 0 || intervals % 2 != 0 {
            Err(SdeError::InvalidGrid {
                reason: format!(
                    "interval count must be even and non-zero to merge increment pairs, got {}",
                    intervals
                ),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that an interval count can be halved twice
    pub fn validate_intervals_divisible_by_four(intervals: usize) -> SdeResult<()> {
        if intervals == 0 || intervals % 4 != 0 {
            Err(SdeError::InvalidGrid {
                reason: format!(
                    "interval count must be a non-zero multiple of 4 for three nested resolutions, got {}",
                    intervals
                ),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that an increment sequence matches its grid
    pub fn validate_increment_count(name: &str, expected: usize, actual: usize) -> SdeResult<()> {
        if expected != actual {
            Err(SdeError::IncrementCountMismatch {
                name: name.to_string(),
                expected,
                actual,
            })
        } else {
            Ok(())
        }
    }
}

//! Error types for Equidad operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Equidad operations.
///
/// Provides detailed context about failures including length mismatches,
/// malformed sample weights, non-binary inputs, and bad aggregation tokens.
///
/// # Examples
///
/// ```
/// use equidad::error::EquidadError;
///
/// let err = EquidadError::LengthMismatch {
///     expected: 10,
///     actual: 8,
/// };
/// assert!(err.to_string().contains("length mismatch"));
/// ```
#[derive(Debug)]
pub enum EquidadError {
    /// Parallel sample vectors don't have the same length.
    LengthMismatch {
        /// Length of the first vector seen
        expected: usize,
        /// Offending length
        actual: usize,
    },

    /// Sample weight vector is malformed (wrong length, negative or
    /// non-finite entries).
    InvalidSampleWeight {
        /// Description of the defect
        message: String,
    },

    /// `y_true` or `y_pred` does not take exactly the two values {0, 1}.
    NonBinaryTarget {
        /// Number of distinct values observed
        distinct: usize,
    },

    /// Sensitive attribute has other than exactly two distinct values.
    NonBinarySensitiveFeature {
        /// Number of distinct values observed
        distinct: usize,
    },

    /// Aggregation token not recognized when parsing an `Aggregate`.
    InvalidAggregate {
        /// Token provided by the caller
        token: String,
    },

    /// Score slice passed to an aggregator does not have exactly two
    /// elements.
    ScoreArity {
        /// Offending length
        actual: usize,
    },
}

impl fmt::Display for EquidadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquidadError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Sample vector length mismatch: expected {expected}, got {actual}"
                )
            }
            EquidadError::InvalidSampleWeight { message } => {
                write!(f, "Invalid sample weight: {message}")
            }
            EquidadError::NonBinaryTarget { distinct } => {
                write!(
                    f,
                    "Non-binary target is currently not supported: \
                     observed {distinct} distinct value(s), expected exactly {{0, 1}}"
                )
            }
            EquidadError::NonBinarySensitiveFeature { distinct } => {
                write!(
                    f,
                    "Non-binary sensitive feature is currently not supported: \
                     observed {distinct} distinct value(s), expected exactly 2"
                )
            }
            EquidadError::InvalidAggregate { token } => {
                write!(
                    f,
                    "'aggregate' must be one of 'none', 'diff', 'ratio': got '{token}'"
                )
            }
            EquidadError::ScoreArity { actual } => {
                write!(
                    f,
                    "Score vector must have exactly 2 elements, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for EquidadError {}

impl EquidadError {
    /// Create a sample weight error with descriptive context.
    #[must_use]
    pub fn invalid_sample_weight(message: impl Into<String>) -> Self {
        Self::InvalidSampleWeight {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, EquidadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let err = EquidadError::LengthMismatch {
            expected: 10,
            actual: 8,
        };
        assert!(err.to_string().contains("length mismatch"));
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains('8'));
    }

    #[test]
    fn test_invalid_sample_weight_display() {
        let err = EquidadError::invalid_sample_weight("negative weight -1 at index 3");
        assert!(err.to_string().contains("Invalid sample weight"));
        assert!(err.to_string().contains("index 3"));
    }

    #[test]
    fn test_non_binary_target_display() {
        let err = EquidadError::NonBinaryTarget { distinct: 3 };
        let msg = err.to_string();
        assert!(msg.contains("Non-binary target"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_non_binary_sensitive_display() {
        let err = EquidadError::NonBinarySensitiveFeature { distinct: 1 };
        let msg = err.to_string();
        assert!(msg.contains("Non-binary sensitive feature"));
        assert!(msg.contains('1'));
    }

    #[test]
    fn test_invalid_aggregate_display() {
        let err = EquidadError::InvalidAggregate {
            token: "mean".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'aggregate'"));
        assert!(msg.contains("mean"));
    }

    #[test]
    fn test_score_arity_display() {
        let err = EquidadError::ScoreArity { actual: 3 };
        let msg = err.to_string();
        assert!(msg.contains("exactly 2"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_error_debug_impl() {
        let err = EquidadError::ScoreArity { actual: 0 };
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("ScoreArity"));
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<EquidadError>();
        assert_sync::<EquidadError>();
    }
}

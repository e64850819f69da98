//! Time-series error types.

use thiserror::Error;

/// Errors produced by the time-series core.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("index {index} is out of range for a series of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("times length {n_times} does not match values length {n_values}")]
    LengthMismatch { n_times: usize, n_values: usize },

    #[error("{op} requires at least one sample")]
    EmptyData { op: &'static str },

    #[error("{lhs} and {rhs} must have the same time points")]
    Misaligned { lhs: String, rhs: String },

    #[error("{op} is not supported for an operand without time data")]
    Unsupported { op: &'static str },
}

/// Result type for time-series operations.
pub type Result<T> = std::result::Result<T, SeriesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display() {
        let error = SeriesError::OutOfRange { index: 7, len: 3 };
        assert_eq!(
            error.to_string(),
            "index 7 is out of range for a series of length 3"
        );
    }

    #[test]
    fn misaligned_display_names_both_operands() {
        let error = SeriesError::Misaligned {
            lhs: "[(0, 1)]".to_string(),
            rhs: "[(1, 1)]".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "[(0, 1)] and [(1, 1)] must have the same time points"
        );
    }

    #[test]
    fn unsupported_is_distinct_from_misaligned() {
        let error = SeriesError::Unsupported { op: "add" };
        assert!(matches!(error, SeriesError::Unsupported { .. }));
        assert_eq!(
            error.to_string(),
            "add is not supported for an operand without time data"
        );
    }
}

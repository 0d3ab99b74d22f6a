//! Error types for presence computation
//!
//! Every error is fatal for the request that raised it: malformed input
//! invalidates the whole computation, so nothing is returned alongside it.

use thiserror::Error;

/// Errors surfaced by [`compute_total_presence`](crate::compute_total_presence)
/// and the normalisation boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresenceError {
    #[error("missing required key '{0}'")]
    MissingKey(String),

    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Reasons a timestamp sequence or bound is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("timestamp sequence has odd length {len}, expected enter/exit pairs")]
    OddLength { len: usize },

    #[error("bounding interval needs exactly two timestamps, found {len}")]
    LessonArity { len: usize },

    #[error("bounding interval is inverted: lo {lo} > hi {hi}")]
    InvertedBound { lo: u64, hi: u64 },

    #[error("pair {index} is inverted: enter {enter} > exit {exit}")]
    InvertedPair { index: usize, enter: u64, exit: u64 },
}

/// Result type for presence operations
pub type Result<T> = std::result::Result<T, PresenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message_names_key() {
        let err = PresenceError::MissingKey("tutor".to_string());
        assert_eq!(err.to_string(), "missing required key 'tutor'");
    }

    #[test]
    fn test_invalid_input_converts() {
        let err: PresenceError = InvalidInput::OddLength { len: 3 }.into();
        assert!(matches!(
            err,
            PresenceError::InvalidInput(InvalidInput::OddLength { len: 3 })
        ));
        assert!(err.to_string().starts_with("invalid input: "));
    }

    #[test]
    fn test_inverted_pair_message() {
        let err = InvalidInput::InvertedPair {
            index: 2,
            enter: 90,
            exit: 80,
        };
        assert_eq!(err.to_string(), "pair 2 is inverted: enter 90 > exit 80");
    }
}

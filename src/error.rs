//! Error types for enumerable operations.
//!
//! Only contract violations are reported as errors. Lookups that may find
//! nothing (`pop`, `at`, `first`, ...) return `Option` instead.

use thiserror::Error;

/// Errors raised by enumerable operations and transform functions.
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
///
/// let mut sequence: Sequence<i32> = (1..=3).collect();
/// let error = sequence.splice(2, 5).unwrap_err();
/// assert_eq!(
///     error,
///     EnumerableError::OutOfRange { index: 2, count: 5, length: 3 }
/// );
/// assert_eq!(
///     error.to_string(),
///     "splice range 2..+5 is out of bounds for length 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerableError {
    /// An argument violates the operation's contract.
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// A `splice` range does not fit inside the receiver.
    #[error("splice range {index}..+{count} is out of bounds for length {length}")]
    OutOfRange {
        /// Requested start index.
        index: usize,
        /// Requested number of elements.
        count: usize,
        /// Length of the receiver at the time of the call.
        length: usize,
    },
}

impl EnumerableError {
    /// Builds the error reported when a required callable is absent.
    pub(crate) const fn missing_callable(parameter: &'static str) -> Self {
        Self::InvalidArgument {
            parameter,
            reason: "parameter can not be absent",
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EnumerableError>;

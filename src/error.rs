use thiserror::Error;

/// Errors raised by dataset construction and by the objective functions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An operation was called out of the `evaluate -> gradient -> hessian_vector_product` order
    /// or for a weight vector other than the one last passed to `evaluate`.
    #[error("`{operation}` is not allowed in state {state}")]
    InvalidState {
        /// Name of the rejected operation
        operation: &'static str,
        /// Description of the cache state at the time of the call
        state: String,
    },

    /// A buffer does not have the expected length.
    #[error("{what} has length {actual}, expected {expected}")]
    DimensionMismatch {
        /// Name of the offending buffer
        what: &'static str,
        /// Required length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// A sparse row violates the dataset invariants.
    #[error("invalid feature at row {row}, position {position}: {reason}")]
    InvalidFeature {
        /// Instance index (0-based)
        row: usize,
        /// Position of the record inside the row (0-based)
        position: usize,
        /// Violated condition
        reason: String,
    },

    /// A parameter is out of its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No solver is registered for the numeric id.
    #[error("found no solver type for id {0}")]
    UnknownSolver(i32),
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Checks that a buffer has the expected length.
pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            what,
            expected,
            actual,
        })
    }
}

//! Errors reported by validating partition construction.

use thiserror::Error;

/// Rejected partition configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PartitionError {
    /// Space extent is zero or negative on at least one axis.
    #[error("space extent must be positive, got {width}x{height}")]
    InvalidSpace {
        /// Requested space width
        width: i32,
        /// Requested space height
        height: i32,
    },

    /// Cell ids would not fit in an `i32`.
    #[error("{columns}x{rows} cells exceed the i32 id range")]
    TooManyCells {
        /// Column count the configuration produces
        columns: i32,
        /// Row count the configuration produces
        rows: i32,
    },
}

/// Result type for partition construction.
pub type PartitionResult<T> = Result<T, PartitionError>;

//! Error types.
//!
//! Behavioural failures (unmeasurable anchor, out-of-range index, scroll
//! failure) are absorbed by the widget. Only configuration problems and the
//! host list's scroll failures have error types.

use thiserror::Error;

/// Invalid dropdown configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("visible row count must be at least 1")]
    ZeroVisibleRows,

    #[error("row height must be positive and finite, got {0}")]
    InvalidRowHeight(f32),

    #[error("hairline width must be non-negative and finite, got {0}")]
    InvalidHairlineWidth(f32),

    #[error("default index {index} is out of range for {len} options")]
    DefaultIndexOutOfRange {
        /// Configured default index.
        index: usize,
        /// Number of options it was checked against.
        len: usize,
    },
}

/// Failure reported by a host list when asked to scroll to a row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrollError {
    /// The list has not been laid out yet, so row offsets are unknown.
    #[error("cannot scroll to row {index}: list is not laid out yet")]
    NotLaidOut { index: usize },

    #[error("row {index} is out of bounds for {len} rows")]
    OutOfBounds { index: usize, len: usize },
}

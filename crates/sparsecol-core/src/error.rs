//! Error types for the paged store.
//!
//! Two families exist: invalid parameters (a caller broke the access
//! contract) and allocation failures. The infallible store API panics
//! with these messages; the `try_*` variants return them.

use std::error::Error;
use std::fmt;

use crate::id::{ColumnId, PageNumber};

/// Errors that can occur during schema construction or store access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A column outside the schema was addressed.
    UnknownColumn {
        /// The requested column.
        column: ColumnId,
        /// Number of columns in the schema.
        column_count: usize,
    },
    /// The element size passed with an access does not match the
    /// size recorded for the column.
    SizeMismatch {
        /// The addressed column.
        column: ColumnId,
        /// Element size recorded in the schema.
        expected: usize,
        /// Element size supplied by the caller.
        requested: usize,
    },
    /// Two columns were registered under the same name.
    DuplicateColumn {
        /// The repeated name.
        name: String,
    },
    /// The page would lie beyond the configured page limit.
    CapacityExceeded {
        /// The page that was requested.
        page: PageNumber,
        /// Configured maximum number of pages.
        max_pages: u32,
    },
    /// A page buffer could not be allocated.
    OutOfMemory {
        /// Number of bytes requested.
        requested: usize,
    },
    /// Store configuration is invalid.
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

impl StoreError {
    /// Whether this error is a caller contract violation (bad column or
    /// bad element size) rather than a resource failure.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Self::UnknownColumn { .. } | Self::SizeMismatch { .. }
        )
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColumn {
                column,
                column_count,
            } => {
                write!(
                    f,
                    "invalid parameter: column {column} out of range (schema has {column_count} columns)"
                )
            }
            Self::SizeMismatch {
                column,
                expected,
                requested,
            } => {
                write!(
                    f,
                    "invalid parameter: column {column} holds {expected}-byte elements, got size {requested}"
                )
            }
            Self::DuplicateColumn { name } => {
                write!(f, "duplicate column name '{name}'")
            }
            Self::CapacityExceeded { page, max_pages } => {
                write!(f, "page {page} exceeds the limit of {max_pages} pages")
            }
            Self::OutOfMemory { requested } => {
                write!(f, "out of memory: failed to allocate {requested} bytes")
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid store config: {reason}")
            }
        }
    }
}

impl Error for StoreError {}

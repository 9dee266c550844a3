//! Store configuration parameters.

use sparsecol_core::StoreError;

/// Configuration for a [`PagedStore`](crate::PagedStore).
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Highest number of pages the table may grow to.
    ///
    /// Default: 1_048_576, enough to address every `u32` index. Lower it
    /// to bound the address range a store accepts.
    pub max_pages: u32,

    /// Page-table slots reserved up front.
    ///
    /// Default: 0. Each slot is one `Option<Page>`; reserving avoids
    /// regrowing the table when the caller knows its index range.
    pub initial_table_capacity: usize,
}

impl StoreConfig {
    /// Default page limit: `u32::MAX / PAGE_SIZE + 1`.
    pub const DEFAULT_MAX_PAGES: u32 = 1 << 20;

    /// Default page-table reservation.
    pub const DEFAULT_INITIAL_TABLE_CAPACITY: usize = 0;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            max_pages: Self::DEFAULT_MAX_PAGES,
            initial_table_capacity: Self::DEFAULT_INITIAL_TABLE_CAPACITY,
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.max_pages == 0 {
            return Err(StoreError::InvalidConfig {
                reason: "max_pages must be at least 1".to_string(),
            });
        }
        if self.max_pages > Self::DEFAULT_MAX_PAGES {
            return Err(StoreError::InvalidConfig {
                reason: format!(
                    "max_pages ({}) exceeds the addressable page count ({})",
                    self.max_pages,
                    Self::DEFAULT_MAX_PAGES
                ),
            });
        }
        if self.initial_table_capacity > self.max_pages as usize {
            return Err(StoreError::InvalidConfig {
                reason: format!(
                    "initial_table_capacity ({}) exceeds max_pages ({})",
                    self.initial_table_capacity, self.max_pages
                ),
            });
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! Strongly-typed identifiers for columns and pages.

use std::fmt;

/// Identifies a column within a store schema.
///
/// Columns are registered when the schema is built and assigned sequential
/// IDs. `ColumnId(n)` is the n-th column of the schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnId(pub u32);

impl ColumnId {
    /// The column position as a `usize`, for indexing.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ColumnId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Number of the page a logical index falls into.
///
/// Page `p` covers logical indices `p * PAGE_SIZE .. (p + 1) * PAGE_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(pub u32);

impl PageNumber {
    /// The page number as a `usize`, for indexing into the page table.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PageNumber {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

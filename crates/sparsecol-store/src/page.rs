//! A page: one zero-filled buffer per column.
//!
//! A [`Page`] is the unit of allocation. It holds `PAGE_SIZE` slots for
//! every column of the schema, is zero-filled when created, and its
//! buffers are never resized. A page either has all of its column
//! buffers or does not exist; there is no half-built page.

use smallvec::SmallVec;
use sparsecol_core::{ColumnId, ColumnSchema, StoreError};

use crate::addr::{PageAddr, PAGE_SIZE};

/// Backing storage for `PAGE_SIZE` consecutive indices across all columns.
pub struct Page {
    /// One buffer per column, `PAGE_SIZE * element_size` bytes each.
    columns: SmallVec<[Box<[u8]>; 4]>,
}

impl Page {
    /// Allocate a zero-filled page for `schema`.
    ///
    /// Allocation failure aborts the process, like any other infallible
    /// Rust allocation. Use [`Page::try_new`] to observe it instead.
    ///
    /// # Panics
    ///
    /// Panics with the [`StoreError::OutOfMemory`] message if a column
    /// buffer's byte length does not fit in `usize`.
    pub fn new(schema: &ColumnSchema) -> Self {
        let columns = schema
            .sizes()
            .iter()
            .map(|&size| match buffer_len(size) {
                Ok(len) => vec![0u8; len].into_boxed_slice(),
                Err(err) => panic!("{err}"),
            })
            .collect();
        Self { columns }
    }

    /// Allocate a zero-filled page, reporting allocation failure.
    ///
    /// Buffers are reserved one column at a time. If any reservation
    /// fails, the buffers already built are dropped before the error is
    /// returned, so a failed call leaks nothing.
    pub fn try_new(schema: &ColumnSchema) -> Result<Self, StoreError> {
        let mut columns = SmallVec::with_capacity(schema.column_count());
        for &size in schema.sizes() {
            let len = buffer_len(size)?;
            let mut buf = Vec::new();
            buf.try_reserve_exact(len)
                .map_err(|_| StoreError::OutOfMemory { requested: len })?;
            buf.resize(len, 0);
            columns.push(buf.into_boxed_slice());
        }
        Ok(Self { columns })
    }

    /// Number of column buffers.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The whole buffer of one column.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of range.
    pub fn column(&self, column: ColumnId) -> &[u8] {
        &self.columns[column.index()]
    }

    /// The `size`-byte slot of `addr` in `column`.
    ///
    /// Only `addr.offset` is used; the caller has already picked the page.
    ///
    /// # Panics
    ///
    /// Panics if the slot lies outside the column buffer.
    pub fn slot(&self, column: ColumnId, addr: PageAddr, size: usize) -> &[u8] {
        &self.columns[column.index()][addr.byte_range(size)]
    }

    /// The `size`-byte slot of `addr` in `column`, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the slot lies outside the column buffer.
    pub fn slot_mut(&mut self, column: ColumnId, addr: PageAddr, size: usize) -> &mut [u8] {
        &mut self.columns[column.index()][addr.byte_range(size)]
    }

    /// Reset the slot of `addr` to zero bytes in every column.
    pub fn zero_slot(&mut self, addr: PageAddr, schema: &ColumnSchema) {
        for (buf, &size) in self.columns.iter_mut().zip(schema.sizes()) {
            buf[addr.byte_range(size)].fill(0);
        }
    }

    /// Memory held by this page's buffers in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.columns.iter().map(|buf| buf.len()).sum()
    }
}

/// Byte length of one column buffer of `size`-byte elements.
fn buffer_len(size: usize) -> Result<usize, StoreError> {
    PAGE_SIZE
        .checked_mul(size)
        .ok_or(StoreError::OutOfMemory { requested: usize::MAX })
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("columns", &self.columns.len())
            .field("bytes", &self.memory_bytes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparsecol_core::PageNumber;

    fn at(offset: usize) -> PageAddr {
        PageAddr { page: PageNumber(0), offset }
    }

    fn schema() -> ColumnSchema {
        ColumnSchema::from_sizes(&[4, 8, 1])
    }

    #[test]
    fn new_page_is_zero_filled() {
        let page = Page::new(&schema());
        assert_eq!(page.column_count(), 3);
        for col in 0..3 {
            assert!(page.column(ColumnId(col)).iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn buffers_hold_page_size_elements() {
        let page = Page::new(&schema());
        assert_eq!(page.column(ColumnId(0)).len(), 4 * PAGE_SIZE);
        assert_eq!(page.column(ColumnId(1)).len(), 8 * PAGE_SIZE);
        assert_eq!(page.column(ColumnId(2)).len(), PAGE_SIZE);
        assert_eq!(page.memory_bytes(), 13 * PAGE_SIZE);
    }

    #[test]
    fn try_new_matches_new() {
        let page = Page::try_new(&schema()).unwrap();
        assert_eq!(page.memory_bytes(), 13 * PAGE_SIZE);
        assert!(page.column(ColumnId(1)).iter().all(|&b| b == 0));
    }

    #[test]
    fn try_new_reports_unsatisfiable_allocation() {
        // A single element this wide cannot be reserved on any target.
        let schema = ColumnSchema::from_sizes(&[4, usize::MAX / PAGE_SIZE]);
        let err = Page::try_new(&schema).unwrap_err();
        assert!(matches!(err, StoreError::OutOfMemory { .. }));
    }

    #[test]
    #[should_panic(expected = "out of memory")]
    fn new_panics_when_buffer_length_overflows() {
        let schema = ColumnSchema::from_sizes(&[4, usize::MAX / PAGE_SIZE + 1]);
        let _ = Page::new(&schema);
    }

    #[test]
    fn try_new_reports_overflowing_buffer_length() {
        let schema = ColumnSchema::from_sizes(&[usize::MAX / PAGE_SIZE + 1]);
        assert_eq!(
            Page::try_new(&schema).unwrap_err(),
            StoreError::OutOfMemory { requested: usize::MAX }
        );
    }

    #[test]
    fn slot_covers_the_byte_range_of_its_address() {
        let mut page = Page::new(&schema());
        let addr = PageAddr::of(4096 + 300);
        page.slot_mut(ColumnId(1), addr, 8).fill(0xAB);
        let col = page.column(ColumnId(1));
        let range = addr.byte_range(8);
        assert!(col[range.clone()].iter().all(|&b| b == 0xAB));
        assert_eq!(col.iter().filter(|&&b| b != 0).count(), range.len());
    }

    #[test]
    fn slots_do_not_overlap() {
        let mut page = Page::new(&schema());
        page.slot_mut(ColumnId(0), at(0), 4).fill(0x11);
        page.slot_mut(ColumnId(0), at(1), 4).fill(0x22);
        assert_eq!(page.slot(ColumnId(0), at(0), 4), &[0x11; 4]);
        assert_eq!(page.slot(ColumnId(0), at(1), 4), &[0x22; 4]);
        assert_eq!(page.slot(ColumnId(0), at(2), 4), &[0; 4]);
    }

    #[test]
    fn last_slot_is_addressable() {
        let mut page = Page::new(&schema());
        page.slot_mut(ColumnId(1), at(PAGE_SIZE - 1), 8).fill(0xFF);
        let col = page.column(ColumnId(1));
        assert_eq!(&col[col.len() - 8..], &[0xFF; 8]);
    }

    #[test]
    fn zero_slot_clears_every_column() {
        let schema = schema();
        let mut page = Page::new(&schema);
        page.slot_mut(ColumnId(0), at(7), 4).fill(1);
        page.slot_mut(ColumnId(1), at(7), 8).fill(2);
        page.slot_mut(ColumnId(2), at(7), 1).fill(3);
        page.slot_mut(ColumnId(2), at(8), 1).fill(4);

        page.zero_slot(at(7), &schema);
        assert_eq!(page.slot(ColumnId(0), at(7), 4), &[0; 4]);
        assert_eq!(page.slot(ColumnId(1), at(7), 8), &[0; 8]);
        assert_eq!(page.slot(ColumnId(2), at(7), 1), &[0]);
        // Neighbour untouched.
        assert_eq!(page.slot(ColumnId(2), at(8), 1), &[4]);
    }

    #[test]
    fn empty_schema_yields_empty_page() {
        let page = Page::new(&ColumnSchema::default());
        assert_eq!(page.column_count(), 0);
        assert_eq!(page.memory_bytes(), 0);
    }
}

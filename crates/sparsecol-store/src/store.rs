//! The paged store: schema, page table and the access contract.
//!
//! [`PagedStore`] owns its [`ColumnSchema`], a [`PageTable`] and a
//! caller-maintained `count`. Every access translates the logical index
//! into a [`PageAddr`] and then into a byte slot of the requested column.
//!
//! # Lifecycle
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`new`](PagedStore::new) | copy the column sizes, empty table, `count = 0` |
//! | [`init`](PagedStore::init) | release all pages, install a fresh schema |
//! | [`clear`](PagedStore::clear) | release all pages, `count = 0`, keep schema |
//! | [`deinit`](PagedStore::deinit) | drop the schema, then `clear` |
//! | `drop` | release everything |
//!
//! After `deinit` the schema is empty, so every access is rejected as an
//! invalid parameter until `init` is called again.

use log::{debug, trace, warn};
use sparsecol_core::{ColumnId, ColumnSchema, PageNumber, StoreError};

use crate::addr::PageAddr;
use crate::config::StoreConfig;
use crate::page::Page;
use crate::table::PageTable;

/// Sparse, paged, multi-column storage addressed by a `u32` index.
///
/// Mutation takes `&mut self`, so the borrow checker enforces a single
/// writer. There is no internal synchronisation; wrap the store in a
/// lock to share it between threads.
#[derive(Debug)]
pub struct PagedStore {
    schema: ColumnSchema,
    pages: PageTable,
    /// Caller-maintained entry count. Only `clear` touches it.
    count: usize,
    config: StoreConfig,
}

/// Unwrap a contract check, panicking with the error's message.
#[track_caller]
fn contract<T>(result: Result<T, StoreError>) -> T {
    match result {
        Ok(v) => v,
        Err(err) => panic!("{err}"),
    }
}

impl PagedStore {
    /// Create a store whose columns hold elements of `column_sizes` bytes.
    ///
    /// The sizes are copied; the caller's slice is not retained.
    pub fn new(column_sizes: &[usize]) -> Self {
        Self::with_schema(ColumnSchema::from_sizes(column_sizes))
    }

    /// Create a store for an already built schema, with default config.
    pub fn with_schema(schema: ColumnSchema) -> Self {
        debug!(
            "paged store created: {} columns, {} bytes per page",
            schema.column_count(),
            schema.page_bytes()
        );
        Self {
            schema,
            pages: PageTable::new(),
            count: 0,
            config: StoreConfig::new(),
        }
    }

    /// Create a store with explicit configuration.
    pub fn with_config(schema: ColumnSchema, config: StoreConfig) -> Result<Self, StoreError> {
        config.validate()?;
        let mut store = Self::with_schema(schema);
        store.config = config;
        store.reset_pages();
        Ok(store)
    }

    /// Re-initialise in place with a new set of column sizes.
    ///
    /// Releases every page, installs a fresh copy of the schema and
    /// resets `count`. The config is kept.
    pub fn init(&mut self, column_sizes: &[usize]) {
        let released = self.reset_pages();
        self.schema = ColumnSchema::from_sizes(column_sizes);
        self.count = 0;
        debug!(
            "paged store re-initialised: {} columns, released {released} pages",
            self.schema.column_count()
        );
    }

    /// Release every page and reset `count` to zero.
    ///
    /// Absent slots are skipped. The schema is kept, and the new table
    /// reserves `initial_table_capacity` slots again. Calling this on a
    /// store that never allocated is a no-op.
    pub fn clear(&mut self) {
        let released = self.reset_pages();
        self.count = 0;
        debug!("paged store cleared: released {released} pages");
    }

    /// Release the schema, then [`clear`](Self::clear).
    ///
    /// The store stays a valid value but accepts no access until
    /// [`init`](Self::init) installs a new schema.
    pub fn deinit(&mut self) {
        self.schema = ColumnSchema::default();
        self.clear();
    }

    /// The caller-maintained entry count.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Set the entry count. The store attaches no meaning to it.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    /// Address of the `size`-byte slot of `index` in `column`, if its page exists.
    ///
    /// Never allocates.
    ///
    /// # Panics
    ///
    /// Panics if `column` is not in the schema or `size` differs from its
    /// element size.
    #[track_caller]
    pub fn get(&self, size: usize, index: u32, column: ColumnId) -> Option<&[u8]> {
        contract(self.try_get(size, index, column))
    }

    /// Mutable form of [`get`](Self::get).
    ///
    /// # Panics
    ///
    /// Same as [`get`](Self::get).
    #[track_caller]
    pub fn get_mut(&mut self, size: usize, index: u32, column: ColumnId) -> Option<&mut [u8]> {
        contract(self.try_get_mut(size, index, column))
    }

    /// Address of the slot, allocating its page first if needed.
    ///
    /// A new page is zero-filled in every column, and the table grows
    /// with absent slots for any page numbers it skips.
    ///
    /// # Panics
    ///
    /// Panics on an invalid column or size, or if the page lies beyond
    /// [`StoreConfig::max_pages`]. Allocation failure aborts.
    #[track_caller]
    pub fn ensure(&mut self, size: usize, index: u32, column: ColumnId) -> &mut [u8] {
        contract(self.schema.check(size, column));
        let addr = PageAddr::of(index);
        contract(self.check_page_limit(addr.page));
        let schema = &self.schema;
        let page = contract(self.pages.get_or_insert_with(addr.page, || {
            trace!("materialising page {} ({} bytes)", addr.page, schema.page_bytes());
            Ok(Page::new(schema))
        }));
        page.slot_mut(column, addr, size)
    }

    /// Non-panicking form of [`get`](Self::get).
    pub fn try_get(
        &self,
        size: usize,
        index: u32,
        column: ColumnId,
    ) -> Result<Option<&[u8]>, StoreError> {
        self.schema.check(size, column)?;
        let addr = PageAddr::of(index);
        Ok(self
            .pages
            .get(addr.page)
            .map(|page| page.slot(column, addr, size)))
    }

    /// Non-panicking form of [`get_mut`](Self::get_mut).
    pub fn try_get_mut(
        &mut self,
        size: usize,
        index: u32,
        column: ColumnId,
    ) -> Result<Option<&mut [u8]>, StoreError> {
        self.schema.check(size, column)?;
        let addr = PageAddr::of(index);
        Ok(self
            .pages
            .get_mut(addr.page)
            .map(|page| page.slot_mut(column, addr, size)))
    }

    /// Fallible form of [`ensure`](Self::ensure).
    ///
    /// Page buffers are allocated fallibly. On any error the store is
    /// unchanged: no page, no table growth.
    pub fn try_ensure(
        &mut self,
        size: usize,
        index: u32,
        column: ColumnId,
    ) -> Result<&mut [u8], StoreError> {
        self.schema.check(size, column)?;
        let addr = PageAddr::of(index);
        self.check_page_limit(addr.page)?;
        let schema = &self.schema;
        let page = self
            .pages
            .get_or_insert_with(addr.page, || {
                trace!("materialising page {} ({} bytes)", addr.page, schema.page_bytes());
                Page::try_new(schema)
            })
            .inspect_err(|err| warn!("failed to materialise page {}: {err}", addr.page))?;
        Ok(page.slot_mut(column, addr, size))
    }

    /// Reset every column slot of `index` to zero bytes.
    ///
    /// Returns `false` (and does nothing) if the page is absent, since an
    /// absent page already reads as zero once created.
    pub fn zero(&mut self, index: u32) -> bool {
        let addr = PageAddr::of(index);
        match self.pages.get_mut(addr.page) {
            Some(page) => {
                page.zero_slot(addr, &self.schema);
                true
            }
            None => false,
        }
    }

    /// Whether page `page` is allocated.
    pub fn contains_page(&self, page: PageNumber) -> bool {
        self.pages.contains(page)
    }

    /// Whether the page holding `index` is allocated.
    pub fn is_materialized(&self, index: u32) -> bool {
        self.pages.contains(PageAddr::of(index).page)
    }

    /// Number of allocated pages.
    pub fn page_count(&self) -> usize {
        self.pages.materialized()
    }

    /// Number of page-table slots, present or absent.
    pub fn page_table_len(&self) -> usize {
        self.pages.len()
    }

    /// Number of page-table slots reserved without reallocating.
    pub fn page_table_capacity(&self) -> usize {
        self.pages.capacity()
    }

    /// Iterate over allocated pages in page-number order.
    pub fn pages(&self) -> impl Iterator<Item = (PageNumber, &Page)> {
        self.pages.iter()
    }

    /// Bytes held by allocated page buffers.
    pub fn page_memory_bytes(&self) -> usize {
        self.pages.page_memory_bytes()
    }

    /// Bytes held by page buffers plus page-table slots.
    pub fn memory_bytes(&self) -> usize {
        self.page_memory_bytes() + self.pages.len() * std::mem::size_of::<Option<Page>>()
    }

    /// The store's own copy of the schema.
    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.schema.column_count()
    }

    /// Element size of `column`, or `None` if it is not in the schema.
    pub fn column_size(&self, column: ColumnId) -> Option<usize> {
        self.schema.column_size(column)
    }

    /// The active configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Drop every page and start a fresh table with the configured
    /// reservation. Returns the number of pages released.
    fn reset_pages(&mut self) -> usize {
        let released = self.pages.clear();
        self.pages = PageTable::with_capacity(self.config.initial_table_capacity);
        released
    }

    fn check_page_limit(&self, page: PageNumber) -> Result<(), StoreError> {
        if page.0 >= self.config.max_pages {
            warn!(
                "page {page} rejected: limit is {} pages",
                self.config.max_pages
            );
            return Err(StoreError::CapacityExceeded {
                page,
                max_pages: self.config.max_pages,
            });
        }
        Ok(())
    }
}

impl Drop for PagedStore {
    fn drop(&mut self) {
        let released = self.pages.clear();
        if released > 0 {
            debug!("paged store dropped: released {released} pages");
        }
    }
}

//! The page table: a dense, growable list of optional pages.
//!
//! Slot `p` holds page number `p`. A slot is either absent (`None`, the
//! page was never touched) or holds a fully built [`Page`]. Slots past
//! the end of the table read as absent too, so callers never need to
//! distinguish "short table" from "gap".

use sparsecol_core::{PageNumber, StoreError};

use crate::page::Page;

/// Growable table of lazily created pages.
#[derive(Debug, Default)]
pub struct PageTable {
    slots: Vec<Option<Page>>,
    /// Number of `Some` slots.
    materialized: usize,
}

impl PageTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with room for `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            materialized: 0,
        }
    }

    /// Number of slots (present or absent).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots the table can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Whether the table has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of pages actually allocated.
    pub fn materialized(&self) -> usize {
        self.materialized
    }

    /// The page at `page`, or `None` if it is absent or past the end.
    pub fn get(&self, page: PageNumber) -> Option<&Page> {
        self.slots.get(page.index())?.as_ref()
    }

    /// The page at `page`, mutably.
    pub fn get_mut(&mut self, page: PageNumber) -> Option<&mut Page> {
        self.slots.get_mut(page.index())?.as_mut()
    }

    /// Whether `page` holds an allocated page.
    pub fn contains(&self, page: PageNumber) -> bool {
        self.get(page).is_some()
    }

    /// Return the page at `page`, building it with `make` if absent.
    ///
    /// The page is built before the table grows, and table growth is
    /// reserved fallibly, so on error the table is left exactly as it
    /// was. Slots skipped over by growth are left absent.
    pub fn get_or_insert_with<F>(&mut self, page: PageNumber, make: F) -> Result<&mut Page, StoreError>
    where
        F: FnOnce() -> Result<Page, StoreError>,
    {
        let idx = page.index();
        if !self.contains(page) {
            let built = make()?;
            if idx >= self.slots.len() {
                let additional = idx + 1 - self.slots.len();
                self.slots
                    .try_reserve(additional)
                    .map_err(|_| StoreError::OutOfMemory {
                        requested: additional * std::mem::size_of::<Option<Page>>(),
                    })?;
                self.slots.resize_with(idx + 1, || None);
            }
            self.slots[idx] = Some(built);
            self.materialized += 1;
        }
        match self.slots[idx].as_mut() {
            Some(p) => Ok(p),
            None => unreachable!("page {page} was inserted above"),
        }
    }

    /// Iterate over allocated pages in page-number order, skipping gaps.
    pub fn iter(&self) -> impl Iterator<Item = (PageNumber, &Page)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|p| (PageNumber(i as u32), p)))
    }

    /// Memory held by all allocated pages in bytes (table slots excluded).
    pub fn page_memory_bytes(&self) -> usize {
        self.iter().map(|(_, p)| p.memory_bytes()).sum()
    }

    /// Release every page and the table storage itself.
    ///
    /// Returns the number of pages released.
    pub fn clear(&mut self) -> usize {
        let released = self.materialized;
        self.slots = Vec::new();
        self.materialized = 0;
        released
    }
}

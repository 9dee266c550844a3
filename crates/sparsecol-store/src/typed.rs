//! Typed access through [`ColumnKey`]s.
//!
//! These methods go through the same size check as the byte-level API,
//! using `T::SIZE` as the requested size. A key built from a different
//! schema that disagrees on width panics like any other size mismatch.

use sparsecol_core::{ColumnKey, Element, StoreError};

use crate::store::PagedStore;

impl PagedStore {
    /// Read the value of `index` in `key`'s column, if its page exists.
    ///
    /// A page that exists but was never written at `index` reads as the
    /// type's zero.
    #[track_caller]
    pub fn read<T: Element>(&self, key: ColumnKey<T>, index: u32) -> Option<T> {
        self.get(T::SIZE, index, key.id()).map(T::read_from)
    }

    /// Write `value` at `index`, materialising the page if needed.
    #[track_caller]
    pub fn write<T: Element>(&mut self, key: ColumnKey<T>, index: u32, value: T) {
        value.write_to(self.ensure(T::SIZE, index, key.id()));
    }

    /// Apply `f` to the current value at `index` and store the result.
    ///
    /// Materialises the page if needed, so `f` sees zero for a fresh slot.
    /// Returns the stored value.
    #[track_caller]
    pub fn update<T: Element>(
        &mut self,
        key: ColumnKey<T>,
        index: u32,
        f: impl FnOnce(T) -> T,
    ) -> T {
        let slot = self.ensure(T::SIZE, index, key.id());
        let value = f(T::read_from(slot));
        value.write_to(slot);
        value
    }

    /// Non-panicking form of [`read`](Self::read).
    pub fn try_read<T: Element>(
        &self,
        key: ColumnKey<T>,
        index: u32,
    ) -> Result<Option<T>, StoreError> {
        Ok(self.try_get(T::SIZE, index, key.id())?.map(T::read_from))
    }

    /// Fallible form of [`write`](Self::write).
    pub fn try_write<T: Element>(
        &mut self,
        key: ColumnKey<T>,
        index: u32,
        value: T,
    ) -> Result<(), StoreError> {
        value.write_to(self.try_ensure(T::SIZE, index, key.id())?);
        Ok(())
    }
}

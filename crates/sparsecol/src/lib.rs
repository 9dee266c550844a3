//! sparsecol: a paged sparse columnar store.
//!
//! This is the facade crate that re-exports the public API of the
//! sparsecol sub-crates. Record managers that hand out stable `u32`
//! indices use a [`PagedStore`](store::PagedStore) to keep several
//! independently sized columns per index, paying only for the 4096-slot
//! pages they actually touch.
//!
//! # Quick start
//!
//! ```rust
//! use sparsecol::prelude::*;
//!
//! let mut schema = SchemaBuilder::new();
//! let health = schema.column::<f32>("health").unwrap();
//! let flags = schema.column::<u8>("flags").unwrap();
//! let mut store = PagedStore::with_schema(schema.build());
//!
//! store.write(health, 10_000_000, 75.0);
//! assert_eq!(store.read(health, 10_000_000), Some(75.0));
//! // Same page, never written: zero.
//! assert_eq!(store.read(flags, 10_000_000), Some(0));
//! // Untouched page: absent.
//! assert_eq!(store.read(health, 0), None);
//! assert_eq!(store.page_count(), 1);
//!
//! // Byte-level access with an explicit element size.
//! let raw = store.ensure(4, 42, health.id());
//! raw.copy_from_slice(&1.5f32.to_ne_bytes());
//! assert_eq!(store.read(health, 42), Some(1.5));
//!
//! store.clear();
//! assert_eq!(store.count(), 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sparsecol-core` | IDs, schema, element encoding, errors |
//! | [`store`] | `sparsecol-store` | `PagedStore`, pages, page table, config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Identifiers, column schema, element encoding and error types.
pub mod types {
    pub use sparsecol_core::*;
}

/// The paged store and its building blocks.
pub mod store {
    pub use sparsecol_store::*;
}

/// Common imports for everyday use.
pub mod prelude {
    pub use sparsecol_core::{
        ColumnId, ColumnKey, ColumnSchema, Element, PageNumber, SchemaBuilder, StoreError,
    };
    pub use sparsecol_store::{PageAddr, PagedStore, StoreConfig, PAGE_SIZE};
}

//! Paged sparse columnar storage.
//!
//! A [`PagedStore`] maps a dense `u32` index to one fixed-size slot per
//! column. Backing memory is allocated a page at a time (4096 slots per
//! column) the first time an index in that page is touched, so a store
//! addressed at index 10,000,000 holds exactly one page, not ten million
//! slots.
//!
//! # Architecture
//!
//! ```text
//! PagedStore
//! ├── ColumnSchema (owned copy, fixed after init)
//! ├── StoreConfig (page limit, table capacity)
//! └── PageTable → Option<Page>[] (slot p = page number p, None = absent)
//!     └── Page → Box<[u8]> × column_count (4096 × element_size, zero-filled)
//! ```
//!
//! # Access contract
//!
//! Every access names the element size it expects. A size that disagrees
//! with the schema, or a column outside it, is a programming error: the
//! plain methods panic, the `try_*` methods return a
//! [`StoreError`](sparsecol_core::StoreError).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod addr;
pub mod config;
pub mod page;
pub mod store;
pub mod table;
pub mod typed;

// Public re-exports for the primary API surface.
pub use addr::{PageAddr, PAGE_SIZE};
pub use config::StoreConfig;
pub use page::Page;
pub use store::PagedStore;
pub use table::PageTable;

//! Core types for the sparsecol paged columnar store.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the column identifiers, element encoding, column schema and error
//! types shared by the store and its callers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod id;
pub mod schema;

pub use element::Element;
pub use error::StoreError;
pub use id::{ColumnId, PageNumber};
pub use schema::{ColumnDef, ColumnKey, ColumnSchema, SchemaBuilder};

//! Benchmark profiles for the sparsecol paged store.
//!
//! - [`dense_profile`]: contiguous indices from zero, every page full
//! - [`sparse_indices`]: seeded random indices spread over a wide range
//! - [`populated_store`]: a store with every given index ensured

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sparsecol_core::{ColumnId, ColumnSchema};
use sparsecol_store::PagedStore;

/// Contiguous indices `0..count`.
pub fn dense_profile(count: u32) -> Vec<u32> {
    (0..count).collect()
}

/// `count` indices drawn uniformly from `0..range` with a seeded ChaCha8 stream.
///
/// Identical seeds give identical sequences.
pub fn sparse_indices(seed: u64, count: usize, range: u32) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.next_u32() % range).collect()
}

/// Build a store over `schema` with the first column of every index ensured.
pub fn populated_store(schema: ColumnSchema, indices: &[u32]) -> PagedStore {
    let size = schema.column_size(ColumnId(0)).unwrap_or(0);
    let mut store = PagedStore::with_schema(schema);
    for &i in indices {
        store.ensure(size, i, ColumnId(0));
    }
    store
}

//! Test utilities for sparsecol development.
//!
//! Provides standard schema [`fixtures`] and byte-level assertions
//! shared by unit tests, integration tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

/// Assert that every byte of `bytes` is zero.
///
/// Reports the position of the first non-zero byte on failure.
#[track_caller]
pub fn assert_zeroed(bytes: &[u8]) {
    if let Some(pos) = bytes.iter().position(|&b| b != 0) {
        panic!(
            "expected all-zero bytes, found {:#04x} at byte {pos} of {}",
            bytes[pos],
            bytes.len()
        );
    }
}

/// Deterministic, well-spread sequence of `n` indices below `limit`.
///
/// Uses a fixed odd multiplier so tests get the same sparse pattern on
/// every run without pulling in an RNG.
pub fn spread_indices(n: usize, limit: u32) -> Vec<u32> {
    (0..n as u64)
        .map(|i| ((i.wrapping_mul(2_654_435_761) ^ (i << 7)) % limit as u64) as u32)
        .collect()
}

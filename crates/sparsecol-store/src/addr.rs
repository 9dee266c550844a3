//! Translation of logical indices into page coordinates.
//!
//! Index `i` lives in page `i / PAGE_SIZE` at offset `i % PAGE_SIZE`.
//! Within a column buffer its slot starts at `offset * element_size`.

use sparsecol_core::PageNumber;

/// Number of slots per page, per column.
pub const PAGE_SIZE: usize = 4096;

/// Location of a logical index: which page, and which slot inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageAddr {
    /// Page the index falls into.
    pub page: PageNumber,
    /// Slot position within the page, in `0..PAGE_SIZE`.
    pub offset: usize,
}

impl PageAddr {
    /// Translate a logical index.
    pub fn of(index: u32) -> Self {
        Self {
            page: PageNumber(index / PAGE_SIZE as u32),
            offset: index as usize % PAGE_SIZE,
        }
    }

    /// Byte offset of this slot in a column of `element_size`-byte elements.
    pub fn byte_offset(&self, element_size: usize) -> usize {
        self.offset * element_size
    }

    /// Byte range of this slot in a column of `element_size`-byte elements.
    pub fn byte_range(&self, element_size: usize) -> std::ops::Range<usize> {
        let start = self.byte_offset(element_size);
        start..start + element_size
    }

    /// The logical index this address was derived from.
    pub fn index(&self) -> u32 {
        self.page.0 * PAGE_SIZE as u32 + self.offset as u32
    }
}

/// First logical index covered by a page.
pub fn first_index(page: PageNumber) -> u32 {
    page.0 * PAGE_SIZE as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_boundary() {
        assert_eq!(PageAddr::of(4095), PageAddr { page: PageNumber(0), offset: 4095 });
        assert_eq!(PageAddr::of(4096), PageAddr { page: PageNumber(1), offset: 0 });
        assert_eq!(PageAddr::of(8191), PageAddr { page: PageNumber(1), offset: 4095 });
    }

    #[test]
    fn zero_is_first_slot_of_first_page() {
        assert_eq!(PageAddr::of(0), PageAddr { page: PageNumber(0), offset: 0 });
    }

    #[test]
    fn large_index_lands_on_single_page() {
        let addr = PageAddr::of(10_000_000);
        assert_eq!(addr.page, PageNumber(2441));
        assert_eq!(addr.offset, 10_000_000 - 2441 * 4096);
    }

    #[test]
    fn max_index_is_addressable() {
        let addr = PageAddr::of(u32::MAX);
        assert_eq!(addr.page, PageNumber((1 << 20) - 1));
        assert_eq!(addr.offset, PAGE_SIZE - 1);
        assert_eq!(addr.index(), u32::MAX);
    }

    #[test]
    fn byte_range_scales_with_element_size() {
        let addr = PageAddr::of(4096 + 3);
        assert_eq!(addr.byte_offset(8), 24);
        assert_eq!(addr.byte_range(8), 24..32);
    }

    #[test]
    fn first_index_of_page() {
        assert_eq!(first_index(PageNumber(0)), 0);
        assert_eq!(first_index(PageNumber(3)), 3 * 4096);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn translation_is_invertible(index in any::<u32>()) {
                let addr = PageAddr::of(index);
                prop_assert!(addr.offset < PAGE_SIZE);
                prop_assert_eq!(addr.index(), index);
            }

            #[test]
            fn matches_shift_and_mask(index in any::<u32>()) {
                let addr = PageAddr::of(index);
                prop_assert_eq!(addr.page.0, index >> 12);
                prop_assert_eq!(addr.offset, (index & 0xFFF) as usize);
            }
        }
    }
}

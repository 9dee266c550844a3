//! Fixed-size element encoding for typed column access.
//!
//! Column buffers are untyped bytes. [`Element`] describes how a plain
//! value type maps onto a slot of exactly [`Element::SIZE`] bytes, using
//! native byte order. For every implementor, an all-zero slot decodes to
//! the type's zero value, so a freshly materialised page reads as zeros.

/// A plain value that can be stored in a fixed-size column slot.
pub trait Element: Copy + 'static {
    /// Slot width in bytes.
    const SIZE: usize;

    /// Decode a value from a slot.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != Self::SIZE`.
    fn read_from(bytes: &[u8]) -> Self;

    /// Encode this value into a slot.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != Self::SIZE`.
    fn write_to(self, bytes: &mut [u8]);
}

macro_rules! impl_element_for_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                const SIZE: usize = std::mem::size_of::<$t>();

                fn read_from(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_ne_bytes(buf)
                }

                fn write_to(self, bytes: &mut [u8]) {
                    bytes.copy_from_slice(&self.to_ne_bytes());
                }
            }
        )*
    };
}

impl_element_for_numeric!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, usize, isize);

impl Element for bool {
    const SIZE: usize = 1;

    fn read_from(bytes: &[u8]) -> Self {
        assert_eq!(bytes.len(), 1, "bool slot must be 1 byte");
        bytes[0] != 0
    }

    fn write_to(self, bytes: &mut [u8]) {
        assert_eq!(bytes.len(), 1, "bool slot must be 1 byte");
        bytes[0] = u8::from(self);
    }
}

impl<const N: usize> Element for [u8; N] {
    const SIZE: usize = N;

    fn read_from(bytes: &[u8]) -> Self {
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        buf
    }

    fn write_to(self, bytes: &mut [u8]) {
        bytes.copy_from_slice(&self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_match_native_widths() {
        assert_eq!(<u8 as Element>::SIZE, 1);
        assert_eq!(<i16 as Element>::SIZE, 2);
        assert_eq!(<f32 as Element>::SIZE, 4);
        assert_eq!(<u64 as Element>::SIZE, 8);
        assert_eq!(<bool as Element>::SIZE, 1);
        assert_eq!(<[u8; 12] as Element>::SIZE, 12);
    }

    #[test]
    fn zero_bytes_decode_to_zero() {
        assert_eq!(u32::read_from(&[0; 4]), 0);
        assert_eq!(f64::read_from(&[0; 8]), 0.0);
        assert!(!bool::read_from(&[0]));
        assert_eq!(<[u8; 3]>::read_from(&[0; 3]), [0, 0, 0]);
    }

    #[test]
    fn write_then_read_preserves_value() {
        let mut slot = [0u8; 8];
        (-12.5f64).write_to(&mut slot);
        assert_eq!(f64::read_from(&slot), -12.5);

        let mut slot = [0u8; 4];
        0xAAAA_AAAAu32.write_to(&mut slot);
        assert_eq!(slot, [0xAA; 4]);
    }

    #[test]
    #[should_panic]
    fn wrong_slot_width_panics() {
        let _ = u32::read_from(&[0; 8]);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn i64_survives_encoding(v in any::<i64>()) {
                let mut slot = [0u8; 8];
                v.write_to(&mut slot);
                prop_assert_eq!(i64::read_from(&slot), v);
            }

            #[test]
            fn nonzero_byte_reads_true(b in 1u8..=255) {
                prop_assert!(bool::read_from(&[b]));
            }
        }
    }
}

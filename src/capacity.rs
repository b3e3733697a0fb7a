use crate::word::FlagWord;
use core::fmt::Debug;
use core::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// Returns the width in bits of the storage word used by a family of
/// `capacity` flags.
///
/// Families of up to 16 flags are stored in a `u16`, up to 32 in a `u32` and
/// up to 64 in a `u64`.
///
/// # Panics
/// Panics if `capacity` is zero or greater than 64.
///
/// # Examples
/// ```
/// use flag_bitset::storage_bits;
///
/// assert_eq!(storage_bits(7), 16);
/// assert_eq!(storage_bits(17), 32);
/// assert_eq!(storage_bits(64), 64);
/// ```
pub const fn storage_bits(capacity: usize) -> u32 {
    assert!(
        capacity > 0 && capacity <= 64,
        "Flag family capacity must be within 1..=64."
    );
    if capacity <= 16 {
        16
    } else if capacity <= 32 {
        32
    } else {
        64
    }
}

/// Type-level capacity of a flag family.
///
/// `Capacity<N>` implements [`Width`] for every `N` in `1..=64`, any other
/// capacity is rejected at compile time.
///
/// ```
/// use flag_bitset::{Capacity, Width};
///
/// assert_eq!(<Capacity<40> as Width>::CAPACITY, 40);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Capacity<const N: usize>;

/// Associates a capacity with its storage word.
///
/// Sealed; implemented by [`Capacity<N>`] for `N` in `1..=64`.
pub trait Width: sealed::Sealed + Copy + Eq + Ord + Hash + Debug {
    /// Number of distinct flags in the family.
    const CAPACITY: usize;

    /// The unsigned integer holding the family's bits.
    type Word: FlagWord;
}

macro_rules! impl_width {
    ($word:ty => $($capacity:literal)+) => {
        $(
            impl sealed::Sealed for Capacity<$capacity> {}

            impl Width for Capacity<$capacity> {
                const CAPACITY: usize = $capacity;
                type Word = $word;
            }
        )+
    };
}

impl_width!(u16 => 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16);
impl_width!(u32 => 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32);
impl_width!(u64 =>
    33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48
    49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64
);

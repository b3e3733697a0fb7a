use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer that can back a flag family.
///
/// Implemented for `u16`, `u32` and `u64` only. Which one a family uses is
/// decided by its capacity, see [`Width`](crate::Width).
pub trait FlagWord:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + Hash
    + Debug
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + Not<Output = Self>
{
    /// The word with no bit set.
    const ZERO: Self;

    /// Width of the word in bits.
    const BITS: u32;

    /// Returns the word with only bit `position` set.
    ///
    /// `position` must be below [`BITS`](FlagWord::BITS).
    fn bit(position: usize) -> Self;

    /// Returns `true` if bit `position` is set.
    #[inline]
    fn is_set(self, position: usize) -> bool {
        self & Self::bit(position) != Self::ZERO
    }

    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Number of unset bits below the lowest set bit.
    fn trailing_zeros(self) -> u32;

    /// Number of unset bits above the highest set bit.
    fn leading_zeros(self) -> u32;
}

macro_rules! impl_flag_word {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl FlagWord for $ty {
                const ZERO: Self = 0;
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn bit(position: usize) -> Self {
                    debug_assert!(position < <$ty>::BITS as usize);
                    1 << position
                }

                #[inline]
                fn count_ones(self) -> u32 {
                    <$ty>::count_ones(self)
                }

                #[inline]
                fn trailing_zeros(self) -> u32 {
                    <$ty>::trailing_zeros(self)
                }

                #[inline]
                fn leading_zeros(self) -> u32 {
                    <$ty>::leading_zeros(self)
                }
            }
        )*
    };
}

impl_flag_word!(u16, u32, u64);

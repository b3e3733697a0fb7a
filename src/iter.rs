use crate::bitset::Word;
use crate::flag::{Flag, FlagValue, Token};
use crate::word::FlagWord;
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// Iterator over the flags of a [`BitSet`](crate::BitSet).
///
/// Yields flags in ascending position order from the front and in descending
/// order from the back.
///
/// Returned by [`BitSet::iter()`](crate::BitSet::iter).
///
/// # Examples
/// ```
/// use flag_bitset::{BitSet, Capacity, FlagValue};
///
/// type Bit = FlagValue<Capacity<40>>;
///
/// let set = BitSet::from_flags([Bit::new(39), Bit::new(0), Bit::new(17)]);
/// let positions: Vec<usize> = set.iter().map(|bit| bit.position()).collect();
/// assert_eq!(positions, [0, 17, 39]);
/// assert_eq!(set.iter().next_back(), Some(Bit::new(39)));
/// ```
#[derive(Clone, Copy)]
pub struct Iter<F: Flag> {
    remaining: Word<F>,
    family: PhantomData<F>,
}

impl<F: Flag> Iter<F> {
    #[inline]
    pub(crate) fn new(word: Word<F>) -> Self {
        Self {
            remaining: word,
            family: PhantomData,
        }
    }

    #[inline]
    fn take(&mut self, position: usize) -> F {
        self.remaining &= !<Word<F> as FlagWord>::bit(position);
        // set bits are always below the capacity
        F::from_value(FlagValue::new(position), Token::new())
    }
}

impl<F: Flag> Iterator for Iter<F> {
    type Item = F;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == <Word<F> as FlagWord>::ZERO {
            return None;
        }
        let position = self.remaining.trailing_zeros() as usize;
        Some(self.take(position))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.count_ones() as usize;
        (len, Some(len))
    }
}

impl<F: Flag> DoubleEndedIterator for Iter<F> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == <Word<F> as FlagWord>::ZERO {
            return None;
        }
        let highest = <Word<F> as FlagWord>::BITS - 1 - self.remaining.leading_zeros();
        Some(self.take(highest as usize))
    }
}

impl<F: Flag> ExactSizeIterator for Iter<F> {}

impl<F: Flag> FusedIterator for Iter<F> {}

use crate::capacity::Width;
use crate::cursor::Cursor;
use crate::flag::Flag;
use crate::iter::Iter;
use crate::word::FlagWord;
use core::fmt::{Debug, Formatter};
use core::marker::PhantomData;

pub(crate) type Word<F> = <<F as Flag>::Width as Width>::Word;

/// A set of flags from one family, stored in a single integer word.
///
/// The word is a `u16`, `u32` or `u64` depending on the family's capacity.
/// Sets compare and hash by their membership word, are `Copy` and never
/// allocate.
///
/// # Examples
/// ```
/// use flag_bitset::{BitSet, flag_family};
///
/// flag_family! {
///     pub struct Prop: 7 {
///         is_high = 0,
///         is_low = 1,
///         is_tiny = 2,
///     }
/// }
///
/// let mut props = BitSet::<Prop>::new();
/// props.insert(Prop::is_high());
/// props.insert(Prop::is_high());
/// props.insert(Prop::is_low());
/// assert_eq!(props.len(), 2);
/// assert_eq!(props.capacity(), 7);
///
/// props.erase(Prop::is_low());
/// assert_eq!(props.iter().collect::<Vec<_>>(), vec![Prop::is_high()]);
/// ```
///
/// Flags of another family are rejected by the type checker.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitSet<F: Flag> {
    word: Word<F>,
    family: PhantomData<F>,
}

impl<F: Flag> BitSet<F> {
    /// Number of distinct flags the family can hold.
    pub const CAPACITY: usize = <F::Width as Width>::CAPACITY;

    /// Creates an empty set.
    ///
    /// # Examples
    /// ```
    /// use flag_bitset::{BitSet, Capacity, FlagValue};
    ///
    /// const EMPTY: BitSet<FlagValue<Capacity<8>>> = BitSet::new();
    /// assert!(EMPTY.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            word: <Word<F> as FlagWord>::ZERO,
            family: PhantomData,
        }
    }

    /// Creates a set containing every flag yielded by `flags`.
    ///
    /// # Examples
    /// ```
    /// use flag_bitset::{BitSet, Capacity, FlagValue};
    ///
    /// type Bit = FlagValue<Capacity<5>>;
    ///
    /// let set = BitSet::from_flags([Bit::new(0), Bit::new(3), Bit::new(3)]);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn from_flags<I: IntoIterator<Item = F>>(flags: I) -> Self {
        let mut set = Self::new();
        set.insert_all(flags);
        set
    }

    /// Adds `flag` to the set. Inserting a flag that is already present does
    /// nothing.
    #[inline]
    pub fn insert(&mut self, flag: F) {
        self.word |= flag.word();
    }

    /// Adds every flag yielded by `flags`, in order.
    ///
    /// # Examples
    /// ```
    /// use flag_bitset::{BitSet, Capacity, FlagValue};
    ///
    /// type Bit = FlagValue<Capacity<20>>;
    ///
    /// let mut set = BitSet::new();
    /// set.insert_all([Bit::new(1), Bit::new(19)]);
    /// assert!(set.contains(Bit::new(19)));
    /// assert_eq!(set.word(), (1u32 << 19) | 0b10);
    /// ```
    pub fn insert_all<I: IntoIterator<Item = F>>(&mut self, flags: I) {
        for flag in flags {
            self.insert(flag);
        }
    }

    /// Removes `flag` from the set and returns a cursor to the next set flag
    /// after its position, or [`end`](BitSet::end) if there is none.
    ///
    /// Erasing a flag that is not present leaves the set unchanged but still
    /// returns the cursor following its position.
    ///
    /// # Examples
    /// ```
    /// use flag_bitset::{BitSet, Capacity, FlagValue};
    ///
    /// type Bit = FlagValue<Capacity<8>>;
    ///
    /// let mut set = BitSet::from_flags([Bit::new(1), Bit::new(4), Bit::new(6)]);
    /// assert_eq!(set.erase(Bit::new(1)).get(), Ok(Bit::new(4)));
    /// assert_eq!(set.erase(Bit::new(5)).get(), Ok(Bit::new(6)));
    /// assert!(set.erase(Bit::new(6)).is_end());
    /// ```
    pub fn erase(&mut self, flag: F) -> Cursor<'_, F> {
        self.word &= !flag.word();
        let set: &Self = self;
        if set.is_empty() {
            return Cursor::end(set);
        }
        Cursor::seek_forward(set, flag.position() + 1)
    }

    /// Removes every flag.
    #[inline]
    pub fn clear(&mut self) {
        self.word = <Word<F> as FlagWord>::ZERO;
    }

    /// Returns `true` if `flag` is in the set.
    #[inline]
    pub fn contains(&self, flag: F) -> bool {
        let word = flag.word();
        self.word & word == word
    }

    /// Returns the number of flags in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.word.count_ones() as usize
    }

    /// Returns `true` if the set holds no flag.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.word == <Word<F> as FlagWord>::ZERO
    }

    /// Returns the family's capacity. The same for every set of the family.
    #[inline]
    pub fn capacity(&self) -> usize {
        Self::CAPACITY
    }

    /// Returns the membership word.
    #[inline]
    pub fn word(&self) -> <F::Width as Width>::Word {
        self.word
    }

    /// Returns a cursor at the lowest set flag, or [`end`](BitSet::end) if
    /// the set is empty.
    ///
    /// # Examples
    /// ```
    /// use flag_bitset::{BitSet, Capacity, FlagValue};
    ///
    /// type Bit = FlagValue<Capacity<8>>;
    ///
    /// let set = BitSet::from_flags([Bit::new(2), Bit::new(5)]);
    /// let mut cursor = set.begin();
    /// assert_eq!(cursor.get(), Ok(Bit::new(2)));
    /// cursor.move_next().unwrap();
    /// assert_eq!(cursor.get(), Ok(Bit::new(5)));
    /// cursor.move_next().unwrap();
    /// assert_eq!(cursor, set.end());
    /// ```
    pub fn begin(&self) -> Cursor<'_, F> {
        if self.is_empty() {
            return Cursor::end(self);
        }
        Cursor::seek_forward(self, 0)
    }

    /// Returns the past-the-end cursor.
    #[inline]
    pub fn end(&self) -> Cursor<'_, F> {
        Cursor::end(self)
    }

    /// Returns a cursor at `flag` if it is in the set, otherwise
    /// [`end`](BitSet::end).
    pub fn find(&self, flag: F) -> Cursor<'_, F> {
        if self.contains(flag) {
            Cursor::at(self, flag.position())
        } else {
            Cursor::end(self)
        }
    }

    /// Returns an iterator over the flags in ascending position order.
    ///
    /// The iterator works on a copy of the membership word and does not
    /// borrow the set.
    #[inline]
    pub fn iter(&self) -> Iter<F> {
        Iter::new(self.word)
    }

    #[inline]
    pub(crate) fn is_set(&self, position: usize) -> bool {
        self.word.is_set(position)
    }
}

impl<F: Flag> Default for BitSet<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Flag> Debug for BitSet<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<F: Flag, const K: usize> From<[F; K]> for BitSet<F> {
    fn from(flags: [F; K]) -> Self {
        Self::from_flags(flags)
    }
}

impl<F: Flag> FromIterator<F> for BitSet<F> {
    fn from_iter<T: IntoIterator<Item = F>>(iter: T) -> Self {
        Self::from_flags(iter)
    }
}

impl<F: Flag> Extend<F> for BitSet<F> {
    fn extend<T: IntoIterator<Item = F>>(&mut self, iter: T) {
        self.insert_all(iter);
    }
}

impl<F: Flag> IntoIterator for BitSet<F> {
    type Item = F;
    type IntoIter = Iter<F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<F: Flag> IntoIterator for &BitSet<F> {
    type Item = F;
    type IntoIter = Iter<F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Creates a [`BitSet`] holding the given flags.
///
/// All flags must belong to the same family.
///
/// # Examples
/// ```
/// use flag_bitset::{bitset, flag_family};
///
/// flag_family! {
///     pub struct Prop: 7 {
///         is_tiny = 2,
///         is_big = 4,
///         is_huge = 6,
///     }
/// }
///
/// let props = bitset![Prop::is_tiny(), Prop::is_big(), Prop::is_huge()];
/// assert_eq!(props.len(), 3);
/// ```
#[macro_export]
macro_rules! bitset {
    () => {
        $crate::BitSet::new()
    };
    ($($flag:expr),+ $(,)?) => {{
        let mut set = $crate::BitSet::new();
        $(set.insert($flag);)+
        set
    }};
}

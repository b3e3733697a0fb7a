use crate::bitset::BitSet;
use crate::error::FlagError;
use crate::flag::{self, Flag};
use core::fmt::{Debug, Formatter};

/// A position inside a [`BitSet`], moving between set flags in both
/// directions.
///
/// A cursor is either at a set flag or at the end sentinel, whose position
/// equals the family's capacity. It borrows the set it walks, so the set
/// cannot change or go away while the cursor is alive.
///
/// Two cursors are equal only if they share the position *and* point into the
/// same `BitSet` instance; cursors into distinct sets with equal contents are
/// never equal.
///
/// # Examples
/// ```
/// use flag_bitset::{BitSet, Capacity, FlagError, FlagValue};
///
/// type Bit = FlagValue<Capacity<8>>;
///
/// let set = BitSet::from_flags([Bit::new(1), Bit::new(6)]);
/// let mut cursor = set.end();
/// assert_eq!(cursor.get(), Err(FlagError::DereferenceAtEnd));
///
/// cursor.move_prev().unwrap();
/// assert_eq!(cursor.get(), Ok(Bit::new(6)));
/// cursor.move_prev().unwrap();
/// assert_eq!(cursor, set.begin());
/// assert_eq!(cursor.move_prev(), Err(FlagError::RetreatUnderflow { position: 1 }));
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'set, F: Flag> {
    set: &'set BitSet<F>,
    position: usize,
}

impl<'set, F: Flag> Cursor<'set, F> {
    #[inline]
    pub(crate) fn at(set: &'set BitSet<F>, position: usize) -> Self {
        debug_assert!(position <= BitSet::<F>::CAPACITY);
        Self { set, position }
    }

    #[inline]
    pub(crate) fn end(set: &'set BitSet<F>) -> Self {
        Self::at(set, BitSet::<F>::CAPACITY)
    }

    /// Cursor at the first set position at or after `from`.
    pub(crate) fn seek_forward(set: &'set BitSet<F>, from: usize) -> Self {
        let mut position = from;
        while position < BitSet::<F>::CAPACITY && !set.is_set(position) {
            position += 1;
        }
        Self::at(set, position)
    }

    /// Returns the bit position of the cursor. At the end this is the
    /// family's capacity.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` if the cursor is at the end sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.position == BitSet::<F>::CAPACITY
    }

    /// Returns the set this cursor walks.
    #[inline]
    pub fn bitset(&self) -> &'set BitSet<F> {
        self.set
    }

    /// Returns the flag under the cursor.
    ///
    /// # Errors
    /// Returns [`FlagError::DereferenceAtEnd`] at the end sentinel.
    pub fn get(&self) -> Result<F, FlagError> {
        if self.is_end() {
            return Err(FlagError::DereferenceAtEnd);
        }
        flag::member_at(self.position)
    }

    /// Moves to the next set flag, or to the end if there is none.
    ///
    /// # Errors
    /// Returns [`FlagError::AdvancePastEnd`] if the cursor already is at the
    /// end. The cursor is not moved.
    pub fn move_next(&mut self) -> Result<(), FlagError> {
        if self.is_end() {
            return Err(FlagError::AdvancePastEnd);
        }
        *self = Self::seek_forward(self.set, self.position + 1);
        Ok(())
    }

    /// Like [`move_next`](Cursor::move_next), but returns the cursor as it
    /// was before moving.
    ///
    /// # Errors
    /// See [`move_next`](Cursor::move_next).
    pub fn fetch_next(&mut self) -> Result<Self, FlagError> {
        let previous = *self;
        self.move_next()?;
        Ok(previous)
    }

    /// Moves to the closest set flag below the current position.
    ///
    /// Moving back from the end lands on the highest set flag.
    ///
    /// # Errors
    /// Returns [`FlagError::RetreatUnderflow`] if no flag is set below the
    /// current position, which includes moving back from
    /// [`begin`](BitSet::begin). The cursor is not moved.
    pub fn move_prev(&mut self) -> Result<(), FlagError> {
        let underflow = FlagError::RetreatUnderflow {
            position: self.position,
        };
        let Some(mut position) = self.position.checked_sub(1) else {
            return Err(underflow);
        };
        while position > 0 && !self.set.is_set(position) {
            position -= 1;
        }
        if !self.set.is_set(position) {
            return Err(underflow);
        }
        self.position = position;
        Ok(())
    }

    /// Like [`move_prev`](Cursor::move_prev), but returns the cursor as it
    /// was before moving.
    ///
    /// # Errors
    /// See [`move_prev`](Cursor::move_prev).
    pub fn fetch_prev(&mut self) -> Result<Self, FlagError> {
        let previous = *self;
        self.move_prev()?;
        Ok(previous)
    }
}

impl<F: Flag> PartialEq for Cursor<'_, F> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && core::ptr::eq(self.set, other.set)
    }
}

impl<F: Flag> Eq for Cursor<'_, F> {}

impl<F: Flag> Debug for Cursor<'_, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut cursor = f.debug_struct("Cursor");
        cursor.field("position", &self.position);
        match self.get() {
            Ok(flag) => cursor.field("flag", &flag),
            Err(_) => cursor.field("flag", &format_args!("<end>")),
        };
        cursor.finish()
    }
}

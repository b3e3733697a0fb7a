use crate::capacity::Width;
use crate::error::FlagError;
use crate::word::FlagWord;
use core::fmt::Debug;
use core::hash::Hash;

/// A single flag of a family with capacity `W`: one set bit in the family's
/// storage word.
///
/// Values compare by their underlying word, so a flag at a higher position is
/// always greater than one at a lower position.
///
/// `FlagValue` is the building block of named families (see
/// [`flag_family!`](crate::flag_family)), but it is a complete [`Flag`] on its
/// own and can be stored in a [`BitSet`](crate::BitSet) directly.
///
/// # Examples
/// ```
/// use flag_bitset::{Capacity, FlagValue};
///
/// let low = FlagValue::<Capacity<7>>::new(1);
/// let high = FlagValue::<Capacity<7>>::new(4);
/// assert!(low < high);
/// assert_eq!(high.position(), 4);
/// assert_eq!(high.word(), 0b1_0000u16);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct FlagValue<W: Width> {
    word: W::Word,
}

impl<W: Width> FlagValue<W> {
    /// Number of positions available in the family.
    pub const CAPACITY: usize = W::CAPACITY;

    /// Creates the flag at `position`.
    ///
    /// # Errors
    /// Returns [`FlagError::OutOfRange`] if `position >= CAPACITY`.
    ///
    /// # Examples
    /// ```
    /// use flag_bitset::{Capacity, FlagError, FlagValue};
    ///
    /// assert!(FlagValue::<Capacity<3>>::try_new(2).is_ok());
    /// assert_eq!(
    ///     FlagValue::<Capacity<3>>::try_new(3),
    ///     Err(FlagError::OutOfRange { position: 3, capacity: 3 })
    /// );
    /// ```
    #[inline]
    pub fn try_new(position: usize) -> Result<Self, FlagError> {
        if position >= W::CAPACITY {
            return Err(FlagError::OutOfRange {
                position,
                capacity: W::CAPACITY,
            });
        }
        Ok(Self {
            word: W::Word::bit(position),
        })
    }

    /// Creates the flag at `position`.
    ///
    /// # Panics
    /// Panics if `position >= CAPACITY`.
    #[inline]
    pub fn new(position: usize) -> Self {
        assert!(
            position < W::CAPACITY,
            "Flag position {position} out of bounds"
        );
        Self {
            word: W::Word::bit(position),
        }
    }

    /// Returns the bit position of this flag.
    #[inline]
    pub fn position(self) -> usize {
        match lowest_set_bit(self.word) {
            Ok(position) => position,
            // the factory only hands out words with exactly one bit set
            Err(err) => unreachable!("{err}"),
        }
    }

    /// Returns the underlying word, which has exactly one bit set.
    #[inline]
    pub fn word(self) -> W::Word {
        self.word
    }
}

pub(crate) fn lowest_set_bit<T: FlagWord>(word: T) -> Result<usize, FlagError> {
    if word == T::ZERO {
        return Err(FlagError::MissingSetBit);
    }
    Ok(word.trailing_zeros() as usize)
}

/// Proof that a family member is being rebuilt by this crate.
///
/// [`Flag::from_value`] takes a `Token`, and only this crate can create one,
/// so outside code obtains family members through their named constructors
/// alone. Implementations of [`Flag`] name the type but never build it.
#[derive(Debug)]
pub struct Token {
    _sealed: (),
}

impl Token {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self { _sealed: () }
    }
}

/// Rebuilds the member of `F` at `position`.
pub(crate) fn member_at<F: Flag>(position: usize) -> Result<F, FlagError> {
    FlagValue::try_new(position).map(|value| F::from_value(value, Token::new()))
}

/// A member of a flag family.
///
/// Every family wraps a [`FlagValue`] of its capacity. Implementations are
/// normally generated by [`flag_family!`](crate::flag_family); a hand-written
/// one only needs to convert to and from the wrapped value. Conversion from a
/// value requires a [`Token`], which the bitset and its cursors supply.
///
/// # Examples
/// ```
/// use flag_bitset::{BitSet, Capacity, Flag, FlagValue, Token};
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct Channel(FlagValue<Capacity<4>>);
///
/// impl Channel {
///     fn left() -> Self {
///         Self(FlagValue::new(0))
///     }
///
///     fn right() -> Self {
///         Self(FlagValue::new(1))
///     }
/// }
///
/// impl Flag for Channel {
///     type Width = Capacity<4>;
///
///     fn from_value(value: FlagValue<Capacity<4>>, _: Token) -> Self {
///         Self(value)
///     }
///
///     fn value(self) -> FlagValue<Capacity<4>> {
///         self.0
///     }
/// }
///
/// let mut channels = BitSet::<Channel>::new();
/// channels.insert(Channel::right());
/// assert!(channels.contains(Channel::right()));
/// assert!(!channels.contains(Channel::left()));
/// assert_eq!(channels.capacity(), 4);
/// ```
pub trait Flag: Copy + Eq + Ord + Hash + Debug {
    /// The family's capacity, which also fixes its storage word.
    type Width: Width;

    /// Wraps a value of the family's capacity.
    fn from_value(value: FlagValue<Self::Width>, token: Token) -> Self;

    /// Returns the wrapped value.
    fn value(self) -> FlagValue<Self::Width>;

    /// Returns the bit position of this flag.
    #[inline]
    fn position(self) -> usize {
        self.value().position()
    }

    /// Returns the flag's single-bit word.
    #[inline]
    fn word(self) -> <Self::Width as Width>::Word {
        self.value().word()
    }
}

impl<W: Width> Flag for FlagValue<W> {
    type Width = W;

    #[inline]
    fn from_value(value: FlagValue<W>, _: Token) -> Self {
        value
    }

    #[inline]
    fn value(self) -> FlagValue<W> {
        self
    }
}

/// Declares a flag family: a newtype with a fixed capacity and one named
/// constructor per flag.
///
/// The generated type implements [`Flag`], compares by bit value, prints as
/// `Family::name` and offers `name()` to look up the declared name. A named
/// position outside the capacity is a compile-time error. The wrapped value
/// stays private to the declaring module.
///
/// # Examples
/// ```
/// use flag_bitset::{BitSet, flag_family};
///
/// flag_family! {
///     /// Properties of a measurement.
///     pub struct Prop: 7 {
///         is_high = 0,
///         is_low = 1,
///         is_tiny = 2,
///         is_big = 4,
///         is_huge = 6,
///     }
/// }
///
/// let mut props = BitSet::<Prop>::new();
/// props.insert(Prop::is_high());
/// props.insert(Prop::is_big());
/// assert_eq!(props.len(), 2);
/// assert!(Prop::is_low() < Prop::is_tiny());
/// assert_eq!(Prop::is_big().name(), "is_big");
/// ```
#[macro_export]
macro_rules! flag_family {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident: $capacity:literal {
            $(
                $(#[$flag_meta:meta])*
                $flag:ident = $position:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name($crate::FlagValue<$crate::Capacity<$capacity>>);

        impl $name {
            $(
                $(#[$flag_meta])*
                #[inline]
                pub fn $flag() -> Self {
                    const {
                        assert!(
                            $position < $capacity,
                            "Flag position out of bounds for its family"
                        )
                    };
                    Self($crate::FlagValue::new($position))
                }
            )*

            /// Returns the declared name of this flag.
            #[allow(unreachable_patterns)]
            pub fn name(self) -> &'static str {
                match $crate::Flag::position(self) {
                    $($position => ::core::stringify!($flag),)*
                    _ => "<unnamed>",
                }
            }
        }

        impl $crate::Flag for $name {
            type Width = $crate::Capacity<$capacity>;

            #[inline]
            fn from_value(
                value: $crate::FlagValue<$crate::Capacity<$capacity>>,
                _: $crate::Token,
            ) -> Self {
                Self(value)
            }

            #[inline]
            fn value(self) -> $crate::FlagValue<$crate::Capacity<$capacity>> {
                self.0
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::write!(f, "{}::{}", ::core::stringify!($name), self.name())
            }
        }
    };
}

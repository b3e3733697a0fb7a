//! A fixed-capacity set of typed, named flags written in pure Rust.
//! `no_std`, no heap / `alloc`, no `unsafe`, just `core`.
//!
//! A *flag family* is a type listing up to 64 named flags, each bound to one
//! bit position. [`BitSet`] stores a set of flags of one family in a single
//! `u16`, `u32` or `u64`, picked from the family's capacity.
//!
//! # Examples
//! ```
//! use flag_bitset::{BitSet, bitset, flag_family};
//!
//! flag_family! {
//!     /// Properties of a measurement.
//!     pub struct Prop: 7 {
//!         is_high = 0,
//!         is_low = 1,
//!         is_tiny = 2,
//!         is_big = 4,
//!         is_huge = 6,
//!     }
//! }
//!
//! let mut props = BitSet::<Prop>::new();
//! props.insert(Prop::is_high());
//! props.insert(Prop::is_low());
//! assert_eq!(props.len(), 2);
//! assert_eq!(props.capacity(), 7);
//!
//! let big = bitset![Prop::is_big(), Prop::is_huge()];
//! assert_eq!(big.iter().collect::<Vec<_>>(), [Prop::is_big(), Prop::is_huge()]);
//! ```
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - One family per type: flags of different families cannot be mixed
//! - Storage width chosen from the capacity: `u16` up to 16 flags, `u32` up to
//!   32, `u64` up to 64
//! - Set operations: `insert`, `erase`, `contains`, `clear`, `len`,
//!   `is_empty`, `capacity`
//! - Iteration over set flags:
//!   - `iter()` (double-ended, exact-size)
//!   - `begin()` / `end()` cursors that move both ways and report misuse as
//!     [`FlagError`]

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod bitset;
mod capacity;
mod cursor;
mod error;
mod flag;
mod iter;
mod word;

pub use bitset::BitSet;
pub use capacity::{Capacity, Width, storage_bits};
pub use cursor::Cursor;
pub use error::FlagError;
pub use flag::{Flag, FlagValue, Token};
pub use iter::Iter;
pub use word::FlagWord;

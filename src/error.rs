use thiserror::Error;

/// Precondition violations reported by flag factories and cursors.
///
/// None of these are recoverable runtime conditions; they point at a call that
/// should not have been made. The operation that reports one leaves every
/// bitset and cursor untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagError {
    /// A flag was requested at a position the family does not have.
    #[error("Flag position {position} out of bounds for a family of capacity {capacity}")]
    OutOfRange {
        /// The requested bit position.
        position: usize,
        /// The family's capacity.
        capacity: usize,
    },

    /// A cursor at the end sentinel was dereferenced.
    #[error("Tried to dereference an end cursor")]
    DereferenceAtEnd,

    /// A cursor at the end sentinel was advanced.
    #[error("Tried to advance a cursor past the end")]
    AdvancePastEnd,

    /// A cursor was moved back but no set bit exists at or before it.
    #[error("No set bit at or before position {position}")]
    RetreatUnderflow {
        /// The cursor position the move started from.
        position: usize,
    },

    /// A flag word without any set bit; the factory never produces one.
    #[error("Flag value does not contain any set bit")]
    MissingSetBit,
}

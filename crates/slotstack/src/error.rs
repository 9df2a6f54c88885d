//! Stack error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during stack operations.
///
/// Every operation that returns a `StackError` leaves the stack exactly as
/// it was before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StackError {
    /// A capacity of zero was requested, or a resize would drop below the
    /// number of occupied slots.
    InvalidCapacity {
        /// The capacity that was requested.
        requested: usize,
        /// Number of occupied slots at the time of the request.
        length: usize,
    },
    /// An element size of zero was requested at initialisation.
    InvalidElementSize {
        /// The element size that was requested.
        requested: usize,
    },
    /// `push` was given a byte slice whose length is not the element size.
    ElementSizeMismatch {
        /// The stack's fixed element size.
        expected: usize,
        /// Length of the slice that was passed.
        actual: usize,
    },
    /// The allocator could not satisfy the request, or the byte size of the
    /// request does not fit in `usize`.
    AllocationFailure {
        /// Number of bytes requested (`usize::MAX` when the size overflowed).
        requested: usize,
    },
    /// `push` was attempted with every slot occupied.
    Full {
        /// The stack's capacity.
        capacity: usize,
    },
    /// `pop` was attempted with no occupied slots.
    Empty,
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { requested, length } => {
                if *requested == 0 {
                    write!(f, "invalid capacity: capacity must be positive")
                } else {
                    write!(
                        f,
                        "invalid capacity: {requested} is below the {length} occupied slots"
                    )
                }
            }
            Self::InvalidElementSize { requested } => {
                write!(
                    f,
                    "invalid element size: {requested} (element size must be positive)"
                )
            }
            Self::ElementSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "element size mismatch: expected {expected} bytes, got {actual}"
                )
            }
            Self::AllocationFailure { requested } => {
                write!(f, "could not allocate {requested} bytes")
            }
            Self::Full { capacity } => {
                write!(f, "stack is full: all {capacity} slots occupied")
            }
            Self::Empty => write!(f, "stack is empty"),
        }
    }
}

impl Error for StackError {}

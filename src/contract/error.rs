//! Error type shared by every container in this crate.
//!
//! All variants describe precondition violations: they are reported at the
//! call site and never retried internally.

use std::fmt;

/// Represents a violated precondition of a container operation.
///
/// # Examples
///
/// ```rust
/// use bucketlist::list::LinkedList;
/// use bucketlist::CollectionError;
///
/// let list: LinkedList<i32> = LinkedList::new();
/// assert_eq!(
///     list.get(0),
///     Err(CollectionError::IndexOutOfRange { index: 0, length: 0 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// An argument was rejected: a non-positive bucket count at construction,
    /// or an absent value offered to a container that cannot store one.
    InvalidArgument {
        /// Human-readable description of the rejected argument.
        reason: String,
    },

    /// A positional operation was given an index outside its valid range.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The container length at the time of the call.
        length: usize,
    },

    /// A cursor was used out of protocol: removing without a current element,
    /// or advancing past the last element.
    InvalidIteratorState {
        /// Which part of the protocol was violated.
        reason: &'static str,
    },
}

impl CollectionError {
    #[cfg_attr(not(feature = "hashset"), allow(dead_code))]
    pub(crate) fn invalid_bucket_count(bucket_count: impl fmt::Display) -> Self {
        Self::InvalidArgument {
            reason: format!("bucket count must be a positive integer, got {bucket_count}"),
        }
    }

    pub(crate) fn absent_value() -> Self {
        Self::InvalidArgument {
            reason: "absent values are not supported".to_string(),
        }
    }

    #[cfg_attr(not(feature = "list"), allow(dead_code))]
    pub(crate) const fn index_out_of_range(index: usize, length: usize) -> Self {
        Self::IndexOutOfRange { index, length }
    }

    #[cfg_attr(not(feature = "list"), allow(dead_code))]
    pub(crate) const fn exhausted() -> Self {
        Self::InvalidIteratorState {
            reason: "no elements left to advance to",
        }
    }

    #[cfg_attr(not(feature = "list"), allow(dead_code))]
    pub(crate) const fn no_current_element() -> Self {
        Self::InvalidIteratorState {
            reason: "no current element to remove; advance first",
        }
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => {
                write!(formatter, "invalid argument: {reason}")
            }
            Self::IndexOutOfRange { index, length } => {
                write!(
                    formatter,
                    "index out of range: the index is {index} but the length is {length}"
                )
            }
            Self::InvalidIteratorState { reason } => {
                write!(formatter, "invalid iterator state: {reason}")
            }
        }
    }
}

impl std::error::Error for CollectionError {}

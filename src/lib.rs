//! # bucketlist
//!
//! Two mutable containers behind one collection contract:
//!
//! - **[`LinkedList`](list::LinkedList)**: a doubly-linked list over a node arena,
//!   terminated by a sentinel tail node, with positional access and a cursor
//!   that can remove elements while walking the list.
//! - **[`FixedBucketHashSet`](hashset::FixedBucketHashSet)**: a hash set whose
//!   bucket table is sized once at construction and never grows; each bucket
//!   chains its colliding values in a `LinkedList`.
//!
//! Both implement [`Collection`](contract::Collection), so code written against
//! the contract (the benchmarks, for instance) drives either container the same
//! way.
//!
//! ## Feature Flags
//!
//! - `list`: the doubly-linked list (default)
//! - `hashset`: the fixed-bucket hash set, implies `list` (default)
//! - `fxhash`: use `rustc-hash` as the default hash builder
//! - `ahash`: use `ahash` as the default hash builder
//! - `tracing`: emit `tracing` debug events on structural changes
//! - `full`: `list`, `hashset` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use bucketlist::prelude::*;
//!
//! let mut list = LinkedList::new();
//! list.add_all([1, 2, 3, 2]);
//! assert!(list.remove(&2));
//! assert_eq!(list.to_string(), "[1, 3]");
//!
//! let mut set = FixedBucketHashSet::new(8).unwrap();
//! set.add_all([1, 2, 2, 3]);
//! assert_eq!(set.len(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Forwards to `tracing::debug!` when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! debug_event {
    ($($argument:tt)*) => {
        tracing::debug!($($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! debug_event {
    ($($argument:tt)*) => {};
}

/// Prelude module for convenient imports.
///
/// Re-exports the contract, the error type and both containers.
///
/// # Usage
///
/// ```rust
/// use bucketlist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::contract::*;

    #[cfg(feature = "list")]
    pub use crate::list::LinkedList;

    #[cfg(feature = "hashset")]
    pub use crate::hashset::FixedBucketHashSet;
}

pub mod contract;

#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "hashset")]
pub mod hashset;

pub use contract::{Collection, CollectionError};

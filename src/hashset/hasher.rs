//! Hash builder selection and bucket indexing.
//!
//! The default [`BuildHasher`] follows the crate's feature flags:
//!
//! | Features          | `DefaultHashBuilder`                          |
//! |-------------------|-----------------------------------------------|
//! | (none)            | `std::collections::hash_map::RandomState`     |
//! | `fxhash`          | `rustc_hash::FxBuildHasher`                   |
//! | `ahash`           | `ahash::RandomState`                          |
//!
//! `fxhash` wins if both fast hashers are enabled.

use std::hash::{BuildHasher, Hash};

/// The hash builder used when none is given explicitly.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hash builder used when none is given explicitly.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hash builder used when none is given explicitly.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// Maps `value` onto one of `bucket_count` buckets.
///
/// Hashes are unsigned 64-bit values, so no sign folding is needed before
/// the modulus. `bucket_count` must be non-zero.
#[inline]
pub(super) fn bucket_index<S, Q>(hash_builder: &S, value: &Q, bucket_count: usize) -> usize
where
    S: BuildHasher,
    Q: Hash + ?Sized,
{
    (hash_builder.hash_one(value) % bucket_count as u64) as usize
}

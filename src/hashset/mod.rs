//! Hash set with a fixed number of chained buckets.
//!
//! This module provides [`FixedBucketHashSet`], a mutable hash set whose
//! bucket table is allocated once, at construction, and never resized.
//!
//! # Overview
//!
//! Each bucket owns a [`LinkedList`] acting as its collision chain. A value
//! lives in the bucket at `hash(value) mod bucket_count`, and the chain never
//! holds two equal values:
//!
//! ```text
//! table[0]: [8] <-> [sentinel]
//! table[1]: (empty)
//! table[2]: [2] <-> [10] <-> [sentinel]
//! table[3]: [3] <-> [sentinel]
//! ```
//!
//! Lookups cost O(1 + n/m) for `n` elements over `m` buckets. Because the
//! table never grows, an undersized table degrades towards one long chain
//! (`m = 1` is a plain list with set semantics) in exchange for predictable
//! memory use.
//!
//! # Iteration order
//!
//! Iteration visits buckets in table order and each chain front to back. The
//! order depends on the hasher, not on insertion, but it is repeatable while
//! the set is not modified.
//!
//! # Examples
//!
//! ```rust
//! use bucketlist::hashset::FixedBucketHashSet;
//!
//! let mut set = FixedBucketHashSet::new(4)?;
//! assert!(set.insert("alpha"));
//! assert!(!set.insert("alpha"));
//! assert!(set.contains("alpha"));
//! assert_eq!(set.len(), 1);
//! # Ok::<(), bucketlist::CollectionError>(())
//! ```

mod cursor;
mod hasher;

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::{FromIterator, FusedIterator};

pub use cursor::CursorMut;
pub use hasher::DefaultHashBuilder;

use crate::contract::{Collection, CollectionError};
use crate::list::{self, LinkedList};

/// Number of buckets used by [`Default`] and [`FromIterator`].
pub const DEFAULT_BUCKET_COUNT: usize = 16;

// =============================================================================
// Bucket Definition
// =============================================================================

/// A table slot. Its chain holds every value that hashes here.
#[derive(Clone)]
struct Bucket<T> {
    chain: LinkedList<T>,
}

impl<T> Bucket<T> {
    const fn new() -> Self {
        Self {
            chain: LinkedList::new(),
        }
    }
}

fn empty_table<T>(bucket_count: usize) -> Box<[Bucket<T>]> {
    (0..bucket_count).map(|_| Bucket::new()).collect()
}

// =============================================================================
// FixedBucketHashSet Definition
// =============================================================================

/// A hash set with a bucket table fixed at construction.
///
/// # Time Complexity
///
/// | Operation         | Complexity   |
/// |-------------------|--------------|
/// | `new`             | O(m)         |
/// | `insert` / `add`  | O(1 + n/m)   |
/// | `contains`        | O(1 + n/m)   |
/// | `remove`          | O(1 + n/m)   |
/// | `len`             | O(1)         |
/// | `clear`           | O(n + m)     |
/// | full iteration    | O(n + m)     |
///
/// # Examples
///
/// ```rust
/// use bucketlist::hashset::FixedBucketHashSet;
/// use bucketlist::CollectionError;
///
/// let set: FixedBucketHashSet<i32> = FixedBucketHashSet::new(1)?;
/// assert_eq!(set.bucket_count(), 1);
///
/// assert!(matches!(
///     FixedBucketHashSet::<i32>::new(0),
///     Err(CollectionError::InvalidArgument { .. })
/// ));
/// # Ok::<(), CollectionError>(())
/// ```
#[derive(Clone)]
pub struct FixedBucketHashSet<T, S = DefaultHashBuilder> {
    table: Box<[Bucket<T>]>,
    /// Sum of all chain lengths.
    length: usize,
    hash_builder: S,
}

impl<T> FixedBucketHashSet<T, DefaultHashBuilder> {
    /// Creates an empty set with `bucket_count` buckets.
    ///
    /// `bucket_count` may be any integer type; it must be positive and fit
    /// in a `usize`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `bucket_count` is zero,
    /// negative, or too large for a `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bucketlist::hashset::FixedBucketHashSet;
    ///
    /// assert!(FixedBucketHashSet::<u8>::new(16).is_ok());
    /// assert!(FixedBucketHashSet::<u8>::new(-1).is_err());
    /// ```
    pub fn new<N>(bucket_count: N) -> Result<Self, CollectionError>
    where
        N: TryInto<usize> + Copy + fmt::Display,
    {
        Self::with_hasher(bucket_count, DefaultHashBuilder::default())
    }
}

impl<T, S> FixedBucketHashSet<T, S> {
    /// Creates an empty set with `bucket_count` buckets that hashes with
    /// `hash_builder`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `bucket_count` is zero,
    /// negative, or too large for a `usize`.
    pub fn with_hasher<N>(bucket_count: N, hash_builder: S) -> Result<Self, CollectionError>
    where
        N: TryInto<usize> + Copy + fmt::Display,
    {
        let table_length = bucket_count
            .try_into()
            .ok()
            .filter(|&count| count > 0)
            .ok_or_else(|| CollectionError::invalid_bucket_count(bucket_count))?;
        debug_event!(buckets = table_length, "creating fixed bucket hash set");
        Ok(Self {
            table: empty_table(table_length),
            length: 0,
            hash_builder,
        })
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of buckets, fixed at construction.
    #[inline]
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.table.len()
    }

    /// Returns the length of every chain, in table order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bucketlist::hashset::FixedBucketHashSet;
    ///
    /// let mut set = FixedBucketHashSet::new(1)?;
    /// set.insert('a');
    /// set.insert('b');
    /// assert_eq!(set.chain_lengths().collect::<Vec<_>>(), vec![2]);
    /// # Ok::<(), bucketlist::CollectionError>(())
    /// ```
    pub fn chain_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.table.iter().map(|bucket| bucket.chain.len())
    }

    /// Returns the average chain length, `len() / bucket_count()`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.length as f64 / self.table.len() as f64
    }

    /// Returns a reference to the set's hash builder.
    #[must_use]
    pub const fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Removes every element. The bucket count is unchanged.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        debug_event!(
            elements = self.length,
            buckets = self.table.len(),
            "clearing fixed bucket hash set"
        );
        for bucket in self.table.iter_mut() {
            bucket.chain.clear();
        }
        self.length = 0;
    }

    /// Returns an iterator over the elements, bucket by bucket.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buckets: self.table.iter(),
            chain: None,
            remaining: self.length,
        }
    }

    /// Returns a cursor positioned before the first element.
    ///
    /// The cursor can remove the element it last yielded; see [`CursorMut`].
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }
}

impl<T, S> FixedBucketHashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn bucket_for<Q>(&self, value: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        hasher::bucket_index(&self.hash_builder, value, self.table.len())
    }

    /// Adds `value` unless an equal value is already present.
    ///
    /// Returns `true` if the value was added.
    pub fn insert(&mut self, value: T) -> bool {
        let index = self.bucket_for(&value);
        let chain = &mut self.table[index].chain;
        if chain.iter().any(|element| *element == value) {
            return false;
        }
        chain.push_back(value);
        self.length += 1;
        true
    }

    /// Returns a reference to the stored value equal to `value`.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.is_empty() {
            return None;
        }
        self.table[self.bucket_for(value)]
            .chain
            .iter()
            .find(|element| (*element).borrow() == value)
    }

    /// Returns `true` if the set contains a value equal to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(value).is_some()
    }

    /// Removes the value equal to `value`.
    ///
    /// Returns `true` if a value was removed.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.is_empty() {
            return false;
        }
        let index = self.bucket_for(value);
        let removed = self.table[index]
            .chain
            .remove_first_by(|element| element.borrow() == value)
            .is_some();
        if removed {
            self.length -= 1;
        }
        removed
    }

    /// Same as [`remove`](Self::remove): a set holds at most one equal value.
    pub fn remove_first<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove(value)
    }
}

// =============================================================================
// Collection Implementation
// =============================================================================

impl<T, S> Collection<T> for FixedBucketHashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, value: T) {
        self.insert(value);
    }

    fn contains(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn remove_first(&mut self, value: &T) -> bool {
        self.remove(value)
    }

    fn remove(&mut self, value: &T) -> bool {
        self.remove(value)
    }

    fn clear(&mut self) {
        self.clear();
    }

    fn len(&self) -> usize {
        self.length
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`FixedBucketHashSet`].
pub struct Iter<'a, T> {
    buckets: std::slice::Iter<'a, Bucket<T>>,
    chain: Option<list::Iter<'a, T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(element) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(element);
            }
            self.chain = Some(self.buckets.next()?.chain.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for FixedBucketHashSet<T, S> {
    fn default() -> Self {
        Self {
            table: empty_table(DEFAULT_BUCKET_COUNT),
            length: 0,
            hash_builder: S::default(),
        }
    }
}

impl<T, S> FromIterator<T> for FixedBucketHashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T, S> Extend<T> for FixedBucketHashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T, S> IntoIterator for &'a FixedBucketHashSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two sets are equal when they hold the same elements, whatever their
/// bucket counts.
impl<T, S> PartialEq for FixedBucketHashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().all(|element| other.contains(element))
    }
}

impl<T, S> Eq for FixedBucketHashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T: fmt::Debug, S> fmt::Debug for FixedBucketHashSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for FixedBucketHashSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(FixedBucketHashSet<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(FixedBucketHashSet<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

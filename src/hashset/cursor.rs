//! Cursor over a [`FixedBucketHashSet`] that can remove elements in place.

use super::{Bucket, FixedBucketHashSet};
use crate::contract::CollectionError;
use crate::list::CursorMut as ChainCursor;

/// A cursor that walks a [`FixedBucketHashSet`] bucket by bucket and can
/// remove the element it yielded last.
///
/// It follows the same protocol as the list cursor,
/// [`list::CursorMut`](crate::list::CursorMut): `has_next`, `advance`,
/// `remove_current`. Removing through the cursor keeps the set's length in
/// step.
///
/// # Examples
///
/// ```rust
/// use bucketlist::hashset::FixedBucketHashSet;
///
/// let mut set: FixedBucketHashSet<i32> = (0..10).collect();
/// let mut cursor = set.cursor_mut();
/// while cursor.has_next() {
///     if cursor.advance()? % 2 == 1 {
///         cursor.remove_current()?;
///     }
/// }
/// assert_eq!(set.len(), 5);
/// assert!(set.iter().all(|value| value % 2 == 0));
/// # Ok::<(), bucketlist::CollectionError>(())
/// ```
pub struct CursorMut<'a, T> {
    /// Buckets not visited yet.
    rest: &'a mut [Bucket<T>],
    /// Cursor over the chain of the bucket being visited.
    chain: Option<ChainCursor<'a, T>>,
    length: &'a mut usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(super) fn new<S>(set: &'a mut FixedBucketHashSet<T, S>) -> Self {
        let FixedBucketHashSet { table, length, .. } = set;
        Self {
            rest: &mut table[..],
            chain: None,
            length,
        }
    }

    fn chain_has_next(&self) -> bool {
        self.chain.as_ref().is_some_and(ChainCursor::has_next)
    }

    /// Returns `true` if [`advance`](Self::advance) would yield an element.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.chain_has_next() || self.rest.iter().any(|bucket| !bucket.chain.is_empty())
    }

    /// Moves onto the next element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidIteratorState`] if every element has
    /// already been yielded.
    pub fn advance(&mut self) -> Result<&T, CollectionError> {
        if !self.has_next() {
            return Err(CollectionError::exhausted());
        }
        while !self.chain_has_next() {
            let (bucket, rest) = std::mem::take(&mut self.rest)
                .split_first_mut()
                .ok_or(CollectionError::exhausted())?;
            self.rest = rest;
            self.chain = Some(bucket.chain.cursor_mut());
        }
        match self.chain.as_mut() {
            Some(chain) => chain.advance().map(|element| &*element),
            None => Err(CollectionError::exhausted()),
        }
    }

    /// Returns the element yielded by the last [`advance`](Self::advance),
    /// unless it has been removed since.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.chain.as_ref().and_then(ChainCursor::current)
    }

    /// Removes the element yielded by the last [`advance`](Self::advance) and
    /// returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidIteratorState`] if nothing has been
    /// yielded yet, or if the current element was already removed.
    pub fn remove_current(&mut self) -> Result<T, CollectionError> {
        let chain = self
            .chain
            .as_mut()
            .ok_or(CollectionError::no_current_element())?;
        let element = chain.remove_current()?;
        *self.length -= 1;
        Ok(element)
    }

    /// Returns the number of elements in the underlying set.
    #[must_use]
    pub fn len(&self) -> usize {
        *self.length
    }

    /// Returns `true` if the underlying set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self.length == 0
    }
}

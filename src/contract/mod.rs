//! The collection contract shared by every container in this crate.
//!
//! [`Collection`] is the capability set that both
//! [`LinkedList`](crate::list::LinkedList) and
//! [`FixedBucketHashSet`](crate::hashset::FixedBucketHashSet) implement:
//!
//! | Operation      | `LinkedList`                  | `FixedBucketHashSet`          |
//! |----------------|-------------------------------|-------------------------------|
//! | `add`          | append at the end, O(1)       | insert unless present, O(1 + n/m) |
//! | `contains`     | O(n)                          | O(1 + n/m)                    |
//! | `remove_first` | first match only, O(n)        | same as `remove`              |
//! | `remove`       | every match, O(n)             | the only match, O(1 + n/m)    |
//! | `len`          | O(1)                          | O(1)                          |
//!
//! `n` is the number of elements and `m` the number of buckets.
//!
//! # Absent values
//!
//! Element types cannot hold a null, so "absent" is spelled `Option`:
//!
//! - [`Collection::try_add`] rejects `None` with
//!   [`CollectionError::InvalidArgument`].
//! - [`Collection::contains_option`] answers `false` for `None`.
//! - [`Collection::remove_all`] skips `None` items in its source.
//!
//! A list that must keep absent payloads as ordinary elements is simply a
//! `LinkedList<Option<U>>`.
//!
//! # Examples
//!
//! ```rust
//! use bucketlist::prelude::*;
//!
//! fn fill<C: Collection<i32>>(collection: &mut C) {
//!     collection.add_all([3, 1, 3]);
//!     collection.remove_all([Some(&1), None]);
//! }
//!
//! let mut list = LinkedList::new();
//! fill(&mut list);
//! assert_eq!(list.len(), 2);
//!
//! let mut set = FixedBucketHashSet::new(4).unwrap();
//! fill(&mut set);
//! assert_eq!(set.len(), 1);
//! ```

mod error;

pub use error::CollectionError;

/// A mutable, iterable container of `T`.
///
/// Implementors are single-threaded containers with no internal
/// synchronization. Iterators returned by [`Collection::iter`] borrow the
/// container, so it cannot be mutated while one is alive.
pub trait Collection<T> {
    /// Borrowing iterator over the elements in the container's own order.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Adds `value` to the container.
    fn add(&mut self, value: T);

    /// Adds a possibly-absent value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `value` is `None`.
    fn try_add(&mut self, value: Option<T>) -> Result<(), CollectionError> {
        match value {
            Some(value) => {
                self.add(value);
                Ok(())
            }
            None => {
                debug_event!("rejected an absent value");
                Err(CollectionError::absent_value())
            }
        }
    }

    /// Returns `true` if an element equal to `value` is present.
    fn contains(&self, value: &T) -> bool;

    /// Like [`Collection::contains`], answering `false` for an absent value.
    fn contains_option(&self, value: Option<&T>) -> bool {
        value.is_some_and(|value| self.contains(value))
    }

    /// Removes the first element equal to `value`, in iteration order.
    ///
    /// Returns `true` if an element was removed.
    fn remove_first(&mut self, value: &T) -> bool;

    /// Removes every element equal to `value`.
    ///
    /// Returns `true` if the container was modified.
    fn remove(&mut self, value: &T) -> bool;

    /// Adds every element of `source`, in its iteration order.
    fn add_all<I>(&mut self, source: I)
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        for value in source {
            self.add(value);
        }
    }

    /// Adds a clone of every element of another collection, in its iteration
    /// order.
    fn add_all_from<C>(&mut self, source: &C)
    where
        C: Collection<T> + ?Sized,
        T: Clone,
        Self: Sized,
    {
        for value in source.iter() {
            self.add(value.clone());
        }
    }

    /// Removes, for every item of `source`, all matching elements.
    ///
    /// Items may be plain references or `Option` references; `None` items are
    /// skipped.
    fn remove_all<'a, I>(&mut self, source: I)
    where
        I: IntoIterator,
        I::Item: Into<Option<&'a T>>,
        T: 'a,
        Self: Sized,
    {
        if self.is_empty() {
            return;
        }
        for item in source {
            if let Some(value) = item.into() {
                self.remove(value);
            }
        }
    }

    /// Removes every element.
    fn clear(&mut self);

    /// Returns the number of elements. O(1).
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a forward iterator over the current elements.
    fn iter(&self) -> Self::Iter<'_>;
}

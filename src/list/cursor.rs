//! Cursor over a [`LinkedList`] that can remove elements in place.

use super::{LinkedList, NodeId};
use crate::contract::CollectionError;

/// A cursor that walks a [`LinkedList`] from head to sentinel and can remove
/// the element it yielded last.
///
/// The protocol is explicit:
///
/// - [`has_next`](Self::has_next) reports whether another element follows.
/// - [`advance`](Self::advance) moves onto the next element and yields it.
/// - [`remove_current`](Self::remove_current) unlinks the element yielded by
///   the last `advance`. The cursor keeps its place, so the following
///   `advance` yields the element that came after the removed one.
///
/// The cursor borrows the list mutably, so the list cannot change behind its
/// back.
///
/// # Examples
///
/// ```rust
/// use bucketlist::list::LinkedList;
///
/// let mut list: LinkedList<i32> = (1..=6).collect();
/// let mut cursor = list.cursor_mut();
/// while cursor.has_next() {
///     if *cursor.advance()? % 2 == 0 {
///         cursor.remove_current()?;
///     }
/// }
/// assert_eq!(list.to_string(), "[1, 3, 5]");
/// # Ok::<(), bucketlist::CollectionError>(())
/// ```
pub struct CursorMut<'a, T> {
    list: &'a mut LinkedList<T>,
    /// The node yielded by the last `advance`, until it is removed.
    current: Option<NodeId>,
    /// The node the next `advance` yields; the sentinel once exhausted.
    next: Option<NodeId>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(super) fn new(list: &'a mut LinkedList<T>) -> Self {
        let next = list.head;
        Self {
            list,
            current: None,
            next,
        }
    }

    /// Returns `true` if [`advance`](Self::advance) would yield an element.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next
            .is_some_and(|id| self.list.node(id).element.is_some())
    }

    /// Moves onto the next element and returns a mutable reference to it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidIteratorState`] if the cursor has
    /// already reached the sentinel.
    pub fn advance(&mut self) -> Result<&mut T, CollectionError> {
        if !self.has_next() {
            return Err(CollectionError::exhausted());
        }
        let id = self.next.ok_or(CollectionError::exhausted())?;
        self.next = self.list.node(id).next;
        self.current = Some(id);
        self.list
            .node_mut(id)
            .element
            .as_mut()
            .ok_or(CollectionError::exhausted())
    }

    /// Returns the element yielded by the last [`advance`](Self::advance),
    /// unless it has been removed since.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.current
            .and_then(|id| self.list.node(id).element.as_ref())
    }

    /// Mutable counterpart of [`current`](Self::current).
    pub fn current_mut(&mut self) -> Option<&mut T> {
        match self.current {
            Some(id) => self.list.node_mut(id).element.as_mut(),
            None => None,
        }
    }

    /// Removes the element yielded by the last [`advance`](Self::advance) and
    /// returns it. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidIteratorState`] if nothing has been
    /// yielded yet, or if the current element was already removed.
    pub fn remove_current(&mut self) -> Result<T, CollectionError> {
        let id = self
            .current
            .take()
            .ok_or(CollectionError::no_current_element())?;
        let element = self
            .list
            .unlink(id)
            .ok_or(CollectionError::no_current_element())?;
        if self.list.is_empty() {
            // The arena is gone, and the sentinel with it.
            self.next = None;
        }
        Ok(element)
    }

    /// Splices `element` in right before the element the next
    /// [`advance`](Self::advance) would yield. O(1).
    ///
    /// The inserted element is not yielded by this cursor.
    pub fn insert(&mut self, element: T) {
        let successor = match self.next {
            Some(id) => id,
            None => self.list.ensure_sentinel(),
        };
        self.list.link_before(successor, element);
        self.next = Some(successor);
    }

    /// Returns the number of elements in the underlying list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the underlying list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

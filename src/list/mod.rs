//! Mutable doubly-linked list.
//!
//! This module provides [`LinkedList`], a doubly-linked list whose nodes live
//! in an arena owned by the list and refer to each other through handles.
//!
//! # Overview
//!
//! - O(1) append (`add`, `push_back`) and prepend (`push_front`)
//! - O(1) removal of either end (`pop_front`, `pop_back`)
//! - O(min(i, n - i)) positional access, walking from the closer end
//! - O(n) search and value-based removal
//! - O(1) removal of the element a [`CursorMut`] just yielded
//!
//! # Sentinel tail
//!
//! A non-empty list always ends with one sentinel node that holds no value:
//!
//! ```text
//! head                                tail
//!  |                                   |
//!  v                                   v
//! [1] <-> [2] <-> [3] <-> [sentinel: no value, no next]
//! ```
//!
//! Every value-bearing node therefore has a successor, and appending is a
//! splice in front of the sentinel. An empty list has neither head nor tail
//! and owns no nodes.
//!
//! # Examples
//!
//! ```rust
//! use bucketlist::list::LinkedList;
//!
//! let mut list: LinkedList<i32> = (1..=3).collect();
//! list.push_front(0);
//! assert_eq!(list.get(0), Ok(&0));
//! assert_eq!(list.remove_at(3), Ok(3));
//! assert_eq!(list.to_string(), "[0, 1, 2]");
//! ```

mod cursor;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};

pub use cursor::CursorMut;

use crate::contract::{Collection, CollectionError};

// =============================================================================
// Node Arena
// =============================================================================

/// Handle of a node inside a list's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

/// A link in the chain.
///
/// `element` is `None` only for the sentinel and for vacant arena slots.
#[derive(Clone)]
struct Node<T> {
    element: Option<T>,
    previous: Option<NodeId>,
    next: Option<NodeId>,
}

// =============================================================================
// LinkedList Definition
// =============================================================================

/// A mutable doubly-linked list.
///
/// # Time Complexity
///
/// | Operation              | Complexity         |
/// |------------------------|--------------------|
/// | `new`                  | O(1)               |
/// | `push_back` / `add`    | O(1)               |
/// | `push_front`           | O(1)               |
/// | `pop_front`/`pop_back` | O(1)               |
/// | `get` / `insert`       | O(min(i, n - i))   |
/// | `remove_at`            | O(min(i, n - i))   |
/// | `contains`/`index_of`  | O(n)               |
/// | `remove_first`         | O(n)               |
/// | `remove`               | O(n)               |
/// | `len`                  | O(1)               |
///
/// # Examples
///
/// ```rust
/// use bucketlist::list::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.push_back(1);
/// list.push_back(2);
/// list.push_back(1);
/// assert!(list.remove(&1));
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Clone)]
pub struct LinkedList<T> {
    /// Arena of nodes; vacant slots are listed in `vacant`.
    nodes: Vec<Node<T>>,
    vacant: Vec<NodeId>,
    /// First value-bearing node.
    head: Option<NodeId>,
    /// The sentinel.
    tail: Option<NodeId>,
    length: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bucketlist::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            vacant: Vec::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    // -------------------------------------------------------------------------
    // Arena plumbing
    // -------------------------------------------------------------------------

    #[inline]
    fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }

    fn allocate(&mut self, element: Option<T>) -> NodeId {
        let node = Node {
            element,
            previous: None,
            next: None,
        };
        if let Some(id) = self.vacant.pop() {
            *self.node_mut(id) = node;
            id
        } else {
            self.nodes.push(node);
            NodeId(self.nodes.len() - 1)
        }
    }

    fn release(&mut self, id: NodeId) -> Option<T> {
        let node = self.node_mut(id);
        node.previous = None;
        node.next = None;
        let element = node.element.take();
        self.vacant.push(id);
        element
    }

    /// Drops every node, including the sentinel.
    fn reset(&mut self) {
        self.nodes.clear();
        self.vacant.clear();
        self.head = None;
        self.tail = None;
        self.length = 0;
    }

    /// Returns the sentinel, creating it if the list is empty.
    fn ensure_sentinel(&mut self) -> NodeId {
        if let Some(sentinel) = self.tail {
            return sentinel;
        }
        let sentinel = self.allocate(None);
        self.tail = Some(sentinel);
        sentinel
    }

    /// Splices a new node holding `element` in front of `successor`.
    ///
    /// `successor` is either a value-bearing node or the sentinel.
    fn link_before(&mut self, successor: NodeId, element: T) -> NodeId {
        let previous = self.node(successor).previous;
        let id = self.allocate(Some(element));
        let node = self.node_mut(id);
        node.previous = previous;
        node.next = Some(successor);
        self.node_mut(successor).previous = Some(id);
        match previous {
            Some(previous) => self.node_mut(previous).next = Some(id),
            None => self.head = Some(id),
        }
        self.length += 1;
        id
    }

    /// Detaches a value-bearing node and returns its element.
    ///
    /// Removing the last element releases the whole arena, so any handle held
    /// by the caller is dead afterwards.
    fn unlink(&mut self, id: NodeId) -> Option<T> {
        let Node { previous, next, .. } = *self.node(id);
        if let Some(next) = next {
            self.node_mut(next).previous = previous;
        }
        match previous {
            Some(previous) => self.node_mut(previous).next = next,
            None => self.head = next,
        }
        self.length -= 1;
        let element = self.release(id);
        if self.length == 0 {
            self.reset();
        }
        element
    }

    /// Locates the node at `index`, walking from whichever end is closer.
    fn node_at(&self, index: usize) -> Option<NodeId> {
        if index >= self.length {
            return None;
        }
        if index < self.length / 2 {
            let mut current = self.head?;
            for _ in 0..index {
                current = self.node(current).next?;
            }
            Some(current)
        } else {
            let mut current = self.tail?;
            for _ in index..self.length {
                current = self.node(current).previous?;
            }
            Some(current)
        }
    }

    // -------------------------------------------------------------------------
    // Public operations
    // -------------------------------------------------------------------------

    /// Appends an element to the end of the list. O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bucketlist::list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn push_back(&mut self, element: T) {
        let sentinel = self.ensure_sentinel();
        self.link_before(sentinel, element);
    }

    /// Prepends an element to the front of the list. O(1).
    pub fn push_front(&mut self, element: T) {
        match self.head {
            Some(head) => {
                self.link_before(head, element);
            }
            None => self.push_back(element),
        }
    }

    /// Removes and returns the first element, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.and_then(|head| self.unlink(head))
    }

    /// Removes and returns the last element, or `None` if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.tail
            .and_then(|sentinel| self.node(sentinel).previous)
            .and_then(|last| self.unlink(last))
    }

    /// Returns a reference to the first element.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|head| self.node(head).element.as_ref())
    }

    /// Returns a reference to the last element.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.tail
            .and_then(|sentinel| self.node(sentinel).previous)
            .and_then(|last| self.node(last).element.as_ref())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] unless `index < len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bucketlist::list::LinkedList;
    /// use bucketlist::CollectionError;
    ///
    /// let list: LinkedList<char> = "abc".chars().collect();
    /// assert_eq!(list.get(1), Ok(&'b'));
    /// assert_eq!(
    ///     list.get(3),
    ///     Err(CollectionError::IndexOutOfRange { index: 3, length: 3 })
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        self.node_at(index)
            .and_then(|id| self.node(id).element.as_ref())
            .ok_or(CollectionError::index_out_of_range(index, self.length))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] unless `index < len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        let length = self.length;
        match self.node_at(index) {
            Some(id) => self
                .node_mut(id)
                .element
                .as_mut()
                .ok_or(CollectionError::index_out_of_range(index, length)),
            None => Err(CollectionError::index_out_of_range(index, length)),
        }
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] unless `index < len()`.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError> {
        self.get_mut(index)
            .map(|slot| std::mem::replace(slot, element))
    }

    /// Inserts an element so that it ends up at position `index`.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index > len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bucketlist::list::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = [1, 3].into_iter().collect();
    /// list.insert(1, 2).unwrap();
    /// list.insert(3, 4).unwrap();
    /// assert_eq!(list.to_string(), "[1, 2, 3, 4]");
    /// assert!(list.insert(9, 0).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), CollectionError> {
        if index == self.length {
            self.push_back(element);
            return Ok(());
        }
        let successor = self
            .node_at(index)
            .ok_or(CollectionError::index_out_of_range(index, self.length))?;
        self.link_before(successor, element);
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] unless `index < len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        let length = self.length;
        self.node_at(index)
            .and_then(|id| self.unlink(id))
            .ok_or(CollectionError::index_out_of_range(index, length))
    }

    /// Removes the first element matching `predicate` and returns it.
    pub fn remove_first_by<F>(&mut self, mut predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.node(id);
            let next = node.next;
            if node.element.as_ref().is_some_and(&mut predicate) {
                return self.unlink(id);
            }
            cursor = next;
        }
        None
    }

    /// Removes every element matching `predicate` and returns how many were
    /// removed.
    pub fn remove_all_by<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.node(id);
            let next = node.next;
            if node.element.as_ref().is_some_and(&mut predicate) && self.unlink(id).is_some() {
                removed += 1;
                if self.is_empty() {
                    break;
                }
            }
            cursor = next;
        }
        removed
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.remove_all_by(|element| !predicate(element));
    }

    /// Removes every element and releases all nodes.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        debug_event!(
            elements = self.length,
            nodes = self.nodes.len(),
            "releasing linked list nodes"
        );
        self.reset();
    }

    /// Returns an iterator over the elements, from head to sentinel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bucketlist::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=3).collect();
    /// let doubled: Vec<i32> = list.iter().map(|x| x * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
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

impl<T: PartialEq> LinkedList<T> {
    /// Returns the position of the first element equal to `element`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bucketlist::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = [5, 6, 5].into_iter().collect();
    /// assert_eq!(list.index_of(&5), Some(0));
    /// assert_eq!(list.index_of(&7), None);
    /// ```
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == element)
    }

    /// Returns `true` if the list contains an element equal to `element`.
    pub fn contains(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }

    /// Removes the first element equal to `element`.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove_first(&mut self, element: &T) -> bool {
        self.remove_first_by(|candidate| candidate == element)
            .is_some()
    }

    /// Removes every element equal to `element`.
    ///
    /// Returns `true` if at least one element was removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bucketlist::list::LinkedList;
    ///
    /// let mut list: LinkedList<Option<i32>> = [None, Some(1), None].into_iter().collect();
    /// assert!(list.remove(&None));
    /// assert_eq!(list.len(), 1);
    /// assert!(!list.remove(&None));
    /// ```
    pub fn remove(&mut self, element: &T) -> bool {
        self.remove_all_by(|candidate| candidate == element) > 0
    }
}

// =============================================================================
// Collection Implementation
// =============================================================================

impl<T: PartialEq> Collection<T> for LinkedList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, value: T) {
        self.push_back(value);
    }

    fn contains(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn remove_first(&mut self, value: &T) -> bool {
        self.remove_first(value)
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

/// An iterator over references to elements of a [`LinkedList`].
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.cursor?.0];
        // The sentinel has no element; the cursor parks on it.
        let element = node.element.as_ref()?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some(element)
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

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

/// An owning iterator over elements of a [`LinkedList`].
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.length
    }
}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

static_assertions::assert_impl_all!(LinkedList<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(LinkedList<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

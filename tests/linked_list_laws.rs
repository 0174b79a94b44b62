#![cfg(feature = "list")]
//! Property-based tests for LinkedList laws.
//!
//! Each property drives a `LinkedList` and a `Vec` model with the same
//! operations and checks that they agree.

use bucketlist::Collection;
use bucketlist::list::LinkedList;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    PushBack(i8),
    PushFront(i8),
    PopFront,
    PopBack,
    Insert(usize, i8),
    RemoveAt(usize),
    RemoveFirst(i8),
    Remove(i8),
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        any::<i8>().prop_map(Operation::PushBack),
        any::<i8>().prop_map(Operation::PushFront),
        Just(Operation::PopFront),
        Just(Operation::PopBack),
        (0..40usize, any::<i8>()).prop_map(|(index, value)| Operation::Insert(index, value)),
        (0..40usize).prop_map(Operation::RemoveAt),
        (-4..4i8).prop_map(Operation::RemoveFirst),
        (-4..4i8).prop_map(Operation::Remove),
    ]
}

fn apply(list: &mut LinkedList<i8>, model: &mut Vec<i8>, operation: Operation) {
    match operation {
        Operation::PushBack(value) => {
            list.push_back(value);
            model.push(value);
        }
        Operation::PushFront(value) => {
            list.push_front(value);
            model.insert(0, value);
        }
        Operation::PopFront => {
            let expected = if model.is_empty() {
                None
            } else {
                Some(model.remove(0))
            };
            assert_eq!(list.pop_front(), expected);
        }
        Operation::PopBack => {
            assert_eq!(list.pop_back(), model.pop());
        }
        Operation::Insert(index, value) => {
            let result = list.insert(index, value);
            if index <= model.len() {
                assert!(result.is_ok());
                model.insert(index, value);
            } else {
                assert!(result.is_err());
            }
        }
        Operation::RemoveAt(index) => {
            let result = list.remove_at(index);
            if index < model.len() {
                assert_eq!(result, Ok(model.remove(index)));
            } else {
                assert!(result.is_err());
            }
        }
        Operation::RemoveFirst(value) => {
            let position = model.iter().position(|element| *element == value);
            assert_eq!(list.remove_first(&value), position.is_some());
            if let Some(position) = position {
                model.remove(position);
            }
        }
        Operation::Remove(value) => {
            let before = model.len();
            model.retain(|element| *element != value);
            assert_eq!(list.remove(&value), before != model.len());
        }
    }
}

// =============================================================================
// Model Law
// Description: Any operation sequence leaves the list equal to a Vec model
// =============================================================================

proptest! {
    #[test]
    fn prop_list_matches_vec_model(
        operations in prop::collection::vec(operation_strategy(), 0..100)
    ) {
        let mut list = LinkedList::new();
        let mut model = Vec::new();
        for operation in operations {
            apply(&mut list, &mut model, operation);
            prop_assert_eq!(list.len(), list.iter().count());
            prop_assert_eq!(list.len(), model.len());
        }
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), model);
    }
}

// =============================================================================
// Insertion Order Law
// Description: Without removals, iteration yields the values in insertion order
// =============================================================================

proptest! {
    #[test]
    fn prop_insertion_order_law(elements in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut list = LinkedList::new();
        list.add_all(elements.iter().copied());

        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), elements);
    }
}

// =============================================================================
// Add-Contains Law
// Description: An added value is always contained
// =============================================================================

proptest! {
    #[test]
    fn prop_add_contains_law(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        new_element: i32
    ) {
        let mut list: LinkedList<i32> = elements.into_iter().collect();
        list.add(new_element);

        prop_assert!(list.contains(&new_element));
    }
}

// =============================================================================
// Remove-All-Occurrences Law
// Description: After remove, no equal value is left and others keep their order
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_all_occurrences_law(
        elements in prop::collection::vec(0..5i32, 0..50),
        target in 0..5i32
    ) {
        let mut list: LinkedList<i32> = elements.iter().copied().collect();
        list.remove(&target);

        let expected: Vec<i32> = elements.into_iter().filter(|value| *value != target).collect();
        prop_assert!(!list.contains(&target));
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), expected);
    }
}

// =============================================================================
// Cursor Removal Law
// Description: Removing through a cursor still visits every element once
// =============================================================================

proptest! {
    #[test]
    fn prop_cursor_removal_law(
        elements in prop::collection::vec(any::<i16>(), 0..60),
        mask in prop::collection::vec(any::<bool>(), 60)
    ) {
        let mut list: LinkedList<i16> = elements.iter().copied().collect();
        let mut seen = Vec::new();
        let mut kept = Vec::new();
        let mut cursor = list.cursor_mut();
        let mut position = 0;
        while cursor.has_next() {
            let value = *cursor.advance().unwrap();
            seen.push(value);
            if mask[position] {
                prop_assert_eq!(cursor.remove_current(), Ok(value));
            } else {
                kept.push(value);
            }
            position += 1;
        }

        prop_assert_eq!(seen, elements);
        prop_assert_eq!(list.len(), kept.len());
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), kept);
    }
}

// =============================================================================
// Bulk Round-Trip Law
// Description: add_all then remove_all of distinct values empties the list
// =============================================================================

proptest! {
    #[test]
    fn prop_add_all_remove_all_law(
        elements in prop::collection::hash_set(any::<i32>(), 0..50)
    ) {
        let values: Vec<i32> = elements.into_iter().collect();
        let mut list = LinkedList::new();
        list.add_all(values.iter().copied());
        list.remove_all(&values);

        prop_assert!(list.is_empty());
    }
}

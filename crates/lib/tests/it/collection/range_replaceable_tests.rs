//! Structural edit tests on the standard owners

use std::collections::VecDeque;

use carton::collection::{Collection, RangeReplaceableCollection};

// ===== VEC =====

#[test]
fn test_vec_insert_and_remove() {
    let mut values = vec!['a', 'c'];
    values.insert_element(&1, 'b');
    values.insert_element(&3, 'd');
    assert_eq!(values, ['a', 'b', 'c', 'd']);

    assert_eq!(values.remove_element(&0), 'a');
    assert_eq!(values, ['b', 'c', 'd']);
}

#[test]
fn test_vec_replace_subrange() {
    let mut values = vec![1, 2, 3, 4, 5];

    values.replace_subrange(1..3, [20, 30, 31, 32]);
    assert_eq!(values, [1, 20, 30, 31, 32, 4, 5]);

    values.replace_subrange(0..6, [0]);
    assert_eq!(values, [0, 5]);

    // An empty range inserts
    values.replace_subrange(1..1, [1, 2]);
    assert_eq!(values, [0, 1, 2, 5]);
}

#[test]
fn test_vec_append_and_remove_subrange() {
    let mut values: Vec<u8> = Vec::new();
    values.append_element(1);
    values.append_elements([2, 3, 4, 5]);
    assert_eq!(Collection::count(&values), 5);

    values.remove_subrange(1..3);
    assert_eq!(values, [1, 4, 5]);

    values.remove_first_elements(2);
    assert_eq!(values, [5]);
    values.remove_first_elements(0);
    assert_eq!(values, [5]);
}

#[test]
fn test_vec_pop_last_on_empty() {
    let mut values: Vec<String> = Vec::new();
    assert_eq!(values.pop_last_element(), None);
}

#[test]
#[should_panic(expected = "Can't remove last element from an empty collection")]
fn test_vec_remove_last_on_empty_panics() {
    let mut values: Vec<i32> = Vec::new();
    values.remove_last_element();
}

#[test]
#[should_panic(expected = "Can't remove more items")]
fn test_vec_remove_first_too_many_panics() {
    let mut values = vec![1, 2, 3];
    values.remove_first_elements(4);
}

// ===== VECDEQUE =====

#[test]
fn test_deque_edits() {
    let mut values: VecDeque<i32> = VecDeque::new();
    values.append_elements([3, 4]);
    values.insert_element(&0, 1);
    values.insert_element(&1, 2);
    assert_eq!(values, [1, 2, 3, 4]);

    values.replace_subrange(1..3, std::iter::empty());
    assert_eq!(values, [1, 4]);

    values.append_element(5);
    assert_eq!(values.pop_last_element(), Some(5));
    assert_eq!(values.remove_last_element(), 4);
    assert_eq!(values, [1]);
}

#[test]
fn test_deque_remove_first_and_last_elements() {
    let mut values: VecDeque<i32> = (0..10).collect();
    values.remove_first_elements(3);
    values.remove_last_elements(3);
    assert_eq!(values, [3, 4, 5, 6]);

    values.remove_last_elements(4);
    assert!(Collection::is_empty(&values));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_deque_remove_past_end_panics() {
    let mut values = VecDeque::from(vec![1, 2]);
    values.remove_element(&2);
}

#[test]
#[should_panic(expected = "Can't remove more items")]
fn test_deque_remove_last_too_many_panics() {
    let mut values = VecDeque::from(vec![1, 2]);
    values.remove_last_elements(3);
}

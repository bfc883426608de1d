//! Shared view tests
//!
//! Several `SharedSlice`s may alias one owner. Element writes are visible
//! everywhere; structural edits recompute only the editing view's window.

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use carton::{
    collection::{Collection, SharedSlice},
    tree::{self, Value},
};

fn owner_of<T>(values: Vec<T>) -> Rc<RefCell<Vec<T>>> {
    Rc::new(RefCell::new(values))
}

// ===== ALIASING =====

#[test]
fn test_aliasing_views_observe_each_other() {
    let owner = owner_of(vec![0, 1, 2, 3, 4, 5, 6]);
    let first = SharedSlice::new(&owner, 2..5);
    let second = SharedSlice::new(&owner, 2..5);

    assert_eq!(first.start_index(), 2);
    assert_eq!(second.end_index(), 5);

    first.set(&3, 33);
    assert_eq!(*second.get(&3), 33);
    assert_eq!(owner.borrow()[3], 33);

    // Writes through the owner are visible to the views
    owner.borrow_mut()[4] = 44;
    assert_eq!(first.to_vec(), [2, 33, 44]);
    assert_eq!(second.to_vec(), [2, 33, 44]);
}

#[test]
fn test_with_element_mut() {
    let owner = owner_of(vec!["a".to_string(), "b".to_string()]);
    let view = SharedSlice::full(&owner);

    let len = view.with_element_mut(&1, |value| {
        value.push_str("ee");
        value.len()
    });
    assert_eq!(len, 3);
    assert_eq!(owner.borrow()[1], "bee");
}

#[test]
fn test_clone_aliases_the_same_owner() {
    let owner = owner_of(vec![1, 2, 3]);
    let view = SharedSlice::new(&owner, 0..2);
    let copy = view.clone();

    copy.set(&0, 100);
    assert_eq!(*view.get(&0), 100);
    assert!(Rc::ptr_eq(view.owner(), copy.owner()));
    assert_eq!(copy.bounds(), view.bounds());
}

#[test]
fn test_with_slice_runs_algorithms() {
    let owner = owner_of(vec![3, 8, 1, 9, 4]);
    let view = SharedSlice::new(&owner, 1..4);

    let found = view.with_slice(|slice| slice.first_index_where(|x| *x > 8));
    assert_eq!(found, Some(3));
    assert_eq!(view.len(), 3);
    assert!(!view.is_empty());
}

#[test]
#[should_panic(expected = "outside view")]
fn test_get_outside_window_panics() {
    let owner = owner_of(vec![1, 2, 3, 4]);
    let view = SharedSlice::new(&owner, 1..3);
    let _ = view.get(&3);
}

#[test]
#[should_panic(expected = "exceed")]
fn test_view_beyond_owner_panics() {
    let owner = owner_of(vec![1, 2, 3]);
    let _ = SharedSlice::new(&owner, 0..4);
}

// ===== STRUCTURAL EDITS =====

#[test]
fn test_replace_subrange_recomputes_window() {
    let owner = owner_of(vec![0, 1, 2, 3, 4, 5, 6, 7]);
    let mut view = SharedSlice::new(&owner, 2..6);
    let bystander = SharedSlice::new(&owner, 5..8);

    // Grow: two elements become three
    view.replace_subrange(3..5, [30, 31, 32]);
    assert_eq!(view.bounds(), 2..7);
    assert_eq!(view.to_vec(), [2, 30, 31, 32, 5]);
    assert_eq!(*owner.borrow(), [0, 1, 2, 30, 31, 32, 5, 6, 7]);

    // Other views keep their positions, now over shifted elements
    assert_eq!(bystander.bounds(), 5..8);
    assert_eq!(bystander.to_vec(), [32, 5, 6]);

    // Shrink: the whole window becomes one element
    view.replace_subrange(2..7, [99]);
    assert_eq!(view.bounds(), 2..3);
    assert_eq!(*owner.borrow(), [0, 1, 99, 6, 7]);
}

#[test]
fn test_insert_append_remove() {
    let owner = owner_of(vec!['a', 'b', 'c', 'd', 'e']);
    let mut view = SharedSlice::new(&owner, 1..3);

    view.insert(&1, 'x');
    assert_eq!(view.to_vec(), ['x', 'b', 'c']);

    view.append('y');
    assert_eq!(view.to_vec(), ['x', 'b', 'c', 'y']);
    assert_eq!(view.bounds(), 1..5);

    assert_eq!(view.remove(&2), 'b');
    assert_eq!(view.to_vec(), ['x', 'c', 'y']);
    assert_eq!(*owner.borrow(), ['a', 'x', 'c', 'y', 'd', 'e']);
}

#[test]
fn test_edits_on_deque_owner() {
    let owner = Rc::new(RefCell::new(VecDeque::from(vec![1, 2, 3, 4])));
    let mut view = SharedSlice::new(&owner, 1..3);

    view.remove(&1);
    view.append(9);
    assert_eq!(view.to_vec(), [3, 9]);
    assert_eq!(owner.borrow().count(), 4);
    assert_eq!(
        owner.borrow().iter().copied().collect::<Vec<_>>(),
        [1, 3, 9, 4]
    );
}

#[test]
fn test_emptied_view_stays_anchored() {
    let owner = owner_of(vec![1, 2, 3, 4]);
    let mut view = SharedSlice::new(&owner, 1..2);

    view.remove(&1);
    assert!(view.is_empty());
    assert_eq!(view.bounds(), 1..1);

    view.append(7);
    assert_eq!(*owner.borrow(), [1, 7, 3, 4]);
}

// ===== ENCODING =====

#[test]
fn test_shared_view_encodes_its_window() {
    let owner = owner_of(vec![5, 6, 7, 8]);
    let view = SharedSlice::new(&owner, 1..3);
    assert_eq!(
        tree::to_value(&view).unwrap(),
        Value::List(vec![Value::Int(6), Value::Int(7)])
    );
}

//! Borrowed view tests

use carton::{
    collection::{BidirectionalCollection, Collection, MutableCollection, Slice},
    tree::{self, Value},
};

use super::helpers::*;

// ===== READ-ONLY VIEWS =====

#[test]
fn test_view_reports_owner_positions() {
    let values = vec![10, 20, 30, 40, 50, 60, 70];
    let view = values.slice(2..5);

    assert_eq!(view.start_index(), 2);
    assert_eq!(view.end_index(), 5);
    assert_eq!(view.count(), 3);
    assert_eq!(*view.element(&2), 30);
    assert_eq!(view.get(&1), None);
    assert_eq!(view.get(&4), Some(&50));
    assert_eq!(view.indices().collect::<Vec<_>>(), [2, 3, 4]);
}

#[test]
fn test_view_of_view_shares_owner() {
    let values = vec![0, 1, 2, 3, 4, 5, 6, 7];
    let outer = values.slice(1..7);

    let inner = outer.reslice(3..5);
    assert_eq!(inner.bounds(), 3..5);
    assert!(std::ptr::eq(inner.base(), &values));

    // Slicing the view as a collection nests, but positions are unchanged
    let nested = outer.slice(2..4);
    assert_eq!(nested.start_index(), 2);
    assert_eq!(nested.to_vec(), [2, 3]);
}

#[test]
#[should_panic(expected = "exceed")]
fn test_view_beyond_owner_panics() {
    let values = vec![1, 2, 3];
    let _ = values.slice(1..4);
}

#[test]
#[should_panic(expected = "exceed")]
fn test_reslice_beyond_view_panics() {
    let values = vec![1, 2, 3, 4, 5];
    let view = values.slice(1..3);
    let _ = view.reslice(0..2);
}

#[test]
#[should_panic(expected = "outside view")]
fn test_element_outside_view_panics() {
    let values = vec![1, 2, 3, 4, 5];
    let view = values.slice(1..3);
    view.element(&3);
}

#[test]
fn test_view_shrinking() {
    let values = Stepwise(vec!['a', 'b', 'c', 'd', 'e', 'f']);
    let mut view = values.full_slice();

    assert_eq!(view.pop_first(), Some(&'a'));
    assert_eq!(view.pop_last(), Some(&'f'));
    view.remove_first_n(1);
    view.remove_last_n(1);
    assert_eq!(view.bounds(), 2..4);
    assert_eq!(view.to_vec(), ['c', 'd']);

    view.remove_first_n(2);
    assert!(view.is_empty());
    assert_eq!(view.pop_first(), None);
}

#[test]
fn test_unbounded_counts_on_offset_view() {
    let values = vec![0, 1, 2, 3, 4, 5];
    let view = values.slice(2..5);

    assert_eq!(view.prefix(usize::MAX).to_vec(), [2, 3, 4]);
    assert!(view.drop_first(usize::MAX).is_empty());
    assert_eq!(view.drop_first(usize::MAX).start_index(), 5);
    assert_eq!(view.suffix(usize::MAX).to_vec(), [2, 3, 4]);
    assert!(view.drop_last(usize::MAX).is_empty());
}

#[test]
#[should_panic(expected = "Can't remove more items")]
fn test_remove_all_but_unbounded_from_offset_view_panics() {
    let values = vec![0, 1, 2, 3, 4, 5];
    let mut view = values.slice(2..5);
    view.remove_first_n(usize::MAX);
}

#[test]
#[should_panic(expected = "Can't remove more items")]
fn test_remove_first_n_beyond_view_panics() {
    let values = Forward(vec![1, 2, 3]);
    let mut view = values.slice(0..2);
    view.remove_first_n(3);
}

#[test]
fn test_view_equality_compares_elements() {
    let left = vec![9, 1, 2, 3];
    let right = vec![1, 2, 3, 9];
    assert_eq!(left.slice(1..4), right.slice(0..3));
    assert_ne!(left.slice(0..2), right.slice(0..2));
}

#[test]
fn test_view_iteration() {
    let values = vec![1, 2, 3, 4, 5];
    let view = values.slice(1..4);

    let forward: Vec<_> = view.clone().into_iter().copied().collect();
    assert_eq!(forward, [2, 3, 4]);
    assert_eq!(view.elements().rev().copied().collect::<Vec<_>>(), [4, 3, 2]);
    assert_eq!(view.last(), Some(&4));

    let mut total = 0;
    for value in view {
        total += value;
    }
    assert_eq!(total, 9);
}

#[test]
fn test_forward_view_algorithms() {
    let words = Forward(vec!["a", "b", "-", "c"]);
    let view: Slice<'_, Forward<&str>> = words.slice(1..4);
    assert_eq!(view.first_index_where(|w| *w == "-"), Some(2));
    assert_eq!(view.split_on(|w| *w == "-").len(), 2);
    assert_eq!(view.distance(&1, &4), 3);
}

#[test]
fn test_view_encodes_only_its_window() {
    let values = vec![1, 2, 3, 4, 5];
    let encoded = tree::to_value(&values.slice(3..5)).unwrap();
    assert_eq!(encoded, Value::List(vec![Value::Int(4), Value::Int(5)]));
}

// ===== WRITE-THROUGH VIEWS =====

#[test]
fn test_mutable_view_writes_through() {
    let mut values = vec![1, 2, 3, 4, 5, 6];
    {
        let mut view = values.slice_mut(2..5);
        assert_eq!(view.start_index(), 2);
        assert_eq!(view.set(&3, 40), 4);
        *view.element_mut(&2) *= 10;
        assert_eq!(view.as_slice().to_vec(), [30, 40, 5]);
    }
    assert_eq!(values, [1, 2, 30, 40, 5, 6]);
}

#[test]
fn test_set_element_on_owner() {
    let mut values = vec!['x', 'y', 'z'];
    assert_eq!(values.set_element(&1, 'q'), 'y');
    assert_eq!(values, ['x', 'q', 'z']);
}

#[test]
#[should_panic(expected = "outside view")]
fn test_mutable_view_rejects_outside_positions() {
    let mut values = vec![1, 2, 3, 4];
    let mut view = values.slice_mut(0..2);
    view.set(&2, 0);
}

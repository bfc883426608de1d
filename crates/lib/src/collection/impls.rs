//! Collection impls for the standard random-access containers.
//!
//! Positions are `usize` offsets, so counting and offsetting are O(1).

use std::{collections::VecDeque, ops::Range};

use super::{BidirectionalCollection, Collection, MutableCollection, RangeReplaceableCollection};

/// `i + n`, or `None` if that would pass `limit` while moving toward it.
fn limited_offset(i: usize, n: isize, limit: usize) -> Option<usize> {
    if n > 0 && limit >= i && limit - i < n.unsigned_abs() {
        return None;
    }
    if n < 0 && limit <= i && i - limit < n.unsigned_abs() {
        return None;
    }
    Some(offset_position(i, n))
}

fn offset_position(i: usize, n: isize) -> usize {
    match i.checked_add_signed(n) {
        Some(position) => position,
        None => panic!("offset moves outside the collection"),
    }
}

macro_rules! impl_random_access {
    ([$($generics:tt)*] $ty:ty, $len:ident) => {
        impl<$($generics)*> Collection for $ty {
            type Element = T;
            type Index = usize;

            fn start_index(&self) -> usize {
                0
            }

            fn end_index(&self) -> usize {
                self.$len()
            }

            fn index_after(&self, i: &usize) -> usize {
                assert!(*i < self.$len(), "cannot advance past the end index");
                i + 1
            }

            fn element(&self, i: &usize) -> &T {
                &self[*i]
            }

            fn index_before(&self, i: &usize) -> Option<usize> {
                assert!(*i > 0, "cannot move before the start index");
                Some(i - 1)
            }

            fn is_empty(&self) -> bool {
                self.$len() == 0
            }

            fn count(&self) -> usize {
                self.$len()
            }

            fn distance(&self, from: &usize, to: &usize) -> isize {
                *to as isize - *from as isize
            }

            fn offset_index(&self, i: &usize, n: isize) -> usize {
                offset_position(*i, n)
            }

            fn offset_index_limited(&self, i: &usize, n: isize, limit: &usize) -> Option<usize> {
                limited_offset(*i, n, *limit)
            }
        }

        impl<$($generics)*> BidirectionalCollection for $ty {}

        impl<$($generics)*> MutableCollection for $ty {
            fn element_mut(&mut self, i: &usize) -> &mut T {
                &mut self[*i]
            }
        }
    };
}

impl_random_access!([T] Vec<T>, len);
impl_random_access!([T] [T], len);
impl_random_access!([T] VecDeque<T>, len);

impl<T> RangeReplaceableCollection for Vec<T> {
    fn replace_subrange<I>(&mut self, range: Range<usize>, new_elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.splice(range, new_elements);
    }

    fn remove_element(&mut self, i: &usize) -> T {
        Vec::remove(self, *i)
    }

    fn insert_element(&mut self, i: &usize, value: T) {
        Vec::insert(self, *i, value);
    }

    fn append_element(&mut self, value: T) {
        self.push(value);
    }
}

impl<T> RangeReplaceableCollection for VecDeque<T> {
    fn replace_subrange<I>(&mut self, range: Range<usize>, new_elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        let tail = self.split_off(range.end);
        self.truncate(range.start);
        self.extend(new_elements);
        self.extend(tail);
    }

    fn remove_element(&mut self, i: &usize) -> T {
        match VecDeque::remove(self, *i) {
            Some(value) => value,
            None => panic!("index {i} out of bounds for length {}", self.len()),
        }
    }

    fn append_element(&mut self, value: T) {
        self.push_back(value);
    }
}

//! Position-based collections and views over them.
//!
//! This module provides a capability-tiered collection model. A collection
//! exposes two comparable positions (start and end) and a successor function;
//! everything else (counting, measuring, slicing, searching, splitting) is
//! derived from that minimal set. Narrower capabilities refine the defaults:
//!
//! - [`Collection`] - multi-pass, position-indexed access moving forward
//! - [`BidirectionalCollection`] - adds backward traversal for trailing operations
//! - [`MutableCollection`] - in-place element writes
//! - [`RangeReplaceableCollection`] - structural edits (insert, remove, replace)
//!
//! Random-access collections (`Vec<T>`, `[T]`, `VecDeque<T>`) override the
//! O(n) defaults for `count`, `distance` and `offset_index` with O(1) formulas.
//!
//! # Views
//!
//! Slicing never copies. A view reports positions in its owner's index space,
//! so a view over `v[2..5]` starts at position `2`, not `0`:
//!
//! - [`Slice`] - borrowed, read-only window
//! - [`SliceMut`] - borrowed window that writes through to its owner
//! - [`SharedSlice`] - window over a shared owner; several views may alias one
//!   owner and observe each other's writes
//!
//! # Preconditions
//!
//! Out-of-bounds positions, moving a forward-only collection backward, and
//! removing more elements than exist are programming errors and panic.

use std::ops::Range;

use rand::Rng;

pub mod impls;
pub mod iter;
pub mod shared;
pub mod slice;

pub use iter::{Indices, Iter};
pub use shared::SharedSlice;
pub use slice::{Slice, SliceMut};

/// A multi-pass sequence whose elements are addressed by ordered positions.
///
/// Implementors supply the start and end positions, the successor function and
/// element access. Every other method has a default built from those four.
///
/// # Examples
///
/// ```
/// use carton::collection::Collection;
///
/// let values = vec![10, 20, 30, 40, 50];
/// let window = values.slice(1..4);
///
/// assert_eq!(window.start_index(), 1);
/// assert_eq!(window.count(), 3);
/// assert_eq!(window.first(), Some(&20));
/// assert_eq!(values.distance(&1, &4), 3);
/// ```
pub trait Collection {
    type Element;
    type Index: Clone + Ord + std::fmt::Debug;

    /// Position of the first element, or `end_index()` when empty.
    fn start_index(&self) -> Self::Index;

    /// Position one past the last element.
    fn end_index(&self) -> Self::Index;

    /// Position immediately after `i`. `i` must not be `end_index()`.
    fn index_after(&self, i: &Self::Index) -> Self::Index;

    /// The element at `i`. `i` must be a valid element position.
    fn element(&self, i: &Self::Index) -> &Self::Element;

    /// Position immediately before `i`, or `None` if this collection cannot
    /// move backward.
    ///
    /// `None` reports a missing capability, not a boundary: collections that
    /// implement [`BidirectionalCollection`] always return `Some`, and must
    /// never be asked for the position before `start_index()`.
    fn index_before(&self, _i: &Self::Index) -> Option<Self::Index> {
        None
    }

    /// Returns true if the collection has no elements. O(1).
    fn is_empty(&self) -> bool {
        self.start_index() == self.end_index()
    }

    /// Number of elements. O(n) unless overridden.
    fn count(&self) -> usize {
        self.distance(&self.start_index(), &self.end_index()) as usize
    }

    /// Signed number of steps from `from` to `to`.
    ///
    /// Counts successor steps when `from <= to`. When `from > to` the
    /// collection must be able to move backward; the result is negative.
    fn distance(&self, from: &Self::Index, to: &Self::Index) -> isize {
        let mut i = from.clone();
        let mut steps = 0isize;
        if from <= to {
            while &i != to {
                i = self.index_after(&i);
                steps += 1;
            }
        } else {
            while &i != to {
                i = step_back(self, &i);
                steps -= 1;
            }
        }
        steps
    }

    /// The position `n` steps from `i`.
    ///
    /// Negative `n` requires backward traversal.
    fn offset_index(&self, i: &Self::Index, n: isize) -> Self::Index {
        let mut i = i.clone();
        if n >= 0 {
            for _ in 0..n {
                i = self.index_after(&i);
            }
        } else {
            for _ in 0..n.unsigned_abs() {
                i = step_back(self, &i);
            }
        }
        i
    }

    /// The position `n` steps from `i`, or `None` if reaching it would move
    /// past `limit`.
    ///
    /// A `limit` behind the direction of travel never constrains: if `n > 0`
    /// and `limit < i`, or `n < 0` and `limit > i`, the result is the same as
    /// [`offset_index`](Self::offset_index).
    fn offset_index_limited(
        &self,
        i: &Self::Index,
        n: isize,
        limit: &Self::Index,
    ) -> Option<Self::Index> {
        let mut i = i.clone();
        if n >= 0 {
            for _ in 0..n {
                if &i == limit {
                    return None;
                }
                i = self.index_after(&i);
            }
        } else {
            for _ in 0..n.unsigned_abs() {
                if &i == limit {
                    return None;
                }
                i = step_back(self, &i);
            }
        }
        Some(i)
    }

    /// The first element, if any.
    fn first(&self) -> Option<&Self::Element> {
        if self.is_empty() {
            None
        } else {
            Some(self.element(&self.start_index()))
        }
    }

    /// Iterates the elements front to back.
    fn elements(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    /// Iterates the valid element positions front to back.
    fn indices(&self) -> Indices<'_, Self> {
        Indices::new(self)
    }

    /// A view over the positions in `range`.
    ///
    /// The bounds are positions of this collection and must satisfy
    /// `start_index() <= range.start <= range.end <= end_index()`.
    fn slice(&self, range: Range<Self::Index>) -> Slice<'_, Self> {
        Slice::new(self, range)
    }

    /// A view over the whole collection.
    fn full_slice(&self) -> Slice<'_, Self> {
        Slice::new(self, self.start_index()..self.end_index())
    }

    /// A view over at most the first `max_length` elements.
    fn prefix(&self, max_length: usize) -> Slice<'_, Self> {
        let end = self
            .offset_index_limited(&self.start_index(), as_offset(max_length), &self.end_index())
            .unwrap_or_else(|| self.end_index());
        Slice::new(self, self.start_index()..end)
    }

    /// A view over everything but the first `k` elements.
    fn drop_first(&self, k: usize) -> Slice<'_, Self> {
        let start = self
            .offset_index_limited(&self.start_index(), as_offset(k), &self.end_index())
            .unwrap_or_else(|| self.end_index());
        Slice::new(self, start..self.end_index())
    }

    /// A view from the start up to, but not including, `end`.
    fn prefix_up_to(&self, end: Self::Index) -> Slice<'_, Self> {
        Slice::new(self, self.start_index()..end)
    }

    /// A view from the start through `position` inclusive.
    fn prefix_through(&self, position: &Self::Index) -> Slice<'_, Self> {
        Slice::new(self, self.start_index()..self.index_after(position))
    }

    /// A view from `start` to the end.
    fn suffix_from(&self, start: Self::Index) -> Slice<'_, Self> {
        Slice::new(self, start..self.end_index())
    }

    /// A view over the leading elements that satisfy `predicate`.
    fn prefix_while<F>(&self, mut predicate: F) -> Slice<'_, Self>
    where
        F: FnMut(&Self::Element) -> bool,
    {
        let end = self
            .first_index_where(|e| !predicate(e))
            .unwrap_or_else(|| self.end_index());
        Slice::new(self, self.start_index()..end)
    }

    /// A view starting at the first element that fails `predicate`.
    fn drop_while<F>(&self, mut predicate: F) -> Slice<'_, Self>
    where
        F: FnMut(&Self::Element) -> bool,
    {
        let start = self
            .first_index_where(|e| !predicate(e))
            .unwrap_or_else(|| self.end_index());
        Slice::new(self, start..self.end_index())
    }

    /// Position of the first element satisfying `predicate`.
    fn first_index_where<F>(&self, mut predicate: F) -> Option<Self::Index>
    where
        F: FnMut(&Self::Element) -> bool,
    {
        let end = self.end_index();
        let mut i = self.start_index();
        while i != end {
            if predicate(self.element(&i)) {
                return Some(i);
            }
            i = self.index_after(&i);
        }
        None
    }

    fn contains_where<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&Self::Element) -> bool,
    {
        self.first_index_where(predicate).is_some()
    }

    /// Splits around elements matching `is_separator`.
    ///
    /// A separator at the very start or end yields an empty leading or
    /// trailing view unless `omitting_empty_subsequences` is set. At most
    /// `max_splits` splits are made; once reached, the remaining elements,
    /// separators included, form the final view.
    ///
    /// ```
    /// use carton::collection::Collection;
    ///
    /// let text: Vec<char> = "a,b,c".chars().collect();
    /// let parts = text.split_where(1, true, |c| *c == ',');
    /// let parts: Vec<String> = parts.iter().map(|p| p.elements().collect()).collect();
    /// assert_eq!(parts, ["a", "b,c"]);
    /// ```
    fn split_where<F>(
        &self,
        max_splits: usize,
        omitting_empty_subsequences: bool,
        mut is_separator: F,
    ) -> Vec<Slice<'_, Self>>
    where
        F: FnMut(&Self::Element) -> bool,
    {
        let omit = omitting_empty_subsequences;
        let mut result = Vec::new();
        let end = self.end_index();
        let mut sub_start = self.start_index();

        if max_splits == 0 || self.is_empty() {
            push_subsequence(&mut result, self, &sub_start, &end, omit);
            return result;
        }

        let mut sub_end = sub_start.clone();
        while sub_end != end {
            if is_separator(self.element(&sub_end)) {
                let did_append = push_subsequence(&mut result, self, &sub_start, &sub_end, omit);
                sub_end = self.index_after(&sub_end);
                sub_start = sub_end.clone();
                if did_append && result.len() == max_splits {
                    break;
                }
                continue;
            }
            sub_end = self.index_after(&sub_end);
        }

        if sub_start != end || !omit {
            result.push(Slice::new(self, sub_start..end));
        }
        result
    }

    /// Splits around every separator, dropping empty views.
    fn split_on<F>(&self, is_separator: F) -> Vec<Slice<'_, Self>>
    where
        F: FnMut(&Self::Element) -> bool,
    {
        self.split_where(usize::MAX, true, is_separator)
    }

    /// A uniformly chosen element drawn with `rng`, or `None` when empty.
    fn random_element_with<R: Rng>(&self, rng: &mut R) -> Option<&Self::Element> {
        let count = self.count();
        if count == 0 {
            return None;
        }
        let offset = rng.gen_range(0..count);
        let i = self.offset_index(&self.start_index(), as_offset(offset));
        Some(self.element(&i))
    }

    /// A uniformly chosen element drawn from the thread-local generator.
    fn random_element(&self) -> Option<&Self::Element> {
        self.random_element_with(&mut rand::thread_rng())
    }
}

/// A collection that can also move backward from any position but its start.
///
/// Implementing this trait is a promise that [`Collection::index_before`]
/// returns `Some` for every position after `start_index()`. In return, the
/// trailing operations below cost O(k) instead of O(n).
pub trait BidirectionalCollection: Collection {
    /// Position immediately before `i`. `i` must not be `start_index()`.
    fn predecessor(&self, i: &Self::Index) -> Self::Index {
        step_back(self, i)
    }

    /// The last element, if any.
    fn last(&self) -> Option<&Self::Element> {
        if self.is_empty() {
            None
        } else {
            Some(self.element(&self.predecessor(&self.end_index())))
        }
    }

    /// Position of the last element satisfying `predicate`.
    fn last_index_where<F>(&self, mut predicate: F) -> Option<Self::Index>
    where
        F: FnMut(&Self::Element) -> bool,
    {
        let start = self.start_index();
        let mut i = self.end_index();
        while i != start {
            i = self.predecessor(&i);
            if predicate(self.element(&i)) {
                return Some(i);
            }
        }
        None
    }

    /// A view over at most the last `max_length` elements.
    fn suffix(&self, max_length: usize) -> Slice<'_, Self> {
        let start = self
            .offset_index_limited(&self.end_index(), -as_offset(max_length), &self.start_index())
            .unwrap_or_else(|| self.start_index());
        Slice::new(self, start..self.end_index())
    }

    /// A view over everything but the last `k` elements.
    fn drop_last(&self, k: usize) -> Slice<'_, Self> {
        let end = self
            .offset_index_limited(&self.end_index(), -as_offset(k), &self.start_index())
            .unwrap_or_else(|| self.start_index());
        Slice::new(self, self.start_index()..end)
    }
}

/// A collection whose elements can be replaced in place.
pub trait MutableCollection: Collection {
    /// Mutable access to the element at `i`.
    fn element_mut(&mut self, i: &Self::Index) -> &mut Self::Element;

    /// Replaces the element at `i`, returning the previous one.
    fn set_element(&mut self, i: &Self::Index, value: Self::Element) -> Self::Element {
        std::mem::replace(self.element_mut(i), value)
    }

    /// A view over `range` that writes through to this collection.
    fn slice_mut(&mut self, range: Range<Self::Index>) -> SliceMut<'_, Self> {
        SliceMut::new(self, range)
    }
}

/// A collection supporting structural edits.
///
/// Structural edits invalidate positions obtained before the edit.
pub trait RangeReplaceableCollection: Collection {
    /// Replaces the elements in `range` with `new_elements`.
    fn replace_subrange<I>(&mut self, range: Range<Self::Index>, new_elements: I)
    where
        I: IntoIterator<Item = Self::Element>;

    /// Removes and returns the element at `i`.
    fn remove_element(&mut self, i: &Self::Index) -> Self::Element;

    /// Inserts `value` before position `i`.
    fn insert_element(&mut self, i: &Self::Index, value: Self::Element) {
        self.replace_subrange(i.clone()..i.clone(), std::iter::once(value));
    }

    fn append_element(&mut self, value: Self::Element) {
        let end = self.end_index();
        self.replace_subrange(end.clone()..end, std::iter::once(value));
    }

    fn append_elements<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Self::Element>,
    {
        let end = self.end_index();
        self.replace_subrange(end.clone()..end, values);
    }

    fn remove_subrange(&mut self, range: Range<Self::Index>) {
        self.replace_subrange(range, std::iter::empty());
    }

    /// Removes and returns the last element, or `None` when empty.
    fn pop_last_element(&mut self) -> Option<Self::Element>
    where
        Self: BidirectionalCollection,
    {
        if self.is_empty() {
            return None;
        }
        let last = self.predecessor(&self.end_index());
        Some(self.remove_element(&last))
    }

    /// Removes and returns the last element. The collection must not be empty.
    fn remove_last_element(&mut self) -> Self::Element
    where
        Self: BidirectionalCollection,
    {
        match self.pop_last_element() {
            Some(value) => value,
            None => panic!("Can't remove last element from an empty collection"),
        }
    }

    /// Removes the last `k` elements. The collection must hold at least `k`.
    fn remove_last_elements(&mut self, k: usize)
    where
        Self: BidirectionalCollection,
    {
        if k == 0 {
            return;
        }
        let end = self.end_index();
        let Some(start) = self.offset_index_limited(&end, -as_offset(k), &self.start_index()) else {
            panic!("Can't remove more items from a collection than it contains");
        };
        self.remove_subrange(start..end);
    }

    /// Removes the first `k` elements. The collection must hold at least `k`.
    fn remove_first_elements(&mut self, k: usize) {
        if k == 0 {
            return;
        }
        let start = self.start_index();
        let Some(end) = self.offset_index_limited(&start, as_offset(k), &self.end_index()) else {
            panic!("Can't remove more items from a collection than it contains");
        };
        self.remove_subrange(start..end);
    }
}

/// Moves one position back, panicking if `collection` is forward-only.
pub(crate) fn step_back<C>(collection: &C, i: &C::Index) -> C::Index
where
    C: Collection + ?Sized,
{
    match collection.index_before(i) {
        Some(previous) => previous,
        None => panic!(
            "{} is not bidirectional and cannot move backward",
            std::any::type_name::<C>()
        ),
    }
}

/// Pushes `base[start..end]` unless it is empty and empties are omitted.
/// Returns whether a view was pushed.
fn push_subsequence<'s, C>(
    result: &mut Vec<Slice<'s, C>>,
    base: &'s C,
    start: &C::Index,
    end: &C::Index,
    omit_empty: bool,
) -> bool
where
    C: Collection + ?Sized,
{
    if start == end && omit_empty {
        return false;
    }
    result.push(Slice::new(base, start.clone()..end.clone()));
    true
}

/// Converts an element count to a signed offset.
pub(crate) fn as_offset(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

//! Borrowed views over a contiguous position range of a collection.

use std::{fmt, ops::Range};

use super::{BidirectionalCollection, Collection, MutableCollection, as_offset, iter::Iter};

/// Checks `start_index() <= range.start <= range.end <= end_index()`.
pub(crate) fn check_bounds<C: Collection + ?Sized>(base: &C, range: &Range<C::Index>) {
    assert!(
        range.start <= range.end,
        "view bounds are inverted: {:?}..{:?}",
        range.start,
        range.end
    );
    assert!(
        base.start_index() <= range.start && range.end <= base.end_index(),
        "view bounds {:?}..{:?} exceed {:?}..{:?}",
        range.start,
        range.end,
        base.start_index(),
        base.end_index()
    );
}

/// A read-only window over `base[start..end]`.
///
/// Positions are the owner's positions. Slicing a slice produces a narrower
/// window over the same owner.
pub struct Slice<'a, C: Collection + ?Sized> {
    base: &'a C,
    start: C::Index,
    end: C::Index,
}

impl<'a, C: Collection + ?Sized> Slice<'a, C> {
    /// Creates a view. Panics if `range` is not within the owner's bounds.
    pub fn new(base: &'a C, range: Range<C::Index>) -> Self {
        check_bounds(base, &range);
        Self {
            base,
            start: range.start,
            end: range.end,
        }
    }

    /// The collection this view borrows from.
    pub fn base(&self) -> &'a C {
        self.base
    }

    pub fn bounds(&self) -> Range<C::Index> {
        self.start.clone()..self.end.clone()
    }

    /// A narrower window over the same owner, without nesting views.
    pub fn reslice(&self, range: Range<C::Index>) -> Slice<'a, C> {
        check_bounds(self, &range);
        Slice {
            base: self.base,
            start: range.start,
            end: range.end,
        }
    }

    /// The element at `i`, or `None` if `i` lies outside the window.
    pub fn get(&self, i: &C::Index) -> Option<&'a C::Element> {
        if *i >= self.start && *i < self.end {
            Some(self.base.element(i))
        } else {
            None
        }
    }

    /// Removes the first element from the window and returns it.
    pub fn pop_first(&mut self) -> Option<&'a C::Element> {
        if self.start == self.end {
            return None;
        }
        let element = self.base.element(&self.start);
        self.start = self.base.index_after(&self.start);
        Some(element)
    }

    /// Shrinks the window by `k` elements at the front.
    pub fn remove_first_n(&mut self, k: usize) {
        match self
            .base
            .offset_index_limited(&self.start, as_offset(k), &self.end)
        {
            Some(start) => self.start = start,
            None => panic!("Can't remove more items from a collection than it contains"),
        }
    }

    pub fn to_vec(&self) -> Vec<C::Element>
    where
        C::Element: Clone,
    {
        self.clone().into_iter().cloned().collect()
    }
}

impl<'a, C: BidirectionalCollection + ?Sized> Slice<'a, C> {
    /// Removes the last element from the window and returns it.
    pub fn pop_last(&mut self) -> Option<&'a C::Element> {
        if self.start == self.end {
            return None;
        }
        self.end = self.base.predecessor(&self.end);
        Some(self.base.element(&self.end))
    }

    /// Shrinks the window by `k` elements at the back.
    pub fn remove_last_n(&mut self, k: usize) {
        match self
            .base
            .offset_index_limited(&self.end, -as_offset(k), &self.start)
        {
            Some(end) => self.end = end,
            None => panic!("Can't remove more items from a collection than it contains"),
        }
    }
}

impl<C: Collection + ?Sized> Collection for Slice<'_, C> {
    type Element = C::Element;
    type Index = C::Index;

    fn start_index(&self) -> C::Index {
        self.start.clone()
    }

    fn end_index(&self) -> C::Index {
        self.end.clone()
    }

    fn index_after(&self, i: &C::Index) -> C::Index {
        assert!(*i < self.end, "cannot advance past the end of a view");
        self.base.index_after(i)
    }

    fn element(&self, i: &C::Index) -> &C::Element {
        assert!(
            *i >= self.start && *i < self.end,
            "position {i:?} outside view {:?}..{:?}",
            self.start,
            self.end
        );
        self.base.element(i)
    }

    fn index_before(&self, i: &C::Index) -> Option<C::Index> {
        assert!(*i > self.start, "cannot move before the start of a view");
        self.base.index_before(i)
    }

    fn count(&self) -> usize {
        self.base.distance(&self.start, &self.end) as usize
    }

    fn distance(&self, from: &C::Index, to: &C::Index) -> isize {
        self.base.distance(from, to)
    }

    fn offset_index(&self, i: &C::Index, n: isize) -> C::Index {
        self.base.offset_index(i, n)
    }

    fn offset_index_limited(&self, i: &C::Index, n: isize, limit: &C::Index) -> Option<C::Index> {
        self.base.offset_index_limited(i, n, limit)
    }
}

impl<C: BidirectionalCollection + ?Sized> BidirectionalCollection for Slice<'_, C> {}

impl<'a, C: Collection + ?Sized> IntoIterator for Slice<'a, C> {
    type Item = &'a C::Element;
    type IntoIter = Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::with_bounds(self.base, self.start, self.end)
    }
}

impl<C: Collection + ?Sized> Clone for Slice<'_, C> {
    fn clone(&self) -> Self {
        Self {
            base: self.base,
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

impl<C> fmt::Debug for Slice<'_, C>
where
    C: Collection + ?Sized,
    C::Element: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice")
            .field("bounds", &(self.start.clone()..self.end.clone()))
            .field("elements", &self.clone().into_iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<C> PartialEq for Slice<'_, C>
where
    C: Collection + ?Sized,
    C::Element: PartialEq,
{
    /// Views compare by their elements, not their positions.
    fn eq(&self, other: &Self) -> bool {
        self.clone().into_iter().eq(other.clone())
    }
}

/// A window over `base[start..end]` that writes through to its owner.
pub struct SliceMut<'a, C: Collection + ?Sized> {
    base: &'a mut C,
    start: C::Index,
    end: C::Index,
}

impl<'a, C: MutableCollection + ?Sized> SliceMut<'a, C> {
    pub fn new(base: &'a mut C, range: Range<C::Index>) -> Self {
        check_bounds(&*base, &range);
        Self {
            base,
            start: range.start,
            end: range.end,
        }
    }

    pub fn as_slice(&self) -> Slice<'_, C> {
        Slice {
            base: &*self.base,
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }

    pub fn bounds(&self) -> Range<C::Index> {
        self.start.clone()..self.end.clone()
    }

    /// Replaces the element at `i` in the owner, returning the old value.
    pub fn set(&mut self, i: &C::Index, value: C::Element) -> C::Element {
        self.check_position(i);
        self.base.set_element(i, value)
    }

    fn check_position(&self, i: &C::Index) {
        assert!(
            *i >= self.start && *i < self.end,
            "position {i:?} outside view {:?}..{:?}",
            self.start,
            self.end
        );
    }
}

impl<C: MutableCollection + ?Sized> Collection for SliceMut<'_, C> {
    type Element = C::Element;
    type Index = C::Index;

    fn start_index(&self) -> C::Index {
        self.start.clone()
    }

    fn end_index(&self) -> C::Index {
        self.end.clone()
    }

    fn index_after(&self, i: &C::Index) -> C::Index {
        assert!(*i < self.end, "cannot advance past the end of a view");
        self.base.index_after(i)
    }

    fn element(&self, i: &C::Index) -> &C::Element {
        self.check_position(i);
        self.base.element(i)
    }

    fn index_before(&self, i: &C::Index) -> Option<C::Index> {
        assert!(*i > self.start, "cannot move before the start of a view");
        self.base.index_before(i)
    }

    fn count(&self) -> usize {
        self.base.distance(&self.start, &self.end) as usize
    }

    fn distance(&self, from: &C::Index, to: &C::Index) -> isize {
        self.base.distance(from, to)
    }

    fn offset_index(&self, i: &C::Index, n: isize) -> C::Index {
        self.base.offset_index(i, n)
    }
}

impl<C: MutableCollection + BidirectionalCollection + ?Sized> BidirectionalCollection
    for SliceMut<'_, C>
{
}

impl<C: MutableCollection + ?Sized> MutableCollection for SliceMut<'_, C> {
    fn element_mut(&mut self, i: &C::Index) -> &mut C::Element {
        self.check_position(i);
        self.base.element_mut(i)
    }
}

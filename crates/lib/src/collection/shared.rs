//! Views over a shared, interior-mutable owner.
//!
//! Several [`SharedSlice`]s may alias one owner. A write through any of them is
//! visible to the others and to the owner itself. Structural edits recompute
//! the editing view's window; other views keep their positions.

use std::{
    cell::{Ref, RefCell},
    fmt,
    ops::Range,
    rc::Rc,
};

use super::{
    Collection, MutableCollection, RangeReplaceableCollection, Slice, slice::check_bounds,
};

/// A window over a collection held in `Rc<RefCell<_>>`.
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
/// use carton::collection::SharedSlice;
///
/// let owner = Rc::new(RefCell::new(vec![0, 1, 2, 3, 4, 5, 6]));
/// let first = SharedSlice::new(&owner, 2..5);
/// let second = SharedSlice::new(&owner, 2..5);
///
/// first.set(&3, 30);
/// assert_eq!(*second.get(&3), 30);
/// assert_eq!(owner.borrow()[3], 30);
/// assert_eq!(first.start_index(), 2);
/// ```
pub struct SharedSlice<C: Collection> {
    owner: Rc<RefCell<C>>,
    start: C::Index,
    end: C::Index,
}

impl<C: Collection> SharedSlice<C> {
    /// Creates a view over `owner[range]`. Panics if `range` exceeds the
    /// owner's bounds.
    pub fn new(owner: &Rc<RefCell<C>>, range: Range<C::Index>) -> Self {
        check_bounds(&*owner.borrow(), &range);
        Self {
            owner: Rc::clone(owner),
            start: range.start,
            end: range.end,
        }
    }

    /// A view over the owner's full range.
    pub fn full(owner: &Rc<RefCell<C>>) -> Self {
        let range = {
            let base = owner.borrow();
            base.start_index()..base.end_index()
        };
        Self::new(owner, range)
    }

    pub fn owner(&self) -> &Rc<RefCell<C>> {
        &self.owner
    }

    pub fn start_index(&self) -> C::Index {
        self.start.clone()
    }

    pub fn end_index(&self) -> C::Index {
        self.end.clone()
    }

    pub fn bounds(&self) -> Range<C::Index> {
        self.start.clone()..self.end.clone()
    }

    pub fn len(&self) -> usize {
        self.owner.borrow().distance(&self.start, &self.end) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Borrows the element at `i`. Panics if `i` is outside the window.
    pub fn get(&self, i: &C::Index) -> Ref<'_, C::Element> {
        self.check_position(i);
        Ref::map(self.owner.borrow(), |base| base.element(i))
    }

    /// Runs `f` with a borrowed [`Slice`] over this window.
    pub fn with_slice<R>(&self, f: impl FnOnce(Slice<'_, C>) -> R) -> R {
        let base = self.owner.borrow();
        f(Slice::new(&*base, self.bounds()))
    }

    pub fn to_vec(&self) -> Vec<C::Element>
    where
        C::Element: Clone,
    {
        self.with_slice(|slice| slice.to_vec())
    }

    fn check_position(&self, i: &C::Index) {
        assert!(
            *i >= self.start && *i < self.end,
            "position {i:?} outside view {:?}..{:?}",
            self.start,
            self.end
        );
    }

    fn check_subrange(&self, range: &Range<C::Index>) {
        assert!(
            self.start <= range.start && range.start <= range.end && range.end <= self.end,
            "subrange {:?}..{:?} outside view {:?}..{:?}",
            range.start,
            range.end,
            self.start,
            self.end
        );
    }
}

impl<C: MutableCollection> SharedSlice<C> {
    /// Replaces the element at `i` in the owner, returning the old value.
    pub fn set(&self, i: &C::Index, value: C::Element) -> C::Element {
        self.check_position(i);
        self.owner.borrow_mut().set_element(i, value)
    }

    /// Runs `f` with mutable access to the element at `i`.
    pub fn with_element_mut<R>(&self, i: &C::Index, f: impl FnOnce(&mut C::Element) -> R) -> R {
        self.check_position(i);
        f(self.owner.borrow_mut().element_mut(i))
    }
}

impl<C: RangeReplaceableCollection> SharedSlice<C> {
    /// Replaces `range` (positions within this view) with `new_elements`.
    ///
    /// The view's start keeps its offset from the owner's start, and its end
    /// moves by the change in length. Other views over the same owner are not
    /// adjusted.
    pub fn replace_subrange<I>(&mut self, range: Range<C::Index>, new_elements: I)
    where
        I: IntoIterator<Item = C::Element>,
    {
        self.check_subrange(&range);
        let new_elements: Vec<C::Element> = new_elements.into_iter().collect();
        let mut base = self.owner.borrow_mut();

        let base_start = base.start_index();
        let slice_offset = base.distance(&base_start, &self.start);
        let new_count = base.distance(&self.start, &range.start)
            + base.distance(&range.end, &self.end)
            + new_elements.len() as isize;

        base.replace_subrange(range, new_elements);

        let base_start = base.start_index();
        self.start = base.offset_index(&base_start, slice_offset);
        self.end = base.offset_index(&self.start, new_count);
    }

    /// Inserts `value` before position `i` of this view.
    pub fn insert(&mut self, i: &C::Index, value: C::Element) {
        self.replace_subrange(i.clone()..i.clone(), std::iter::once(value));
    }

    /// Appends `value` at the end of this view.
    pub fn append(&mut self, value: C::Element) {
        let end = self.end.clone();
        self.replace_subrange(end.clone()..end, std::iter::once(value));
    }

    /// Removes and returns the element at `i`.
    pub fn remove(&mut self, i: &C::Index) -> C::Element {
        self.check_position(i);
        let mut base = self.owner.borrow_mut();

        let base_start = base.start_index();
        let slice_offset = base.distance(&base_start, &self.start);
        let new_count = base.distance(&self.start, &self.end) - 1;

        let removed = base.remove_element(i);

        let base_start = base.start_index();
        self.start = base.offset_index(&base_start, slice_offset);
        self.end = base.offset_index(&self.start, new_count);
        removed
    }
}

impl<C: Collection> Clone for SharedSlice<C> {
    fn clone(&self) -> Self {
        Self {
            owner: Rc::clone(&self.owner),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

impl<C: Collection> fmt::Debug for SharedSlice<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSlice")
            .field("bounds", &(self.start.clone()..self.end.clone()))
            .field("owners", &Rc::strong_count(&self.owner))
            .finish()
    }
}

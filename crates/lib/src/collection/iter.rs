//! Iterators over collections.
//!
//! Both iterators walk a position range `[front, back)` using the collection's
//! successor function, so they work for any [`Collection`] and become
//! double-ended when the collection is bidirectional.

use std::fmt;

use super::{BidirectionalCollection, Collection};

/// Iterator over the elements of a collection.
pub struct Iter<'a, C: Collection + ?Sized> {
    collection: &'a C,
    front: C::Index,
    back: C::Index,
}

impl<'a, C: Collection + ?Sized> Iter<'a, C> {
    pub(crate) fn new(collection: &'a C) -> Self {
        Self::with_bounds(collection, collection.start_index(), collection.end_index())
    }

    pub(crate) fn with_bounds(collection: &'a C, front: C::Index, back: C::Index) -> Self {
        Self {
            collection,
            front,
            back,
        }
    }
}

impl<'a, C: Collection + ?Sized> Iterator for Iter<'a, C> {
    type Item = &'a C::Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let element = self.collection.element(&self.front);
        self.front = self.collection.index_after(&self.front);
        Some(element)
    }
}

impl<C: BidirectionalCollection + ?Sized> DoubleEndedIterator for Iter<'_, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back = self.collection.predecessor(&self.back);
        Some(self.collection.element(&self.back))
    }
}

impl<C: Collection + ?Sized> Clone for Iter<'_, C> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection,
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<C: Collection + ?Sized> fmt::Debug for Iter<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

/// Iterator over the valid element positions of a collection, in order.
pub struct Indices<'a, C: Collection + ?Sized> {
    collection: &'a C,
    front: C::Index,
    back: C::Index,
}

impl<'a, C: Collection + ?Sized> Indices<'a, C> {
    pub(crate) fn new(collection: &'a C) -> Self {
        Self {
            collection,
            front: collection.start_index(),
            back: collection.end_index(),
        }
    }
}

impl<C: Collection + ?Sized> Iterator for Indices<'_, C> {
    type Item = C::Index;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let next = self.collection.index_after(&self.front);
        Some(std::mem::replace(&mut self.front, next))
    }
}

impl<C: BidirectionalCollection + ?Sized> DoubleEndedIterator for Indices<'_, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back = self.collection.predecessor(&self.back);
        Some(self.back.clone())
    }
}

impl<C: Collection + ?Sized> fmt::Debug for Indices<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Indices")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

use carton::collection::{BidirectionalCollection, Collection, Slice};

/// A collection that can only move forward, so every algorithm takes the
/// stepwise default path.
pub struct Forward<T>(pub Vec<T>);

impl<T> Collection for Forward<T> {
    type Element = T;
    type Index = usize;

    fn start_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        self.0.len()
    }

    fn index_after(&self, i: &usize) -> usize {
        assert!(*i < self.0.len(), "cannot advance past the end index");
        i + 1
    }

    fn element(&self, i: &usize) -> &T {
        &self.0[*i]
    }
}

/// A collection that moves both ways one step at a time, without the O(1)
/// random-access overrides.
pub struct Stepwise<T>(pub Vec<T>);

impl<T> Collection for Stepwise<T> {
    type Element = T;
    type Index = usize;

    fn start_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        self.0.len()
    }

    fn index_after(&self, i: &usize) -> usize {
        assert!(*i < self.0.len(), "cannot advance past the end index");
        i + 1
    }

    fn index_before(&self, i: &usize) -> Option<usize> {
        assert!(*i > 0, "cannot move before the start index");
        Some(i - 1)
    }

    fn element(&self, i: &usize) -> &T {
        &self.0[*i]
    }
}

impl<T> BidirectionalCollection for Stepwise<T> {}

pub fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Collect each character view into a `String`
pub fn strings<C>(parts: &[Slice<'_, C>]) -> Vec<String>
where
    C: Collection<Element = char> + ?Sized,
{
    parts
        .iter()
        .map(|part| part.elements().collect())
        .collect()
}

//! Sequence adapters. Every sequence encodes as an unkeyed container holding
//! its elements in iteration order.

use std::{
    collections::{BTreeSet, HashSet, VecDeque},
    hash::{BuildHasher, Hash},
};

use crate::codable::{
    Decode, Decoder, DecoderExt, DecodingError, Encode, Encoder, EncoderExt, EncodingError,
    UnkeyedDecodingContainer,
};
use crate::collection::{Collection, RangeReplaceableCollection, SharedSlice, Slice};

/// Upper bound on capacity reserved from a format-reported element count.
const MAX_PREALLOCATION: usize = 4096;

/// Encodes every element of `collection` into a fresh unkeyed container.
pub(crate) fn encode_collection<C>(
    collection: &C,
    encoder: &mut dyn Encoder,
) -> Result<(), EncodingError>
where
    C: Collection + ?Sized,
    C::Element: Encode,
{
    let mut container = encoder.unkeyed_container();
    container.encode_contents_of(collection.elements())
}

/// Decodes elements until the container is exhausted, appending each to `target`.
pub(crate) fn decode_into<C>(
    container: &mut UnkeyedDecodingContainer<'_>,
    target: &mut C,
) -> Result<(), DecodingError>
where
    C: RangeReplaceableCollection,
    C::Element: Decode,
{
    while !container.is_at_end() {
        let element = container.decode::<C::Element>()?;
        target.append_element(element);
    }
    Ok(())
}

fn initial_capacity(container: &UnkeyedDecodingContainer<'_>) -> usize {
    container.count().unwrap_or(0).min(MAX_PREALLOCATION)
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        encode_collection(self, encoder)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        encode_collection(self, encoder)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        let mut container = decoder.unkeyed_container()?;
        let mut values = Vec::with_capacity(initial_capacity(&container));
        decode_into(&mut container, &mut values)?;
        Ok(values)
    }
}

impl<T: Encode> Encode for VecDeque<T> {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        encode_collection(self, encoder)
    }
}

impl<T: Decode> Decode for VecDeque<T> {
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        let mut container = decoder.unkeyed_container()?;
        let mut values = VecDeque::with_capacity(initial_capacity(&container));
        decode_into(&mut container, &mut values)?;
        Ok(values)
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        encode_collection(self.as_slice(), encoder)
    }
}

/// Fixed-size arrays require exactly `N` stored elements.
impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        let path = decoder.coding_path().clone();
        let values = Vec::<T>::decode(decoder)?;
        let found = values.len();
        values.try_into().map_err(|_| {
            DecodingError::data_corrupted(path, format!("Expected {N} elements but found {found}."))
        })
    }
}

/// Sets encode in their own iteration order, which for `HashSet` varies
/// between processes.
impl<T: Encode, S> Encode for HashSet<T, S> {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        let mut container = encoder.unkeyed_container();
        container.encode_contents_of(self.iter())
    }
}

/// Duplicate elements collapse; the last occurrence wins.
impl<T, S> Decode for HashSet<T, S>
where
    T: Decode + Eq + Hash,
    S: BuildHasher + Default,
{
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        let mut container = decoder.unkeyed_container()?;
        let mut values =
            HashSet::with_capacity_and_hasher(initial_capacity(&container), S::default());
        while !container.is_at_end() {
            values.replace(container.decode::<T>()?);
        }
        Ok(values)
    }
}

impl<T: Encode> Encode for BTreeSet<T> {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        let mut container = encoder.unkeyed_container();
        container.encode_contents_of(self.iter())
    }
}

impl<T: Decode + Ord> Decode for BTreeSet<T> {
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        let mut container = decoder.unkeyed_container()?;
        let mut values = BTreeSet::new();
        while !container.is_at_end() {
            values.replace(container.decode::<T>()?);
        }
        Ok(values)
    }
}

/// A view encodes only the elements inside its window.
impl<C> Encode for Slice<'_, C>
where
    C: Collection + ?Sized,
    C::Element: Encode,
{
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        encode_collection(self, encoder)
    }
}

impl<C> Encode for SharedSlice<C>
where
    C: Collection,
    C::Element: Encode,
{
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        self.with_slice(|slice| encode_collection(&slice, encoder))
    }
}

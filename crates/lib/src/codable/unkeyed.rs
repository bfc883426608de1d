//! Unkeyed (sequential) containers.

use std::fmt;

use super::{
    errors::{DecodingError, EncodingError},
    key::{AnyKey, CodingKey},
    keyed::{KeyedDecodingContainer, KeyedEncodingContainer},
    path::CodingPath,
    scalar::Primitive,
    traits::{Decode, Decoder, Encode, Encoder, UnkeyedDecoding, UnkeyedEncoding},
};

/// An unkeyed container being written. Elements are appended in call order.
pub struct UnkeyedEncodingContainer<'a> {
    inner: Box<dyn UnkeyedEncoding + 'a>,
}

impl<'a> UnkeyedEncodingContainer<'a> {
    pub fn new(inner: Box<dyn UnkeyedEncoding + 'a>) -> Self {
        Self { inner }
    }

    pub fn coding_path(&self) -> &CodingPath {
        self.inner.coding_path()
    }

    /// Number of elements written so far.
    pub fn count(&self) -> usize {
        self.inner.count()
    }

    pub fn encode<T: Encode + ?Sized>(&mut self, value: &T) -> Result<(), EncodingError> {
        self.inner.encode_value(&value)
    }

    pub fn encode_nil(&mut self) -> Result<(), EncodingError> {
        self.inner.encode_nil()
    }

    pub fn encode_primitive<P: Primitive>(&mut self, value: P) -> Result<(), EncodingError> {
        self.inner.encode_scalar(value.into_scalar())
    }

    pub fn encode_conditional<T: Encode + ?Sized>(&mut self, value: &T) -> Result<(), EncodingError> {
        self.inner.encode_conditional(&value)
    }

    /// Encodes every element of `values` in iteration order.
    pub fn encode_contents_of<I>(&mut self, values: I) -> Result<(), EncodingError>
    where
        I: IntoIterator,
        I::Item: Encode,
    {
        for value in values {
            self.encode(&value)?;
        }
        Ok(())
    }

    /// A keyed container appended as the next element.
    pub fn nested_container<K: CodingKey>(&mut self) -> KeyedEncodingContainer<'_, K> {
        KeyedEncodingContainer::new(self.inner.nested_keyed())
    }

    /// An unkeyed container appended as the next element.
    pub fn nested_unkeyed_container(&mut self) -> UnkeyedEncodingContainer<'_> {
        UnkeyedEncodingContainer::new(self.inner.nested_unkeyed())
    }

    /// An encoder for a base type's payload, appended as the next element.
    pub fn super_encoder(&mut self) -> Box<dyn Encoder + '_> {
        self.inner.super_encoder()
    }

    pub fn into_inner(self) -> Box<dyn UnkeyedEncoding + 'a> {
        self.inner
    }
}

impl fmt::Debug for UnkeyedEncodingContainer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnkeyedEncodingContainer")
            .field("coding_path", self.inner.coding_path())
            .field("count", &self.inner.count())
            .finish()
    }
}

/// An unkeyed container being read, front to back.
pub struct UnkeyedDecodingContainer<'a> {
    inner: Box<dyn UnkeyedDecoding + 'a>,
}

impl<'a> UnkeyedDecodingContainer<'a> {
    pub fn new(inner: Box<dyn UnkeyedDecoding + 'a>) -> Self {
        Self { inner }
    }

    pub fn coding_path(&self) -> &CodingPath {
        self.inner.coding_path()
    }

    /// Total number of elements, if the format knows it up front.
    pub fn count(&self) -> Option<usize> {
        self.inner.count()
    }

    pub fn is_at_end(&self) -> bool {
        self.inner.is_at_end()
    }

    pub fn current_index(&self) -> usize {
        self.inner.current_index()
    }

    /// Consumes the next element if it is null.
    pub fn decode_nil(&mut self) -> Result<bool, DecodingError> {
        self.inner.decode_nil()
    }

    pub fn decode<T: Decode>(&mut self) -> Result<T, DecodingError> {
        let mut decoder = self.inner.value_decoder()?;
        T::decode(&mut *decoder)
    }

    pub fn decode_primitive<P: Primitive>(&mut self) -> Result<P, DecodingError> {
        let index = self.inner.current_index();
        let scalar = self.inner.decode_scalar(P::KIND)?;
        let kind = scalar.kind();
        P::from_scalar(scalar).ok_or_else(|| {
            DecodingError::type_mismatch(
                P::KIND.type_name(),
                self.inner.coding_path().appending(AnyKey::index(index)),
                format!("Format returned {kind} where {} was requested.", P::KIND),
            )
        })
    }

    /// Decodes the next element, returning `None` at the end of the container
    /// or when the element is null.
    pub fn decode_if_present<T: Decode>(&mut self) -> Result<Option<T>, DecodingError> {
        match self.inner.value_decoder_if_present()? {
            Some(mut decoder) => T::decode(&mut *decoder).map(Some),
            None => Ok(None),
        }
    }

    /// The keyed container stored as the next element.
    pub fn nested_container<K: CodingKey>(
        &mut self,
    ) -> Result<KeyedDecodingContainer<'_, K>, DecodingError> {
        self.inner.nested_keyed().map(KeyedDecodingContainer::new)
    }

    /// The unkeyed container stored as the next element.
    pub fn nested_unkeyed_container(&mut self) -> Result<UnkeyedDecodingContainer<'_>, DecodingError> {
        self.inner.nested_unkeyed().map(UnkeyedDecodingContainer::new)
    }

    pub fn super_decoder(&mut self) -> Result<Box<dyn Decoder + '_>, DecodingError> {
        self.inner.super_decoder()
    }

    pub fn into_inner(self) -> Box<dyn UnkeyedDecoding + 'a> {
        self.inner
    }
}

impl fmt::Debug for UnkeyedDecodingContainer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnkeyedDecodingContainer")
            .field("coding_path", self.inner.coding_path())
            .field("count", &self.inner.count())
            .field("current_index", &self.inner.current_index())
            .finish()
    }
}

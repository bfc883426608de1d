//! Single value containers.

use std::fmt;

use super::{
    errors::{DecodingError, EncodingError},
    path::CodingPath,
    scalar::Primitive,
    traits::{Decode, Encode, SingleValueDecoding, SingleValueEncoding},
};

/// A container holding exactly one value.
///
/// One write is permitted per container; formats panic on a second one.
pub struct SingleValueEncodingContainer<'a> {
    inner: Box<dyn SingleValueEncoding + 'a>,
}

impl<'a> SingleValueEncodingContainer<'a> {
    pub fn new(inner: Box<dyn SingleValueEncoding + 'a>) -> Self {
        Self { inner }
    }

    pub fn coding_path(&self) -> &CodingPath {
        self.inner.coding_path()
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

    pub fn into_inner(self) -> Box<dyn SingleValueEncoding + 'a> {
        self.inner
    }
}

impl fmt::Debug for SingleValueEncodingContainer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleValueEncodingContainer")
            .field("coding_path", self.inner.coding_path())
            .finish()
    }
}

/// A container reading exactly one value.
pub struct SingleValueDecodingContainer<'a> {
    inner: Box<dyn SingleValueDecoding + 'a>,
}

impl<'a> SingleValueDecodingContainer<'a> {
    pub fn new(inner: Box<dyn SingleValueDecoding + 'a>) -> Self {
        Self { inner }
    }

    pub fn coding_path(&self) -> &CodingPath {
        self.inner.coding_path()
    }

    /// Returns true if the stored value is null.
    pub fn decode_nil(&mut self) -> bool {
        self.inner.decode_nil()
    }

    pub fn decode<T: Decode>(&mut self) -> Result<T, DecodingError> {
        let mut decoder = self.inner.value_decoder();
        T::decode(&mut *decoder)
    }

    pub fn decode_primitive<P: Primitive>(&mut self) -> Result<P, DecodingError> {
        let scalar = self.inner.decode_scalar(P::KIND)?;
        let kind = scalar.kind();
        P::from_scalar(scalar).ok_or_else(|| {
            DecodingError::type_mismatch(
                P::KIND.type_name(),
                self.inner.coding_path().clone(),
                format!("Format returned {kind} where {} was requested.", P::KIND),
            )
        })
    }

    pub fn into_inner(self) -> Box<dyn SingleValueDecoding + 'a> {
        self.inner
    }
}

impl fmt::Debug for SingleValueDecodingContainer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleValueDecodingContainer")
            .field("coding_path", self.inner.coding_path())
            .finish()
    }
}

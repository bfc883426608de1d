//! Typed keyed containers.
//!
//! [`KeyedEncodingContainer`] and [`KeyedDecodingContainer`] are thin values
//! around a boxed format container. The key type `K` exists only at this
//! layer: each call converts the typed key to an [`AnyKey`] before forwarding,
//! so a format writes one container type that serves every key type, and a
//! caller holding a nested container never needs to know the format's concrete
//! type.

use std::{fmt, marker::PhantomData};

use super::{
    errors::{DecodingError, EncodingError},
    key::{AnyKey, CodingKey},
    path::CodingPath,
    scalar::Primitive,
    traits::{Decode, Decoder, Encode, Encoder, KeyedDecoding, KeyedEncoding},
    unkeyed::{UnkeyedDecodingContainer, UnkeyedEncodingContainer},
};

/// A keyed container being written, with field keys of type `K`.
pub struct KeyedEncodingContainer<'a, K> {
    inner: Box<dyn KeyedEncoding + 'a>,
    _key: PhantomData<fn(K)>,
}

impl<'a, K: CodingKey> KeyedEncodingContainer<'a, K> {
    /// Wraps a format container.
    pub fn new(inner: Box<dyn KeyedEncoding + 'a>) -> Self {
        Self {
            inner,
            _key: PhantomData,
        }
    }

    pub fn coding_path(&self) -> &CodingPath {
        self.inner.coding_path()
    }

    /// Encodes `value` under `key`.
    pub fn encode<T: Encode + ?Sized>(&mut self, value: &T, key: K) -> Result<(), EncodingError> {
        self.inner.encode_value(&value, &AnyKey::from_key(&key))
    }

    /// Writes an explicit null under `key`.
    pub fn encode_nil(&mut self, key: K) -> Result<(), EncodingError> {
        self.inner.encode_nil(&AnyKey::from_key(&key))
    }

    /// Encodes a primitive directly, without a child encoder.
    pub fn encode_primitive<P: Primitive>(&mut self, value: P, key: K) -> Result<(), EncodingError> {
        self.inner
            .encode_scalar(value.into_scalar(), &AnyKey::from_key(&key))
    }

    pub fn encode_bool(&mut self, value: bool, key: K) -> Result<(), EncodingError> {
        self.encode_primitive(value, key)
    }

    pub fn encode_str(&mut self, value: &str, key: K) -> Result<(), EncodingError> {
        self.encode_primitive(value.to_string(), key)
    }

    /// Encodes `value` under `key` if present; writes nothing otherwise.
    pub fn encode_if_present<T: Encode + ?Sized>(
        &mut self,
        value: Option<&T>,
        key: K,
    ) -> Result<(), EncodingError> {
        match value {
            Some(value) => self.encode(value, key),
            None => Ok(()),
        }
    }

    /// Encodes a value that may be shared with other parts of the document.
    pub fn encode_conditional<T: Encode + ?Sized>(
        &mut self,
        value: &T,
        key: K,
    ) -> Result<(), EncodingError> {
        self.inner.encode_conditional(&value, &AnyKey::from_key(&key))
    }

    /// A keyed container stored under `key`.
    pub fn nested_container<NK: CodingKey>(&mut self, key: K) -> KeyedEncodingContainer<'_, NK> {
        KeyedEncodingContainer::new(self.inner.nested_keyed(&AnyKey::from_key(&key)))
    }

    /// An unkeyed container stored under `key`.
    pub fn nested_unkeyed_container(&mut self, key: K) -> UnkeyedEncodingContainer<'_> {
        UnkeyedEncodingContainer::new(self.inner.nested_unkeyed(&AnyKey::from_key(&key)))
    }

    /// An encoder for a base type's payload, stored under the reserved
    /// `"super"` key.
    pub fn super_encoder(&mut self) -> Box<dyn Encoder + '_> {
        self.inner.super_encoder(&AnyKey::super_key())
    }

    /// An encoder for a base type's payload, stored under `key`.
    pub fn super_encoder_for_key(&mut self, key: K) -> Box<dyn Encoder + '_> {
        self.inner.super_encoder(&AnyKey::from_key(&key))
    }

    /// Returns the underlying format container.
    pub fn into_inner(self) -> Box<dyn KeyedEncoding + 'a> {
        self.inner
    }
}

impl<K> fmt::Debug for KeyedEncodingContainer<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedEncodingContainer")
            .field("coding_path", self.inner.coding_path())
            .finish()
    }
}

/// A keyed container being read, with field keys of type `K`.
pub struct KeyedDecodingContainer<'a, K> {
    inner: Box<dyn KeyedDecoding + 'a>,
    _key: PhantomData<fn() -> K>,
}

impl<'a, K: CodingKey> KeyedDecodingContainer<'a, K> {
    /// Wraps a format container.
    pub fn new(inner: Box<dyn KeyedDecoding + 'a>) -> Self {
        Self {
            inner,
            _key: PhantomData,
        }
    }

    pub fn coding_path(&self) -> &CodingPath {
        self.inner.coding_path()
    }

    /// Every stored key that converts to a `K`.
    ///
    /// Keys present in the data but unknown to `K` are skipped; use
    /// [`all_any_keys`](Self::all_any_keys) to see them.
    pub fn all_keys(&self) -> Vec<K> {
        self.inner
            .all_keys()
            .iter()
            .filter_map(AnyKey::to_key::<K>)
            .collect()
    }

    /// Every stored key, whatever `K` is.
    pub fn all_any_keys(&self) -> Vec<AnyKey> {
        self.inner.all_keys()
    }

    /// Returns true if there is an entry for `key`, even a null one.
    pub fn contains(&self, key: K) -> bool {
        self.inner.contains(&AnyKey::from_key(&key))
    }

    /// Returns true if the entry for `key` holds null.
    ///
    /// # Errors
    /// `KeyNotFound` if there is no entry for `key`.
    pub fn decode_nil(&mut self, key: K) -> Result<bool, DecodingError> {
        self.inner.decode_nil(&AnyKey::from_key(&key))
    }

    /// Decodes the entry for `key`.
    ///
    /// # Errors
    /// `KeyNotFound` if absent, `ValueNotFound` if null where `T` cannot be
    /// null, `TypeMismatch` if the entry has the wrong shape.
    pub fn decode<T: Decode>(&mut self, key: K) -> Result<T, DecodingError> {
        let mut decoder = self.inner.value_decoder(&AnyKey::from_key(&key))?;
        T::decode(&mut *decoder)
    }

    /// Decodes a primitive directly, without a child decoder.
    pub fn decode_primitive<P: Primitive>(&mut self, key: K) -> Result<P, DecodingError> {
        let key = AnyKey::from_key(&key);
        let scalar = self.inner.decode_scalar(P::KIND, &key)?;
        let kind = scalar.kind();
        P::from_scalar(scalar).ok_or_else(|| {
            DecodingError::type_mismatch(
                P::KIND.type_name(),
                self.inner.coding_path().appending(key),
                format!("Format returned {kind} where {} was requested.", P::KIND),
            )
        })
    }

    pub fn decode_bool(&mut self, key: K) -> Result<bool, DecodingError> {
        self.decode_primitive(key)
    }

    pub fn decode_string(&mut self, key: K) -> Result<String, DecodingError> {
        self.decode_primitive(key)
    }

    /// Decodes the entry for `key`, treating absence and null as `None`.
    ///
    /// Once the entry is known to be present and non-null, failures of the
    /// underlying decode are returned as errors, not masked as `None`.
    pub fn decode_if_present<T: Decode>(&mut self, key: K) -> Result<Option<T>, DecodingError> {
        match self.inner.value_decoder_if_present(&AnyKey::from_key(&key))? {
            Some(mut decoder) => T::decode(&mut *decoder).map(Some),
            None => Ok(None),
        }
    }

    /// The keyed container stored under `key`.
    pub fn nested_container<NK: CodingKey>(
        &mut self,
        key: K,
    ) -> Result<KeyedDecodingContainer<'_, NK>, DecodingError> {
        self.inner
            .nested_keyed(&AnyKey::from_key(&key))
            .map(KeyedDecodingContainer::new)
    }

    /// The unkeyed container stored under `key`.
    pub fn nested_unkeyed_container(
        &mut self,
        key: K,
    ) -> Result<UnkeyedDecodingContainer<'_>, DecodingError> {
        self.inner
            .nested_unkeyed(&AnyKey::from_key(&key))
            .map(UnkeyedDecodingContainer::new)
    }

    /// A decoder over the base-type payload stored under `"super"`.
    pub fn super_decoder(&mut self) -> Result<Box<dyn Decoder + '_>, DecodingError> {
        self.inner.super_decoder(&AnyKey::super_key())
    }

    /// A decoder over the base-type payload stored under `key`.
    pub fn super_decoder_for_key(&mut self, key: K) -> Result<Box<dyn Decoder + '_>, DecodingError> {
        self.inner.super_decoder(&AnyKey::from_key(&key))
    }

    /// Returns the underlying format container.
    pub fn into_inner(self) -> Box<dyn KeyedDecoding + 'a> {
        self.inner
    }
}

impl<K> fmt::Debug for KeyedDecodingContainer<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedDecodingContainer")
            .field("coding_path", self.inner.coding_path())
            .field("keys", &self.inner.all_keys())
            .finish()
    }
}

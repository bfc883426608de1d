//! Core traits of the codable framework.
//!
//! This module defines the two capability contracts a type implements to take
//! part in encoding and decoding, and the object-safe interfaces a format
//! implements to receive them:
//!
//! - [`Encode`]: a value describes itself to an [`Encoder`]
//! - [`Decode`]: a value rebuilds itself from a [`Decoder`]
//! - [`Encoder`] / [`Decoder`]: hand out containers bound to one slot of a document
//! - [`KeyedEncoding`], [`UnkeyedEncoding`], [`SingleValueEncoding`] and their
//!   decoding counterparts: the three container shapes, with keys erased to
//!   [`AnyKey`]
//!
//! Everything a format implements is object safe, so nested containers and
//! child encoders travel as trait objects. The typed conveniences callers use
//! (`container::<K>()`, `decode::<T>()`, ...) live on [`EncoderExt`],
//! [`DecoderExt`] and the wrapper types in the sibling modules.
//!
//! # Contract
//!
//! An `encode` implementation requests exactly one container shape from its
//! encoder. Requesting a second, different shape is a bug in the
//! implementation, and formats panic on it. The same holds for writing twice to
//! a single value container.

use super::{
    errors::{DecodingError, EncodingError},
    key::{AnyKey, CodingKey},
    keyed::{KeyedDecodingContainer, KeyedEncodingContainer},
    path::CodingPath,
    scalar::{Scalar, ScalarKind},
    single::{SingleValueDecodingContainer, SingleValueEncodingContainer},
    unkeyed::{UnkeyedDecodingContainer, UnkeyedEncodingContainer},
    user_info::UserInfo,
};

/// A type that can describe itself to an encoder.
///
/// # Examples
///
/// ```
/// use carton::codable::{CodingKey, Encode, Encoder, EncoderExt, EncodingError};
/// use carton::tree::{self, Value};
///
/// #[derive(Debug)]
/// enum Field {
///     Name,
/// }
///
/// impl CodingKey for Field {
///     fn string_value(&self) -> &str {
///         "name"
///     }
///
///     fn from_string_value(value: &str) -> Option<Self> {
///         (value == "name").then_some(Field::Name)
///     }
/// }
///
/// struct User {
///     name: String,
/// }
///
/// impl Encode for User {
///     fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
///         let mut container = encoder.container::<Field>();
///         container.encode(&self.name, Field::Name)
///     }
/// }
///
/// let value = tree::to_value(&User { name: "Ada".into() }).unwrap();
/// assert_eq!(value.get("name"), Some(&Value::Text("Ada".into())));
/// ```
pub trait Encode {
    /// Writes this value into `encoder`.
    ///
    /// # Errors
    /// Returns [`EncodingError::InvalidValue`] when the format cannot represent
    /// the value. Errors from nested values are propagated unchanged.
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError>;
}

/// A type that can rebuild itself from a decoder.
pub trait Decode: Sized {
    /// Reads a value of this type from `decoder`.
    ///
    /// # Errors
    /// Returns the first [`DecodingError`] met while walking the document.
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError>;
}

/// A type that can both encode and decode itself.
pub trait Codable: Encode + Decode {}

impl<T: Encode + Decode> Codable for T {}

/// Receives one value and hands out the container it is written into.
///
/// Each accessor returns a fresh container view over the same underlying
/// storage. Formats implement these erased accessors; callers normally go
/// through [`EncoderExt`].
pub trait Encoder {
    /// Path from the document root to the slot this encoder writes.
    fn coding_path(&self) -> &CodingPath;

    /// Side-channel configuration, fixed for the encoder's lifetime.
    fn user_info(&self) -> &UserInfo;

    /// Claims the slot as a keyed container.
    fn keyed(&mut self) -> Box<dyn KeyedEncoding + '_>;

    /// Claims the slot as an unkeyed container.
    fn unkeyed(&mut self) -> Box<dyn UnkeyedEncoding + '_>;

    /// Claims the slot as a single value container.
    fn single_value(&mut self) -> Box<dyn SingleValueEncoding + '_>;
}

/// Supplies the container a value is read from.
pub trait Decoder {
    /// Path from the document root to the slot this decoder reads.
    fn coding_path(&self) -> &CodingPath;

    /// Side-channel configuration, fixed for the decoder's lifetime.
    fn user_info(&self) -> &UserInfo;

    /// Reads the slot as a keyed container.
    ///
    /// # Errors
    /// `TypeMismatch` if the stored shape is not keyed, `ValueNotFound` if the
    /// slot holds null.
    fn keyed(&mut self) -> Result<Box<dyn KeyedDecoding + '_>, DecodingError>;

    /// Reads the slot as an unkeyed container.
    ///
    /// # Errors
    /// `TypeMismatch` if the stored shape is not unkeyed, `ValueNotFound` if
    /// the slot holds null.
    fn unkeyed(&mut self) -> Result<Box<dyn UnkeyedDecoding + '_>, DecodingError>;

    /// Reads the slot as a single value container.
    fn single_value(&mut self) -> Result<Box<dyn SingleValueDecoding + '_>, DecodingError>;
}

/// Format-side keyed encoding container.
pub trait KeyedEncoding {
    fn coding_path(&self) -> &CodingPath;

    /// Writes an explicit null marker, which is distinct from absence.
    fn encode_nil(&mut self, key: &AnyKey) -> Result<(), EncodingError>;

    fn encode_scalar(&mut self, value: Scalar, key: &AnyKey) -> Result<(), EncodingError>;

    /// Encodes an arbitrary value under `key` through a child encoder whose
    /// path is this container's path plus `key`.
    fn encode_value(&mut self, value: &dyn Encode, key: &AnyKey) -> Result<(), EncodingError>;

    /// Encodes a value that may be reachable from several places.
    ///
    /// Formats that track object graphs may write a reference here when the
    /// value is also encoded unconditionally elsewhere. By default the value
    /// is encoded in full.
    fn encode_conditional(
        &mut self,
        value: &dyn Encode,
        key: &AnyKey,
    ) -> Result<(), EncodingError> {
        self.encode_value(value, key)
    }

    fn nested_keyed(&mut self, key: &AnyKey) -> Box<dyn KeyedEncoding + '_>;

    fn nested_unkeyed(&mut self, key: &AnyKey) -> Box<dyn UnkeyedEncoding + '_>;

    /// An encoder scoped to the slot `key`, used for base-type payloads.
    fn super_encoder(&mut self, key: &AnyKey) -> Box<dyn Encoder + '_>;
}

/// Format-side unkeyed encoding container.
pub trait UnkeyedEncoding {
    fn coding_path(&self) -> &CodingPath;

    /// Number of elements written so far.
    fn count(&self) -> usize;

    fn encode_nil(&mut self) -> Result<(), EncodingError>;

    fn encode_scalar(&mut self, value: Scalar) -> Result<(), EncodingError>;

    fn encode_value(&mut self, value: &dyn Encode) -> Result<(), EncodingError>;

    fn encode_conditional(&mut self, value: &dyn Encode) -> Result<(), EncodingError> {
        self.encode_value(value)
    }

    fn nested_keyed(&mut self) -> Box<dyn KeyedEncoding + '_>;

    fn nested_unkeyed(&mut self) -> Box<dyn UnkeyedEncoding + '_>;

    /// An encoder scoped to the next element slot.
    fn super_encoder(&mut self) -> Box<dyn Encoder + '_>;
}

/// Format-side single value encoding container.
///
/// Exactly one write is permitted; a second write panics.
pub trait SingleValueEncoding {
    fn coding_path(&self) -> &CodingPath;

    fn encode_nil(&mut self) -> Result<(), EncodingError>;

    fn encode_scalar(&mut self, value: Scalar) -> Result<(), EncodingError>;

    fn encode_value(&mut self, value: &dyn Encode) -> Result<(), EncodingError>;
}

/// Format-side keyed decoding container.
pub trait KeyedDecoding {
    fn coding_path(&self) -> &CodingPath;

    /// Every key present in the stored representation.
    fn all_keys(&self) -> Vec<AnyKey>;

    /// Returns true if the stored representation has an entry for `key`,
    /// including an entry holding null.
    fn contains(&self, key: &AnyKey) -> bool;

    /// Returns true if the entry for `key` holds null.
    ///
    /// # Errors
    /// `KeyNotFound` if there is no entry for `key`.
    fn decode_nil(&mut self, key: &AnyKey) -> Result<bool, DecodingError>;

    /// Reads the primitive stored under `key` as `kind`.
    ///
    /// Implementations return a scalar of exactly `kind` on success.
    fn decode_scalar(&mut self, kind: ScalarKind, key: &AnyKey) -> Result<Scalar, DecodingError>;

    /// A decoder over the entry for `key`.
    ///
    /// # Errors
    /// `KeyNotFound` if there is no entry for `key`.
    fn value_decoder(&mut self, key: &AnyKey) -> Result<Box<dyn Decoder + '_>, DecodingError>;

    /// A decoder over the entry for `key`, or `None` when the entry is absent
    /// or null.
    ///
    /// The default treats "no entry" and "entry holding null" alike and
    /// otherwise delegates to [`value_decoder`](Self::value_decoder), so a
    /// present, non-null entry of the wrong shape still fails.
    fn value_decoder_if_present(
        &mut self,
        key: &AnyKey,
    ) -> Result<Option<Box<dyn Decoder + '_>>, DecodingError> {
        if !self.contains(key) || self.decode_nil(key)? {
            return Ok(None);
        }
        self.value_decoder(key).map(Some)
    }

    fn nested_keyed(&mut self, key: &AnyKey) -> Result<Box<dyn KeyedDecoding + '_>, DecodingError>;

    fn nested_unkeyed(
        &mut self,
        key: &AnyKey,
    ) -> Result<Box<dyn UnkeyedDecoding + '_>, DecodingError>;

    /// A decoder over the slot `key`, used for base-type payloads.
    ///
    /// An absent entry decodes as null rather than failing.
    fn super_decoder(&mut self, key: &AnyKey) -> Result<Box<dyn Decoder + '_>, DecodingError>;
}

/// Format-side unkeyed decoding container.
///
/// Elements are consumed strictly in order; [`current_index`](Self::current_index)
/// only moves forward.
pub trait UnkeyedDecoding {
    fn coding_path(&self) -> &CodingPath;

    /// Total number of elements, if known up front.
    fn count(&self) -> Option<usize>;

    fn is_at_end(&self) -> bool;

    /// Index of the next element to be read.
    fn current_index(&self) -> usize;

    /// Consumes the next element if it is null and reports whether it was.
    ///
    /// # Errors
    /// `ValueNotFound` when the container is at its end.
    fn decode_nil(&mut self) -> Result<bool, DecodingError>;

    fn decode_scalar(&mut self, kind: ScalarKind) -> Result<Scalar, DecodingError>;

    /// A decoder over the next element. The element counts as consumed.
    fn value_decoder(&mut self) -> Result<Box<dyn Decoder + '_>, DecodingError>;

    /// A decoder over the next element, or `None` when the container is at
    /// its end or the next element is null (which is then consumed).
    fn value_decoder_if_present(&mut self) -> Result<Option<Box<dyn Decoder + '_>>, DecodingError> {
        if self.is_at_end() || self.decode_nil()? {
            return Ok(None);
        }
        self.value_decoder().map(Some)
    }

    fn nested_keyed(&mut self) -> Result<Box<dyn KeyedDecoding + '_>, DecodingError>;

    fn nested_unkeyed(&mut self) -> Result<Box<dyn UnkeyedDecoding + '_>, DecodingError>;

    fn super_decoder(&mut self) -> Result<Box<dyn Decoder + '_>, DecodingError>;
}

/// Format-side single value decoding container.
pub trait SingleValueDecoding {
    fn coding_path(&self) -> &CodingPath;

    /// Returns true if the stored value is null.
    fn decode_nil(&mut self) -> bool;

    fn decode_scalar(&mut self, kind: ScalarKind) -> Result<Scalar, DecodingError>;

    /// A decoder over the same slot, used to decode composite values.
    fn value_decoder(&mut self) -> Box<dyn Decoder + '_>;
}

/// Typed accessors for any [`Encoder`].
pub trait EncoderExt: Encoder {
    /// Claims the slot as a keyed container with key type `K`.
    fn container<K: CodingKey>(&mut self) -> KeyedEncodingContainer<'_, K> {
        KeyedEncodingContainer::new(self.keyed())
    }

    fn unkeyed_container(&mut self) -> UnkeyedEncodingContainer<'_> {
        UnkeyedEncodingContainer::new(self.unkeyed())
    }

    fn single_value_container(&mut self) -> SingleValueEncodingContainer<'_> {
        SingleValueEncodingContainer::new(self.single_value())
    }
}

impl<E: Encoder + ?Sized> EncoderExt for E {}

/// Typed accessors for any [`Decoder`].
pub trait DecoderExt: Decoder {
    /// Reads the slot as a keyed container with key type `K`.
    fn container<K: CodingKey>(&mut self) -> Result<KeyedDecodingContainer<'_, K>, DecodingError> {
        self.keyed().map(KeyedDecodingContainer::new)
    }

    fn unkeyed_container(&mut self) -> Result<UnkeyedDecodingContainer<'_>, DecodingError> {
        self.unkeyed().map(UnkeyedDecodingContainer::new)
    }

    fn single_value_container(
        &mut self,
    ) -> Result<SingleValueDecodingContainer<'_>, DecodingError> {
        self.single_value().map(SingleValueDecodingContainer::new)
    }
}

impl<D: Decoder + ?Sized> DecoderExt for D {}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        (**self).encode(encoder)
    }
}

impl<T: Encode + ?Sized> Encode for &mut T {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        (**self).encode(encoder)
    }
}
